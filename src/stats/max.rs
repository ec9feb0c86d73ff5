use std::cmp::Ordering;

/// A running maximum.
///
/// A maximum is either unset, in which case the first sample is always taken, or floored at some initial value which is reported if no sample exceeds it.
///
/// ```rust
/// # use ksat_sweep::stats::Max;
/// let mut unset = Max::unset();
/// let mut floored = Max::floored(0);
///
/// for sample in [-3, -1, -7] {
///     unset.sample(sample);
///     floored.sample(sample);
/// }
///
/// assert_eq!(unset.value(), Some(-1));
/// assert_eq!(floored.value(), Some(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Max<T> {
    value: Option<T>,
}

impl<T> Default for Max<T> {
    fn default() -> Self {
        Max { value: None }
    }
}

impl<T: PartialOrd + Copy> Max<T> {
    /// A maximum without a value.
    pub fn unset() -> Self {
        Max::default()
    }

    /// A maximum with an initial value.
    pub fn floored(floor: T) -> Self {
        Max { value: Some(floor) }
    }

    /// Updates the maximum with a sample.
    pub fn sample(&mut self, sample: T) {
        match self.value {
            Some(value) if sample.partial_cmp(&value) != Some(Ordering::Greater) => {}
            _ => self.value = Some(sample),
        }
    }

    /// The current maximum, if a sample has been taken or a floor was given.
    pub fn value(&self) -> Option<T> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream() {
        let mut max = Max::floored(0);
        for sample in [3, 1, 7, 2] {
            max.sample(sample);
        }
        assert_eq!(max.value(), Some(7));
    }

    #[test]
    fn empty_stream() {
        assert_eq!(Max::<i64>::unset().value(), None);
        assert_eq!(Max::floored(0_i64).value(), Some(0));
    }

    #[test]
    fn incomparable_samples_are_ignored() {
        let mut max = Max::floored(1.0_f64);
        max.sample(f64::NAN);
        max.sample(0.5);
        assert_eq!(max.value(), Some(1.0));
    }
}
