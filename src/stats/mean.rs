/// A running mean, with a damped update.
///
/// On a sample *x* the count *n* is incremented, and then the value *v* is revised to *v* + (*x* − *v*) / (*n* + 1).
///
/// Note, the denominator is *n* + 1 and not *n*, and so each sample is given less weight than in the textbook incremental mean.
/// In particular, after *n* samples of a constant *c* the value is *c* · *n* / (*n* + 1).
///
/// ```rust
/// # use ksat_sweep::stats::Mean;
/// let mut mean = Mean::default();
///
/// mean.sample(2.0);
/// assert_eq!((mean.count(), mean.value()), (1, 1.0));
///
/// mean.sample(4.0);
/// assert_eq!((mean.count(), mean.value()), (2, 2.0));
///
/// mean.sample(6.0);
/// assert_eq!((mean.count(), mean.value()), (3, 3.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mean {
    value: f64,
    count: u64,
}

impl Mean {
    /// Updates the mean with a sample.
    pub fn sample(&mut self, sample: f64) {
        self.count += 1;
        self.value += (sample - self.value) / (self.count + 1) as f64;
    }

    /// The current value of the mean, `0` if no sample has been taken.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The current value of the mean, rounded to the nearest integer.
    pub fn rounded(&self) -> i64 {
        self.value.round() as i64
    }

    /// The count of samples taken.
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mean = Mean::default();
        assert_eq!(mean.value(), 0.0);
        assert_eq!(mean.count(), 0);
    }

    #[test]
    fn damped_update() {
        let mut mean = Mean::default();
        let mut expected = 0.0_f64;

        for (n, sample) in [7.0, 1.5, 12.25, 3.0].into_iter().enumerate() {
            mean.sample(sample);
            expected += (sample - expected) / (n as f64 + 2.0);
            assert_eq!(mean.value().to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn constant_stream() {
        let mut mean = Mean::default();
        for _ in 0..1000 {
            mean.sample(20.0);
        }

        assert!((mean.value() - 20.0 * 1000.0 / 1001.0).abs() < 1e-9);
        assert_eq!(mean.rounded(), 20);
    }
}
