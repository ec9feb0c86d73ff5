use crate::types::err::ConfigError;

/// A named configuration value, bounded by a minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Ensures the current value of the option is within the bounds of the option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.min <= self.value && self.value <= self.max {
            true => Ok(()),
            false => Err(ConfigError::OutOfBounds(self.name)),
        }
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(ConfigError::OutOfBounds(self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation() -> ConfigOption<usize> {
        ConfigOption {
            name: "rotation",
            min: 1,
            max: 1000,
            value: 100,
        }
    }

    #[test]
    fn validate_reads_the_current_value() {
        let mut option = rotation();
        assert!(option.validate().is_ok());

        option.value = 0;
        assert_eq!(option.validate(), Err(ConfigError::OutOfBounds("rotation")));

        option.value = 1001;
        assert_eq!(option.validate(), Err(ConfigError::OutOfBounds("rotation")));
    }

    #[test]
    fn set_keeps_value_on_error() {
        let mut option = rotation();
        assert_eq!(option.set(0), Err(ConfigError::OutOfBounds("rotation")));
        assert_eq!(option.value, 100);

        assert!(option.set(1000).is_ok());
        assert_eq!(option.value, 1000);
    }
}
