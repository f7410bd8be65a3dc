use crate::{context::ContextState, types::err::ErrorKind};

/// A configurable value, with bounds and the latest state of a context at which the value may be changed.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option.
    pub name: &'static str,

    /// The minimum value of the option.
    pub min: T,

    /// The maximum value of the option.
    pub max: T,

    /// The latest state of a context at which the option may be changed.
    pub max_state: ContextState,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// The bounds of the option, as a (min, max) pair.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds and `state` is no later than the maximum state of the option.
    pub fn set(&mut self, value: T, state: &ContextState) -> Result<(), ErrorKind> {
        if state.phase() > self.max_state.phase() {
            log::warn!("Option {} may not be set in state {state}", self.name);
            return Err(ErrorKind::InvalidState);
        }
        if value < self.min || self.max < value {
            log::warn!("Value for option {} out of bounds", self.name);
            return Err(ErrorKind::InvalidConfig(self.name));
        }
        self.value = value;
        Ok(())
    }
}
