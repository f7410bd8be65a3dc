//! Callbacks supported by a context.

use super::GenericContext;

/// A callback to terminate a solve.
/// Checked at the top of each iteration of a solve, and the solve ends with a resource limit if the callback returns true.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback to terminate a solve.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// True if some callback requests termination, false otherwise.
    pub(crate) fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
