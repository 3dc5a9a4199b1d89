use wiring::{Dependent, Depends, Uses as _};

use crate::domain::{Callback, Logger};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reports results through the [`Logger`] it was injected with, results are
/// dropped silently while it has none
#[derive(Default, Dependent)]
pub struct LoggingCallback {
    logger: Depends<dyn Logger>,
}

impl Callback for LoggingCallback {
    fn set_result(&self, value: f64) {
        match self.dependency::<dyn Logger>() {
            Some(logger) => logger.log(&format!("Result = {value:.6}")),
            None => tracing::warn!(value, "Callback has no logger"),
        }
    }
}
