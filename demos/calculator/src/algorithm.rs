use std::time::Duration;

use wiring::{Dependent, Depends, InjectionError, Uses as _};

use crate::domain::{Callback, DataSource, Transform, Worker};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Adds an offset to the aggregated data and transforms the sum.
///
/// Every dependency except the [`Callback`] is required.
#[derive(Dependent)]
pub struct Algorithm {
    offset: f64,
    worker: Depends<dyn Worker>,
    data: Depends<dyn DataSource>,
    transform: Depends<dyn Transform>,
    callback: Depends<dyn Callback>,
}

impl Algorithm {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            worker: Depends::new(),
            data: Depends::new(),
            transform: Depends::new(),
            callback: Depends::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn run(&self) -> Result<f64, InjectionError> {
        let data = self.require::<dyn DataSource>()?.data();
        let sum = self.require::<dyn Worker>()?.calculate(&data);
        let result = self.require::<dyn Transform>()?.transform(self.offset + sum);

        tracing::debug!(offset = self.offset, sum, result, "Calculated");

        if let Some(callback) = self.dependency::<dyn Callback>() {
            callback.set_result(result);
        }

        Ok(result)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Blocks the calling thread for a fixed duration
#[derive(Dependent)]
pub struct Pause {
    duration: Duration,
}

impl Pause {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn wait(&self) {
        if !self.duration.is_zero() {
            std::thread::sleep(self.duration);
        }
    }
}
