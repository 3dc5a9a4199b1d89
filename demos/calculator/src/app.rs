use std::sync::Arc;
use std::time::Duration;

use wiring::{container, Container as _, Factory, InjectionError, Owner, Shared};

use crate::algorithm::{Algorithm, Pause};
use crate::domain::{Callback, DataSource, Logger, Transform, Worker};
use crate::infra::{ConsoleLogger, DataProvider, LoggingCallback, NegateTransform, SumWorker};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[container]
pub struct Calculator {
    data: Owner<dyn DataSource, DataProvider>,
    worker: Shared<dyn Worker, SumWorker>,
    logger: Shared<dyn Logger, ConsoleLogger>,
    transform: Shared<dyn Transform, NegateTransform>,
    callback: Factory<dyn Callback>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub offset: f64,
    pub pause: Duration,
    /// Whether a [`Callback`] factory is installed before the algorithm is built
    pub install_callback: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            offset: -4.0,
            pause: Duration::ZERO,
            install_callback: true,
        }
    }
}

/// Wires the calculator and runs the algorithm once, returning its result
pub fn run(config: &RunConfig) -> Result<f64, InjectionError> {
    let container = Arc::new(Calculator::new());

    let logger = container.resolve::<dyn Logger>();
    let logger = logger.require()?;

    if config.install_callback {
        logger.log("Create callback...");

        let weak = Arc::downgrade(&container);
        container.set_factory::<dyn Callback>(move || {
            let callback = weak
                .upgrade()
                .map(|c| c.make(LoggingCallback::default()))
                .unwrap_or_default();
            Arc::new(callback)
        })?;
    }

    logger.log("Starting test...");
    let calculator = container.make(Algorithm::new(config.offset));

    let pause = container.make(Pause::new(config.pause));
    pause.wait();

    let result = calculator.run()?;

    logger.log("-> Success!");
    Ok(result)
}
