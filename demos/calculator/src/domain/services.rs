pub trait DataSource: Send + Sync {
    fn data(&self) -> Vec<f64>;
}

pub trait Worker: Send + Sync {
    fn calculate(&self, data: &[f64]) -> f64;
}

pub trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

/// Final step applied to the computed value, identity unless overridden
pub trait Transform: Send + Sync {
    fn transform(&self, value: f64) -> f64 {
        value
    }
}

/// Receives the result of a calculation
pub trait Callback: Send + Sync {
    fn set_result(&self, value: f64);
}
