use crate::domain::{DataSource, Logger, Transform, Worker};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DataProvider {
    values: Vec<f64>,
}

impl Default for DataProvider {
    fn default() -> Self {
        Self {
            values: vec![1.0, 3.0, 5.0, 7.0, 11.0, 13.0, 15.0],
        }
    }
}

impl DataSource for DataProvider {
    fn data(&self) -> Vec<f64> {
        self.values.clone()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct SumWorker;

impl Worker for SumWorker {
    fn calculate(&self, data: &[f64]) -> f64 {
        data.iter().sum()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Writes every message to stdout on its own line
#[derive(Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("{msg}");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {}

#[derive(Default)]
pub struct NegateTransform;

impl Transform for NegateTransform {
    fn transform(&self, value: f64) -> f64 {
        -value
    }
}
