//! Calculation pipeline assembled with `wiring`: a data source feeds a worker
//! whose result is offset, transformed and reported through a callback
//! installed at runtime.

pub mod algorithm;
pub mod app;
pub mod domain;
pub mod infra;
