//! Typed arguments for every external program the setup actions run.

pub mod files;
pub mod packages;
pub mod services;
