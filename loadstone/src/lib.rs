#![deny(clippy::all)]

pub mod cache;
pub mod domain;
pub mod ports;

pub use cache::ReadThroughCache;
pub use domain::Outcome;
pub use ports::{BoxError, OutcomeStore, Producer};
