//! Common types used across the Poloniex client library.

pub mod common;
pub mod params;

pub use common::*;
pub use params::Params;
