//! HTTP API: JSON views over the insight engine.

pub mod app;
