//! Sales domain module.
//!
//! Individual sale records as read from the external store. Pure data plus
//! validation (no IO, no HTTP, no storage).

pub mod sale;

pub use sale::Sale;
