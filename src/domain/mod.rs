//! Domain layer for the relief board
//!
//! Record models, the port traits the sync controllers depend on, and
//! domain errors.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{SyncError, SyncResult};
