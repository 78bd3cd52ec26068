//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting on stderr
//! - Optional daily-rotated JSON log files

pub mod logger;

pub use logger::LoggerImpl;
