//! CLI command implementations.

pub mod board;
pub mod init;
pub mod list;
pub mod seed;
pub mod submit;
