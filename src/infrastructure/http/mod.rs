//! HTTP adapter for the relief backend.

pub mod client;

pub use client::HttpCollectionClient;
