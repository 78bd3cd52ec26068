//! Port trait definitions (Hexagonal Architecture)
//!
//! Interfaces the sync controllers depend on:
//! - CollectionApi: the REST collection endpoints
//! - DisplayRegion: where rendered lists and notices go
//! - FormSource: field values captured at submit time

pub mod collection_api;
pub mod display_region;
pub mod form;

pub use collection_api::{ApiError, CollectionApi};
pub use display_region::DisplayRegion;
pub use form::FormSource;
