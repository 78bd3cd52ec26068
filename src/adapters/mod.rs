//! In-process adapters for the display and form ports.

pub mod form_state;
pub mod memory_region;

pub use form_state::FormState;
pub use memory_region::MemoryRegion;
