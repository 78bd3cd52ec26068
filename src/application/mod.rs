//! Application layer: the sync controllers and the board that owns them.

pub mod board;
pub mod collection_sync;
pub mod form_fields;
pub mod notifier;
pub mod record_kind;
pub mod seed;

pub use board::{BoardRegions, BoardReport, ReliefBoard};
pub use collection_sync::{fetch_records, CollectionSync};
pub use notifier::{Notifier, DEFAULT_DISMISS_AFTER};
pub use record_kind::{Alerts, Helplines, KindMessages, RecordKind, SafeLocations, Volunteers};
pub use seed::{seed_all, seed_kind, SeedOutcome};
