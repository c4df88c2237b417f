//! # vigil-handlers
//!
//! Event handlers for the watchdog: live ingestion, edit/delete
//! notifications, historical backfill, notification rendering, and the
//! event router.

mod backfill;
mod delete;
mod edit;
mod ingest;
pub mod render;
mod router;

pub use backfill::Backfiller;
pub use delete::DeleteHandler;
pub use edit::EditHandler;
pub use ingest::IngestHandler;
pub use router::EventRouter;
