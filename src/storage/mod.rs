//! Storage layer for budget-pace
//!
//! Reads budget and expense snapshots at the data boundary and writes the
//! settings file. Budgets and expenses are never written back; they belong
//! to whatever layer produced the snapshot.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_required, write_json_atomic, STDIN_PATH};
pub use snapshot::{Snapshot, SnapshotRecords};
