pub mod version;

pub use version::{history_order, now_millis, NewVersion, VersionRecord};
