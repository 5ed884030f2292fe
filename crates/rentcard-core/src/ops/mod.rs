pub mod ledger;
pub mod memory;

pub use ledger::{LedgerState, VersionLedger};
pub use memory::InMemoryLedger;
