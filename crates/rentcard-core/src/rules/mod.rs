//! Ledger rules shared by every backend
//!
//! - `validation`: input checks run before any write
//! - `invariants`: the single-active-version check run on reads

pub mod invariants;
pub mod validation;
