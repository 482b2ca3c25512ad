//! Remote savings store for Save Sense.
//!
//! Small axum service backing the tracker: per-user ledger persistence
//! (wholesale JSON documents in SQLite), the register/verify sign-in stub,
//! and the static bank/investment reference tables.

pub mod db;
pub mod reference;
pub mod rest;

pub use rest::{router, AppState};
