//! Core library for the Save Sense daily-savings tracker.
//!
//! Everything a front-end needs besides rendering lives here: the calendar
//! date math, the in-memory savings ledger, goal projection, the saving-plan
//! calculator for the bank comparison page, the sign-in session, and the
//! best-effort sync against the remote savings store.

pub mod calendar;
pub mod goal;
pub mod ledger;
pub mod returns;
pub mod session;
pub mod sync;

pub use goal::GoalProgress;
pub use ledger::{LedgerError, LedgerStore};
pub use session::{Session, SessionError};
pub use sync::SyncAdapter;
