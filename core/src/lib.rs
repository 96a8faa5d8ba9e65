//! Dispatch dashboard core.
//!
//! An in-memory case-dispatch store: a roster of engineers grouped into
//! silos, support cases slotted onto daily and weekly boards. The store
//! is the single owner of all three collections; daily and weekly views
//! are derived fresh on every query. The only persisted artifact is the
//! temporary roster file.

pub mod confirm;
pub mod daily;
pub mod error;
pub mod id;
pub mod model;
pub mod roster;
pub mod store;
pub mod types;
pub mod weekly;
