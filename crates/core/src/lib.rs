//! Domain types and rules for the kennel service.
//!
//! Pure logic only: no I/O, no locking, no HTTP. The store lives in
//! `kennel-db` and the HTTP surface in `kennel-api`.

pub mod dog;
pub mod error;
pub mod types;
