//! Domain types and pure validation logic for the Imagingpedia backend.
//!
//! Nothing in this crate touches the database; the `db` and `api` crates
//! build on it.

pub mod error;
pub mod subject;
pub mod types;
