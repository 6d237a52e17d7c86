//! The seams of the harness: the query node as seen by fixtures, and the
//! fixtures themselves.

pub mod fixture;
pub mod query;
