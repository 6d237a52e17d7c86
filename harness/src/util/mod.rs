/// Utilities for working with futures.
pub mod futures;
