/// Chain events as seen by the chain and by the index.
pub mod event;

/// Composite ids.
pub mod id;

/// Point-in-time lookups of snapshot entities.
pub mod snapshot;
