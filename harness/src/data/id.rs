//! The two composite id schemes shared by the chain side and the index.
//!
//! Events are identified by their position on chain,
//! `"<blockNumber>-<indexInBlock>"`; entities that live inside a domain
//! (a working group, usually) by `"<domain>-<runtimeId>"`. The index builds
//! its ids the same way, so these strings must not change.

use std::fmt::Display;

/// `"<blockNumber>-<indexInBlock>"`
pub fn event_id(block_number: u64, index_in_block: u32) -> String {
    format!("{}-{}", block_number, index_in_block)
}

/// `"<domain>-<runtimeId>"`, e.g. `"storageWorkingGroup-7"`.
pub fn entity_id(domain: impl Display, runtime_id: impl Display) -> String {
    format!("{}-{}", domain, runtime_id)
}
