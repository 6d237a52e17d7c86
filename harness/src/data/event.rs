use anyhow::ensure;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use super::id::event_id;

/// Where and when a chain event happened, together with its decoded
/// payload. Produced right after a transaction is finalized and never
/// changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails<E> {
    pub block_number: u64,
    pub index_in_block: u32,
    pub block_timestamp: DateTime<Utc>,
    /// Hash of the extrinsic that emitted the event.
    pub in_extrinsic: String,
    pub event: E,
}

impl<E> EventDetails<E> {
    /// The id under which the index stores this event.
    pub fn id(&self) -> String {
        event_id(self.block_number, self.index_in_block)
    }

    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> EventDetails<F> {
        EventDetails {
            block_number: self.block_number,
            index_in_block: self.index_in_block,
            block_timestamp: self.block_timestamp,
            in_extrinsic: self.in_extrinsic,
            event: f(self.event),
        }
    }

    pub fn try_map<F, Err>(
        self,
        f: impl FnOnce(E) -> Result<F, Err>,
    ) -> Result<EventDetails<F>, Err> {
        Ok(EventDetails {
            block_number: self.block_number,
            index_in_block: self.index_in_block,
            block_timestamp: self.block_timestamp,
            in_extrinsic: self.in_extrinsic,
            event: f(self.event)?,
        })
    }
}

/// The fields every event record in the index carries. Typed event
/// projections embed it with `#[serde(flatten)]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedEvent {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub in_block: u64,
    pub in_extrinsic: String,
    pub index_in_block: u32,
}

impl IndexedEvent {
    /// Checks that this record is the projection of `expected`.
    pub fn assert_matches<E>(&self, expected: &EventDetails<E>) -> anyhow::Result<()> {
        let id = expected.id();
        ensure!(
            self.id == id,
            "event record {} found where {} was expected",
            self.id,
            id
        );
        ensure!(
            self.in_extrinsic == expected.in_extrinsic,
            "event {}: inExtrinsic is {}, expected {}",
            id,
            self.in_extrinsic,
            expected.in_extrinsic
        );
        ensure!(
            self.in_block == expected.block_number,
            "event {}: inBlock is {}, expected {}",
            id,
            self.in_block,
            expected.block_number
        );
        ensure!(
            self.index_in_block == expected.index_in_block,
            "event {}: indexInBlock is {}, expected {}",
            id,
            self.index_in_block,
            expected.index_in_block
        );
        ensure!(
            self.created_at == expected.block_timestamp,
            "event {}: createdAt is {}, expected {}",
            id,
            self.created_at,
            expected.block_timestamp
        );
        Ok(())
    }
}
