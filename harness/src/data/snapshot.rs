//! Snapshot entities are not addressed by id but by a point in time and a
//! comparison, because the index cannot filter by block height ranges.
//! "The latest snapshot at or before `t`" is `(t, Lte)` ordered
//! descending, "the first snapshot at or after `t`" is `(t, Gte)` ordered
//! ascending.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl ComparisonOp {
    pub const ALL: [ComparisonOp; 5] = [Self::Eq, Self::Lt, Self::Lte, Self::Gt, Self::Gte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }

    /// The name of the `where` filter for `field`, e.g. `setAtTime_lte`.
    pub fn filter_key(&self, field: &str) -> String {
        format!("{}_{}", field, self.as_str())
    }

    /// The `orderBy` value that puts the snapshot closest to the reference
    /// point first.
    pub fn order_by(&self, field: &str) -> String {
        match self {
            Self::Lt | Self::Lte => format!("{}_DESC", field),
            Self::Eq | Self::Gt | Self::Gte => format!("{}_ASC", field),
        }
    }

    /// Whether `value <op> reference` holds.
    pub fn holds<T: Ord>(&self, value: &T, reference: &T) -> bool {
        let ord = value.cmp(reference);
        match self {
            Self::Eq => ord == Ordering::Equal,
            Self::Lt => ord == Ordering::Less,
            Self::Lte => ord != Ordering::Greater,
            Self::Gt => ord == Ordering::Greater,
            Self::Gte => ord != Ordering::Less,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference point for a snapshot lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotAt {
    pub timestamp: DateTime<Utc>,
    pub op: ComparisonOp,
}

impl SnapshotAt {
    pub fn new(timestamp: DateTime<Utc>, op: ComparisonOp) -> Self {
        Self { timestamp, op }
    }

    /// The latest snapshot taken at or before `timestamp`.
    pub fn at_or_before(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp, ComparisonOp::Lte)
    }

    /// The earliest snapshot taken at or after `timestamp`.
    pub fn at_or_after(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp, ComparisonOp::Gte)
    }
}

impl fmt::Display for SnapshotAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.timestamp.to_rfc3339())
    }
}
