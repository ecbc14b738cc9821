use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;

use crate::engine::table::Table;
use crate::engine::types::ScalarValue;

/// Hashable form of a non-null scalar, used for group keys and distinct counts
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GroupValue {
    Int(i64),
    // Float bits; -0.0 is folded into 0.0 so both land in one group
    Float(u64),
    Str(String),
}

impl GroupValue {
    /// `None` for `Null`; nulls never form a group and are not distinct values.
    pub fn from_scalar(value: &ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Null => None,
            ScalarValue::Int64(i) => Some(GroupValue::Int(*i)),
            ScalarValue::Float64(f) => {
                let f = if *f == 0.0 { 0.0 } else { *f };
                Some(GroupValue::Float(f.to_bits()))
            }
            ScalarValue::Utf8(s) => Some(GroupValue::Str(s.clone())),
        }
    }
}

/// Record indices per group key, in first-seen key order.
pub type GroupBuckets = IndexMap<GroupValue, Vec<usize>, AHashRandomState>;

/// First pass of the grouping: buckets record indices by the value of
/// `key_column`. Records with a null key are skipped.
pub fn bucket_rows(table: &Table, key_column: usize) -> GroupBuckets {
    let mut buckets: GroupBuckets = IndexMap::with_hasher(AHashRandomState::new());
    for (idx, row) in table.rows().iter().enumerate() {
        if let Some(key) = GroupValue::from_scalar(&row[key_column]) {
            buckets.entry(key).or_default().push(idx);
        }
    }
    buckets
}
