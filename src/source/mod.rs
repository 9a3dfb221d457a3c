//! Abstract tabular data source consumed by the sort/filter core.
//!
//! The core never stores process data itself: rows are opaque indices into a
//! source that stays immutable for the duration of one filter+sort pass.
//! The acquisition side (procfs scanning, whatever the host uses) lives
//! behind [`TableSource`].

mod mock;

pub use mock::{MockRow, MockSource};

use serde::{Deserialize, Serialize};

/// Opaque row handle. Identity is stable only within one refresh cycle.
pub type RowId = usize;

/// Semantic column of the process table.
///
/// The set is a shared contract with the data source: every column a view
/// can sort by has a tag here, and the comparator policy is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Process display name.
    Name,
    /// Process ID.
    Pid,
    /// Owning user name.
    User,
    /// CPU usage percentage.
    Cpu,
    /// Resident memory.
    Memory,
    /// Network upload rate.
    Upload,
    /// Network download rate.
    Download,
    /// Disk read rate.
    DiskRead,
    /// Disk write rate.
    DiskWrite,
    /// Nice value.
    Nice,
    /// Scheduling priority (displayed as text, ordered by nice value).
    Priority,
}

impl Column {
    /// All columns, in default display order.
    pub fn all() -> &'static [Column] {
        &[
            Column::Name,
            Column::Pid,
            Column::User,
            Column::Cpu,
            Column::Memory,
            Column::Upload,
            Column::Download,
            Column::DiskRead,
            Column::DiskWrite,
            Column::Nice,
            Column::Priority,
        ]
    }
}

/// Which facet of a cell a lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Human-readable display text.
    Display,
    /// Raw comparable value (numeric for numeric columns).
    Raw,
    /// Alternate searchable text, distinct from the display name
    /// (e.g. the full command or image name). Only the Name column
    /// carries one.
    Search,
    /// Cumulative counterpart of a rate value (e.g. total bytes sent
    /// for the upload-rate column).
    Accumulated,
}

/// Typed cell value returned by a [`TableSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Uint(u64),
    Real(f64),
}

impl Value {
    /// Borrows the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Uint(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Integer payload, if this is a signed or unsigned integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Unsigned payload, if this is an unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            Value::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl PartialOrd for Value {
    /// Same-variant ordering only; mixed variants are unordered and the
    /// comparator treats them as equivalent.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Uint(a), Value::Uint(b)) => a.partial_cmp(b),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Snapshot view of the process table.
///
/// Implementations must keep the row set stable while a filter+sort pass is
/// running; the core only reads and never mutates. Out-of-range rows and
/// roles a column does not carry answer `None`.
pub trait TableSource {
    /// Number of rows in the current snapshot.
    fn row_count(&self) -> usize;

    /// Value of one cell facet, or `None` if the handle is invalid or the
    /// column has no value for this role.
    fn value(&self, row: RowId, column: Column, role: Role) -> Option<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn value_orders_within_variant() {
        assert_eq!(
            Value::Int(-3).partial_cmp(&Value::Int(5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Uint(9).partial_cmp(&Value::Uint(9)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::Real(2.5).partial_cmp(&Value::Real(1.0)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Text("a".into()).partial_cmp(&Value::Text("b".into())),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn mixed_variants_are_unordered() {
        assert_eq!(Value::Int(1).partial_cmp(&Value::Real(1.0)), None);
        assert_eq!(Value::Text("1".into()).partial_cmp(&Value::Uint(1)), None);
    }

    #[test]
    fn numeric_accessors_widen() {
        assert_eq!(Value::Uint(42).as_f64(), Some(42.0));
        assert_eq!(Value::Int(-1).as_i64(), Some(-1));
        assert_eq!(Value::Uint(7).as_i64(), Some(7));
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::Text("7".into()).as_f64(), None);
    }
}
