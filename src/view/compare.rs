//! Per-column row comparator.
//!
//! Each column orders by its own semantics, with column-specific tiebreaks
//! that read sibling columns of the same row pair through the data source.
//! Every path yields a strict weak ordering: `less(a, a)` is always false,
//! and tiebreak arms are themselves orderings.

use std::cmp::Ordering;

use crate::source::{Column, Role, RowId, TableSource, Value};
use crate::text::Collation;

/// `true` when `left` orders strictly before `right` under `column`.
pub(crate) fn less(
    source: &dyn TableSource,
    left: RowId,
    right: RowId,
    column: Column,
    collation: &Collation,
) -> bool {
    ordering(source, left, right, column, collation) == Ordering::Less
}

/// Full ordering used by the sort pass.
pub(crate) fn ordering(
    source: &dyn TableSource,
    left: RowId,
    right: RowId,
    column: Column,
    collation: &Collation,
) -> Ordering {
    // Bad handles order as equivalent: "not less than" either way, and the
    // rest of the batch still sorts.
    if left >= source.row_count() || right >= source.row_count() {
        return Ordering::Equal;
    }
    match column {
        Column::Name => name_ordering(source, left, right, collation),
        Column::User => collation.compare(
            &display_text(source, left, Column::User),
            &display_text(source, right, Column::User),
        ),
        Column::Memory => memory_ordering(source, left, right),
        Column::Cpu => cpu_ordering(source, left, right),
        Column::Upload | Column::Download => rate_ordering(source, left, right, column),
        Column::Nice => nice_ordering(source, left, right),
        // Priority displays a label but orders by the nice value of the
        // same row pair.
        Column::Priority => nice_ordering(source, left, right),
        // Plain raw-value columns, no tiebreak.
        Column::Pid | Column::DiskRead | Column::DiskWrite => {
            raw_ordering(source, left, right, column)
        }
    }
}

/// Name: collation order with a fast path, CPU usage on full equality.
///
/// Collation is expensive and this runs every tick. When either string is
/// empty, or the first characters are plain alphanumerics that already
/// differ, code-point order stands in for locale order.
fn name_ordering(
    source: &dyn TableSource,
    left: RowId,
    right: RowId,
    collation: &Collation,
) -> Ordering {
    let a = display_text(source, left, Column::Name);
    let b = display_text(source, right, Column::Name);
    if a.is_empty() || b.is_empty() {
        return a.cmp(&b);
    }
    if a == b {
        return cpu_raw_ordering(source, left, right);
    }
    let (ca, cb) = (first_char(&a), first_char(&b));
    if ca != cb && ca.is_alphanumeric() && cb.is_alphanumeric() {
        a.cmp(&b)
    } else {
        collation.compare(&a, &b)
    }
}

/// Memory: raw value, CPU usage on equality.
fn memory_ordering(source: &dyn TableSource, left: RowId, right: RowId) -> Ordering {
    let lmem = source.value(left, Column::Memory, Role::Raw);
    let rmem = source.value(right, Column::Memory, Role::Raw);
    match cmp_values(lmem.as_ref(), rmem.as_ref()) {
        Ordering::Equal => cpu_raw_ordering(source, left, right),
        other => other,
    }
}

/// CPU: approximate equality (float noise must not reorder rows), memory
/// on near-equality.
fn cpu_ordering(source: &dyn TableSource, left: RowId, right: RowId) -> Ordering {
    let lcpu = raw_f64(source, left, Column::Cpu);
    let rcpu = raw_f64(source, right, Column::Cpu);
    if approx_eq(lcpu, rcpu) {
        let lmem = source.value(left, Column::Memory, Role::Raw);
        let rmem = source.value(right, Column::Memory, Role::Raw);
        cmp_values(lmem.as_ref(), rmem.as_ref())
    } else {
        lcpu.partial_cmp(&rcpu).unwrap_or(Ordering::Equal)
    }
}

/// Upload/Download: transfer rate with approximate equality, cumulative
/// bytes (exact, unsigned) on near-equality.
fn rate_ordering(
    source: &dyn TableSource,
    left: RowId,
    right: RowId,
    column: Column,
) -> Ordering {
    let lrate = raw_f64(source, left, column);
    let rrate = raw_f64(source, right, column);
    if approx_eq(lrate, rrate) {
        let ltotal = accumulated_u64(source, left, column);
        let rtotal = accumulated_u64(source, right, column);
        ltotal.cmp(&rtotal)
    } else {
        lrate.partial_cmp(&rrate).unwrap_or(Ordering::Equal)
    }
}

/// Nice: direct numeric order, so the more negative value (higher
/// scheduling priority) sorts first in an ascending pass.
fn nice_ordering(source: &dyn TableSource, left: RowId, right: RowId) -> Ordering {
    let lnice = source
        .value(left, Column::Nice, Role::Raw)
        .and_then(|v| v.as_i64());
    let rnice = source
        .value(right, Column::Nice, Role::Raw)
        .and_then(|v| v.as_i64());
    lnice.unwrap_or(0).cmp(&rnice.unwrap_or(0))
}

/// Default: raw values as the source typed them.
fn raw_ordering(source: &dyn TableSource, left: RowId, right: RowId, column: Column) -> Ordering {
    let lv = source.value(left, column, Role::Raw);
    let rv = source.value(right, column, Role::Raw);
    cmp_values(lv.as_ref(), rv.as_ref())
}

/// Exact CPU comparison used as a tiebreak (not the fuzzy primary).
fn cpu_raw_ordering(source: &dyn TableSource, left: RowId, right: RowId) -> Ordering {
    raw_ordering(source, left, right, Column::Cpu)
}

/// Magnitude-relative approximate equality for rates and percentages.
/// Exact zeros are equal; a zero is never approximately equal to a
/// nonzero value.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}

fn cmp_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (None, None) => Ordering::Equal,
        // A missing value orders before any present one, deterministically.
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

fn display_text(source: &dyn TableSource, row: RowId, column: Column) -> String {
    source
        .value(row, column, Role::Display)
        .and_then(|v| v.as_text().map(str::to_string))
        .unwrap_or_default()
}

fn raw_f64(source: &dyn TableSource, row: RowId, column: Column) -> f64 {
    source
        .value(row, column, Role::Raw)
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

fn accumulated_u64(source: &dyn TableSource, row: RowId, column: Column) -> u64 {
    source
        .value(row, column, Role::Accumulated)
        .and_then(|v| v.as_u64())
        .unwrap_or_default()
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}
