//! In-memory table source for tests.
//!
//! Plays the role the real process scanner plays in the host application,
//! without touching `/proc`. Tests build a handful of rows and drive the
//! filter and comparator against them.

use super::{Column, Role, RowId, TableSource, Value};

/// One fabricated process row.
#[derive(Debug, Clone, Default)]
pub struct MockRow {
    pub name: String,
    /// Full image/command name; the alternate searchable text.
    pub image: String,
    pub user: String,
    pub pid: u32,
    pub cpu: f64,
    pub memory: u64,
    pub upload: f64,
    pub sent_bytes: u64,
    pub download: f64,
    pub recv_bytes: u64,
    pub disk_read: f64,
    pub disk_write: f64,
    pub nice: i64,
    /// Priority display label ("very high", "normal", ...).
    pub priority: String,
}

/// Fixed snapshot of fabricated rows.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    rows: Vec<MockRow>,
}

impl MockSource {
    pub fn new(rows: Vec<MockRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MockRow] {
        &self.rows
    }
}

impl TableSource for MockSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, row: RowId, column: Column, role: Role) -> Option<Value> {
        let r = self.rows.get(row)?;
        match (column, role) {
            (Column::Name, Role::Display) => Some(Value::Text(r.name.clone())),
            (Column::Name, Role::Search) => Some(Value::Text(r.image.clone())),
            (Column::Pid, Role::Display) => Some(Value::Text(r.pid.to_string())),
            (Column::Pid, Role::Raw) => Some(Value::Uint(r.pid as u64)),
            (Column::User, Role::Display) => Some(Value::Text(r.user.clone())),
            (Column::Cpu, Role::Display) => Some(Value::Text(format!("{:.1}%", r.cpu))),
            (Column::Cpu, Role::Raw) => Some(Value::Real(r.cpu)),
            (Column::Memory, Role::Raw) => Some(Value::Uint(r.memory)),
            (Column::Upload, Role::Raw) => Some(Value::Real(r.upload)),
            (Column::Upload, Role::Accumulated) => Some(Value::Uint(r.sent_bytes)),
            (Column::Download, Role::Raw) => Some(Value::Real(r.download)),
            (Column::Download, Role::Accumulated) => Some(Value::Uint(r.recv_bytes)),
            (Column::DiskRead, Role::Raw) => Some(Value::Real(r.disk_read)),
            (Column::DiskWrite, Role::Raw) => Some(Value::Real(r.disk_write)),
            (Column::Nice, Role::Raw) => Some(Value::Int(r.nice)),
            (Column::Priority, Role::Display) => Some(Value::Text(r.priority.clone())),
            (Column::Priority, Role::Raw) => Some(Value::Int(r.nice)),
            _ => None,
        }
    }
}
