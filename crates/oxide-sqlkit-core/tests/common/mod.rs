#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use oxide_sqlkit_core::dialect::SqlDialect;
use oxide_sqlkit_core::testing::{MemoryRow, RecordingDatabase};
use oxide_sqlkit_core::SqlValue;
use serde::Deserialize;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
}

pub fn user_row(id: i64, name: &str, age: Option<i64>) -> MemoryRow {
    MemoryRow::new([
        ("id", SqlValue::Int(id)),
        ("name", SqlValue::Text(name.to_string())),
        ("age", age.map_or(SqlValue::Null, SqlValue::Int)),
    ])
}

/// Three users, delivered in id order.
pub fn users_db(dialect: impl SqlDialect + 'static) -> RecordingDatabase {
    RecordingDatabase::new(dialect).with_rows(vec![
        user_row(1, "alice", Some(30)),
        user_row(2, "bob", None),
        user_row(3, "carol", Some(25)),
    ])
}

pub fn ids(rows: &[MemoryRow]) -> Vec<i64> {
    use oxide_sqlkit_core::SqlRow;
    rows.iter()
        .map(|row| row.decode::<i64>("id").expect("id column"))
        .collect()
}

/// A `tracing` writer that keeps everything written to it.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber writing every event into the returned buffer.
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
