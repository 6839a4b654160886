//! Human-readable report output
//!
//! One `name: value` line per query. Arrays longer than `max_items` are cut
//! to their first `max_items` elements followed by a `"... (N total)"`
//! marker, at any depth.

use std::io::{self, Write};

use serde_json::Value;

use crate::catalog::QueryOutcome;

use super::sink::ReportSink;

/// Default array length shown before truncation
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Writes `name: value` lines
pub struct TextSink<W: Write> {
    writer: W,
    max_items: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_max_items(writer, DEFAULT_MAX_ITEMS)
    }

    pub fn with_max_items(writer: W, max_items: usize) -> Self {
        Self { writer, max_items }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, value: &Value) -> String {
        match truncate(value, self.max_items) {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

fn truncate(value: &Value, max_items: usize) -> Value {
    match value {
        Value::Array(items) => {
            let mut kept: Vec<Value> = items
                .iter()
                .take(max_items)
                .map(|v| truncate(v, max_items))
                .collect();
            if items.len() > max_items {
                kept.push(Value::String(format!("... ({} total)", items.len())));
            }
            Value::Array(kept)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), truncate(v, max_items)))
                .collect(),
        ),
        other => other.clone(),
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, name: &str, outcome: &QueryOutcome) -> io::Result<()> {
        match outcome {
            QueryOutcome::Ok(value) => {
                let rendered = self.render(value);
                writeln!(self.writer, "{}: {}", name, rendered)
            }
            QueryOutcome::Failed { code, message } => {
                writeln!(self.writer, "{}: FAILED {}: {}", name, code, message)
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
