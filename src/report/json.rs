//! JSON-lines report output
//!
//! One object per query:
//! - `{"query":..,"status":"ok","data":..}`
//! - `{"query":..,"status":"error","code":..,"message":..}`

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::catalog::QueryOutcome;

use super::sink::ReportSink;

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(name: &str, outcome: &QueryOutcome) -> Value {
        match outcome {
            QueryOutcome::Ok(data) => json!({
                "query": name,
                "status": "ok",
                "data": data,
            }),
            QueryOutcome::Failed { code, message } => json!({
                "query": name,
                "status": "error",
                "code": code,
                "message": message,
            }),
        }
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn emit(&mut self, name: &str, outcome: &QueryOutcome) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &Self::line(name, outcome))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buffer: &[u8]) -> Vec<Value> {
        String::from_utf8(buffer.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_ok_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.emit("average_salary", &QueryOutcome::Ok(json!(60000.0)))
            .unwrap();
        sink.finish().unwrap();

        let out = lines(&sink.into_inner());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["query"], "average_salary");
        assert_eq!(out[0]["status"], "ok");
        assert_eq!(out[0]["data"], 60000.0);
    }

    #[test]
    fn test_error_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let failed = QueryOutcome::Failed {
            code: "ROSTER_QUERY_DATE_FORMAT",
            message: "bad date".to_string(),
        };
        sink.emit("oldest_hire_date", &failed).unwrap();

        let out = lines(&sink.into_inner());
        assert_eq!(out[0]["status"], "error");
        assert_eq!(out[0]["code"], "ROSTER_QUERY_DATE_FORMAT");
        assert_eq!(out[0]["message"], "bad date");
        assert!(out[0].get("data").is_none());
    }

    #[test]
    fn test_one_line_per_emit() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.emit("a", &QueryOutcome::Ok(json!({"x": [1, 2]}))).unwrap();
        sink.emit("b", &QueryOutcome::Ok(Value::Null)).unwrap();

        let out = lines(&sink.into_inner());
        assert_eq!(out.len(), 2);
        assert_eq!(out[1]["data"], Value::Null);
    }
}
