//! Record Logger
//!
//! Append-only JSONL record logging, to a file or any writer.

use scenario_events::Record;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::EvaluationError;

/// Writes one record per line
pub struct RecordLogger {
    writer: Option<Box<dyn Write>>,
    record_count: u64,
}

impl RecordLogger {
    /// Create a new logger writing to the specified path, truncating it
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Create a logger over an arbitrary writer (stdout, a buffer)
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            record_count: 0,
        }
    }

    /// Create a logger that discards records (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    /// Number of records logged so far
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Log one record; only records that were written are counted
    pub fn log(&mut self, record: &Record) -> Result<(), EvaluationError> {
        if let Some(ref mut writer) = self.writer {
            let json = record.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        self.record_count += 1;
        Ok(())
    }

    /// Flush the buffer
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for RecordLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush record logger: {}", e);
        }
    }
}
