use crate::domain::order::Order;
use crate::domain::ports::OrderSink;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only plain-text order log.
///
/// The file is opened per record so nothing is held open between checkouts,
/// and the program never reads it back.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
}

impl FileOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSink for FileOrderLog {
    fn record(&mut self, order: &Order) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", order.log_line())
    }
}
