// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::TempDir;

use result_printer::ResultPrinter;

/// Creates a printer that captures everything it writes in memory.
pub fn capturing_printer() -> ResultPrinter<Vec<u8>> {
    ResultPrinter::new(Vec::new())
}

/// Returns the text a capturing printer has written so far.
pub fn captured(printer: &ResultPrinter<Vec<u8>>) -> String {
    String::from_utf8(printer.sink().clone()).expect("printer output is UTF-8")
}

/// A sink whose every write fails, standing in for a closed console.
#[derive(Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// Helper function to write a replay script into a temporary directory
pub fn write_script(temp_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write replay script");
    path
}
