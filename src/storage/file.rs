//! Ledger file read/write
//!
//! Thin wrappers over the filesystem that translate a missing ledger file
//! into the recoverable [`LedgerError::NotFound`] and everything else into
//! [`LedgerError::Io`]. Handles are scoped and released on every path.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Read the ledger file's full contents
///
/// A missing file is [`LedgerError::NotFound`]; any other failure is
/// [`LedgerError::Io`].
pub fn read_ledger_file(path: impl AsRef<Path>) -> LedgerResult<String> {
    match fs::read_to_string(path.as_ref()) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(LedgerError::NotFound),
        Err(e) => Err(LedgerError::Io(e.to_string())),
    }
}

/// Write the serialized ledger text, replacing any previous contents
pub fn write_ledger_file(path: impl AsRef<Path>, text: &str) -> LedgerResult<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| LedgerError::Io(format!("failed to create ledger file: {e}")))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
