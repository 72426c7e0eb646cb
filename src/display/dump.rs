use crate::core::services::types::RawDump;
use crate::error::StorageError;
use crate::utils::error_helpers::convert_file_error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Pretty-prints the raw API responses to `path`. Debug output only; the
/// layout is not a stable format.
pub fn write_dump(path: &Path, raw: &RawDump) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|e| convert_file_error(e, path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, raw)
        .map_err(|e| convert_file_error(io::Error::from(e), path))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| convert_file_error(e, path))?;

    tracing::debug!(path = %path.display(), pages = raw.len(), "dump written");
    Ok(())
}
