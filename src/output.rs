//! @acp:module "Output"
//! @acp:summary "Timestamped result file naming and document delivery"
//! @acp:domain typing
//! @acp:layer io

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::error::{Result, TypingError};

/// Default strftime pattern for result file names
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Default directory for result files
pub const DEFAULT_OUT_DIR: &str = "results";

/// Where the output document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Print the document itself
    Stdout,
    /// Write `result-<timestamp>.txt` under `out_dir`
    File {
        out_dir: PathBuf,
        timestamp_format: String,
    },
}

/// Reject strftime patterns chrono cannot render
pub fn validate_timestamp_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TypingError::InvalidTimestampFormat(format.to_string()));
    }
    Ok(())
}

/// Render the timestamp component of a result file name
///
/// The rendered value must stay a single path component.
pub fn format_timestamp<Tz>(now: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    validate_timestamp_format(format)?;
    let timestamp = now.format(format).to_string();
    if timestamp.chars().any(std::path::is_separator) {
        return Err(TypingError::InvalidTimestampFormat(format.to_string()));
    }
    Ok(timestamp)
}

/// `result-<timestamp>.txt`
pub fn result_file_name(timestamp: &str) -> String {
    format!("result-{}.txt", timestamp)
}

/// Write `document` into `out_dir`, creating it with parents if missing
///
/// Returns the absolute path of the written file.
pub fn write_document(out_dir: &Path, file_name: &str, document: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|source| TypingError::WriteOutput {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(file_name);
    fs::write(&path, document).map_err(|source| TypingError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", document.len(), path.display());

    let resolved = fs::canonicalize(&path)?;
    info!("Result file: {}", resolved.display());
    Ok(resolved)
}

/// Deliver a finished document
///
/// For [`Delivery::Stdout`] the document is written to `out` verbatim and
/// `None` is returned. For [`Delivery::File`] the document goes to a
/// timestamped file and only its absolute path (plus newline) is written to
/// `out`.
pub fn deliver<Tz, W>(
    document: &str,
    delivery: &Delivery,
    now: &DateTime<Tz>,
    out: &mut W,
) -> Result<Option<PathBuf>>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    W: Write + ?Sized,
{
    match delivery {
        Delivery::Stdout => {
            out.write_all(document.as_bytes())?;
            out.flush()?;
            Ok(None)
        }
        Delivery::File {
            out_dir,
            timestamp_format,
        } => {
            let timestamp = format_timestamp(now, timestamp_format)?;
            let path = write_document(out_dir, &result_file_name(&timestamp), document)?;
            writeln!(out, "{}", path.display())?;
            out.flush()?;
            Ok(Some(path))
        }
    }
}
