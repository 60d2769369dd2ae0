use std::fs;
use std::path::Path;

use clinic_model::{ImportError, Result};

/// Read an uploaded import file as UTF-8 text. A leading BOM is stripped;
/// anything that is not valid UTF-8 is rejected rather than decoded lossily.
pub fn read_import_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| ImportError::InvalidEncoding)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read import file");
    Ok(strip_bom(&text).to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
