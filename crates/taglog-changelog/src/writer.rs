//! Changelog file output

use std::path::Path;

use taglog_core::error::Result;
use tracing::{debug, info, instrument};

/// Read existing changelog content as raw bytes; the encoding is not checked
pub fn read_changelog(path: &Path) -> Result<Option<Vec<u8>>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(std::fs::read(path)?))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}

/// Write `section` to the top of the changelog at `path`.
///
/// Existing content is kept below the new section, separated by a blank
/// line. The file is rewritten as a whole.
#[instrument(skip(section), fields(path = %path.display(), section_len = section.len()))]
pub fn prepend_section(path: &Path, section: &str) -> Result<()> {
    let mut combined = section.as_bytes().to_vec();
    if let Some(existing) = read_changelog(path)? {
        combined.extend_from_slice(b"\n\n");
        combined.extend_from_slice(&existing);
    }

    std::fs::write(path, &combined)?;
    info!(path = %path.display(), bytes = combined.len(), "changelog written");
    Ok(())
}
