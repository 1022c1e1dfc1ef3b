use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::listing::JobListing;

/// UTF-8 byte order mark; spreadsheet apps key the encoding off it.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Overwrite `path` with the listing set as UTF-8 (BOM) CSV. The header
/// row comes from the JobListing serde renames.
pub fn write_csv(path: &Path, listings: &[JobListing]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(BOM)
        .with_context(|| format!("failed to write to {}", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);
    for listing in listings {
        writer.serialize(listing)?;
    }
    writer.flush()?;
    Ok(())
}
