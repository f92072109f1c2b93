//! Safety check for the cleaned-index output path.
//!
//! The cleaned CSV is written next to the source index, so a misdirected
//! output path could overwrite the only copy of the schedule.

use anyhow::{bail, Result};
use std::path::Path;

/// Validates that the cleaned-index output path is safe to create.
///
/// Checks:
/// - the output file name must contain "clean"
/// - the output cannot be the input index itself
pub fn validate_cleaned_path(output: &Path, input: &Path) -> Result<()> {
    let output_name = output.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if !output_name.contains("clean") {
        bail!(
            "Safety check failed: output file '{}' must contain 'clean' in the name",
            output.display()
        );
    }

    if output == input {
        bail!(
            "Safety check failed: output '{}' cannot be the same as the input index",
            output.display()
        );
    }

    Ok(())
}
