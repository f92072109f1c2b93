//! CSV input and output for the playlist index.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Columns, TrackRecord};
use crate::progress::{create_progress_bar, create_spinner, log_progress};

/// Parsed playlist index: header row, resolved columns, and all records.
#[derive(Debug)]
pub struct PlaylistIndex {
    pub headers: Vec<String>,
    pub columns: Columns,
    pub records: Vec<TrackRecord>,
}

/// Read the playlist index, resolving the required columns from the header.
pub fn read_index(path: &Path) -> Result<PlaylistIndex> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open playlist index '{}'", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read header row from '{}'", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();
    let columns = Columns::from_headers(&headers)?;

    let spinner = create_spinner("Reading playlist index");
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("failed to parse row in '{}'", path.display()))?;
        records.push(TrackRecord::new(row.iter().map(str::to_string).collect()));
    }
    let msg = format!("Read {} tracks", records.len());
    spinner.finish_with_message(msg.clone());
    log_progress(&msg);

    Ok(PlaylistIndex {
        headers,
        columns,
        records,
    })
}

/// Write surviving records under the original header.
/// Zero records is not an error: a warning is printed and no file is created.
pub fn write_cleaned(path: &Path, headers: &[String], records: &[TrackRecord]) -> Result<()> {
    if records.is_empty() {
        println!("Warning: no rows to write, skipping '{}'", path.display());
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    writer.write_record(headers)?;

    let pb = create_progress_bar(records.len() as u64, "Writing cleaned index");
    for record in records {
        writer.write_record(&record.fields)?;
        pb.inc(1);
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush '{}'", path.display()))?;
    let msg = format!("Wrote {} tracks", records.len());
    pb.finish_with_message(msg.clone());
    log_progress(&msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::set_log_only;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Day,Time,Playlist Name,Song Name,Artist,Notes
Monday,9:00 – 10:30am,The Awakening,Holocene,Bon Iver,opener
Tuesday,Noon – 2:00pm,The Global Bazaar,Essence,Wizkid,
";

    #[test]
    fn test_read_index_parses_records() {
        set_log_only(true);
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.csv");
        fs::write(&path, SAMPLE).unwrap();

        let index = read_index(&path).unwrap();
        assert_eq!(index.headers.len(), 6);
        assert_eq!(index.records.len(), 2);
        assert_eq!(index.records[0].song_name(&index.columns), "Holocene");
        assert_eq!(index.records[0].time(&index.columns), "9:00 – 10:30am");
        assert_eq!(index.records[1].artist(&index.columns), "Wizkid");
    }

    #[test]
    fn test_read_index_missing_column() {
        set_log_only(true);
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.csv");
        fs::write(&path, "Day,Time,Song Name,Artist\nMonday,Noon – 2:00pm,Song,Artist\n").unwrap();

        let result = read_index(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("required column 'Playlist Name'"));
    }

    #[test]
    fn test_write_preserves_header_and_extra_columns() {
        set_log_only(true);
        let dir = tempdir().unwrap();
        let input = dir.path().join("index.csv");
        fs::write(&input, SAMPLE).unwrap();
        let index = read_index(&input).unwrap();

        let output = dir.path().join("index_cleaned.csv");
        write_cleaned(&output, &index.headers, &index.records).unwrap();

        let reread = read_index(&output).unwrap();
        assert_eq!(reread.headers, index.headers);
        assert_eq!(reread.records, index.records);
    }

    #[test]
    fn test_write_skips_empty() {
        set_log_only(true);
        let dir = tempdir().unwrap();
        let output = dir.path().join("empty_cleaned.csv");

        write_cleaned(&output, &["Day".to_string()], &[]).unwrap();
        assert!(!output.exists());
    }
}
