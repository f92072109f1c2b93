//! Core data models for playlist index cleanup.
//!
//! This module contains the record and slot types shared by the cleanup
//! pipeline and the verification binary, plus the two JSON report types.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ============================================================================
// Type Aliases
// ============================================================================

/// Dedup identity for a track: (Song Name, Artist)
pub type DedupeKey = (String, String);

// ============================================================================
// Column Resolution
// ============================================================================

/// Resolved positions of the required columns within the index header.
///
/// The index may carry any number of extra columns; those pass through the
/// pipeline untouched and only these five are ever inspected.
#[derive(Clone, Copy, Debug)]
pub struct Columns {
    pub day: usize,
    pub time: usize,
    pub playlist_name: usize,
    pub song_name: usize,
    pub artist: usize,
}

fn find_column(headers: &[String], name: &str) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!("playlist index is missing required column '{name}'"),
    }
}

impl Columns {
    /// Resolve the required column positions from a header row.
    /// Fails naming the first required column that is missing.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        Ok(Self {
            day: find_column(headers, "Day")?,
            time: find_column(headers, "Time")?,
            playlist_name: find_column(headers, "Playlist Name")?,
            song_name: find_column(headers, "Song Name")?,
            artist: find_column(headers, "Artist")?,
        })
    }
}

// ============================================================================
// Track Records
// ============================================================================

/// One row of the playlist index. Field order mirrors the header row.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRecord {
    pub fields: Vec<String>,
}

impl TrackRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn day(&self, cols: &Columns) -> &str {
        &self.fields[cols.day]
    }

    pub fn time(&self, cols: &Columns) -> &str {
        &self.fields[cols.time]
    }

    pub fn playlist_name(&self, cols: &Columns) -> &str {
        &self.fields[cols.playlist_name]
    }

    pub fn song_name(&self, cols: &Columns) -> &str {
        &self.fields[cols.song_name]
    }

    pub fn artist(&self, cols: &Columns) -> &str {
        &self.fields[cols.artist]
    }

    /// Dedup identity: (Song Name, Artist)
    pub fn dedupe_key(&self, cols: &Columns) -> DedupeKey {
        (
            self.song_name(cols).to_string(),
            self.artist(cols).to_string(),
        )
    }

    /// Scheduling identity: (Day, Time, Playlist Name)
    pub fn slot(&self, cols: &Columns) -> PlaylistSlot {
        PlaylistSlot {
            day: self.day(cols).to_string(),
            time: self.time(cols).to_string(),
            playlist_name: self.playlist_name(cols).to_string(),
        }
    }
}

// ============================================================================
// Playlist Slots
// ============================================================================

/// A scheduled playlist, identified by (Day, Time, Playlist Name).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlaylistSlot {
    pub day: String,
    pub time: String,
    pub playlist_name: String,
}

impl fmt::Display for PlaylistSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.day, self.time, self.playlist_name)
    }
}

// ============================================================================
// Removal Report
// ============================================================================

/// One resolved duplicate group: where the track was kept and which other
/// slots lost their copy.
#[derive(Clone, Debug, Serialize)]
pub struct DuplicateRemoval {
    pub song: String,
    pub artist: String,
    pub kept_in: String,
    pub removed_from: Vec<String>,
}

/// One track dropped from the Friday Noon Rooftop slot by the content filter.
#[derive(Clone, Debug, Serialize)]
pub struct FridayNoonRemoval {
    pub song: String,
    pub artist: String,
    pub reason: String,
}

/// Full removal detail for one cleanup run.
#[derive(Default, Clone, Debug, Serialize)]
pub struct RemovalReport {
    pub duplicates_removed: Vec<DuplicateRemoval>,
    pub friday_noon_removed: Vec<FridayNoonRemoval>,
    pub total_removed: usize,
}

impl RemovalReport {
    /// Write the report to a JSON file
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

// ============================================================================
// Gap Report
// ============================================================================

/// Shortfall detail for one under-filled slot.
#[derive(Clone, Debug, Serialize)]
pub struct GapEntry {
    pub day: String,
    pub time: String,
    pub playlist_name: String,
    pub current_count: usize,
    pub target_count: usize,
    pub needed: usize,
    pub seed_idea: String,
    /// Placeholder for a later catalog-search enrichment step.
    pub reference_track_ids: Vec<String>,
}

/// Gap report keyed by sanitized slot identifier.
/// Entries keep slot first-appearance order, so serialization must not
/// re-sort the keys the way a plain JSON map would.
#[derive(Default, Clone, Debug)]
pub struct GapReport {
    pub entries: Vec<(String, GapEntry)>,
}

impl GapReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the report to a JSON file
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Serialize for GapReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (slot_id, entry) in &self.entries {
            map.serialize_entry(slot_id, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_columns_from_headers() {
        let cols = Columns::from_headers(&headers(&[
            "Position",
            "Day",
            "Time",
            "Playlist Name",
            "Song Name",
            "Artist",
            "Album",
        ]))
        .unwrap();
        assert_eq!(cols.day, 1);
        assert_eq!(cols.playlist_name, 3);
        assert_eq!(cols.artist, 5);
    }

    #[test]
    fn test_columns_missing_column() {
        let result = Columns::from_headers(&headers(&["Day", "Time", "Song Name", "Artist"]));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("required column 'Playlist Name'"));
    }

    #[test]
    fn test_slot_display() {
        let slot = PlaylistSlot {
            day: "Monday".to_string(),
            time: "9:00 – 10:30am".to_string(),
            playlist_name: "The Awakening".to_string(),
        };
        assert_eq!(slot.to_string(), "Monday 9:00 – 10:30am - The Awakening");
    }

    #[test]
    fn test_gap_report_preserves_entry_order() {
        let entry = |name: &str| GapEntry {
            day: "Monday".to_string(),
            time: "9:00 – 10:30am".to_string(),
            playlist_name: name.to_string(),
            current_count: 5,
            target_count: 30,
            needed: 25,
            seed_idea: "Unknown".to_string(),
            reference_track_ids: Vec::new(),
        };
        let report = GapReport {
            entries: vec![
                ("Zulu_slot".to_string(), entry("Zulu")),
                ("Alpha_slot".to_string(), entry("Alpha")),
            ],
        };

        let json = serde_json::to_string(&report).unwrap();
        let zulu = json.find("Zulu_slot").unwrap();
        let alpha = json.find("Alpha_slot").unwrap();
        assert!(zulu < alpha);
    }
}
