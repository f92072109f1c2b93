//! Gap analysis for under-filled playlist slots.

use rustc_hash::FxHashMap;

use crate::models::{Columns, GapEntry, GapReport, PlaylistSlot, TrackRecord};
use crate::seeds;

/// A slot below this count is reported as under-filled.
pub const MIN_TRACKS: usize = 20;

/// Fill target used to size the deficit.
pub const TARGET_TRACKS: usize = 30;

/// Report key for one slot: spaces become underscores, the en-dash becomes
/// "to", colons are dropped.
pub fn sanitize_slot_id(slot: &PlaylistSlot) -> String {
    format!("{}_{}_{}", slot.day, slot.time, slot.playlist_name)
        .replace(' ', "_")
        .replace('–', "to")
        .replace(':', "")
}

/// Group surviving records by slot and report every slot holding fewer than
/// [`MIN_TRACKS`] tracks. Slots at or above the minimum are omitted entirely.
/// Entries keep slot first-appearance order.
pub fn analyze_gaps(records: &[TrackRecord], cols: &Columns) -> GapReport {
    let mut counts: FxHashMap<PlaylistSlot, usize> = FxHashMap::default();
    let mut order: Vec<PlaylistSlot> = Vec::new();

    for record in records {
        let slot = record.slot(cols);
        *counts
            .entry(slot.clone())
            .or_insert_with(|| {
                order.push(slot);
                0
            }) += 1;
    }

    let mut report = GapReport::default();
    for slot in order {
        let current_count = counts.get(&slot).copied().unwrap_or(0);
        if current_count >= MIN_TRACKS {
            continue;
        }
        let seed_idea = seeds::seed_description(&slot).unwrap_or("Unknown").to_string();
        report.entries.push((
            sanitize_slot_id(&slot),
            GapEntry {
                day: slot.day,
                time: slot.time,
                playlist_name: slot.playlist_name,
                current_count,
                target_count: TARGET_TRACKS,
                needed: TARGET_TRACKS - current_count,
                seed_idea,
                reference_track_ids: Vec::new(),
            },
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_columns() -> Columns {
        Columns {
            day: 0,
            time: 1,
            playlist_name: 2,
            song_name: 3,
            artist: 4,
        }
    }

    fn record(day: &str, time: &str, playlist: &str, song: &str) -> TrackRecord {
        TrackRecord::new(vec![
            day.to_string(),
            time.to_string(),
            playlist.to_string(),
            song.to_string(),
            "Artist".to_string(),
        ])
    }

    fn slot(day: &str, time: &str, playlist_name: &str) -> PlaylistSlot {
        PlaylistSlot {
            day: day.to_string(),
            time: time.to_string(),
            playlist_name: playlist_name.to_string(),
        }
    }

    #[test]
    fn test_sanitize_slot_id() {
        assert_eq!(
            sanitize_slot_id(&slot("Friday", "Noon – 2:00pm", "The Rooftop")),
            "Friday_Noon_to_200pm_The_Rooftop"
        );
        assert_eq!(
            sanitize_slot_id(&slot("Monday", "9:00 – 10:30am", "The Awakening")),
            "Monday_900_to_1030am_The_Awakening"
        );
    }

    #[test]
    fn test_gap_reported_below_minimum() {
        let cols = test_columns();
        let records: Vec<TrackRecord> = (0..19)
            .map(|i| {
                record(
                    "Monday",
                    "9:00 – 10:30am",
                    "The Awakening",
                    &format!("Song {i}"),
                )
            })
            .collect();

        let report = analyze_gaps(&records, &cols);
        assert_eq!(report.len(), 1);

        let (slot_id, entry) = &report.entries[0];
        assert_eq!(slot_id, "Monday_900_to_1030am_The_Awakening");
        assert_eq!(entry.current_count, 19);
        assert_eq!(entry.target_count, 30);
        assert_eq!(entry.needed, 11);
        assert_eq!(entry.seed_idea, "Photosynthesis - Gentle, organic growth");
        assert!(entry.reference_track_ids.is_empty());
    }

    #[test]
    fn test_slot_at_minimum_is_omitted() {
        let cols = test_columns();
        let records: Vec<TrackRecord> = (0..20)
            .map(|i| {
                record(
                    "Monday",
                    "9:00 – 10:30am",
                    "The Awakening",
                    &format!("Song {i}"),
                )
            })
            .collect();

        let report = analyze_gaps(&records, &cols);
        assert!(report.is_empty());
    }

    #[test]
    fn test_unscheduled_slot_reports_unknown_seed() {
        let cols = test_columns();
        let records = vec![record("Wednesday", "Noon – 2:00pm", "The Test", "Song")];

        let report = analyze_gaps(&records, &cols);
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].1.seed_idea, "Unknown");
        assert_eq!(report.entries[0].1.needed, 29);
    }

    #[test]
    fn test_entries_keep_first_appearance_order() {
        let cols = test_columns();
        let records = vec![
            record("Saturday", "Noon – 2:00pm", "The Global Bazaar", "S1"),
            record("Monday", "9:00 – 10:30am", "The Awakening", "S2"),
            record("Saturday", "Noon – 2:00pm", "The Global Bazaar", "S3"),
        ];

        let report = analyze_gaps(&records, &cols);
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.entries[0].0,
            "Saturday_Noon_to_200pm_The_Global_Bazaar"
        );
        assert_eq!(report.entries[1].0, "Monday_900_to_1030am_The_Awakening");
        assert_eq!(report.entries[0].1.current_count, 2);
    }
}
