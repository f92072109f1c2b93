//! Duplicate identification and priority resolution.
//!
//! Tracks are duplicated when the same (Song Name, Artist) pair appears in
//! more than one row. Each duplicate group keeps exactly one occurrence,
//! chosen by schedule priority; the cleanup pass also applies the Friday
//! Noon Rooftop content filter, which takes precedence over the generic
//! duplicate check inside that slot.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::filter;
use crate::models::{
    Columns, DedupeKey, DuplicateRemoval, FridayNoonRemoval, PlaylistSlot, RemovalReport,
    TrackRecord,
};

// ============================================================================
// Schedule Priority
// ============================================================================

/// Rank for days and time bands absent from the priority tables.
pub const UNKNOWN_RANK: u32 = 99;

/// Day rank, Monday earliest. Lower is better.
pub static DAY_PRIORITY: Lazy<FxHashMap<&'static str, u32>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("Monday", 1);
    m.insert("Tuesday", 2);
    m.insert("Wednesday", 3);
    m.insert("Thursday", 4);
    m.insert("Friday", 5);
    m.insert("Saturday", 6);
    m
});

/// Time-band rank, earliest first. Lower is better.
pub static TIME_PRIORITY: Lazy<FxHashMap<&'static str, u32>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("9:00 – 10:30am", 1);
    m.insert("10:00am – Noon", 2);
    m.insert("10:30am – Noon", 3);
    m.insert("Noon – 2:00pm", 4);
    m.insert("2:00 – 5:00pm", 5);
    m
});

/// Schedule priority for one occurrence, compared lexicographically.
/// Unknown days or time bands sort last.
pub fn slot_priority(record: &TrackRecord, cols: &Columns) -> (u32, u32) {
    let day = DAY_PRIORITY
        .get(record.day(cols))
        .copied()
        .unwrap_or(UNKNOWN_RANK);
    let time = TIME_PRIORITY
        .get(record.time(cols))
        .copied()
        .unwrap_or(UNKNOWN_RANK);
    (day, time)
}

// ============================================================================
// Duplicate Identification
// ============================================================================

/// Group record indices by (Song Name, Artist), keeping only groups with more
/// than one member. Groups come back in first-appearance order; indices
/// within a group preserve input order.
pub fn identify_duplicates(
    records: &[TrackRecord],
    cols: &Columns,
) -> Vec<(DedupeKey, Vec<usize>)> {
    let mut groups: FxHashMap<DedupeKey, Vec<usize>> = FxHashMap::default();
    let mut order: Vec<DedupeKey> = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let key = record.dedupe_key(cols);
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(idx);
    }

    let mut duplicates = Vec::new();
    for key in order {
        if let Some(occurrences) = groups.remove(&key) {
            if occurrences.len() > 1 {
                duplicates.push((key, occurrences));
            }
        }
    }
    duplicates
}

// ============================================================================
// Priority Resolution
// ============================================================================

/// Pick the occurrence to keep from one duplicate group.
/// Smallest (day, time) rank wins; the scan replaces the best only on a
/// strictly smaller rank, so ties keep the earliest input occurrence.
pub fn best_occurrence(
    records: &[TrackRecord],
    occurrences: &[usize],
    cols: &Columns,
) -> Option<usize> {
    let (&first, rest) = occurrences.split_first()?;
    let mut best = first;
    let mut best_rank = slot_priority(&records[best], cols);
    for &idx in rest {
        let rank = slot_priority(&records[idx], cols);
        if rank < best_rank {
            best = idx;
            best_rank = rank;
        }
    }
    Some(best)
}

// ============================================================================
// Cleanup Pass
// ============================================================================

/// Remove duplicate occurrences and apply the Rooftop content filter in a
/// single pass over the records. Returns the surviving records and the
/// removal report.
///
/// Inside the Rooftop slot the filter runs before the duplicate check:
/// traditional world music drops even when it is the kept occurrence, and
/// electronic tracks stay even when their duplicate resolved elsewhere.
pub fn clean_index(records: &[TrackRecord], cols: &Columns) -> (Vec<TrackRecord>, RemovalReport) {
    let mut report = RemovalReport::default();

    let mut kept_slots: FxHashMap<DedupeKey, PlaylistSlot> = FxHashMap::default();
    for (key, occurrences) in identify_duplicates(records, cols) {
        let best_idx = match best_occurrence(records, &occurrences, cols) {
            Some(idx) => idx,
            None => continue,
        };
        let kept_slot = records[best_idx].slot(cols);
        let removed_from: Vec<String> = occurrences
            .iter()
            .map(|&idx| records[idx].slot(cols))
            .filter(|slot| *slot != kept_slot)
            .map(|slot| slot.to_string())
            .collect();
        report.duplicates_removed.push(DuplicateRemoval {
            song: key.0.clone(),
            artist: key.1.clone(),
            kept_in: kept_slot.to_string(),
            removed_from,
        });
        kept_slots.insert(key, kept_slot);
    }

    let mut cleaned: Vec<TrackRecord> = Vec::with_capacity(records.len());
    for record in records {
        if filter::is_rooftop_slot(record, cols) {
            if filter::is_traditional_world_music(record.artist(cols)) {
                report.friday_noon_removed.push(FridayNoonRemoval {
                    song: record.song_name(cols).to_string(),
                    artist: record.artist(cols).to_string(),
                    reason: filter::TRADITIONAL_REMOVAL_REASON.to_string(),
                });
                continue;
            }
            if filter::is_electronic_melodic_house(record.artist(cols)) {
                cleaned.push(record.clone());
                continue;
            }
        }

        let keep = match kept_slots.get(&record.dedupe_key(cols)) {
            Some(kept_slot) => record.slot(cols) == *kept_slot,
            None => true,
        };
        if keep {
            cleaned.push(record.clone());
        }
    }

    report.total_removed = records.len() - cleaned.len();
    (cleaned, report)
}

// ============================================================================
// Invariant Checks
// ============================================================================

/// Duplicate groups whose occurrences span more than one slot, with each
/// group's distinct slots in first-appearance order.
///
/// The content filter keeps Rooftop copies of electronic tracks even when
/// their duplicate resolved elsewhere, so those occurrences do not count
/// toward the spread.
pub fn cross_slot_duplicates(
    records: &[TrackRecord],
    cols: &Columns,
) -> Vec<(DedupeKey, Vec<PlaylistSlot>)> {
    let mut spread = Vec::new();
    for (key, occurrences) in identify_duplicates(records, cols) {
        let electronic = filter::is_electronic_melodic_house(&key.1);
        let mut slots: Vec<PlaylistSlot> = Vec::new();
        for &idx in &occurrences {
            let record = &records[idx];
            if electronic && filter::is_rooftop_slot(record, cols) {
                continue;
            }
            let slot = record.slot(cols);
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
        if slots.len() > 1 {
            spread.push((key, slots));
        }
    }
    spread
}
