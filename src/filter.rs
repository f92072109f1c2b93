//! Content filter for the Friday Noon Rooftop slot.
//!
//! The Rooftop slot is seeded Nu-Disco. Two fixed artist lists classify its
//! records: traditional world music is dropped, electronic melodic house is
//! kept. Matching is case-sensitive substring containment of the list name
//! inside the Artist field, so fields with featured-artist suffixes still
//! match. Artists on neither list fall through to ordinary duplicate
//! handling.

use once_cell::sync::Lazy;

use crate::models::{Columns, TrackRecord};

/// The slot the filter applies to.
pub const ROOFTOP_DAY: &str = "Friday";
pub const ROOFTOP_TIME: &str = "Noon – 2:00pm";
pub const ROOFTOP_PLAYLIST: &str = "The Rooftop";

/// Reason recorded for every traditional-world-music removal.
pub const TRADITIONAL_REMOVAL_REASON: &str =
    "Traditional world music - doesn't fit Nu-Disco seed idea";

/// Artists known for traditional acoustic world music.
pub static TRADITIONAL_ARTISTS: Lazy<Vec<&str>> = Lazy::new(|| {
    vec![
        "Cesária Evora", "Buena Vista Social Club", "Ali Farka Touré",
        "Toumani Diabaté", "Rodrigo y Gabriela", "Pink Martini",
        "Oumou Sangaré", "Souad Massi", "Yasmin Levy", "Gipsy Kings",
        "Paco de Lucía", "Fatoumata Diawara", "Blick Bassy",
        "Gurrumul", "Lila Downs", "Natalia Lafourcade",
        "Gaby Moreno", "Ibrahim Ferrer", "Vicente Amigo",
        "Ballaké Sissoko", "Orchestra Baobab",
    ]
});

/// Artists known for electronic, melodic house, and nu-disco.
pub static ELECTRONIC_ARTISTS: Lazy<Vec<&str>> = Lazy::new(|| {
    vec![
        "Acid Pauli", "Bedouin", "Be Svendsen", "Viken Arman",
        "Satori", "Sofi Tukker", "Monolink", "Jan Blomqvist",
        "Bob Moses", "WhoMadeWho", "RÜFÜS DU SOL", "Vintage Culture",
        "John Summit",
    ]
});

pub fn is_rooftop_slot(record: &TrackRecord, cols: &Columns) -> bool {
    record.day(cols) == ROOFTOP_DAY
        && record.time(cols) == ROOFTOP_TIME
        && record.playlist_name(cols) == ROOFTOP_PLAYLIST
}

pub fn is_traditional_world_music(artist: &str) -> bool {
    TRADITIONAL_ARTISTS.iter().any(|&name| artist.contains(name))
}

pub fn is_electronic_melodic_house(artist: &str) -> bool {
    ELECTRONIC_ARTISTS.iter().any(|&name| artist.contains(name))
}
