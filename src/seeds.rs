//! Static seed-idea table for the scheduled playlist slots.
//!
//! Each slot has a human-authored description and keyword set expressing its
//! intended mood. Used only for reporting; the priority resolver does not
//! consult it.

use once_cell::sync::Lazy;

use crate::models::PlaylistSlot;

/// Seed idea for one slot.
#[derive(Clone, Copy, Debug)]
pub struct SeedIdea {
    pub day: &'static str,
    pub time: &'static str,
    pub playlist_name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub static SEED_IDEAS: Lazy<Vec<SeedIdea>> = Lazy::new(|| {
    vec![
        SeedIdea {
            day: "Monday",
            time: "9:00 – 10:30am",
            playlist_name: "The Awakening",
            description: "Photosynthesis - Gentle, organic growth",
            keywords: &["acoustic", "organic", "gentle", "woodwind", "guitar"],
        },
        SeedIdea {
            day: "Monday",
            time: "10:30am – Noon",
            playlist_name: "The Forest Path",
            description: "Steady Growth - Repetitive, organic patterns",
            keywords: &["organic", "repetitive", "steady", "nature"],
        },
        SeedIdea {
            day: "Monday",
            time: "Noon – 2:00pm",
            playlist_name: "The Village Green",
            description: "Communal Warmth - Sunny, optimistic community",
            keywords: &["indie", "folk", "pop", "sunny", "upbeat"],
        },
        SeedIdea {
            day: "Monday",
            time: "2:00 – 5:00pm",
            playlist_name: "The Long Drive",
            description: "Momentum into Expansion - Motorik beats, cinematic",
            keywords: &["motorik", "driving", "electronic", "expansive", "cinematic"],
        },
        SeedIdea {
            day: "Tuesday",
            time: "9:00 – 10:30am",
            playlist_name: "The Observatory",
            description: "The Blank Canvas - Vast, atmospheric, serious",
            keywords: &["ambient", "atmospheric", "post-rock", "cinematic"],
        },
        SeedIdea {
            day: "Tuesday",
            time: "10:30am – Noon",
            playlist_name: "The Strategy",
            description: "Complex Systems - Jazz-fusion, intricate electronics",
            keywords: &["jazz", "fusion", "complex", "electronic", "intricate"],
        },
        SeedIdea {
            day: "Tuesday",
            time: "Noon – 2:00pm",
            playlist_name: "The Global Bazaar",
            description: "Intersection of Culture - Rhythmic, worldly",
            keywords: &["world", "rhythmic", "global", "cultural", "international"],
        },
        SeedIdea {
            day: "Tuesday",
            time: "2:00 – 5:00pm",
            playlist_name: "The Collaboratory",
            description: "The Engine Room - Driving funk, Afrobeat, precision electronics",
            keywords: &["funk", "afrobeat", "electronic", "driving", "energetic"],
        },
        SeedIdea {
            day: "Friday",
            time: "Noon – 2:00pm",
            playlist_name: "The Rooftop",
            description: "Sunshine & Grooves - Nu-Disco, vocal-heavy, funky",
            keywords: &["nu-disco", "electronic", "vocal", "funky", "melodic house"],
        },
        SeedIdea {
            day: "Saturday",
            time: "Noon – 2:00pm",
            playlist_name: "The Global Bazaar",
            description: "The Source - Traditional instruments, NO electronics",
            keywords: &["traditional", "acoustic", "world", "flamenco", "son cubano", "kora"],
        },
    ]
});

/// Seed description for a slot, if one is defined.
pub fn seed_description(slot: &PlaylistSlot) -> Option<&'static str> {
    SEED_IDEAS
        .iter()
        .find(|seed| {
            seed.day == slot.day
                && seed.time == slot.time
                && seed.playlist_name == slot.playlist_name
        })
        .map(|seed| seed.description)
}
