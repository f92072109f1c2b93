//! Verify a cleaned playlist index upholds the cleanup invariants.
//!
//! Usage: verify-cleaned <cleaned.csv>
//!
//! Checks that no (song, artist) pair survives in more than one slot, not
//! counting the Rooftop copy the content filter keeps for electronic tracks,
//! and that the Friday Noon Rooftop slot contains no traditional world music.
//! Exits non-zero when violations are found.

use anyhow::Result;

use playlist_dedupe::{dedupe, filter, io};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: verify-cleaned <cleaned.csv>");
        std::process::exit(1);
    }
    let path = std::path::Path::new(&args[1]);

    let index = io::read_index(path)?;
    println!(
        "Checking {} tracks from {}",
        index.records.len(),
        path.display()
    );

    // A pair split across slots means the duplicate resolution missed it.
    // Extra copies inside a single slot are not a violation, and neither is
    // the Rooftop copy kept for an electronic track.
    let cross_slot = dedupe::cross_slot_duplicates(&index.records, &index.columns);

    let mut rooftop_traditional = Vec::new();
    for record in &index.records {
        if filter::is_rooftop_slot(record, &index.columns)
            && filter::is_traditional_world_music(record.artist(&index.columns))
        {
            rooftop_traditional.push((
                record.song_name(&index.columns).to_string(),
                record.artist(&index.columns).to_string(),
            ));
        }
    }

    if !cross_slot.is_empty() {
        println!("\nPairs surviving in more than one slot:");
        println!("{:-<72}", "");
        for ((song, artist), slots) in &cross_slot {
            let slot_list: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
            println!("{:<32} {:<24} {}", song, artist, slot_list.join(", "));
        }
    }

    if !rooftop_traditional.is_empty() {
        println!("\nTraditional world music still in the Rooftop slot:");
        println!("{:-<72}", "");
        for (song, artist) in &rooftop_traditional {
            println!("{:<32} {}", song, artist);
        }
    }

    let violations = cross_slot.len() + rooftop_traditional.len();

    println!("\n{:=<60}", "");
    println!("Tracks checked:      {}", index.records.len());
    println!("Cross-slot pairs:    {}", cross_slot.len());
    println!("Rooftop traditional: {}", rooftop_traditional.len());
    println!("{:=<60}", "");

    if violations > 0 {
        println!("FAILED: {} invariant violations", violations);
        std::process::exit(1);
    }

    println!("OK: index is clean");
    Ok(())
}
