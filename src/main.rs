use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use playlist_dedupe::{dedupe, gaps, io, progress, safety};

#[derive(Parser)]
#[command(name = "playlist-dedupe")]
#[command(about = "Remove duplicate tracks from a master playlist index and report slot gaps")]
struct Args {
    /// Master playlist index CSV
    #[arg(long, default_value = "master_playlist_index.csv")]
    input: PathBuf,

    /// Cleaned index CSV
    #[arg(long, default_value = "master_playlist_index_cleaned.csv")]
    output: PathBuf,

    /// Gap report JSON (slots needing additional tracks)
    #[arg(long, default_value = "tracks_needed.json")]
    gap_report: PathBuf,

    /// Removal detail JSON
    #[arg(long, default_value = "duplicate_removal_report.json")]
    removal_report: PathBuf,

    /// Hide progress bars for tail-friendly output
    #[arg(long)]
    log_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    progress::set_log_only(args.log_only);

    let start = Instant::now();

    safety::validate_cleaned_path(&args.output, &args.input)?;

    let index = io::read_index(&args.input)?;

    let duplicates = dedupe::identify_duplicates(&index.records, &index.columns);
    println!("Found {} duplicate songs", duplicates.len());

    let (cleaned, removal_report) = dedupe::clean_index(&index.records, &index.columns);
    println!(
        "Removed {} tracks ({} duplicate songs, {} from Friday Noon)",
        removal_report.total_removed,
        removal_report.duplicates_removed.len(),
        removal_report.friday_noon_removed.len()
    );

    io::write_cleaned(&args.output, &index.headers, &cleaned)?;

    let gap_report = gaps::analyze_gaps(&cleaned, &index.columns);
    println!("{} slots need additional tracks", gap_report.len());

    println!("Writing gap report: {}", args.gap_report.display());
    gap_report
        .write_to_file(&args.gap_report)
        .with_context(|| format!("failed to write gap report '{}'", args.gap_report.display()))?;
    println!("Writing removal report: {}", args.removal_report.display());
    removal_report
        .write_to_file(&args.removal_report)
        .with_context(|| {
            format!(
                "failed to write removal report '{}'",
                args.removal_report.display()
            )
        })?;

    let elapsed = start.elapsed();

    println!("\n{:=<60}", "");
    println!("Cleanup complete!");
    println!("  Original tracks: {}", index.records.len());
    println!("  Cleaned tracks:  {}", cleaned.len());
    println!("  Tracks removed:  {}", removal_report.total_removed);
    println!("  Slots with gaps: {}", gap_report.len());
    println!("  Elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("{:=<60}", "");

    if !gap_report.is_empty() {
        println!("\nSlots needing additional tracks:");
        for (_, entry) in &gap_report.entries {
            println!(
                "  {} {} - {}: {} tracks, need {} more",
                entry.day, entry.time, entry.playlist_name, entry.current_count, entry.needed
            );
        }
    }

    Ok(())
}
