//! `slotcast` CLI — turn a schedule TSV into static per-timezone free-time
//! pages.
//!
//! ## Usage
//!
//! ```sh
//! # Validate the schedule without writing anything
//! slotcast check --schedule schedule.tsv
//!
//! # Print the timezone catalog for today
//! slotcast zones
//!
//! # Generate the index, one page per timezone, and the upload manifest
//! slotcast generate --schedule schedule.tsv --out-dir web --manifest web/manifest.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};

use slotcast_engine::schedule::{self, TIMESTAMP_FORMAT};
use slotcast_engine::{
    build_catalog, free_slots, group_by_day, home_zone, project, render, UploadManifest,
};

#[derive(Parser)]
#[command(
    name = "slotcast",
    version,
    about = "Publish per-timezone free-time listings from a schedule file"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static pages and, optionally, the upload manifest
    Generate {
        /// Schedule TSV file
        #[arg(short, long)]
        schedule: PathBuf,
        /// Directory the pages are written into
        #[arg(short, long, default_value = "web")]
        out_dir: PathBuf,
        /// Also write the upload manifest as JSON to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Evaluate the schedule as of this instant instead of the current
        /// time (YYYY/MM/DD HH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },
    /// Print the timezone catalog
    Zones {
        /// Build the catalog as of this instant (YYYY/MM/DD HH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },
    /// Validate the schedule and report busy/free counts
    Check {
        /// Schedule TSV file
        #[arg(short, long)]
        schedule: PathBuf,
        /// Evaluate the schedule as of this instant (YYYY/MM/DD HH:MM:SS)
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            schedule,
            out_dir,
            manifest,
            now,
        } => generate(
            &schedule,
            &out_dir,
            manifest.as_deref(),
            resolve_now(now.as_deref())?,
        ),
        Commands::Zones { now } => {
            zones(resolve_now(now.as_deref())?);
            Ok(())
        }
        Commands::Check { schedule, now } => check(&schedule, resolve_now(now.as_deref())?),
    }
}

fn resolve_now(arg: Option<&str>) -> Result<NaiveDateTime> {
    match arg {
        Some(raw) => NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .with_context(|| format!("Failed to parse --now value: {raw}")),
        None => Ok(Local::now().naive_local()),
    }
}

fn generate(
    schedule_path: &Path,
    out_dir: &Path,
    manifest_path: Option<&Path>,
    now: NaiveDateTime,
) -> Result<()> {
    let raw = fs::read_to_string(schedule_path)
        .with_context(|| format!("Failed to read schedule file: {}", schedule_path.display()))?;
    let parsed = schedule::parse_schedule(&raw).context("Failed to parse schedule")?;
    let markers =
        schedule::build_markers(&parsed.appointments).context("Schedule data is inconsistent")?;
    let slots = free_slots(&markers, now).context("Failed to compute free slots")?;

    let home = home_zone(now);
    let catalog = build_catalog(now);

    // Every page is computed before the first file is written, so a corrupt
    // schedule never leaves a half-updated page set behind.
    let mut pages: Vec<(PathBuf, String)> = Vec::new();
    pages.push((
        out_dir.join("index.html"),
        render::render_index(&home, &catalog),
    ));
    for zone in catalog.values() {
        let local = project(&slots, home.offset, zone.offset);
        let days = group_by_day(&local);
        let written = parsed
            .written
            .map(|w| w + zone.offset.shift_from(home.offset));
        pages.push((
            out_dir.join(format!("{}.html", zone.file_id)),
            render::render_zone_page(zone, &days, written),
        ));
    }
    pages.push((out_dir.join("styles.css"), render::STYLESHEET.to_string()));

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    for (path, contents) in &pages {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
    }
    println!("Wrote {} files to {}", pages.len(), out_dir.display());

    if let Some(path) = manifest_path {
        let manifest = UploadManifest::for_run(out_dir, &catalog);
        let json = manifest.to_json().context("Failed to serialize manifest")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        println!("Wrote manifest {}", path.display());
    }

    Ok(())
}

fn zones(now: NaiveDateTime) {
    let catalog = build_catalog(now);
    println!("{:10} {:10} {:10} {}", "UTC", "FILE", "ABBREV", "NAME");
    for zone in catalog.values() {
        println!(
            "{:10} {:10} {:10} {}",
            zone.offset.utc_string(),
            zone.file_id,
            zone.abbrev,
            zone.name
        );
    }
}

fn check(schedule_path: &Path, now: NaiveDateTime) -> Result<()> {
    let raw = fs::read_to_string(schedule_path)
        .with_context(|| format!("Failed to read schedule file: {}", schedule_path.display()))?;
    let parsed = schedule::parse_schedule(&raw)?;
    let markers = schedule::build_markers(&parsed.appointments)?;
    let busy = schedule::busy_intervals(&markers)?;
    let slots = free_slots(&markers, now)?;

    println!(
        "Schedule OK: {} busy intervals, {} upcoming free slots",
        busy.len(),
        slots.len()
    );
    if let Some(written) = parsed.written {
        println!("Last updated {}", written.format("%b %d, %Y at %I:%M %p"));
    }
    Ok(())
}
