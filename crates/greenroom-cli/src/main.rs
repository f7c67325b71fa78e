//! `greenroom` CLI — overlap reports and room distributions for a show roster.
//!
//! ## Usage
//!
//! ```sh
//! # List every act in the membership table
//! greenroom -m roles.csv -t times.csv acts
//!
//! # Who is available when
//! greenroom -m roles.csv -t times.csv availability
//!
//! # Cross-reference three acts for double-booked performers
//! greenroom -m roles.csv -t times.csv crossref Intro Song Dance
//!
//! # Which pairs of acts can run in two rooms at once
//! greenroom -m roles.csv -t times.csv distribute Intro Song Dance --rooms 2
//!
//! # Machine-readable output
//! greenroom -m roles.csv -t times.csv crossref Intro Song --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use greenroom_core::{
    classify_all, crossref, optimal_distribution, unavailable_slots, Category, Distribution,
    LoaderOptions, OverlapRow, Roster, Unavailability,
};

#[derive(Parser)]
#[command(
    name = "greenroom",
    version,
    about = "Conflict detection and room assignment for multi-act live shows"
)]
struct Cli {
    /// Membership CSV: acts as rows, participants as columns
    #[arg(short = 'm', long)]
    membership: PathBuf,

    /// Times CSV: slots as rows, participants as columns, marks = unavailable
    #[arg(short = 't', long)]
    times: PathBuf,

    /// Use at most this many acts from the membership table
    #[arg(long)]
    max_acts: Option<usize>,

    /// Use at most this many participant columns from the membership table
    #[arg(long)]
    max_participants: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all acts
    Acts {
        /// Also list each act's cast
        #[arg(short, long)]
        verbose: bool,
    },
    /// List all participants
    Participants {
        /// Only participants who appear in at least one act
        #[arg(long)]
        performers: bool,
    },
    /// Show the availability partition for the day
    Availability {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Cross-reference acts for participant overlap
    Crossref {
        /// Act names to cross-reference
        #[arg(required = true)]
        acts: Vec<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Find act combinations that can run in parallel without a clash
    Distribute {
        /// Candidate act names
        #[arg(required = true)]
        acts: Vec<String>,
        /// Number of rooms available
        #[arg(short, long)]
        rooms: usize,
        /// Emit JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = LoaderOptions {
        max_acts: cli.max_acts,
        max_participants: cli.max_participants,
    };
    let roster = greenroom_core::load_roster(&cli.membership, &cli.times, &options)
        .with_context(|| {
            format!(
                "Failed to load tables from {} and {}",
                cli.membership.display(),
                cli.times.display()
            )
        })?;

    match cli.command {
        Commands::Acts { verbose } => {
            for act in roster.acts() {
                if verbose {
                    let cast = roster
                        .participants_of(act)
                        .context("act came from the roster itself")?;
                    println!("{}: {}", act, cast.join(", "));
                } else {
                    println!("{}", act);
                }
            }
        }
        Commands::Participants { performers } => {
            for participant in roster.all_participants(performers) {
                println!("{}", participant);
            }
        }
        Commands::Availability { json } => {
            let partition = classify_all(&roster);
            if json {
                println!("{}", serde_json::to_string_pretty(&partition)?);
            } else {
                print_availability(&roster)?;
            }
        }
        Commands::Crossref { acts, json } => {
            let rows = crossref(&roster, &acts).context("Cross-reference failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_crossref(&rows);
            }
        }
        Commands::Distribute { acts, rooms, json } => {
            let result = optimal_distribution(&roster, &acts, rooms)
                .context("Distribution search failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_distribution(&result);
            }
        }
    }

    Ok(())
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::FullyAvailable => "fully available",
        Category::PartlyAvailable => "partly available",
        Category::FullyBooked => "fully booked",
    }
}

/// Print one line per participant: category, then unavailable slots (with
/// the fully-booked sentinel spelled out instead of the whole slot list).
fn print_availability(roster: &Roster) -> Result<()> {
    let participants = roster.all_participants(false);
    let width = participants
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    for participant in participants {
        let category = greenroom_core::category(roster, participant)
            .context("participant came from the roster itself")?;
        let detail = match unavailable_slots(roster, participant)
            .context("participant came from the roster itself")?
        {
            Unavailability::FullyBooked => "booked all day".to_string(),
            Unavailability::Slots(slots) if slots.is_empty() => String::new(),
            Unavailability::Slots(slots) => format!("away {}", slots.join(", ")),
        };
        println!(
            "{:width$}  {:16} {}",
            participant,
            category_label(category),
            detail,
            width = width
        );
    }

    Ok(())
}

fn print_crossref(rows: &[OverlapRow]) {
    let width = rows
        .iter()
        .map(|row| row.participant.len())
        .max()
        .unwrap_or(0)
        .max("participant".len());

    println!("{:width$}  bookings  availability      clashing acts", "participant", width = width);
    for row in rows {
        println!(
            "{:width$}  {:<8}  {:16}  {}",
            row.participant,
            row.bookings,
            category_label(row.availability),
            row.clashing_acts.join(", "),
            width = width
        );
    }
}

fn print_distribution(result: &Distribution) {
    match result {
        Distribution::Valid(combos) => {
            for combo in combos {
                println!("{}", combo.join(" + "));
            }
        }
        Distribution::NoGoodCombination => println!("No good combinations"),
    }
}
