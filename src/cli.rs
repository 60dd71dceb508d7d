// src/cli.rs
//! Terminal frontend: one subcommand per user action.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{FetchOptions, StoreOptions};
use crate::config::consts::DEFAULT_POPULATION_FILE;
use crate::csv::population_to_csv;
use crate::data::{ManualFields, PopulationRecord};
use crate::error::Error;
use crate::file;
use crate::report::Report;
use crate::runner::{Runner, fetch_reported};
use crate::store::{MongoConnector, MongoStore, UpsertOutcome};

#[derive(Parser)]
#[command(author, version, about = "Spanish movies: simple random sampler and Data-Set curation", long_about = None)]
pub struct Cli {
    /// Log file (defaults to .store/debug.log)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch Year, rating, votes and runtime from a title page
    Fetch { url: String },
    #[command(flatten)]
    Store(StoreCommand),
}

/// Everything that needs the database.
#[derive(Subcommand)]
enum StoreCommand {
    /// Check that the database answers a ping
    Ping,
    /// Print the population sorted by ID (or export it as CSV)
    List {
        #[arg(long)]
        csv: Option<String>,
    },
    /// How many movies are left in the population
    Count,
    /// Preview a random sample; nothing is deleted
    Sample {
        k: usize,
        #[arg(long)]
        csv: Option<String>,
    },
    /// Draw a random sample and permanently delete it from the population
    DrawDelete {
        k: usize,
        /// I understand and want to proceed
        #[arg(long)]
        yes: bool,
    },
    /// Delete one movie from the population by ID
    Delete { id: i64 },
    /// Save a movie to the Data-Set collection (fetched fields + manual fields)
    Save {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, default_value = "")]
        movie: String,
        /// Comma-separated, e.g. "drama, thriller"
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value = "")]
        director: String,
        #[arg(long, default_value = "")]
        writer: String,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long, default_value_t = 0)]
        gross: i64,
        /// Store only the manual fields; do not fetch the URL
        #[arg(long)]
        no_fetch: bool,
    },
    /// Print the Data-Set collection as JSON lines
    Show,
}

/// Prints to the terminal: status on stdout, failures on stderr.
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn info(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn failure(&mut self, op: &str, err: &Error) {
        if err.is_unavailable() {
            eprintln!("Could not reach the database ({op}): {err}");
        } else {
            eprintln!("{op} failed: {err}");
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.log.as_deref())?;

    match cli.command {
        // Fetching alone does not need the database.
        Command::Fetch { url } => {
            if let Some(fields) = fetch_reported(&url, &FetchOptions::default(), &mut ConsoleReport) {
                println!("{}", serde_json::to_string_pretty(&fields)?);
            }
            Ok(())
        }
        Command::Store(command) => {
            let options = StoreOptions::from_env()?;
            let mut runner = Runner::new(MongoStore::open(options), ConsoleReport);
            dispatch(&mut runner, command)
        }
    }
}

fn dispatch(runner: &mut Runner<MongoConnector, ConsoleReport>, command: StoreCommand) -> color_eyre::Result<()> {
    match command {
        StoreCommand::Ping => {
            runner.ping();
        }
        StoreCommand::List { csv } => {
            let rows = runner.list_population();
            match csv {
                Some(out) => {
                    let path = file::resolve_out_path(&out, DEFAULT_POPULATION_FILE)?;
                    let written = file::write_export(&path, &population_to_csv(&rows))?;
                    println!("Wrote {} ({} movies)", written.display(), rows.len());
                }
                None => print_records(&rows),
            }
        }
        StoreCommand::Count => {
            println!("Movies currently in population: {}", runner.list_population().len());
        }
        StoreCommand::Sample { k, csv } => {
            if runner.available(k).is_none() {
                return Ok(());
            }
            let rows = runner.sample_random(k);
            if rows.is_empty() {
                println!("Sample came back empty.");
                return Ok(());
            }
            print_records(&rows);
            if let Some(out) = csv {
                let path = file::resolve_out_path(&out, &file::sample_filename(k))?;
                let written = file::write_export(&path, &population_to_csv(&rows))?;
                println!("Wrote {}", written.display());
            }
        }
        StoreCommand::DrawDelete { k, yes } => {
            if runner.available(k).is_none() {
                return Ok(());
            }
            let out = runner.draw_and_delete(k, |picked| {
                print_records(picked);
                yes
            });
            if !out.confirmed && !out.sampled.is_empty() {
                println!("Nothing deleted. Re-run with --yes to delete these {} movies.", out.sampled.len());
            }
        }
        StoreCommand::Delete { id } => {
            let n = runner.delete_by_id(id);
            println!("Deleted {n} movie(s) with ID {id}.");
        }
        StoreCommand::Save { url, movie, genre, director, writer, country, gross, no_fetch } => {
            let url = url.as_deref().map(str::trim).filter(|u| !u.is_empty());
            let scraped = match url {
                Some(u) if !no_fetch => match runner.fetch(u) {
                    Some(fields) => Some(fields),
                    // no partial record after a failed fetch
                    None => return Ok(()),
                },
                _ => None,
            };
            let manual = ManualFields::from_text(&movie, &genre, &director, &writer, &country, gross);
            match runner.save(url, manual, scraped.as_ref()) {
                Some(UpsertOutcome::Inserted) => println!("New record."),
                Some(UpsertOutcome::Updated) => println!("Existing record overwritten."),
                None => {}
            }
        }
        StoreCommand::Show => {
            for rec in runner.dataset() {
                println!("{}", serde_json::to_string(&rec)?);
            }
        }
    }
    Ok(())
}

fn print_records(rows: &[PopulationRecord]) {
    for r in rows {
        println!("{:>6}  {}", r.id, r.movie);
    }
}
