use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use peakform::history::{get_history_path, load_history, save_history};
use peakform::output;
use peakform::scoring::{appraise, sample_curve, validate_input, Category, Input};

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORAGE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Ratings on a 1-10 scale. Only the three scoped to the chosen category
/// are consulted; the rest are accepted and ignored. Omitted ratings
/// default to the neutral midpoint 5.
#[derive(Args, Debug)]
struct RatingArgs {
    /// Sponsorship & profile rating (endurance)
    #[arg(long)]
    sponsorship: Option<f64>,

    /// Tactical ability rating (endurance)
    #[arg(long)]
    tactics: Option<f64>,

    /// Conditioning rating (endurance)
    #[arg(long)]
    conditioning: Option<f64>,

    /// Explosiveness rating (sprint)
    #[arg(long)]
    explosiveness: Option<f64>,

    /// Injury history rating, low is favorable (sprint)
    #[arg(long)]
    injuries: Option<f64>,

    /// Composure rating (sprint)
    #[arg(long)]
    composure: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Appraise a profile and print the multiplier breakdown
    Score {
        /// Discipline category
        #[arg(long, value_enum)]
        category: Category,

        /// Age in years (curves are calibrated for 18-60)
        #[arg(long)]
        age: u32,

        #[command(flatten)]
        ratings: RatingArgs,

        /// Persist the appraisal to history and report its id
        #[arg(long)]
        save: bool,

        /// Emit the appraisal as JSON instead of the breakdown
        #[arg(long)]
        json: bool,
    },
    /// Print the full base curve for a category (ages 18-60)
    Curve {
        /// Discipline category
        #[arg(long, value_enum)]
        category: Category,

        /// Emit the curve points as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// List saved appraisals, most recent first
    History {
        /// Emit saved appraisals as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved appraisal by id (a no-op for unknown ids)
    Delete {
        /// Id as shown by `history`
        id: u64,
    },
}

#[derive(Parser, Debug)]
#[command(name = "peakform")]
#[command(about = "Athlete valuation from age-form curves and rated multipliers", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory for the history store (defaults to the user data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn history_path(data_dir: Option<PathBuf>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.join("history.json"),
        None => get_history_path(),
    }
}

fn main() {
    let cli = Cli::parse();
    let path = history_path(cli.data_dir);
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score {
            category,
            age,
            ratings,
            save,
            json,
        } => {
            let input = Input {
                category,
                age,
                sponsorship: ratings.sponsorship,
                tactics: ratings.tactics,
                conditioning: ratings.conditioning,
                explosiveness: ratings.explosiveness,
                injuries: ratings.injuries,
                composure: ratings.composure,
            };

            // Off-scale inputs are warnings, not errors: the engine is
            // total and the final score is clamped either way.
            if let Err(warnings) = validate_input(&input) {
                for warning in warnings {
                    eprintln!("warning: {}", warning);
                }
            }

            let appraisal = appraise(&input);

            if json {
                match serde_json::to_string_pretty(&appraisal) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize appraisal: {}", e);
                        std::process::exit(EXIT_USAGE);
                    }
                }
            } else {
                println!("{}", output::format_appraisal_detail(&appraisal, use_colors));
            }

            if save {
                let mut state = match load_history(&path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("History error: {}", e);
                        std::process::exit(EXIT_STORAGE);
                    }
                };
                let id = state.add(appraisal);
                if let Err(e) = save_history(&path, &state) {
                    eprintln!("History error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
                println!("Saved as #{}", id);
            }
        }
        Commands::Curve { category, json } => {
            let points = sample_curve(category);
            if json {
                match serde_json::to_string_pretty(&points) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize curve: {}", e);
                        std::process::exit(EXIT_USAGE);
                    }
                }
            } else {
                println!("{}", output::format_curve_table(&points, use_colors));
            }
        }
        Commands::History { json } => {
            let state = match load_history(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("History error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };
            let ordered = state.ordered();
            if json {
                match serde_json::to_string_pretty(&ordered) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize history: {}", e);
                        std::process::exit(EXIT_USAGE);
                    }
                }
            } else {
                println!("{}", output::format_history_table(&ordered, use_colors));
            }
        }
        Commands::Delete { id } => {
            let mut state = match load_history(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("History error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };
            let removed = state.delete(id);
            if removed {
                if let Err(e) = save_history(&path, &state) {
                    eprintln!("History error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
                println!("Deleted #{}", id);
            } else {
                // Idempotent: unknown ids are a no-op, not an error.
                println!("No appraisal with id #{}", id);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
