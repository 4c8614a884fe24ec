use clap::{Parser, Subcommand};
use log::debug;
use std::process::ExitCode;

use recipe_finder::validator::Registration;
use recipe_finder::{default_widget, FieldName, LookupApplied, RegistrationForm, SubmitOutcome};

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(version, about = "Search TheMealDB recipes and check registration forms", long_about = None)]
struct Cli {
    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by name and print the result cards
    Search {
        /// Search term
        term: String,
    },
    /// Print the detail panel for one recipe id
    Show {
        /// Meal id, as shown in search results
        id: String,
    },
    /// Validate and submit a registration form (nothing is sent)
    Register {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Search { term } => {
            let mut widget = default_widget()?;
            let found = widget.search_for(&term).await;
            if let Some(notice) = widget.notice() {
                eprintln!("{}", notice.message);
            }
            if !found {
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", widget.heading());
            for meal in widget.cards() {
                debug!("card {} -> {}", meal.id, meal.name);
            }
            println!("{}", widget.cards_html());
        }
        Commands::Show { id } => {
            let mut widget = default_widget()?;
            match widget.select(&id).await {
                LookupApplied::Rendered => println!("{}", widget.detail().content()),
                _ => {
                    if let Some(notice) = widget.notice() {
                        eprintln!("{}", notice.message);
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let mut form = RegistrationForm::new();
            form.set_value(FieldName::Username, username);
            form.set_value(FieldName::Email, email);
            form.set_value(FieldName::Password, password);
            form.set_value(FieldName::ConfirmPassword, confirm_password);

            match form.submit() {
                SubmitOutcome::Accepted(Registration { username, .. }) => {
                    println!("Registered {} (demo only, nothing was sent)", username);
                }
                SubmitOutcome::Rejected(fields) => {
                    for field in fields {
                        eprintln!("{}: {}", field, form.error(field).unwrap_or_default());
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
