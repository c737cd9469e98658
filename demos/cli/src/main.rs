use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use symptom_core::{
    suggest, AdvisoryLibrary, Catalog, Gender, IntakeKey, IntakeSession, TrackerConfig,
};
use symptom_history::{parse_catalog_payload, summarize_history_str};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "symptom-cli",
    about = "Symptom suggestions and assessment history insights from JSON files."
)]
struct Args {
    /// JSON file with `TrackerConfig` overrides.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank catalog symptoms for a query.
    Suggest {
        query: String,
        /// Catalog provider response (`{"symptoms": [...]}` or an array).
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Already selected symptoms to leave out.
        #[arg(long = "exclude")]
        excluded: Vec<String>,
    },
    /// Replay typed entries through an intake session and print the analysis request.
    Intake {
        /// Each entry is typed and committed with Enter.
        entries: Vec<String>,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        age: Option<String>,
        /// male, female or other.
        #[arg(long)]
        gender: Option<String>,
    },
    /// Print advisory and trend insights for a history payload.
    History {
        #[arg(short, long)]
        input: PathBuf,
        /// Replacement advisory content library.
        #[arg(long)]
        advisory: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("symptom_core=info,symptom_history=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => serde_json::from_str::<TrackerConfig>(&read(path)?)
            .with_context(|| format!("Invalid config in {path:?}"))?,
        None => TrackerConfig::default(),
    };

    match args.command {
        Command::Suggest {
            query,
            catalog,
            excluded,
        } => {
            let catalog = load_catalog(catalog.as_deref());
            for suggestion in suggest(&query, &catalog, &excluded, config.suggestion_limit) {
                println!("{:>3}  {}", suggestion.sort_key, suggestion.name);
            }
        }
        Command::Intake {
            entries,
            catalog,
            age,
            gender,
        } => {
            let mut session = IntakeSession::new(load_catalog(catalog.as_deref()), config);
            session.focus();
            for entry in &entries {
                session.input(entry);
                session.key(IntakeKey::Enter);
                if let Some(notice) = session.notice() {
                    println!("{entry:?}: {notice}");
                }
            }
            session.set_age_input(age.as_deref().unwrap_or_default());
            session.set_gender(Gender::from_form_value(gender.as_deref().unwrap_or_default()));
            println!("Gender: {}", session.details().gender.label());
            match session.analysis_request() {
                Ok(request) => println!("{}", serde_json::to_string_pretty(&request)?),
                Err(notice) => println!("{notice}"),
            }
        }
        Command::History { input, advisory } => {
            let library = match advisory {
                Some(path) => AdvisoryLibrary::from_json_str(&read(&path)?)
                    .with_context(|| format!("Invalid advisory library in {path:?}"))?,
                None => AdvisoryLibrary::builtin(),
            };
            let report = summarize_history_str(&read(&input)?, &library, &config)?;

            println!(
                "Generated at: {}\nTotal checks: {}\nLast condition: {}",
                report.generated_at,
                report.total_checks,
                report.last_condition.as_deref().unwrap_or("--")
            );
            for entry in &report.entries {
                println!(
                    "\n[{}] {}\n  Trend: {}",
                    entry.id,
                    entry.condition.as_deref().unwrap_or("No result"),
                    entry.trend
                );
                if let Some(advisory) = &entry.advisory {
                    println!("  Prevention: {advisory}");
                }
            }
        }
    }

    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Could not read file {path:?}"))
}

fn load_catalog(path: Option<&Path>) -> Catalog {
    match path {
        Some(path) => Catalog::from_provider(read(path).and_then(|json| {
            parse_catalog_payload(&json).map_err(anyhow::Error::from)
        })),
        None => Catalog::builtin(),
    }
}
