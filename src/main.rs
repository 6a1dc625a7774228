use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eventgate_rs::gate::{filter_lines, ConditionFilter, FilterConfig, FilterError};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, BufReader};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter JSON-lines events, printing the ones that pass
    Check {
        /// YAML file with an `if` list of conditions
        #[arg(short, long)]
        config: PathBuf,

        /// JSON-lines event file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Compile the conditions and print them
    Validate {
        /// YAML file with an `if` list of conditions
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args.command).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), FilterError> {
    match command {
        Commands::Check { config, input } => {
            let filter = load_filter(&config)?;

            let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &input {
                Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
                None => Box::new(BufReader::new(tokio::io::stdin())),
            };

            let mut stdout = tokio::io::stdout();
            let summary = filter_lines(&filter, reader, &mut stdout).await?;

            log::info!(
                "{} of {} event(s) passed, {} malformed",
                summary.passed,
                summary.total,
                summary.malformed
            );
        }
        Commands::Validate { config } => {
            let filter = load_filter(&config)?;
            if filter.is_empty() {
                println!("No conditions configured: every event passes");
            }
            for condition in filter.conditions() {
                println!("{}", condition);
            }
        }
    }

    Ok(())
}

fn load_filter(path: &Path) -> Result<ConditionFilter, FilterError> {
    let config = FilterConfig::load(path)?;
    let filter = ConditionFilter::from_config(&config)?;
    log::info!(
        "Loaded {} condition(s) from {}",
        filter.len(),
        path.display()
    );
    Ok(filter)
}
