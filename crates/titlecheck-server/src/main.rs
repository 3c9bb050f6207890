//! titlecheck command-line interface
//!
//! Serves the verification endpoint and manages the title store.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use titlecheck::{DEFAULT_DB_PATH, Policy, SqliteTitleStore, Verifier};
use titlecheck_server::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "titlecheck")]
#[command(about = "Verify proposed publication titles against a registry of existing titles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database holding registered titles
    #[arg(long, global = true, env = "TITLECHECK_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// JSON policy file (denylist, fallback titles, thresholds)
    #[arg(long, global = true, env = "TITLECHECK_POLICY")]
    policy: Option<PathBuf>,

    /// Score against demo sample titles while the store is empty
    #[arg(long, global = true, env = "TITLECHECK_DEMO_FALLBACK")]
    demo_fallback: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP verification service
    Serve {
        /// Address to bind
        #[arg(short = 'H', long, env = "TITLECHECK_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, env = "TITLECHECK_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Register a single title
    Add {
        title: String,
    },
    /// Register titles from a file, one per line
    Import {
        file: PathBuf,
    },
    /// Print every registered title
    List,
    /// Verify a title, or every line of stdin when no title is given
    Check {
        title: Option<String>,
    },
}

fn load_policy(path: Option<&Path>, demo_fallback: bool) -> Result<Policy> {
    let policy = match path {
        Some(path) => Policy::from_json_file(path)
            .with_context(|| format!("failed to load policy from {}", path.display()))?,
        None => Policy::default(),
    };

    // The flag can only turn the fallback on; a policy file may already enable it.
    Ok(if demo_fallback {
        policy.with_fallback(true)
    } else {
        policy
    })
}

/// Reads import lines, skipping blanks and `#` comments.
fn read_title_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_title_lines(&contents))
}

fn parse_title_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn print_check(state: &AppState, title: &str) -> Result<()> {
    let result = state
        .verify(title)
        .with_context(|| format!("failed to verify {title:?}"))?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = SqliteTitleStore::open(&cli.db)
        .with_context(|| format!("failed to open title store at {}", cli.db.display()))?;
    let policy = load_policy(cli.policy.as_deref(), cli.demo_fallback)?;
    let state = AppState::new(store, Verifier::new(policy));

    match cli.command {
        Commands::Serve { host, port } => {
            info!(db = %cli.db.display(), "starting title verification service");
            titlecheck_server::serve(state, &host, port)
                .await
                .with_context(|| format!("server on {host}:{port} failed"))?;
        }
        Commands::Add { title } => {
            if state.store().add_title(&title)? {
                println!("Added {title:?}");
            } else {
                println!("{title:?} is already registered");
            }
        }
        Commands::Import { file } => {
            let titles = read_title_file(&file)?;
            let report = state.store().add_titles(&titles)?;
            println!(
                "Imported {} titles ({} already registered)",
                report.inserted, report.skipped
            );
        }
        Commands::List => {
            for title in state.store().list_titles()? {
                println!("{title}");
            }
        }
        Commands::Check { title: Some(title) } => print_check(&state, &title)?,
        Commands::Check { title: None } => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                print_check(&state, line)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lines_skip_blanks_and_comments() {
        let titles = parse_title_lines("# seed list\nThe Hindu\n\n  Namaskar  \n#Times of India\n");
        assert_eq!(titles, vec!["The Hindu".to_string(), "Namaskar".to_string()]);
    }

    #[test]
    fn demo_flag_enables_fallback() {
        let policy = load_policy(None, true).unwrap();
        assert!(policy.use_fallback);

        let policy = load_policy(None, false).unwrap();
        assert!(!policy.use_fallback);
    }

    #[test]
    fn missing_policy_file_is_reported() {
        let err = load_policy(Some(Path::new("/nonexistent/policy.json")), false).unwrap_err();
        assert!(err.to_string().contains("failed to load policy"));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["titlecheck", "serve"]).unwrap();
        assert!(!cli.demo_fallback);
        assert!(cli.policy.is_none());
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8000);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn cli_parses_check_without_title() {
        let cli = Cli::try_parse_from(["titlecheck", "--db", "other.db", "check"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("other.db"));
        assert!(matches!(cli.command, Commands::Check { title: None }));
    }
}
