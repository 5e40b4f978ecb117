use clap::Parser;
use pe_analysis::{build_report, RuleBasedAnalyzer};
use pe_core::{AnalysisRepository, EditorialReport, Result, Role, SavedAnalysis};
use pe_scrapers::{HttpFetcher, SourceManager, DEFAULT_USER_AGENT};
use pe_storage::StorageKind;
use pe_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch newspaper editorials and label their PREP structure", long_about = None)]
pub struct Cli {
    /// Where saved analyses live: memory, file or sqlite
    #[arg(long, default_value = "file")]
    storage: StorageKind,
    /// Overrides the storage backend's default location
    #[arg(long)]
    storage_path: Option<PathBuf>,
    /// Outlet used when a URL does not name one (see `prep sources`)
    #[arg(long, default_value = "hani")]
    source: String,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// List the outlet's latest editorials
    List,
    /// Fetch one editorial and label its sentences
    Analyze {
        url: String,
        /// Print the full JSON payload
        #[arg(long)]
        json: bool,
        /// Keep the analysis in storage
        #[arg(long)]
        save: bool,
    },
    /// Inspect or prune saved analyses
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// List configured outlets
    Sources,
}

#[derive(clap::Subcommand, Debug)]
enum SavedCommands {
    List,
    Delete { id: String },
}

fn print_report(report: &EditorialReport) {
    let editorial = &report.editorial;
    println!("📰 {}", editorial.title);
    println!("   {} · {}", editorial.date, editorial.link);
    for role in Role::ALL {
        let item = report.ai_analysis.get(role);
        println!();
        println!("[{}] {}", role, item.summary);
        println!("   {}", item.source_text);
    }
    println!();
    for role in Role::ALL {
        let phrase = report.best_practice.get(role);
        if !phrase.is_empty() {
            println!("💡 {}", phrase);
        }
    }
}

fn print_saved(analyses: &[SavedAnalysis]) {
    if analyses.is_empty() {
        println!("No saved analyses");
        return;
    }
    for analysis in analyses {
        println!("{}  {}  {}", analysis.id, analysis.saved_at, analysis.editorial.title);
    }
}

async fn open_storage(cli: &Cli) -> Result<Arc<dyn AnalysisRepository>> {
    let storage = pe_storage::create_storage(cli.storage, cli.storage_path.as_deref()).await?;
    info!("💾 Storage initialized (using {})", storage.name());
    Ok(storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    pe_scrapers::init_logging(&cli.log_level);

    let fetcher = Arc::new(HttpFetcher::new(&cli.user_agent)?);
    let sources = SourceManager::with_fetcher(fetcher, &cli.source)?;
    let analyzer = RuleBasedAnalyzer::new();

    match &cli.command {
        Commands::Serve { bind } => {
            let state = AppState {
                sources,
                analyzer: Arc::new(analyzer),
                storage: open_storage(&cli).await?,
            };
            pe_web::serve(state, *bind).await?;
        }
        Commands::List => {
            let source = sources.default_source();
            let meta = source.source_metadata();
            info!("{} Fetching editorials from {}", meta.emoji, meta.name);
            for item in source.fetch_list().await? {
                println!("{}  {}", item.date, item.title);
                println!("            {}", item.link);
            }
        }
        Commands::Analyze { url, json, save } => {
            let source = sources.for_url(url, None)?;
            let editorial = source.fetch_detail(url).await?;
            let report = build_report(&analyzer, editorial);

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if *save {
                let storage = open_storage(&cli).await?;
                let saved = pe_storage::save_analysis(
                    storage.as_ref(),
                    report.editorial.clone(),
                    report.ai_analysis.clone(),
                )
                .await?;
                println!("Saved as {}", saved.id);
            }
        }
        Commands::Saved { command } => {
            let storage = open_storage(&cli).await?;
            match command {
                SavedCommands::List => print_saved(&storage.load().await?),
                SavedCommands::Delete { id } => {
                    let remaining = pe_storage::delete_analysis(storage.as_ref(), id).await?;
                    print_saved(&remaining);
                }
            }
        }
        Commands::Sources => {
            let default_source = sources.default_source();
            for source in sources.sources() {
                let meta = source.source_metadata();
                let default = if Arc::ptr_eq(source, &default_source) { " (default)" } else { "" };
                println!(
                    "{} {} [{}] {}{}",
                    meta.emoji,
                    meta.name,
                    source.cli_names().join(", "),
                    meta.homepage,
                    default
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["prep", "list"]).unwrap();
        assert_eq!(cli.storage, StorageKind::File);
        assert_eq!(cli.source, "hani");
        assert_eq!(cli.log_level, "info");
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_analyze_flags() {
        let cli = Cli::try_parse_from([
            "prep",
            "--storage",
            "memory",
            "analyze",
            "https://www.khan.co.kr/article/202405012003005",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.storage, StorageKind::Memory);
        match cli.command {
            Commands::Analyze { url, json, save } => {
                assert!(url.contains("khan.co.kr"));
                assert!(json);
                assert!(!save);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_serve_bind_and_saved() {
        let cli = Cli::try_parse_from(["prep", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { bind } if bind.port() == 8080));

        let cli = Cli::try_parse_from(["prep", "saved", "delete", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Saved { command: SavedCommands::Delete { ref id } } if id == "abc"
        ));
    }

    #[test]
    fn test_rejects_unknown_storage() {
        assert!(Cli::try_parse_from(["prep", "--storage", "qdrant", "list"]).is_err());
    }
}
