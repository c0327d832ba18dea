use clap::Parser;
use quotebook::application::{
    add_quote, export_to_file, import_from_file, init, manage_config::ConfigService,
    Session, SyncReconciler,
};
use quotebook::cli::output::format_quote;
use quotebook::cli::{
    format_category_list, format_import_report, format_notification, format_quote_list, Cli,
    Commands,
};
use quotebook::domain::CategoryFilter;
use quotebook::error::QuotebookError;
use quotebook::infrastructure::{
    Config, FileKeyValueStore, FileSystemRepository, HttpRemote, OfflineRemote,
    QuotebookRepository, RemoteSource,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotebook=warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Discover the quote book and open a session over its store
fn open() -> Result<(Config, Session<FileKeyValueStore>), QuotebookError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let session = Session::open(repo.store())?;
    Ok((config, session))
}

fn remote_for(config: &Config, offline: bool) -> Result<Box<dyn RemoteSource>, QuotebookError> {
    match config.remote_url() {
        Some(url) if !offline => Ok(Box::new(HttpRemote::new(url)?)),
        _ => Ok(Box::new(OfflineRemote)),
    }
}

fn parse_filter(
    category: Option<String>,
    session: &Session<FileKeyValueStore>,
) -> Result<CategoryFilter, QuotebookError> {
    match category {
        Some(name) => name.parse().map_err(QuotebookError::Config),
        None => session.current_filter(),
    }
}

async fn run(cli: Cli) -> Result<(), QuotebookError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::List { category } => {
            let (_, mut session) = open()?;
            let filter = parse_filter(category, &session)?;
            let view = session.display(&filter)?;
            print!("{}", format_quote_list(&view));
            if view.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Categories => {
            let (_, session) = open()?;
            let selected = session.current_filter()?;
            print!(
                "{}",
                format_category_list(&session.store().categories(), selected.as_str())
            );
            Ok(())
        }
        Commands::Random { category } => {
            let (_, mut session) = open()?;
            let filter = parse_filter(category, &session)?;
            let quote = session.random(&filter)?;
            println!("{}", format_quote(&quote));
            Ok(())
        }
        Commands::Add { text, category } => {
            let (config, mut session) = open()?;
            let remote = remote_for(&config, cli.offline)?;
            let quote = add_quote(&mut session, remote.as_ref(), &text, &category).await?;
            println!("Added {}", format_quote(&quote));
            Ok(())
        }
        Commands::Export { path } => {
            let (_, session) = open()?;
            let count = export_to_file(session.store(), &path)?;
            println!("Exported {} quotes to {}", count, path.display());
            Ok(())
        }
        Commands::Import { path } => {
            let (config, mut session) = open()?;
            let report = import_from_file(session.store_mut(), &path, config.dedup)?;
            println!("{}", format_import_report(&report));
            Ok(())
        }
        Commands::Sync { watch, interval } => {
            let (config, mut session) = open()?;
            let remote = remote_for(&config, cli.offline)?;
            let period = interval
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.sync_interval());

            let (tx, mut rx) = mpsc::unbounded_channel();
            let reconciler = SyncReconciler::new(remote, config.dedup, period).with_notifier(tx);

            if watch {
                let printer = tokio::spawn(async move {
                    while let Some(notification) = rx.recv().await {
                        print!("{}", format_notification(&notification));
                    }
                });

                println!(
                    "Syncing every {}s. Press Ctrl+C to stop.",
                    reconciler.interval().as_secs()
                );
                reconciler
                    .run(&mut session, async {
                        if let Err(e) = tokio::signal::ctrl_c().await {
                            warn!(error = %e, "Failed to listen for Ctrl+C, stopping sync loop");
                        }
                    })
                    .await;

                drop(reconciler);
                if let Err(e) = printer.await {
                    warn!(error = %e, "Notification printer task failed");
                }
                info!("Watch mode finished");
            } else {
                let report = reconciler.tick(&mut session).await;
                match rx.try_recv() {
                    Ok(notification) => print!("{}", format_notification(&notification)),
                    Err(_) if report.failed => println!("Sync failed; local quotes unchanged"),
                    Err(_) => println!("No new quotes from server"),
                }
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("remote_url = {}", config.remote_url);
                println!("sync_interval_secs = {}", config.sync_interval_secs);
                println!("dedup = {}", config.dedup);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: quotebook config [--list | <key> [<value>]]");
                println!("Valid keys: remote_url, sync_interval_secs, dedup, created");
                Ok(())
            }
        }
    }
}
