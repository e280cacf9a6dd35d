mod app;
mod config;
mod export;
mod input;
mod lyrics;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lyrics::{ProviderKind, Query, Resolver};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "lyrics-finder",
    version,
    about = "Find song lyrics across several free lyrics services"
)]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of config.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Look up lyrics and print them to stdout (headless).
    Lookup {
        artist: String,
        song: String,
        /// Also save the lyrics into the configured export directory.
        #[arg(long)]
        save: bool,
        /// Save the lyrics to this file instead.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print only the lyrics, without progress lines.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the providers in the order they are tried.
    Providers {
        /// Store a new order, e.g. `--set lrclib,ovh`.
        #[arg(long, value_delimiter = ',')]
        set: Option<Vec<String>>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        cfg.log.max_level()
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            // The alternate screen owns stdout/stderr; log to a file instead.
            init_file_logging(&cfg.paths.data_dir, level)?;
            tui::theme::init(cfg.ui.nerd_font);
            let mouse = cfg.input.mouse;
            let mut app = app::App::new(cfg)?;
            let mut terminal = tui::TerminalGuard::enter(mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Lookup {
            artist,
            song,
            save,
            output,
            quiet,
        } => {
            init_stderr_logging(level);
            let opts = LookupOpts {
                save,
                output,
                quiet,
            };
            lookup(&cfg, &artist, &song, &opts).await?;
        }
        Command::Providers { set } => {
            init_stderr_logging(level);
            let mut cfg = cfg;
            if let Some(keys) = set {
                cfg.lyrics.providers = parse_order(&keys)?;
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Updated provider order in config.");
            }
            let resolver = Resolver::from_config(&cfg.lyrics)?;
            for (i, name) in resolver.provider_names().into_iter().enumerate() {
                println!("{}. {}", i + 1, name);
            }
        }
    }

    Ok(())
}

fn parse_order(keys: &[String]) -> anyhow::Result<Vec<String>> {
    let mut order: Vec<ProviderKind> = Vec::new();
    for key in keys {
        let kind = ProviderKind::from_key(key).with_context(|| {
            format!("unknown provider {key:?} (expected fly, ninjas, lrclib or ovh)")
        })?;
        if !order.contains(&kind) {
            order.push(kind);
        }
    }
    if order.is_empty() {
        anyhow::bail!("no providers given");
    }
    Ok(order.iter().map(|k| k.key().to_string()).collect())
}

fn init_stderr_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging(dir: &Path, level: tracing::Level) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join("lyrics-finder.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

struct LookupOpts {
    save: bool,
    output: Option<PathBuf>,
    quiet: bool,
}

async fn lookup(
    cfg: &config::Config,
    artist: &str,
    song: &str,
    opts: &LookupOpts,
) -> anyhow::Result<()> {
    let (artist, song) = (artist.trim(), song.trim());
    if artist.is_empty() || song.is_empty() {
        anyhow::bail!("please enter both artist name and song title");
    }

    let resolver = Resolver::from_config(&cfg.lyrics)?;
    let query = Query::new(artist, song);
    let found = if opts.quiet {
        resolver.resolve(&query).await
    } else {
        eprintln!("Searching: {} - {}", query.song, query.artist);
        resolver
            .resolve_with(&query, |provider| eprintln!("Trying {provider}..."))
            .await
    };

    let Some(result) = found else {
        eprintln!("Lyrics not found. Please check the spelling or try a different song.");
        eprintln!("Suggestions:");
        for s in app::NOT_FOUND_SUGGESTIONS {
            eprintln!("  - {s}");
        }
        anyhow::bail!("no lyrics found for {} - {}", query.song, query.artist);
    };

    if !opts.quiet {
        eprintln!("Lyrics found from {}", result.source);
    }
    println!("{}", export::export_text(&result));

    if let Some(path) = &opts.output {
        export::save_to(&result, path)?;
        eprintln!("Saved {}", path.display());
    } else if opts.save {
        let path = export::save(&result, &cfg.paths.export_dir)?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}
