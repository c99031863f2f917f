/* src/cli/core/src/main.rs */

mod check;
mod config;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use lingopress_core::{ContentIndex, FsStore, Locale, SwitcherStyles};
use lingopress_server_axum::BlogServer;
use tracing_subscriber::EnvFilter;

use config::{LingopressConfig, find_config, load_config, resolve_path};

#[derive(Parser)]
#[command(name = "lingopress", about = "Multilingual blog server and content tools")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the blog API and the application shell
  Serve {
    /// Path to lingopress.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// List published posts per locale
  Posts {
    /// Path to lingopress.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Only list this locale (en, es, it)
    #[arg(short, long)]
    locale: Option<String>,
  },
  /// Report translation targets that point at missing posts
  Check {
    /// Path to lingopress.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the language switcher styles after applying theme overrides
  Theme {
    /// Path to lingopress.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn init_tracing() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lingopress=info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, LingopressConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

fn load_index(config_path: &Path, config: &LingopressConfig) -> Result<ContentIndex> {
  let dir = resolve_path(config_path, &config.content.dir);
  let store = FsStore::load(&dir).with_context(|| format!("failed to load {}", dir.display()))?;
  Ok(ContentIndex::new(store))
}

async fn run_serve(explicit: Option<PathBuf>, port: Option<u16>) -> Result<()> {
  let (path, config) = resolve_config(explicit)?;
  let index = load_index(&path, &config)?;
  let port = port.unwrap_or(config.server.port);
  let dist = resolve_path(&path, &config.server.dist_dir);

  ui::banner("serve");
  ui::arrow(&format!("site {}", config.site.name));
  ui::arrow(&format!("http://localhost:{port}"));
  ui::blank();

  BlogServer::new(index, config.site_meta())
    .dist_dir(&dist)
    .serve(&format!("0.0.0.0:{port}"))
    .await
    .map_err(|e| anyhow!("server error: {e}"))
}

async fn run_posts(explicit: Option<PathBuf>, only: Option<String>) -> Result<()> {
  let (path, config) = resolve_config(explicit)?;
  let index = load_index(&path, &config)?;
  let locales: Vec<Locale> = match only {
    Some(code) => match Locale::parse(&code) {
      Some(locale) => vec![locale],
      None => bail!("unknown locale \"{code}\" (expected en, es or it)"),
    },
    None => Locale::ALL.to_vec(),
  };

  ui::banner("posts");
  for locale in locales {
    let posts = index.list_posts(locale).await?;
    ui::section(&format!("{} ({})", locale.display_name(), posts.len()));
    for post in posts {
      ui::detail(&format!("{}  {}  {}{}{}", post.date_iso, post.slug, ui::DIM, post.title, ui::RESET));
    }
    ui::blank();
  }
  Ok(())
}

async fn run_check(explicit: Option<PathBuf>) -> Result<()> {
  let (path, config) = resolve_config(explicit)?;
  let index = load_index(&path, &config)?;

  ui::banner("check");
  let report = check::check_content(&index).await?;

  let mut dangling = 0usize;
  for f in report.dangling() {
    dangling += 1;
    ui::fail(&format!("{}/{} -> {}/{} does not exist", f.locale, f.slug, f.target, f.target_slug));
  }
  for f in report.fallback_gaps() {
    ui::warn(&format!("{}/{} has no {} counterpart", f.locale, f.slug, f.target));
  }
  ui::blank();

  if dangling > 0 {
    bail!("{dangling} translation target(s) point at missing posts");
  }
  ui::ok(&format!("{} posts checked", report.posts));
  Ok(())
}

fn run_theme(explicit: Option<PathBuf>) -> Result<()> {
  let (_, config) = resolve_config(explicit)?;
  let styles = SwitcherStyles::default().merge(&config.theme.switcher);
  let json = serde_json::to_string_pretty(&styles).context("failed to serialize styles")?;
  println!("{json}");
  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, port } => run_serve(config, port).await?,
    Command::Posts { config, locale } => run_posts(config, locale).await?,
    Command::Check { config } => run_check(config).await?,
    Command::Theme { config } => run_theme(config)?,
  }
  Ok(())
}
