use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use vitrina_config::{TomlConfigBackend, TomlPreferenceStore, VitrinaPaths};
use vitrina_lib::{HeadlessLayout, Settings, Site, load_content, logging};
use vitrina_redirect::{Navigator, RedirectConfig, RedirectStatus};

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(about = "Render the artist site and run its redirect gateway")]
struct Cli {
  /// Base directory for config and data (overrides VITRINA_BASE_DIR)
  #[arg(long, global = true, value_name = "DIR")]
  base_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render the content document and print the presentation tree as JSON
  Render {
    /// Content document (JSON)
    #[arg(long, value_name = "FILE")]
    content: PathBuf,

    /// Locale request parameter, as if passed in the page URL
    #[arg(long)]
    lang: Option<String>,

    /// Switch to this locale after the first render
    #[arg(long)]
    switch: Option<String>,
  },

  /// Validate a redirect target and print where the gateway would go
  Redirect {
    #[arg(long)]
    url: Option<String>,
  },
}

/// Navigator for the terminal: status to stderr, destinations to stdout.
/// A terminal never "leaves the page", so app links always get their fallback.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
  fn show_status(&mut self, status: RedirectStatus) {
    eprintln!("{status}");
  }

  fn navigate(&mut self, url: &str) {
    println!("{url}");
  }

  fn is_visible(&self) -> bool {
    true
  }
}

/// Runs the gateway; a rejected target is an error so the process exits non-zero.
async fn redirect<N: Navigator>(navigator: &mut N, url: Option<&str>, config: &RedirectConfig) -> Result<String> {
  match vitrina_redirect::run(navigator, url, config).await {
    Ok(target) => {
      debug!(url = target.web_url(), "redirect accepted");
      Ok(target.web_url().to_string())
    }
    Err(err) => {
      debug!(error = %err, "redirect rejected");
      Err(anyhow::Error::new(err).context("redirect rejected"))
    }
  }
}

fn backend(base_dir: Option<PathBuf>) -> Result<TomlConfigBackend> {
  let paths = match base_dir {
    Some(dir) => VitrinaPaths::at(dir),
    None => VitrinaPaths::new().context("cannot resolve config directories")?,
  };
  Ok(TomlConfigBackend::new(paths))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  logging::init();

  let cli = Cli::parse();
  let backend = backend(cli.base_dir)?;

  match cli.command {
    Commands::Render { content, lang, switch } => {
      let content = load_content(&content)?;
      let settings = Settings::load(&backend)?;
      let store = TomlPreferenceStore::new(backend.clone());

      let mut site = Site::boot(content, settings, store, HeadlessLayout::default(), lang.as_deref());
      if let Some(requested) = switch {
        site.switch_locale(&requested);
      }

      println!("{}", serde_json::to_string_pretty(site.tree())?);
    }
    Commands::Redirect { url } => {
      let config = RedirectConfig::load(&backend)?;
      redirect(&mut ConsoleNavigator, url.as_deref(), &config).await?;
    }
  }

  Ok(())
}
