use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::store::{self, KeyValueStore, MemoryStore};
use folio::tui::app::ViewerApp;
use folio::tui::runner;
use folio::viewer::content::ContentLibrary;
use folio::viewer::tabs::TabId;
use folio::FolioConfig;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal document viewer", version)]
struct Cli {
    /// YAML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where the preference store and log file live.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory of `<tab>.md` files overriding the built-in pages.
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Tab to show first (overrides `default_tab`).
    #[arg(short, long)]
    tab: Option<String>,

    /// Keep preferences in memory only.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FolioConfig::default(),
    };

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("folio")))
        .unwrap_or_else(|| PathBuf::from(".folio"));
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;

    // The terminal belongs to the UI, so logs go to a file.
    let log_path = data_dir.join("folio.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let tab_ids: Vec<TabId> = config.tabs.iter().map(|t| TabId::new(t.id.as_str())).collect();
    let mut content = ContentLibrary::builtin();
    if let Some(dir) = &cli.content_dir {
        content.load_dir(dir, tab_ids.iter())?;
    }
    for tab in &config.tabs {
        if let Some(file) = &tab.file {
            content.load_file(&TabId::new(tab.id.as_str()), file);
        }
    }

    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        store::open_or_memory(&data_dir.join("state"))
    };

    let initial = TabId::new(cli.tab.as_deref().unwrap_or(&config.default_tab));
    let mut app = ViewerApp::with_entropy(&config, &initial, content, store)
        .context("invalid configuration")?;
    runner::run(&mut app).await
}
