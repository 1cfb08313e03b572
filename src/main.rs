//! hello-button - a trigger that opens a `hello!` modal in the terminal

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use hello_button::config::Config;
use hello_button::page::{DEMO_TITLE, Page};
use hello_button::stories::{self, META_TITLE, STORIES, Story};
use hello_button::{App, HelloButton, Interaction, Variant, paths, tui};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A trigger button that opens a hello modal
#[derive(Debug, Parser)]
#[command(name = "hello-button")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trigger label (overrides the config file)
    #[arg(long, global = true)]
    label: Option<String>,

    /// Presentation variant (overrides the config file)
    #[arg(long, value_enum, global = true)]
    variant: Option<Variant>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a story instead of the demo page
    Story {
        /// Story name, e.g. `Default` or `custom-label`
        name: String,
    },
    /// List the available stories
    Stories,
    /// Print the scene as JSON without starting the terminal UI
    Snapshot {
        /// Open the modal before taking the snapshot
        #[arg(long)]
        open: bool,
        /// Page width in columns
        #[arg(long, default_value_t = 80)]
        width: u16,
        /// Page height in rows
        #[arg(long, default_value_t = 24)]
        height: u16,
        /// Snapshot a story instead of the demo page
        #[arg(long, value_name = "NAME")]
        story: Option<String>,
    },
    /// Print the effective configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {e}\n");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(cli.config.as_deref())?.with_overrides(cli.label, cli.variant);

    match cli.command {
        None => tui::run(App::new(config.clone(), demo_page(&config))),
        Some(Commands::Story { name }) => {
            let story = stories::find(&name)?;
            let page = page_for_story(story, &config);
            tui::run(App::new(config, page))
        }
        Some(Commands::Stories) => {
            cmd_stories();
            Ok(())
        }
        Some(Commands::Snapshot {
            open,
            width,
            height,
            story,
        }) => {
            let area = Rect::new(0, 0, width, height);
            cmd_snapshot(&config, open, area, story.as_deref())
        }
        Some(Commands::Config { path }) => cmd_config(&config, cli.config, path),
    }
}

/// Log to `<tmp>/hello-button.log` - tail with: `tail -f /tmp/hello-button.log`
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let log_path = paths::log_path();
    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_name = log_path
        .file_name()
        .map_or_else(|| "hello-button.log".into(), std::ffi::OsStr::to_os_string);

    // Start each session with an empty log
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

/// A file named by `--config` must load. One named by `HELLO_BUTTON_CONFIG`
/// may be missing but must parse when present. A broken file at the default
/// location falls back to defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from(path);
    }
    if let Some(path) = paths::config_override() {
        return Config::load_or_default(&path);
    }
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Falling back to default config");
            eprintln!("Warning: {e:#}; using defaults");
            Ok(Config::default())
        }
    }
}

fn demo_page(config: &Config) -> Page {
    match &config.label {
        Some(label) => Page::new(
            DEMO_TITLE,
            HelloButton::with_variant(label.clone(), config.variant),
        ),
        None => Page::demo(config.variant),
    }
}

fn page_for_story(story: Story, config: &Config) -> Page {
    match &config.label {
        Some(label) => Page::new(
            story.path(),
            HelloButton::with_variant(label.clone(), config.variant),
        ),
        None => Page::from_story(story, config.variant),
    }
}

fn cmd_stories() {
    println!("{META_TITLE}");
    for story in STORIES {
        let slug = story.slug();
        println!("  {:<12} {slug:<14} label: {:?}", story.name, story.label);
    }
}

fn cmd_snapshot(config: &Config, open: bool, area: Rect, story: Option<&str>) -> Result<()> {
    let mut page = match story {
        Some(name) => page_for_story(stories::find(name)?, config),
        None => demo_page(config),
    };
    if open {
        page.widget_mut().activate_trigger();
    }

    let json = serde_json::to_string_pretty(&page.snapshot(area))
        .context("Failed to serialize snapshot")?;
    println!("{json}");
    Ok(())
}

fn cmd_config(config: &Config, explicit: Option<PathBuf>, path_only: bool) -> Result<()> {
    if path_only {
        let path = explicit.unwrap_or_else(Config::default_path);
        println!("{}", path.display());
        return Ok(());
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
