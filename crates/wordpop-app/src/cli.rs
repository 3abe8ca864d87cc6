use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use wordpop_config::shortcut::{Modifier, ShortcutConfig};
use wordpop_dict::preprocess::{DefaultPreprocessor, Preprocessor};
use wordpop_dict::{Definitions, DictionaryClient};
use wordpop_page::render;
use wordpop_types::FetchOutcome;

use crate::demo;
use crate::settings;

#[derive(Parser, Debug)]
#[command(name = "wordpop", about = "Pointer-driven dictionary lookups", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a word's definition and print the rendered popup content.
    Lookup {
        word: String,
    },
    /// Show or change the lookup trigger shortcut.
    Shortcut(ShortcutArgs),
    /// Run one scripted lookup against a built-in sample page.
    Demo,
    /// Print the settings file location.
    ConfigPath,
}

#[derive(Args, Debug)]
struct ShortcutArgs {
    /// New trigger key, a single character. Omit to show the current shortcut.
    #[arg(long)]
    key: Option<String>,
    /// Require ctrl (command also counts on macOS).
    #[arg(long)]
    ctrl: bool,
    /// Require alt.
    #[arg(long)]
    alt: bool,
    /// Require shift.
    #[arg(long)]
    shift: bool,
    /// Require meta.
    #[arg(long)]
    meta: bool,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Lookup { word } => handle_lookup(word).await,
        Command::Shortcut(args) => handle_shortcut(args),
        Command::Demo => demo::run().await,
        Command::ConfigPath => {
            println!("{}", settings::default_settings_path().display());
            Ok(())
        }
    }
}

async fn handle_lookup(word: String) -> anyhow::Result<()> {
    let config = settings::load(&settings::default_settings_path());
    let client = DictionaryClient::new(
        config.lookup.endpoint.clone(),
        Duration::from_secs(config.lookup.timeout_seconds),
    );

    let term = DefaultPreprocessor.process(&word);
    let outcome = match client.define(&term).await {
        Ok(entries) => FetchOutcome::Entries(entries),
        Err(e) => {
            tracing::error!("definition fetch for '{term}' failed: {e}");
            FetchOutcome::Failed(e.to_string())
        }
    };

    println!("{}", render::render_outcome(&word, &outcome));
    Ok(())
}

fn handle_shortcut(args: ShortcutArgs) -> anyhow::Result<()> {
    let path = settings::default_settings_path();
    let mut config = settings::load(&path);

    let Some(key) = args.key else {
        println!("{}", describe(&config.shortcut));
        return Ok(());
    };

    if key.chars().count() != 1 {
        anyhow::bail!("trigger key must be a single character");
    }

    let mut modifiers = Vec::new();
    if args.ctrl {
        modifiers.push(Modifier::Ctrl);
    }
    if args.alt {
        modifiers.push(Modifier::Alt);
    }
    if args.shift {
        modifiers.push(Modifier::Shift);
    }
    if args.meta {
        modifiers.push(Modifier::Meta);
    }

    config.shortcut = ShortcutConfig::new(&key, modifiers);
    settings::save(&path, &config)?;
    println!("shortcut saved: {}", describe(&config.shortcut));
    Ok(())
}

fn describe(shortcut: &ShortcutConfig) -> String {
    let mut parts: Vec<&str> = shortcut
        .modifiers
        .iter()
        .map(|m| match m {
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
            Modifier::Meta => "meta",
        })
        .collect();
    parts.push(&shortcut.key);
    parts.join("+")
}
