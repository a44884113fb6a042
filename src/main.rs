//! CLI entry point for waltheme.

mod cli;

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use waltheme::config::load_settings;
use waltheme::error::ThemeError;
use waltheme::theme::{
    install_bundled, list_theme_names, FileLastUsedStore, LastUsedStore, ThemeIdentifier,
    ThemeResolver, ThemeVariant,
};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_tracing(args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ThemeError::ThemeNotFound { variant }) => {
            error!("No {variant} colorscheme file found.");
            error!("Try adding   '-l' to set light themes.");
            error!("Try removing '-l' to set dark themes.");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &cli::Args) -> Result<(), ThemeError> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(alpha) = args.alpha {
        settings.default_alpha = alpha.to_string();
    }

    if args.list {
        let variant = ThemeVariant::from_light(args.light);
        install_bundled(&settings.builtin_root)?;
        let names = list_theme_names(&settings.builtin_root, &settings.user_root, variant)?;
        if names.is_empty() {
            info!("No {variant} themes installed.");
        }
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    if args.last {
        let store = FileLastUsedStore::in_cache_dir(&settings.cache_root);
        match store.load()? {
            Some(name) => println!("{name}"),
            None => info!("No theme has been applied yet."),
        }
        return Ok(());
    }

    if let Some(theme) = args.theme.as_deref() {
        let resolver = ThemeResolver::from_settings(settings);
        let data = resolver.resolve_and_load(&ThemeIdentifier::parse(theme), args.light)?;
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
