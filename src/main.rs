use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use tedit::cli::CliArgs;
use tedit::config::EditorConfig;
use tedit::config_paths;
use tedit::input::StdinSource;
use tedit::keymap::{load_keymap, Keymap};
use tedit::model::AppModel;
use tedit::terminal::{self, RawMode};
use tedit::App;

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config();
    let _log_guard = tedit::tracing::init();

    let result = run(startup);
    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

fn run(startup: tedit::cli::StartupConfig) -> Result<()> {
    let config = EditorConfig::load();

    let user_keymap = config_paths::keymap_file();
    let bindings = load_keymap(user_keymap.as_deref(), startup.keymap.as_deref())
        .context("loading keymap")?;
    let keymap = Keymap::with_bindings(bindings);
    tracing::info!("keymap loaded with {} bindings", keymap.len());

    let (document, open_error) = startup.open_document();

    let _raw_mode = RawMode::enable().context("enabling raw mode")?;
    let (cols, rows) = terminal::window_size().context("reading window size")?;
    let resize_events = terminal::spawn_resize_listener().context("watching for resizes")?;

    let mut model = AppModel::new(document, config, cols, rows).with_readonly(startup.readonly);
    if let Some(message) = open_error {
        model.set_status(message);
    }

    let mut app = App::new(model, keymap, StdinSource::new(), io::stdout())
        .with_resize_events(resize_events);
    app.run()
}
