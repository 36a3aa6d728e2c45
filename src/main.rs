use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use sqlgen::app::action::Action;
use sqlgen::app::effect::Effect;
use sqlgen::app::effect_runner::EffectRunner;
use sqlgen::app::form_state::FormState;
use sqlgen::app::ports::SettingsStore;
use sqlgen::app::reducer::reduce;
use sqlgen::app::render_schedule::next_animation_deadline;
use sqlgen::app::state::AppState;
use sqlgen::cli::{Args, render_print};
use sqlgen::error;
use sqlgen::infra::adapters::TomlSettingsStore;
use sqlgen::infra::clipboard::FallbackClipboard;
use sqlgen::infra::config::paths::{default_settings_path, log_file_path};
use sqlgen::infra::export::FsSqlExporter;
use sqlgen::logging;
use sqlgen::ui::adapters::TuiAdapter;
use sqlgen::ui::event::handler::handle_event;
use sqlgen::ui::tui::TuiRunner;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    logging::init_from(log_file_path(), !args.print)?;

    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => default_settings_path()?,
    };
    let mut settings = TomlSettingsStore::new(settings_path).load()?;
    args.apply(&mut settings);

    if args.print {
        let request = FormState::from_defaults(&settings.form).to_request();
        let output = render_print(&request, args.format)?;
        writeln!(stdout(), "{}", output)?;
        return Ok(());
    }

    tracing::info!(export_dir = %settings.export_dir.display(), "starting sqlgen");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let effect_runner = EffectRunner::new(
        Arc::new(FallbackClipboard::system()),
        Arc::new(FsSqlExporter::new(settings.export_dir.clone())),
        action_tx.clone(),
    );

    let mut state = AppState::new(settings.form);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_width = initial_size.width;
    state.ui.terminal_height = initial_size.height;

    loop {
        let deadline = next_animation_deadline(&state);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.is_dirty() {
                    state.clear_expired_at(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
                state.clear_dirty();
            }
            // Message or copy flash expired
            _ = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let effects = reduce(&mut state, Action::Render, Instant::now());
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    tracing::info!("sqlgen exited");
    Ok(())
}
