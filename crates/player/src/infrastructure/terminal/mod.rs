//! Terminal runner
//!
//! Drives the same controllers as the browser build from stdin, against a
//! real game server. View, map and audio updates are written to the log.
//! A game is started with the `start` command; the adapter's cookie store
//! keeps every later request in that session.

pub mod adapters;
pub mod commands;

use std::rc::Rc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;

use crate::infrastructure::http_client::ApiAdapter;
use crate::infrastructure::platform::create_platform;
use crate::ports::outbound::{MessageKind, ViewPort};
use crate::runner::config::ClientConfig;
use crate::runner::{GameClient, RunnerDeps};

pub use adapters::{SoftwareMixer, TerminalMap, TerminalView};
pub use commands::{Command, CommandError, HELP};

/// Run until stdin closes or `quit` is entered.
pub async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let api = Rc::new(
        ApiAdapter::new(&config.server_url)
            .with_context(|| format!("connecting to {}", config.server_url))?,
    );
    tracing::info!(server = %config.server_url, "Terminal player starting");

    let local = LocalSet::new();
    local
        .run_until(async move {
            let view = Rc::new(TerminalView::new());
            let client = GameClient::new(RunnerDeps {
                raw_api: api.clone(),
                view: view.clone(),
                map: Rc::new(TerminalMap),
                audio: Rc::new(SoftwareMixer::new()),
                platform: Rc::new(create_platform()),
                config,
            });
            client.start().await;
            println!("{HELP}");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("reading stdin")? {
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(CommandError::Empty) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "Bad command");
                        continue;
                    }
                };
                if !execute(&client, &api, view.as_ref(), command).await {
                    break;
                }
            }
            tracing::info!("Terminal player stopped");
            Ok::<(), anyhow::Error>(())
        })
        .await
}

/// Returns `false` when the runner should stop.
async fn execute(
    client: &GameClient,
    api: &ApiAdapter,
    view: &dyn ViewPort,
    command: Command,
) -> bool {
    match command {
        Command::Start(form) => match api.start_game(&form).await {
            Ok(()) => client.refresh_state().await,
            Err(e) => view.show_message(&e.to_string(), MessageKind::Error),
        },
        Command::Key(key) => {
            let outcome = client.dispatcher.on_key_down(&key, false);
            tracing::debug!(?outcome, "Key handled");
        }
        Command::Button(label) => {
            client.dispatcher.on_control_button(&label);
        }
        Command::Answer(text) => {
            view.set_riddle_answer(&text);
            client.riddles.submit_from_view().await;
        }
        Command::CloseRiddle => client.modals.close_riddle(),
        Command::ShowEvent(prompt) => client.show_event(&prompt),
        Command::Choose(choice) => client.events.choose_event(&choice).await,
        Command::Volume(percent) => client.audio.set_master_volume(percent),
        Command::Complete => client.completion.complete_game().await,
        Command::Click => client.dispatcher.on_document_click(false),
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }
    true
}
