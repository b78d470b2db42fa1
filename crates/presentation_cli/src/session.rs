//! Interactive form session
//!
//! Reads line commands from stdin and re-renders the form after each one,
//! and again whenever a background search or the copied-flag timer changes
//! the form.

use std::sync::Arc;

use application::{ApplicationError, FormController, GenerateOutcome};
use domain::Provider;
use infrastructure::{AppConfig, NominatimSearchAdapter, Osc52Clipboard, SystemUrlOpener};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::commands::{self, Command, CommandError};
use crate::render;

/// What the session loop should do after a command
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue(Option<String>),
    Quit,
}

/// Run the session until `sair` or end of input
pub async fn run(config: &AppConfig, provider: Option<Provider>) -> anyhow::Result<()> {
    let search = NominatimSearchAdapter::new(&config.geocoding)?;
    let form = FormController::new(
        Arc::new(search),
        Arc::new(Osc52Clipboard::stdout()),
        Arc::new(SystemUrlOpener::default()),
        config.form_settings(),
    );
    if let Some(provider) = provider {
        form.set_provider(provider);
    }

    let mut changes = form.subscribe();
    changes.borrow_and_update();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Interactive session started");
    println!("{}", render::render(&form.snapshot(), Some(render::COMMAND_HELP)));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let notice = match handle_line(&form, &line).await {
                    Flow::Quit => break,
                    Flow::Continue(notice) => notice,
                };
                changes.borrow_and_update();
                println!("{}", render::render(&form.snapshot(), notice.as_deref()));
            },
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                changes.borrow_and_update();
                println!("{}", render::render(&form.snapshot(), None));
            },
        }
    }

    info!("Interactive session ended");
    Ok(())
}

async fn handle_line(form: &FormController, line: &str) -> Flow {
    match commands::parse(line) {
        Ok(Command::Quit) => Flow::Quit,
        Ok(command) => Flow::Continue(apply(form, command).await),
        Err(CommandError::Empty) => Flow::Continue(None),
        Err(e) => Flow::Continue(Some(e.to_string())),
    }
}

/// Apply a command to the form, returning a notice for the user if any
async fn apply(form: &FormController, command: Command) -> Option<String> {
    debug!(?command, "Applying command");
    match command {
        Command::Type { role, text } => {
            form.input_text(role, text);
            None
        },
        Command::Choose { role, position } => form
            .select_candidate(role, position - 1)
            .err()
            .map(|_| format!("Não há endereço {position} na lista. Aguarde a busca ou digite mais.")),
        Command::Enter(role) => form
            .activate(role)
            .is_none()
            .then(|| "Nenhum endereço na lista para confirmar.".to_string()),
        Command::Clear(role) => {
            form.clear(role);
            None
        },
        Command::App(provider) => {
            form.set_provider(provider);
            None
        },
        // A refusal shows up as the usage notice in the next render.
        Command::Generate => {
            if let GenerateOutcome::Generated(link) = form.generate_link() {
                debug!(len = link.len(), "Link ready");
            }
            None
        },
        Command::Copy => match form.copy_link() {
            Ok(()) => None,
            Err(ApplicationError::NoLinkGenerated) => Some(no_link_notice()),
            Err(e) => Some(format!("Não foi possível copiar: {e}")),
        },
        Command::Share => match form.share_link().await {
            Ok(url) => Some(format!("Abrindo o WhatsApp:\n{url}")),
            Err(ApplicationError::NoLinkGenerated) => Some(no_link_notice()),
            Err(e) => {
                warn!(error = %e, "Share link not opened, printing it instead");
                form.share_url().map(|url| {
                    format!("Não foi possível abrir o navegador ({e}). Use este link:\n{url}")
                })
            },
        },
        Command::Help => Some(render::COMMAND_HELP.to_string()),
        Command::Quit => None,
    }
}

fn no_link_notice() -> String {
    "Gere um link primeiro.".to_string()
}
