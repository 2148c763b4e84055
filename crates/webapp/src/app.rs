//! Application shell: owns the state, the catalog load, and the event loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::catalog::{CatalogClient, CatalogError};
use crate::command::{Command, HELP};
use crate::config::WebappConfig;
use crate::loader::CatalogLoad;
use crate::state::{Action, UiState};
use crate::view;

/// Errors that end the event loop.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The catalog client could not be built from the configuration.
    #[error("catalog client: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading input or writing the page failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The page template failed to render.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// A mounted page.
///
/// Creating an `App` starts the catalog fetch; dropping it cancels a fetch
/// that has not finished yet.
#[derive(Debug)]
pub struct App {
    state: UiState,
    updates: mpsc::Receiver<Action>,
    load: CatalogLoad,
    load_pending: bool,
}

impl App {
    /// Mount the page and start the one catalog fetch.
    #[must_use]
    pub fn mount(client: CatalogClient) -> Self {
        let (tx, updates) = mpsc::channel(1);
        let load = CatalogLoad::spawn(client, tx);

        Self {
            state: UiState::new(),
            updates,
            load,
            load_pending: true,
        }
    }

    /// Current UI state.
    #[must_use]
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    /// Apply a user interaction.
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Whether the catalog outcome is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.load_pending
    }

    /// Wait for the catalog outcome and apply it.
    ///
    /// Returns `false` without waiting once the outcome has been handled.
    pub async fn settle_catalog(&mut self) -> bool {
        if !self.load_pending {
            return false;
        }

        let update = self.updates.recv().await;
        self.load_pending = false;

        if let Some(action) = update {
            self.state.apply(action);
            true
        } else {
            tracing::debug!(
                finished = self.load.is_finished(),
                "Catalog load ended without an outcome"
            );
            false
        }
    }

    /// Render the page.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self) -> askama::Result<String> {
        view::render(&self.state)
    }
}

/// Run the interactive session until `quit` or end of input.
///
/// The page is drawn once on mount and again after every change: each
/// applied command and the arrival of the catalog outcome. Input is handled
/// while the catalog request is still in flight.
///
/// # Errors
///
/// Returns an error if the catalog URL is unusable, or if reading input,
/// writing output, or rendering fails.
pub async fn run<R, W>(config: &WebappConfig, input: R, mut output: W) -> Result<(), RunError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let client = CatalogClient::new(&config.catalog_base_url)?;
    tracing::debug!(url = %client.products_url(), "Mounting page");

    let mut app = App::mount(client);
    let mut lines = input.lines();

    draw(&app, &mut output).await?;

    loop {
        tokio::select! {
            changed = app.settle_catalog(), if app.is_loading() => {
                if changed {
                    draw(&app, &mut output).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match line.parse::<Command>() {
                    Ok(Command::Dispatch(action)) => {
                        app.dispatch(action);
                        draw(&app, &mut output).await?;
                    }
                    Ok(Command::Show) => draw(&app, &mut output).await?,
                    Ok(Command::Help) => write(&mut output, HELP).await?,
                    Ok(Command::Quit) => break,
                    Err(e) => write(&mut output, &format!("{e}\n")).await?,
                }
            }
        }
    }

    Ok(())
}

async fn draw<W: AsyncWrite + Unpin>(app: &App, output: &mut W) -> Result<(), RunError> {
    let page = app.render()?;
    write(output, &format!("{page}\n> ")).await
}

async fn write<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), RunError> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
