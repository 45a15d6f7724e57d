//! Main loop and side-effect execution
//!
//! `App` owns the model and is the only writer of the document and of the
//! output device. It reads keys, runs them through the dispatcher, carries
//! out the commands `update` returns and redraws. Prompts, the search
//! navigation loop and the bracket flash are nested loops on the same
//! thread that read keys through the same decoder.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::bracket::find_matching_bracket;
use crate::commands::Cmd;
use crate::input::{ByteSource, KeyDecoder};
use crate::keymap::{Command, KeyCode, Keymap, Keystroke};
use crate::messages::{AppMsg, EditorMsg, Msg};
use crate::model::{AppModel, Document, KeyHints, Position};
use crate::search::SearchState;
use crate::update::update;
use crate::util::is_printable;
use crate::view::{clear_screen, render_frame};

use super::input::handle_keystroke;

/// Whether the main loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The editor application
pub struct App<S, W: Write> {
    model: AppModel,
    keymap: Keymap,
    decoder: KeyDecoder<S>,
    output: W,
    resize_events: Option<Receiver<(u16, u16)>>,
    /// Reused frame buffer
    frame: Vec<u8>,
    /// Whether the last frame drew a status message
    message_shown: bool,
}

impl<S: ByteSource, W: Write> App<S, W> {
    /// Create the app. Key hints in status messages follow `keymap`, and the
    /// startup message is shown unless the model already has one.
    pub fn new(mut model: AppModel, keymap: Keymap, source: S, output: W) -> Self {
        let defaults = KeyHints::default();
        model.key_hints = KeyHints {
            quit: keymap.display_for(Command::Quit).unwrap_or(defaults.quit),
            save: keymap.display_for(Command::Save).unwrap_or(defaults.save),
        };
        if model.ui.transient_message.is_none() {
            let message = model.startup_message();
            model.set_status(message);
        }

        Self {
            model,
            keymap,
            decoder: KeyDecoder::new(source),
            output,
            resize_events: None,
            frame: Vec::new(),
            message_shown: false,
        }
    }

    /// Apply terminal sizes received on `rx` as they arrive
    pub fn with_resize_events(mut self, rx: Receiver<(u16, u16)>) -> Self {
        self.resize_events = Some(rx);
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user quits or input ends.
    ///
    /// The screen is cleared on the way out, including on errors.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();

        self.frame.clear();
        clear_screen(&mut self.frame);
        self.output
            .write_all(&self.frame)
            .and_then(|()| self.output.flush())
            .context("clearing screen")?;

        match result {
            Err(e) if is_end_of_input(&e) => {
                tracing::info!("input closed, exiting");
                Ok(())
            }
            other => other,
        }
    }

    fn event_loop(&mut self) -> Result<()> {
        self.refresh()?;
        loop {
            let key = self.next_key()?;
            if let Some(cmd) = handle_keystroke(&mut self.model, &self.keymap, key) {
                if self.execute(cmd)? == Flow::Quit {
                    tracing::info!("quit");
                    return Ok(());
                }
            }
            self.refresh()?;
        }
    }

    /// Compose and write one frame
    pub fn refresh(&mut self) -> Result<()> {
        let now = Instant::now();
        self.frame.clear();
        render_frame(&self.model, now, &mut self.frame);
        self.message_shown = self.model.ui.status_text(now).is_some();

        self.output
            .write_all(&self.frame)
            .and_then(|()| self.output.flush())
            .context("writing frame")
    }

    /// Wait for the next key.
    ///
    /// Between read timeouts, pending resizes are applied and the screen is
    /// redrawn if the status message has expired.
    fn next_key(&mut self) -> Result<Keystroke> {
        loop {
            if self.apply_resize_events() {
                self.refresh()?;
            }

            if let Some(key) = self.decoder.poll_key().context("reading key")? {
                return Ok(key);
            }

            let message_visible = self.model.ui.status_text(Instant::now()).is_some();
            if message_visible != self.message_shown {
                self.refresh()?;
            }
        }
    }

    fn apply_resize_events(&mut self) -> bool {
        let Some(rx) = &self.resize_events else {
            return false;
        };

        let mut resized = false;
        while let Ok((cols, rows)) = rx.try_recv() {
            tracing::debug!(cols, rows, "terminal resized");
            update(&mut self.model, Msg::resize(cols, rows));
            resized = true;
        }
        resized
    }

    /// Carry out a command and anything it leads to
    fn execute(&mut self, cmd: Cmd) -> Result<Flow> {
        let follow_up = match cmd {
            Cmd::None | Cmd::Redraw => None,

            Cmd::SaveFile { path, content } => {
                let result = write_file(&path, &content);
                update(&mut self.model, Msg::App(AppMsg::SaveCompleted { path, result }))
            }

            Cmd::LoadFile { path } => {
                let result = Document::from_file(&path).map_err(|e| e.to_string());
                update(&mut self.model, Msg::App(AppMsg::FileLoaded { path, result }))
            }

            Cmd::PromptSaveAs => {
                let msg = match self.prompt("Save as: ")? {
                    Some(name) => AppMsg::SaveAs(PathBuf::from(name)),
                    None => AppMsg::SaveCancelled,
                };
                update(&mut self.model, Msg::App(msg))
            }

            Cmd::PromptOpenFile => {
                let msg = match self.prompt("Open file: ")? {
                    Some(name) => AppMsg::OpenPath(PathBuf::from(name)),
                    None => AppMsg::OpenCancelled,
                };
                update(&mut self.model, Msg::App(msg))
            }

            Cmd::Find => {
                self.find()?;
                None
            }

            Cmd::MatchBracket { open, close } => {
                self.flash_matching_bracket(open, close)?;
                None
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    if self.execute(cmd)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                None
            }

            Cmd::Quit => return Ok(Flow::Quit),
        };

        match follow_up {
            Some(cmd) => self.execute(cmd),
            None => Ok(Flow::Continue),
        }
    }

    /// Read a line of input on the message line.
    ///
    /// Returns `None` when the user presses Escape or confirms an empty
    /// answer.
    fn prompt(&mut self, prefix: &str) -> Result<Option<String>> {
        let mut input = String::new();

        loop {
            self.model.set_status(format!("{}{}", prefix, input));
            self.refresh()?;

            let key = self.next_key()?;
            match key.key {
                KeyCode::Backspace | KeyCode::Delete => {
                    input.pop();
                }
                KeyCode::Char('h') if key.mods.ctrl() => {
                    input.pop();
                }
                KeyCode::Escape => {
                    self.model.ui.clear_status();
                    return Ok(None);
                }
                KeyCode::Enter => {
                    self.model.ui.clear_status();
                    break;
                }
                KeyCode::Char(ch) if key.mods.is_empty() && is_printable(ch) => input.push(ch),
                _ => {}
            }
        }

        Ok((!input.is_empty()).then_some(input))
    }

    /// Incremental search: prompt for a query, then step through matches
    /// with the arrow keys. Escape returns to where the search started.
    fn find(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Search: ")? else {
            return Ok(());
        };

        let Some(mut search) =
            SearchState::search(&self.model.document, &query, self.model.editor.cursor)
        else {
            tracing::debug!(%query, "no match");
            self.model.set_status("No match found.");
            return Ok(());
        };

        tracing::debug!(%query, matches = search.matches().len(), "search");
        self.jump_to(search.current());
        self.model
            .set_status("Use arrow keys to move, ESC or ENTER to exit.");

        loop {
            self.refresh()?;
            let key = self.next_key()?;
            match key.key {
                KeyCode::Down | KeyCode::Right => {
                    let position = search.next();
                    self.jump_to(position);
                }
                KeyCode::Up | KeyCode::Left => {
                    let position = search.prev();
                    self.jump_to(position);
                }
                KeyCode::Escape => {
                    self.jump_to(search.saved_cursor());
                    self.model.set_status("Esc");
                    return Ok(());
                }
                KeyCode::Enter => {
                    self.model.ui.clear_status();
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn jump_to(&mut self, position: Position) {
        update(
            &mut self.model,
            Msg::Editor(EditorMsg::SetCursorPosition {
                line: position.line,
                column: position.column,
            }),
        );
    }

    /// Show the bracket matching `close` for a moment, then put the cursor
    /// and view back exactly as they were
    fn flash_matching_bracket(&mut self, open: char, close: char) -> Result<()> {
        let saved = self.model.editor.clone();

        match find_matching_bracket(&self.model.document, saved.cursor, open, close) {
            Some(position) => {
                self.jump_to(position);
                self.refresh()?;
                thread::sleep(self.model.config.bracket_flash());
                self.model.editor = saved;
            }
            None => self.model.set_status("No matching parenthesis found"),
        }
        Ok(())
    }
}

/// Write `content` to `path`, creating or truncating it
fn write_file(path: &Path, content: &[u8]) -> Result<usize, String> {
    let mut file = File::create(path)
        .map_err(|e| format!("error creating file: {}: {}", e, path.display()))?;
    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|e| format!("error writing to file: {}: {}", e, path.display()))?;
    Ok(content.len())
}

fn is_end_of_input(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
