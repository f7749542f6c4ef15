//! Shell state: turns input lines into session commands and output lines.

use std::path::PathBuf;

use fbrowse_core::{Command, CommandRegistry, Event, PasteJob, PasteReport, Session};

use crate::render;

/// What the main loop should do after a line was handled.
#[derive(Debug)]
pub enum Outcome {
    /// Print these lines and read the next one.
    Print(Vec<String>),
    /// Run this paste in the background, then call [`App::finish_paste`].
    Paste { job: PasteJob, target: PathBuf },
    Quit,
}

/// The line shell around a [`Session`].
pub struct App {
    session: Session,
    registry: CommandRegistry,
    background_paste: bool,
}

impl App {
    pub fn new(session: Session, background_paste: bool) -> Self {
        Self {
            session,
            registry: CommandRegistry::new(),
            background_paste,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt shown before each input line.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.session.current_dir().display())
    }

    /// Lines printed at startup: the initial listing.
    pub fn startup(&mut self) -> Vec<String> {
        self.run(Command::Refresh)
    }

    /// Handles one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match head {
            "" => Outcome::Print(Vec::new()),
            "quit" | "exit" => Outcome::Quit,
            "help" => Outcome::Print(render::help(&self.registry)),
            "palette" => {
                let results = self.registry.fuzzy_search(rest.trim());
                if results.is_empty() {
                    Outcome::Print(vec![format!("no command matches {:?}", rest.trim())])
                } else {
                    Outcome::Print(render::commands(results))
                }
            }
            _ => match self.registry.parse(line) {
                Ok(Command::Paste) if self.background_paste => match self.session.paste_job() {
                    Some(job) => Outcome::Paste {
                        job,
                        target: self.session.current_dir().to_path_buf(),
                    },
                    None => Outcome::Print(self.run(Command::Paste)),
                },
                Ok(command) => Outcome::Print(self.run(command)),
                Err(e) => Outcome::Print(vec![format!("error: {e}")]),
            },
        }
    }

    /// Settles a background paste and renders its result.
    pub fn finish_paste(&mut self, report: PasteReport) -> Vec<String> {
        let event = self.session.finish_paste(report);
        self.render_with_refresh(&event)
    }

    fn run(&mut self, command: Command) -> Vec<String> {
        let event = self.session.dispatch(command);
        self.render_with_refresh(&event)
    }

    /// Renders `event`, followed by a fresh listing when it changed the disk.
    fn render_with_refresh(&mut self, event: &Event) -> Vec<String> {
        let date_format = self.session.config().ui.date_format.clone();
        let mut lines = render::event(event, &date_format);
        if matches!(event, Event::OperationComplete { .. } | Event::PasteFinished(_)) {
            let refreshed = self.session.dispatch(Command::Refresh);
            lines.extend(render::event(&refreshed, &date_format));
        }
        lines
    }
}
