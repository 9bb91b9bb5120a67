use anyhow::Context;
use std::io::{BufRead, Write};

use crate::classifier::classify;
use crate::presentation::ResultView;
use crate::rules::trim_message;

pub const LANDING_BANNER: &str = "\
🛡️  Scam Message Checker
Paste a text, SMS or chat message and get a quick Safe / Suspicious / Unsafe
verdict with the signals that triggered it. Everything runs locally.

Press Enter (or type 'start') to open the detector, '/quit' to exit.";

pub const DETECTOR_HELP: &str = "\
Paste the message, then submit it with an empty line or '/check'.
'/back' returns to the start page, '/quit' exits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Detector,
}

/// Two-view controller. Holds no classification state of its own.
#[derive(Debug, Clone)]
pub struct Session {
    view: View,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn open_detector(&mut self) {
        self.view = View::Detector;
    }

    pub fn back(&mut self) {
        self.view = View::Landing;
    }

    /// Runs the check action. Only available on the detector view.
    pub fn check(&self, text: &str) -> Option<ResultView> {
        match self.view {
            View::Detector => Some(ResultView::from_result(&classify(text))),
            View::Landing => {
                log::debug!("Ignoring check request on the landing view");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub show_advice: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_advice: true }
    }
}

/// Drives a [`Session`] over line-based input until `/quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: SessionOptions,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    let mut buffer = String::new();

    writeln!(output, "{LANDING_BANNER}")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = trim_message(&line);

        if command == "/quit" {
            break;
        }

        match session.view() {
            View::Landing => {
                if command.is_empty() || command.eq_ignore_ascii_case("start") {
                    session.open_detector();
                    writeln!(output, "\n{DETECTOR_HELP}")?;
                } else {
                    writeln!(output, "Press Enter to open the detector.")?;
                }
            }
            View::Detector => match command {
                "/back" => {
                    buffer.clear();
                    session.back();
                    writeln!(output, "\n{LANDING_BANNER}")?;
                }
                "" | "/check" => {
                    submit(&session, &mut buffer, &mut output, options)?;
                }
                _ => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                }
            },
        }
    }

    if session.view() == View::Detector && !trim_message(&buffer).is_empty() {
        submit(&session, &mut buffer, &mut output, options)?;
    }

    output.flush()?;
    Ok(())
}

fn submit<W: Write>(
    session: &Session,
    buffer: &mut String,
    output: &mut W,
    options: SessionOptions,
) -> anyhow::Result<()> {
    if let Some(view) = session.check(buffer) {
        write!(output, "\n{}", view.render_text(options.show_advice))?;
        writeln!(output)?;
    }
    buffer.clear();
    Ok(())
}
