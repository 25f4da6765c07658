//! The route-processing loop: one filename in, one block of console text out.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, Text};
use tracing::{debug, info};

use crate::error::{RouteError, RouteFileError};
use crate::plot::{PlottedRoute, plot_route};
use crate::render::{self, Markers};
use crate::route::read_route_file;

/// Display and loop settings shared by interactive and batch runs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub markers: Markers,
    pub colorize: bool,
    pub stop_word: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            colorize: false,
            stop_word: crate::config::DEFAULT_STOP_WORD.to_string(),
        }
    }
}

impl Settings {
    pub fn prompt(&self) -> String {
        format!(
            "Enter the next route instructions file, or enter {} to finish:",
            self.stop_word
        )
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stop,
    Plot(PathBuf),
}

impl Command {
    /// Surrounding whitespace is dropped before matching the stop word and
    /// before the input is used as a file name.
    pub fn parse(input: &str, stop_word: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(stop_word) {
            Command::Stop
        } else {
            Command::Plot(PathBuf::from(input))
        }
    }
}

/// Result of processing one route file.
#[derive(Debug)]
pub enum Outcome {
    Plotted(PlottedRoute),
    FileError(RouteFileError),
    OutsideGrid(RouteError),
}

/// Read, parse and plot a single route file.
pub fn process_file(path: &Path) -> Outcome {
    let route = match read_route_file(path) {
        Ok(route) => route,
        Err(e) => {
            match &e {
                RouteFileError::FileMissing { path, source } => {
                    debug!(path = %path.display(), "cannot read route file: {source}")
                }
                RouteFileError::MalformedContent { reason } => {
                    debug!(path = %path.display(), "malformed route file: {reason}")
                }
            }
            return Outcome::FileError(e);
        }
    };

    match plot_route(&route) {
        Ok(plotted) => {
            info!(
                path = %path.display(),
                route = %render::path_to_string(&plotted.path),
                "route plotted"
            );
            Outcome::Plotted(plotted)
        }
        Err(e) => {
            info!(path = %path.display(), "route rejected: {e}");
            Outcome::OutsideGrid(e)
        }
    }
}

/// Console text for an outcome.
pub fn format_outcome(outcome: &Outcome, markers: &Markers, colorize: bool) -> String {
    match outcome {
        Outcome::Plotted(plotted) => {
            let mut out = String::from("\nRoute coordinates:\n");
            out.push_str(&render::render_path(&plotted.path));
            out.push_str("\nRoute plot:\n");
            out.push_str(&render::render_grid(&plotted.grid, markers, colorize));
            out
        }
        Outcome::FileError(e) => paint_error(e.to_string(), colorize),
        Outcome::OutsideGrid(_) => {
            paint_error("Error: The route is outside of the grid".to_string(), colorize)
        }
    }
}

fn paint_error(message: String, colorize: bool) -> String {
    if colorize {
        format!("{}\n", message.red())
    } else {
        format!("{message}\n")
    }
}

/// Handle one command, writing its console text to `out`.
///
/// Returns `false` when the session should end.
pub fn handle<W: Write>(command: &Command, settings: &Settings, out: &mut W) -> Result<bool> {
    match command {
        Command::Stop => Ok(false),
        Command::Plot(path) => {
            let outcome = process_file(path);
            write!(
                out,
                "{}",
                format_outcome(&outcome, &settings.markers, settings.colorize)
            )?;
            out.flush()?;
            Ok(true)
        }
    }
}

/// Prompt for route files until the stop word is entered.
///
/// Falls back to reading plain lines when stdin is not a terminal.
pub fn run_interactive<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        debug!("stdin is not a terminal, reading file names line by line");
        return run_lines(stdin.lock(), settings, out);
    }

    let prompt = settings.prompt();
    loop {
        writeln!(out)?;
        out.flush()?;
        let input = match Text::new(&prompt).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("prompt cancelled, ending session");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let command = Command::parse(&input, &settings.stop_word);
        if !handle(&command, settings, out)? {
            break;
        }
    }
    Ok(())
}

/// Read one file name per line until the stop word or end of input.
pub fn run_lines<R: BufRead, W: Write>(reader: R, settings: &Settings, out: &mut W) -> Result<()> {
    let prompt = settings.prompt();
    for line in reader.lines() {
        writeln!(out, "\n{prompt}")?;
        let command = Command::parse(&line?, &settings.stop_word);
        if !handle(&command, settings, out)? {
            break;
        }
    }
    Ok(())
}

/// Process each file in turn, with the same output as the interactive loop.
///
/// Arguments are always file names here; the stop word has no meaning.
pub fn run_batch<W: Write>(files: &[PathBuf], settings: &Settings, out: &mut W) -> Result<()> {
    for file in files {
        handle(&Command::Plot(file.clone()), settings, out)?;
    }
    Ok(())
}
