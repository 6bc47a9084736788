//! Line commands for the headless panel.
//!
//! A background thread reads stdin and feeds parsed commands to the
//! runtime loop over a channel. Controls are addressed by the short
//! names [`ControlId::parse`] accepts.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use faderdeck_types::ControlId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a fader to a slider position.
    Set(ControlId, i32),
    /// Flip a toggle control.
    Toggle(ControlId),
    /// Print the panel values and the discovered channels.
    Show,
    Quit,
}

/// Parse one input line. Unrecognized input yields None.
pub fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "set" => {
            let control = ControlId::parse(words.next()?)?;
            let value = words.next()?.parse::<i32>().ok()?;
            Some(Command::Set(control, value))
        }
        "toggle" => {
            let control = match words.next() {
                Some(name) => ControlId::parse(name)?,
                None => ControlId::EqToggle,
            };
            if !control.is_toggle() {
                return None;
            }
            Some(Command::Toggle(control))
        }
        "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Spawn the stdin reader. The receiver yields parsed commands; a Quit
/// is sent when stdin closes so piped input shuts the panel down.
pub fn spawn_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match parse(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        return;
                    }
                    if command == Command::Quit {
                        return;
                    }
                }
                None => {
                    if !line.trim().is_empty() {
                        eprintln!("usage: set <control> <0-1000> | toggle [eq] | show | quit");
                    }
                }
            }
        }
        let _ = tx.send(Command::Quit);
    });
    rx
}
