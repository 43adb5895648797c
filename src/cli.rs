// SPDX-License-Identifier: MPL-2.0
//! Command scripts for the headless driver.
//!
//! A script is a list of user actions, one per line. Blank lines and lines
//! starting with `#` are ignored. Halves are addressed by photo index (in
//! selection order) and side:
//!
//! ```text
//! load
//! output
//! delete 0 right
//! rotate 1 left
//! border 1 left off
//! open 1 left
//! key ArrowRight
//! close
//! export
//! status
//! ```

use crate::app::{runtime, view, App, Message};
use crate::application::port::{DirectoryPicker, Exporter, PhotoSelector};
use crate::application::query::PreviewKey;
use crate::domain::photo::{HalfKey, Side};
use crate::error::{Error, Result};
use std::io::Write;

/// One half addressed by photo index and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfRef {
    pub index: usize,
    pub side: Side,
}

/// A parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Load,
    Output,
    Delete(HalfRef),
    Rotate(HalfRef),
    Border(HalfRef, bool),
    Open(HalfRef),
    Key(PreviewKey),
    Close,
    Export,
    Status,
}

impl ScriptCommand {
    /// Parses one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Script`] for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("load", []) => ScriptCommand::Load,
            ("output", []) => ScriptCommand::Output,
            ("delete", [index, side]) => ScriptCommand::Delete(half_ref(index, side)?),
            ("rotate", [index, side]) => ScriptCommand::Rotate(half_ref(index, side)?),
            ("border", [index, side, flag]) => {
                ScriptCommand::Border(half_ref(index, side)?, on_off(flag)?)
            }
            ("open", [index, side]) => ScriptCommand::Open(half_ref(index, side)?),
            ("key", [key]) => ScriptCommand::Key(
                PreviewKey::from_name(key)
                    .ok_or_else(|| Error::Script(format!("unknown key '{key}'")))?,
            ),
            ("close", []) => ScriptCommand::Close,
            ("export", []) => ScriptCommand::Export,
            ("status", []) => ScriptCommand::Status,
            ("load" | "output" | "delete" | "rotate" | "border" | "open" | "key" | "close"
            | "export" | "status", _) => {
                return Err(Error::Script(format!("wrong arguments for '{name}'")));
            }
            _ => return Err(Error::Script(format!("unknown command '{name}'"))),
        };
        Ok(Some(command))
    }

    /// Message this command sends to the app. `status` sends none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Script`] when the photo index is out of range.
    pub fn to_message(self, app: &App) -> Result<Option<Message>> {
        let message = match self {
            ScriptCommand::Load => Message::SelectPhotos,
            ScriptCommand::Output => Message::SelectOutputDirectory,
            ScriptCommand::Delete(half) => Message::ToggleDelete(resolve(app, half)?),
            ScriptCommand::Rotate(half) => Message::Rotate(resolve(app, half)?),
            ScriptCommand::Border(half, enabled) => {
                Message::SetBorderRemoval(resolve(app, half)?, enabled)
            }
            ScriptCommand::Open(half) => Message::OpenPreview(resolve(app, half)?),
            ScriptCommand::Key(key) => Message::PreviewKey(key),
            ScriptCommand::Close => Message::ClosePreview,
            ScriptCommand::Export => Message::Export,
            ScriptCommand::Status => return Ok(None),
        };
        Ok(Some(message))
    }
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`Error::Script`] naming the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>> {
    text.lines()
        .enumerate()
        .filter_map(|(number, line)| match ScriptCommand::parse(line) {
            Ok(command) => command.map(Ok),
            Err(Error::Script(msg)) => Some(Err(Error::Script(format!("line {}: {msg}", number + 1)))),
            Err(err) => Some(Err(err)),
        })
        .collect()
}

/// Runs `commands` against the app, writing `status` reports to `out`.
///
/// # Errors
///
/// Stops at the first command that addresses a missing photo, or when
/// writing to `out` fails.
pub async fn run_script<B, W>(
    app: &mut App,
    backend: &B,
    commands: &[ScriptCommand],
    out: &mut W,
) -> Result<()>
where
    B: PhotoSelector + DirectoryPicker + Exporter,
    W: Write,
{
    for command in commands {
        tracing::debug!(?command, "script command");
        match command.to_message(app)? {
            Some(message) => runtime::dispatch(app, backend, message).await,
            None => write!(out, "{}", view::status(app))?,
        }
    }
    Ok(())
}

fn half_ref(index: &str, side: &str) -> Result<HalfRef> {
    let index = index
        .parse()
        .map_err(|_| Error::Script(format!("'{index}' is not a photo index")))?;
    let side = side
        .parse()
        .map_err(|_| Error::Script(format!("'{side}' is not a side (left or right)")))?;
    Ok(HalfRef { index, side })
}

fn on_off(flag: &str) -> Result<bool> {
    match flag {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(Error::Script(format!("expected 'on' or 'off', got '{other}'"))),
    }
}

fn resolve(app: &App, half: HalfRef) -> Result<HalfKey> {
    app.key_at(half.index, half.side).ok_or_else(|| {
        Error::Script(format!(
            "no photo at index {} ({} loaded)",
            half.index,
            app.photos().len()
        ))
    })
}
