//! Line-based scripts for driving a headless editor session
//!
//! ```text
//! # comments and blank lines are ignored
//! start
//! click 37.5665 126.978
//! undo
//! no        # answer the next confirmation with "no"
//! clear
//! complete
//! cancel
//! ```

use anyhow::{Context, Result, bail};

use crate::domain::BoundaryPoint;
use crate::editor::{BoundaryEditor, MapSurface, ScriptedDialogs};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Click(BoundaryPoint),
    Undo,
    Clear,
    Complete,
    Cancel,
    /// Queue an answer for the next confirmation
    Answer(bool),
}

/// Parse a replay script
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (index, raw) in script.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("start", []) => Command::Start,
            ("click", [lat, lng]) => {
                let lat: f64 = lat
                    .parse()
                    .with_context(|| format!("line {}: invalid latitude {:?}", index + 1, lat))?;
                let lng: f64 = lng
                    .parse()
                    .with_context(|| format!("line {}: invalid longitude {:?}", index + 1, lng))?;
                Command::Click(BoundaryPoint::new(lat, lng))
            }
            ("undo", []) => Command::Undo,
            ("clear", []) => Command::Clear,
            ("complete", []) => Command::Complete,
            ("cancel", []) => Command::Cancel,
            ("yes", []) => Command::Answer(true),
            ("no", []) => Command::Answer(false),
            _ => bail!("line {}: unrecognised command {:?}", index + 1, line),
        };
        commands.push(command);
    }

    Ok(commands)
}

/// Result of applying one command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    Ignored,
    Rejected(String),
}

/// Apply commands in order, returning one outcome per command
pub fn run<M: MapSurface>(
    editor: &mut BoundaryEditor<M, ScriptedDialogs>,
    commands: &[Command],
) -> Vec<Outcome> {
    commands
        .iter()
        .map(|command| apply(editor, command))
        .collect()
}

fn apply<M: MapSurface>(
    editor: &mut BoundaryEditor<M, ScriptedDialogs>,
    command: &Command,
) -> Outcome {
    let applied = |ok: bool| if ok { Outcome::Applied } else { Outcome::Ignored };

    match command {
        Command::Start => applied(editor.start_drawing()),
        Command::Click(point) => applied(editor.map_click(*point)),
        Command::Undo => applied(editor.undo().is_some()),
        Command::Clear => applied(editor.clear()),
        Command::Complete => match editor.complete() {
            Ok(_) => Outcome::Applied,
            Err(e) => Outcome::Rejected(e.to_string()),
        },
        Command::Cancel => {
            editor.cancel();
            Outcome::Applied
        }
        Command::Answer(answer) => {
            editor.dialogs_mut().push_answer(*answer);
            Outcome::Applied
        }
    }
}
