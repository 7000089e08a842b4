//! Parsing of typed editor commands.

use shared::domain::{MazeId, PathKind};

pub const HELP: &str = "\
commands:
  show                      redraw every maze
  create <slot> [CxR]       create the grid of a slot (prompts when size is omitted)
  click <slot> <point>      toggle a wall, or the entrance while entrance mode is held
  e | hold-entrance         hold the entrance key for the next click
  release-entrance          release the entrance key
  blur                      focus lost, releases the entrance key
  submit <slot>             send the maze to the server
  solve <slot> min|max      fetch and overlay a solution path
  clear <slot>              clear the displayed path
  reload                    reload every maze from the server
  refresh <maze id>         reload one maze from the server
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Show,
    Create { slot: usize, size: Option<String> },
    Click { slot: usize, point: String },
    HoldEntrance,
    ReleaseEntrance,
    Blur,
    Submit { slot: usize },
    Solve { slot: usize, kind: PathKind },
    ClearPath { slot: usize },
    Reload,
    Refresh { maze_id: MazeId },
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<UserCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(UserCommand::Show);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("show", []) => UserCommand::Show,
        ("create", [slot]) => UserCommand::Create {
            slot: parse_slot(slot)?,
            size: None,
        },
        ("create", [slot, size]) => UserCommand::Create {
            slot: parse_slot(slot)?,
            size: Some((*size).to_string()),
        },
        ("click", [slot, point]) => UserCommand::Click {
            slot: parse_slot(slot)?,
            point: (*point).to_string(),
        },
        ("e" | "hold-entrance", []) => UserCommand::HoldEntrance,
        ("release-entrance", []) => UserCommand::ReleaseEntrance,
        ("blur", []) => UserCommand::Blur,
        ("submit", [slot]) => UserCommand::Submit {
            slot: parse_slot(slot)?,
        },
        ("solve", [slot, kind]) => UserCommand::Solve {
            slot: parse_slot(slot)?,
            kind: kind.parse::<PathKind>().map_err(|err| err.to_string())?,
        },
        ("clear", [slot]) => UserCommand::ClearPath {
            slot: parse_slot(slot)?,
        },
        ("reload", []) => UserCommand::Reload,
        ("refresh", [maze_id]) => UserCommand::Refresh {
            maze_id: maze_id
                .parse::<i64>()
                .map(MazeId)
                .map_err(|_| format!("{maze_id:?} is not a maze id"))?,
        },
        ("help" | "?", []) => UserCommand::Help,
        ("quit" | "exit", []) => UserCommand::Quit,
        _ => return Err(format!("unrecognised command {line:?}; type help")),
    };
    Ok(command)
}

fn parse_slot(raw: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .map_err(|_| format!("{raw:?} is not a slot number"))
}
