// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! One line in, one reply out.
//!
//! The interactive loop and the one-shot command line both go through
//! [`Session::respond`], so they agree on sentinels and messages.

use tracing::debug;

use crate::config::ReferenceTables;
use crate::display::{display_line, render_mode_list};
use crate::input::{normalize, Interpreter};
use crate::music::{Scale, TableError};

/// Input that ends the session
pub const EXIT_COMMAND: &str = "-1";

/// Input that lists the available modes
pub const SHOW_MODES_COMMAND: &str = "show modes";

/// Shown when a request cannot be parsed
pub const INVALID_MESSAGE: &str =
    "Please enter a valid scale such as 'C Sharp Harmonic Minor', or 'F Major'";

/// Usage text shown at the top of the interactive session
pub const INSTRUCTIONS: &str = "Instructions:

    Simply type in the scale you would like in the form 'root-note mode-type'. For example:

      - 'C Major'                     (shows: C, D, E, F, G, A, B, C)
      - 'F Sharp Harmonic Minor'      (shows: F#, G#, A, B, C#, D, E#, F#)
      - 'G Lydian'                    (shows: G, A, B, C#, D, E, F#, G)
      - 'B Flat Major'                (shows: Bb, C, D, Eb, F, G, A, Bb)
      - 'C Sharp Melodic Minor'       (shows: C#, D#, E, F#, G#, A#, B#, C#, B, A, G#, F#, E, D#, C#)

    Type 'Show Modes' to see a complete list of available modes.

    To exit the application enter '-1'";

/// What to do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A derived scale, ready to print
    Scale(String),
    /// The mode listing
    Modes(String),
    /// The input was not a valid request
    Invalid,
    /// The user asked to leave
    Exit,
}

/// Answers input lines from a set of reference tables
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Session<'a> {
    /// Create a session over validated tables
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Answer one line.
    ///
    /// Invalid requests are a normal reply. An `Err` means the tables could
    /// not derive a request they accepted, which is a configuration fault.
    pub fn respond(&self, line: &str) -> Result<Reply, TableError> {
        let command = normalize(line);
        if command == EXIT_COMMAND {
            return Ok(Reply::Exit);
        }
        if command == SHOW_MODES_COMMAND {
            return Ok(Reply::Modes(render_mode_list(self.tables.modes())));
        }

        let request = match Interpreter::new(self.tables.modes()).interpret(line) {
            Ok(request) => request,
            Err(_) => return Ok(Reply::Invalid),
        };
        debug!(?request, "answering request");

        let scale = Scale::derive(&request, self.tables.majors(), self.tables.modes())?;
        Ok(Reply::Scale(display_line(line, &scale)))
    }
}
