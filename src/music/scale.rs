// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale derivation.
//!
//! Every mode is built by altering the Major scale that shares its root:
//! pick the listed degrees in order, raise or lower the ones that carry an
//! alteration, then close the octave by repeating the first note.

use std::fmt;

use tracing::debug;

use super::note::{Accidental, Letter, Note};
use super::tables::{MajorScaleTable, ModeTable, TableError};

/// A parsed request for a scale: root letter, accidental and mode name.
///
/// Only the input interpreter builds these, so the mode name is always a
/// key of the mode table it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleRequest {
    root: Letter,
    accidental: Accidental,
    mode: String,
}

impl ScaleRequest {
    pub(crate) fn new(root: Letter, accidental: Accidental, mode: impl Into<String>) -> Self {
        Self {
            root,
            accidental,
            mode: mode.into(),
        }
    }

    /// Get the root letter
    pub fn root(&self) -> Letter {
        self.root
    }

    /// Get the accidental on the root
    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Get the mode key
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// The root as a spelled note, e.g. B flat
    pub fn root_note(&self) -> Note {
        Note::new(self.root, self.accidental.offset())
    }
}

/// A derived scale, ending on its first note again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: Note,
    mode: String,
    notes: Vec<Note>,
}

impl Scale {
    /// Derive the notes for a request from the reference tables.
    ///
    /// Fails only when the tables disagree with the request (unknown mode or
    /// missing root), which means the reference data is broken rather than
    /// the request.
    pub fn derive(
        request: &ScaleRequest,
        majors: &MajorScaleTable,
        modes: &ModeTable,
    ) -> Result<Self, TableError> {
        let root = request.root_note();
        let major = majors.get(root).ok_or(TableError::MissingMajor(root))?;
        let steps = modes
            .get(request.mode())
            .ok_or_else(|| TableError::UnknownMode(request.mode().to_string()))?;

        let mut notes = steps
            .iter()
            .map(|step| {
                usize::from(step.degree())
                    .checked_sub(1)
                    .and_then(|i| major.get(i))
                    .map(|note| note.shifted(step.shift()))
                    .ok_or_else(|| TableError::InvalidStep {
                        token: step.to_string(),
                        mode: request.mode().to_string(),
                    })
            })
            .collect::<Result<Vec<Note>, _>>()?;

        // Octave closure
        if let Some(&first) = notes.first() {
            notes.push(first);
        }

        debug!(root = %root, mode = request.mode(), len = notes.len(), "derived scale");

        Ok(Self {
            root,
            mode: request.mode().to_string(),
            notes,
        })
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the mode key
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Get the notes, including the closing repeat of the root
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get the number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if this scale is empty (shouldn't happen normally)
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl fmt::Display for Scale {
    /// Notes joined with ", "
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}
