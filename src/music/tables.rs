// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reference tables for scale derivation.
//!
//! Two read-only lookups drive everything: the Major scale on every root,
//! and each mode written as degrees of the Major scale on the same root.
//! Both are validated when built and never change afterwards, so they can
//! be shared freely between callers.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::note::{Accidental, Letter, Note, Semitones, MAX_MARKS};

/// Semitones from the root to each degree of the Major scale
pub const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Mode used when a request only says "minor"
pub const DEFAULT_MINOR: &str = "harmonic minor";

/// Words that already say which minor is meant
const MINOR_QUALIFIERS: [&str; 3] = ["harmonic", "melodic", "natural"];

/// Whether lowercase `text` asks for "minor" without saying which one.
///
/// Plain substring tests, shared by request parsing and title building so
/// both resolve a bare "minor" the same way. "minor pentatonic" counts as
/// bare and resolves to the default minor.
pub fn is_bare_minor(text: &str) -> bool {
    text.contains("minor") && !MINOR_QUALIFIERS.iter().any(|q| text.contains(q))
}

/// Errors in the reference data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid note {token:?} in {context}")]
    InvalidNote { token: String, context: String },
    #[error("root {0} must be a natural, single sharp or single flat")]
    InvalidRoot(Note),
    #[error("no major scale for root {0}")]
    MissingMajor(Note),
    #[error("major scale on {root} has {len} notes, expected 7")]
    MajorLength { root: Note, len: usize },
    #[error("major scale on {root} is misspelled at degree {degree}: {note}")]
    MajorSpelling { root: Note, degree: usize, note: Note },
    #[error("invalid step {token:?} in mode {mode:?}")]
    InvalidStep { token: String, mode: String },
    #[error("mode {0:?} has no steps")]
    EmptyMode(String),
    #[error("mode {0:?} is not defined")]
    UnknownMode(String),
}

/// One entry of a mode definition: a Major-scale degree and its alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStep {
    degree: u8,
    shift: Semitones,
}

impl ModeStep {
    /// Create a step; `degree` is 1-based
    pub fn new(degree: u8, shift: Semitones) -> Self {
        Self { degree, shift }
    }

    /// Degree of the Major scale (1-7)
    pub fn degree(self) -> u8 {
        self.degree
    }

    /// Semitones to raise (positive) or lower (negative) the degree by
    pub fn shift(self) -> Semitones {
        self.shift
    }
}

/// Error returned when a mode step token cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid mode step {0:?}")]
pub struct StepParseError(pub String);

impl FromStr for ModeStep {
    type Err = StepParseError;

    /// Parse "3", "4+", "7--": a degree digit then only '+' or only '-'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || StepParseError(s.to_string());
        let mut chars = s.chars();
        let degree = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|d| (1..=7).contains(d))
            .ok_or_else(invalid)? as u8;

        let marks = chars.as_str();
        let count = marks.len();
        if count > MAX_MARKS {
            return Err(invalid());
        }
        let shift = if marks.chars().all(|c| c == '+') {
            count as Semitones
        } else if marks.chars().all(|c| c == '-') {
            -(count as Semitones)
        } else {
            return Err(invalid());
        };

        Ok(ModeStep::new(degree, shift))
    }
}

impl fmt::Display for ModeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.shift > 0 { "+" } else { "-" };
        write!(
            f,
            "{}{}",
            self.degree,
            mark.repeat(self.shift.unsigned_abs() as usize)
        )
    }
}

/// The Major scale for every root (natural, sharp and flat on each letter)
#[derive(Debug, Clone, PartialEq)]
pub struct MajorScaleTable {
    scales: HashMap<Note, [Note; 7]>,
}

impl MajorScaleTable {
    /// Build and validate the table.
    ///
    /// Every one of the 21 roots must be present, each scale must start on
    /// its root, use consecutive letters and follow the Major intervals.
    pub fn new(scales: HashMap<Note, Vec<Note>>) -> Result<Self, TableError> {
        let mut checked = HashMap::with_capacity(scales.len());

        for (root, notes) in scales {
            if !(-1..=1).contains(&root.offset()) {
                return Err(TableError::InvalidRoot(root));
            }
            let notes: [Note; 7] = notes.try_into().map_err(|v: Vec<Note>| {
                TableError::MajorLength {
                    root,
                    len: v.len(),
                }
            })?;

            for (i, &note) in notes.iter().enumerate() {
                let expected_pc = (root.pitch_class() + MAJOR_INTERVALS[i]) % 12;
                if note.letter() != root.letter().advance(i) || note.pitch_class() != expected_pc {
                    return Err(TableError::MajorSpelling {
                        root,
                        degree: i + 1,
                        note,
                    });
                }
            }

            checked.insert(root, notes);
        }

        for letter in Letter::ALL {
            for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
                let root = Note::new(letter, accidental.offset());
                if !checked.contains_key(&root) {
                    return Err(TableError::MissingMajor(root));
                }
            }
        }

        Ok(Self { scales: checked })
    }

    /// Get the Major scale on a root
    pub fn get(&self, root: Note) -> Option<&[Note; 7]> {
        self.scales.get(&root)
    }

    /// Number of roots in the table
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Check if the table is empty (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// Mode definitions keyed by lowercase mode name
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTable {
    modes: BTreeMap<String, Vec<ModeStep>>,
}

impl ModeTable {
    /// Build and validate the table. Every mode needs at least one step.
    pub fn new(modes: BTreeMap<String, Vec<ModeStep>>) -> Result<Self, TableError> {
        if let Some((name, _)) = modes.iter().find(|(_, steps)| steps.is_empty()) {
            return Err(TableError::EmptyMode(name.clone()));
        }

        Ok(Self { modes })
    }

    /// Get the steps of a mode
    pub fn get(&self, name: &str) -> Option<&[ModeStep]> {
        self.modes.get(name).map(Vec::as_slice)
    }

    /// Check if a mode is defined
    pub fn contains(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    /// All mode names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// Number of modes
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
