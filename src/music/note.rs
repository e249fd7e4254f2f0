// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled notes: a letter name plus accumulated sharps or flats.
//!
//! Unlike a pitch class, a spelled note keeps its letter, so E# and F
//! are different notes even though they sound the same.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Semitone offset type
pub type Semitones = i8;

/// Most '+' or '-' marks accepted in one table token.
///
/// A table note plus a table step then stays far inside `Semitones`, so
/// raising and lowering never reach the saturation bound.
pub const MAX_MARKS: usize = 12;

/// Letter names in scale order, starting from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in scale order
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Get the pitch class (0-11) of the natural note
    pub fn pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Parse a letter from a single character, either case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Letter::C),
            'd' => Some(Letter::D),
            'e' => Some(Letter::E),
            'f' => Some(Letter::F),
            'g' => Some(Letter::G),
            'a' => Some(Letter::A),
            'b' => Some(Letter::B),
            _ => None,
        }
    }

    /// The letter `steps` positions further up the cycle C D E F G A B
    pub fn advance(self, steps: usize) -> Self {
        let index = Letter::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Letter::ALL[(index + steps) % Letter::ALL.len()]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        };
        write!(f, "{}", c)
    }
}

/// Accidental written after the root of a requested scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone offset applied to the root letter
    pub fn offset(self) -> Semitones {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// Error returned when a note token cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    #[error("empty note")]
    Empty,
    #[error("{0:?} is not a note letter")]
    Letter(char),
    #[error("note {0:?} mixes or misuses accidental marks")]
    Marks(String),
}

/// A spelled note: letter plus signed semitone offset.
///
/// Positive offsets are sharps and negative offsets are flats, so a note
/// can never hold sharps and flats at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    letter: Letter,
    offset: Semitones,
}

impl Note {
    /// Create a note from a letter and an offset
    pub fn new(letter: Letter, offset: Semitones) -> Self {
        Self { letter, offset }
    }

    /// Create an unaltered note
    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Get the letter name
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Get the signed offset (sharps positive, flats negative)
    pub fn offset(self) -> Semitones {
        self.offset
    }

    /// Get the pitch class (0-11) this note sounds as
    pub fn pitch_class(self) -> u8 {
        (self.letter.pitch_class() as i16 + self.offset as i16).rem_euclid(12) as u8
    }

    /// Raise by one semitone: cancels a flat if there is one, else adds a sharp
    pub fn raised(self) -> Self {
        Self::new(self.letter, self.offset.saturating_add(1))
    }

    /// Lower by one semitone: cancels a sharp if there is one, else adds a flat
    pub fn lowered(self) -> Self {
        Self::new(self.letter, self.offset.saturating_sub(1))
    }

    /// Raise (positive) or lower (negative) one semitone at a time
    pub fn shifted(self, semitones: Semitones) -> Self {
        let steps = semitones.unsigned_abs();
        (0..steps).fold(self, |note, _| {
            if semitones > 0 {
                note.raised()
            } else {
                note.lowered()
            }
        })
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parse the table form: a letter followed only by '+' or only by '-'
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(NoteParseError::Empty)?;
        let letter = Letter::from_char(first).ok_or(NoteParseError::Letter(first))?;

        let marks = chars.as_str();
        let count = marks.chars().count();
        if count > MAX_MARKS {
            return Err(NoteParseError::Marks(s.to_string()));
        }
        let offset = if marks.chars().all(|c| c == '+') {
            count as Semitones
        } else if marks.chars().all(|c| c == '-') {
            -(count as Semitones)
        } else {
            return Err(NoteParseError::Marks(s.to_string()));
        };

        Ok(Note::new(letter, offset))
    }
}

impl fmt::Display for Note {
    /// Uppercase letter followed by '#' per sharp or 'b' per flat
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.offset > 0 { "#" } else { "b" };
        write!(
            f,
            "{}{}",
            self.letter,
            symbol.repeat(self.offset.unsigned_abs() as usize)
        )
    }
}
