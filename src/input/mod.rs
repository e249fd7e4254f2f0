// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Free-text scale requests.
//!
//! Requests look like `<root> [sharp|flat] <mode>`, e.g. "F sharp
//! mixolydian" or "b flat major", in any case and with any spacing. Mode
//! text mentioning "minor" without "harmonic", "melodic" or "natural" means
//! the harmonic minor.

use thiserror::Error;
use tracing::debug;

use crate::music::{is_bare_minor, Accidental, Letter, ModeTable, ScaleRequest, DEFAULT_MINOR};

/// Why a request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidScaleRequest {
    /// Input does not start with a letter a-g followed by a space
    #[error("request must start with a note letter A-G followed by a space")]
    Root,
    /// Repeated or contradictory "sharp"/"flat"
    #[error("request has more than one accidental")]
    Accidental,
    /// Mode text is not a known mode
    #[error("unknown mode {0:?}")]
    Mode(String),
}

/// Collapse whitespace runs to single spaces, trim and lowercase
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parses free text into scale requests against a mode table
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'a> {
    modes: &'a ModeTable,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter that accepts the modes in `modes`
    pub fn new(modes: &'a ModeTable) -> Self {
        Self { modes }
    }

    /// Parse a request such as "c sharp harmonic minor"
    pub fn interpret(&self, text: &str) -> Result<ScaleRequest, InvalidScaleRequest> {
        let text = normalize(text);
        let result = self.parse(&text);
        if let Err(err) = &result {
            debug!(input = %text, error = %err, "rejected scale request");
        }
        result
    }

    fn parse(&self, text: &str) -> Result<ScaleRequest, InvalidScaleRequest> {
        let mut chars = text.chars();
        let root = match (chars.next(), chars.next()) {
            (Some(c), Some(' ')) => Letter::from_char(c).ok_or(InvalidScaleRequest::Root)?,
            _ => return Err(InvalidScaleRequest::Root),
        };

        if text.matches("sharp").count() > 1
            || text.matches("flat").count() > 1
            || text.contains("sharp flat")
            || text.contains("flat sharp")
        {
            return Err(InvalidScaleRequest::Accidental);
        }

        // The first two characters are ASCII, so byte 2 is a boundary
        let rest = &text[2..];
        let (accidental, mode) = if rest.starts_with("sharp") {
            (Accidental::Sharp, rest.replacen("sharp", "", 1))
        } else if rest.starts_with("flat") {
            (Accidental::Flat, rest.replacen("flat", "", 1))
        } else {
            (Accidental::Natural, rest.to_string())
        };

        let mut mode = mode.trim();
        if is_bare_minor(mode) {
            mode = DEFAULT_MINOR;
        }

        if !self.modes.contains(mode) {
            return Err(InvalidScaleRequest::Mode(mode.to_string()));
        }

        Ok(ScaleRequest::new(root, accidental, mode))
    }
}
