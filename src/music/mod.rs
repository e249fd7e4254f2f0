// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for the scale builder.
//!
//! This module provides spelled notes, the reference tables and the
//! derivation of a mode's notes from the Major scale on the same root.

pub mod note;
pub mod scale;
pub mod tables;

pub use note::{Accidental, Letter, Note, NoteParseError, Semitones};
pub use scale::{Scale, ScaleRequest};
pub use tables::{
    is_bare_minor, MajorScaleTable, ModeStep, ModeTable, StepParseError, TableError, DEFAULT_MINOR,
};
