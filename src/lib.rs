// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales - spell out the notes of any mode on any root.
//!
//! Text such as "e flat minor" is interpreted into a request, the request
//! is derived from the reference tables, and the result is formatted as
//! `Eb Harmonic Minor: Eb, F, Gb, Ab, Bb, Cb, D, Eb`.

pub mod config;
pub mod display;
pub mod input;
pub mod music;
pub mod session;

pub use config::{ReferenceFile, ReferenceTables, Settings};
pub use display::{display_line, title_for};
pub use input::{Interpreter, InvalidScaleRequest};
pub use music::{Note, Scale, ScaleRequest, TableError};
pub use session::{Reply, Session};
