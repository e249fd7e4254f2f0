// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Display formatting for derived scales.
//!
//! Turns a scale into the user-facing line `"<Title>: <notes>"`, where the
//! title is rebuilt from the text the user typed.

use crate::input::normalize;
use crate::music::{is_bare_minor, ModeTable, Scale, DEFAULT_MINOR};

/// Width of one column in the mode listing
const MODE_COLUMN_WIDTH: usize = 22;

/// Mode names per row in the mode listing
const MODE_COLUMNS: usize = 4;

/// Notes of a scale joined with ", "
pub fn format_scale(scale: &Scale) -> String {
    scale.to_string()
}

/// Capitalize the first letter of every word, lowercase the rest.
///
/// A letter starts a word when the character before it is not a letter,
/// so "f#" becomes "F#" and "eb" becomes "Eb".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}

/// Title for the text the user typed, e.g. "e flat minor" -> "Eb Harmonic Minor"
pub fn title_for(original: &str) -> String {
    let mut title = normalize(original);

    if let Some(pos) = title.find(" sharp") {
        title.replace_range(pos..pos + " sharp".len(), "#");
    } else if let Some(pos) = title.find(" flat") {
        title.replace_range(pos..pos + " flat".len(), "b");
    }

    if is_bare_minor(&title) {
        title = title.replacen("minor", DEFAULT_MINOR, 1);
    }

    title_case(&title)
}

/// The full answer line: `"<Title>: <notes>"`
pub fn display_line(original: &str, scale: &Scale) -> String {
    format!("{}: {}", title_for(original), format_scale(scale))
}

/// Numbered, title-cased listing of every mode, four to a row
pub fn render_mode_list(modes: &ModeTable) -> String {
    let entries: Vec<String> = modes
        .names()
        .enumerate()
        .map(|(i, name)| format!("{}.{}", i + 1, title_case(name)))
        .collect();

    let mut out = String::from("Possible Modes:\n");
    for row in entries.chunks(MODE_COLUMNS) {
        out.push('\n');
        let line: String = row
            .iter()
            .map(|entry| format!("{:<width$}", entry, width = MODE_COLUMN_WIDTH))
            .collect();
        out.push_str(line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceTables;
    use crate::input::Interpreter;

    fn line(text: &str) -> String {
        let tables = ReferenceTables::builtin().unwrap();
        let request = Interpreter::new(tables.modes()).interpret(text).unwrap();
        let scale = Scale::derive(&request, tables.majors(), tables.modes()).unwrap();
        display_line(text, &scale)
    }

    fn title(text: &str) -> String {
        title_for(text)
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("c major"), "C Major");
        assert_eq!(title_case("f# mixolydian"), "F# Mixolydian");
        assert_eq!(title_case("eb harmonic minor"), "Eb Harmonic Minor");
        assert_eq!(title_case("MAJOR"), "Major");
    }

    #[test]
    fn test_title_symbols() {
        assert_eq!(title("f sharp mixolydian"), "F# Mixolydian");
        assert_eq!(title("B Flat Major"), "Bb Major");
        assert_eq!(title("c   major"), "C Major");
    }

    #[test]
    fn test_title_minor_expansion() {
        assert_eq!(title("e flat minor"), "Eb Harmonic Minor");
        assert_eq!(title("g minor"), "G Harmonic Minor");
        assert_eq!(title("a natural minor"), "A Natural Minor");
        assert_eq!(title("a melodic minor"), "A Melodic Minor");
    }

    #[test]
    fn test_title_expands_any_unqualified_minor() {
        assert_eq!(title("a minor pentatonic"), "A Harmonic Minor Pentatonic");
        assert_eq!(title("d neapolitan minor"), "D Neapolitan Harmonic Minor");
        assert_eq!(title("c minor7"), "C Harmonic Minor7");
        assert_eq!(title("f sharp MINOR"), "F# Harmonic Minor");
    }

    #[test]
    fn test_display_line() {
        assert_eq!(line("c major"), "C Major: C, D, E, F, G, A, B, C");
        assert_eq!(
            line("e flat minor"),
            "Eb Harmonic Minor: Eb, F, Gb, Ab, Bb, Cb, D, Eb"
        );
        assert_eq!(
            line("a sharp harmonic minor"),
            "A# Harmonic Minor: A#, B#, C#, D#, E#, F#, G##, A#"
        );
        assert_eq!(
            line("B flat lydian augmented"),
            "Bb Lydian Augmented: Bb, C, D, E, F#, G, A, Bb"
        );
        assert_eq!(
            line("a minor pentatonic"),
            "A Harmonic Minor Pentatonic: A, B, C, D, E, F, G#, A"
        );
    }

    #[test]
    fn test_format_is_repeatable() {
        let tables = ReferenceTables::builtin().unwrap();
        let request = Interpreter::new(tables.modes()).interpret("b major").unwrap();
        let scale = Scale::derive(&request, tables.majors(), tables.modes()).unwrap();
        let first = format_scale(&scale);
        assert_eq!(first, "B, C#, D#, E, F#, G#, A#, B");
        assert_eq!(format_scale(&scale), first);
    }

    #[test]
    fn test_mode_list() {
        let tables = ReferenceTables::builtin().unwrap();
        let list = render_mode_list(tables.modes());
        assert!(list.starts_with("Possible Modes:\n"));
        assert!(list.contains("1.Acoustic"));
        assert!(list.contains("Lydian Augmented"));
        assert!(list.contains(&format!("{}.Wholetone", tables.modes().len())));
        // header, blank line, then ten rows of four
        assert_eq!(list.lines().count(), 12);
    }
}
