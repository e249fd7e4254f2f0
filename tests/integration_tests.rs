// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for Scales
//!
//! These tests verify that multiple components work together correctly.

use std::fs;
use std::sync::Arc;
use std::thread;

use scales::config::{ReferenceFile, ReferenceTables, BUILTIN_REFERENCE};
use scales::display::{display_line, format_scale};
use scales::input::{Interpreter, InvalidScaleRequest};
use scales::music::{is_bare_minor, Accidental, Letter, Scale, DEFAULT_MINOR};
use scales::session::{Reply, Session};
use tempfile::tempdir;

fn answer(tables: &ReferenceTables, text: &str) -> String {
    let request = Interpreter::new(tables.modes()).interpret(text).unwrap();
    let scale = Scale::derive(&request, tables.majors(), tables.modes()).unwrap();
    display_line(text, &scale)
}

/// Text goes through interpreter, engine and formatter
#[test]
fn test_full_pipeline() {
    let tables = ReferenceTables::builtin().unwrap();

    assert_eq!(answer(&tables, "C Major"), "C Major: C, D, E, F, G, A, B, C");
    assert_eq!(
        answer(&tables, "e flat minor"),
        "Eb Harmonic Minor: Eb, F, Gb, Ab, Bb, Cb, D, Eb"
    );
    assert_eq!(
        answer(&tables, "b   FLAT   lydian augmented"),
        "Bb Lydian Augmented: Bb, C, D, E, F#, G, A, Bb"
    );
    assert_eq!(
        answer(&tables, "a sharp harmonic minor"),
        "A# Harmonic Minor: A#, B#, C#, D#, E#, F#, G##, A#"
    );
    assert_eq!(
        answer(&tables, "c minor7"),
        "C Harmonic Minor7: C, D, Eb, F, G, Ab, B, C"
    );
}

/// Parsed requests carry root, accidental and resolved mode
#[test]
fn test_interpreter_contract() {
    let tables = ReferenceTables::builtin().unwrap();
    let interpreter = Interpreter::new(tables.modes());

    let request = interpreter.interpret("g minor").unwrap();
    assert_eq!(
        (request.root(), request.accidental(), request.mode()),
        (Letter::G, Accidental::Natural, "harmonic minor")
    );

    let request = interpreter.interpret("f sharp mixolydian").unwrap();
    assert_eq!(
        (request.root(), request.accidental(), request.mode()),
        (Letter::F, Accidental::Sharp, "mixolydian")
    );

    for text in ["C# Minor", "cmajor", "a flat sharp minor", "f sharp sharp major"] {
        assert!(interpreter.interpret(text).is_err(), "accepted {:?}", text);
    }
}

/// A request is accepted exactly when its mode text is a table key
/// after an unqualified minor has been resolved
#[test]
fn test_accepts_only_table_modes() {
    let tables = ReferenceTables::builtin().unwrap();
    let interpreter = Interpreter::new(tables.modes());

    for mode in tables.modes().names() {
        let expected = if is_bare_minor(mode) { DEFAULT_MINOR } else { mode };
        for prefix in ["c", "d flat", "g sharp"] {
            let text = format!("{} {}", prefix, mode);
            let request = interpreter.interpret(&text).unwrap();
            assert_eq!(request.mode(), expected);
        }
    }

    assert_eq!(
        interpreter.interpret("c lydian dominant"),
        Err(InvalidScaleRequest::Mode("lydian dominant".to_string()))
    );
}

/// Formatting the same scale twice gives the same text
#[test]
fn test_formatting_is_pure() {
    let tables = ReferenceTables::builtin().unwrap();
    let request = Interpreter::new(tables.modes())
        .interpret("d flat phrygian")
        .unwrap();
    let scale = Scale::derive(&request, tables.majors(), tables.modes()).unwrap();

    let first = format_scale(&scale);
    let second = format_scale(&scale);
    assert_eq!(first, second);
    assert_eq!(first, "Db, Ebb, Fb, Gb, Ab, Bbb, Cb, Db");
}

/// Tables are read-only and can be shared between threads
#[test]
fn test_shared_tables_across_threads() {
    let tables = Arc::new(ReferenceTables::builtin().unwrap());
    let inputs = ["c major", "e flat minor", "f sharp locrian", "a sharp harmonic minor"];

    let handles: Vec<_> = inputs
        .iter()
        .map(|&text| {
            let tables = Arc::clone(&tables);
            thread::spawn(move || answer(&tables, text))
        })
        .collect();

    for (handle, text) in handles.into_iter().zip(inputs) {
        assert_eq!(handle.join().unwrap(), answer(&tables, text));
    }
}

/// Custom reference data on disk replaces the built-in tables
#[test]
fn test_custom_reference_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("reference.yaml");

    let mut file = ReferenceFile::from_yaml(BUILTIN_REFERENCE).unwrap();
    file.modes.insert(
        "super locrian".to_string(),
        ["1", "2-", "3-", "4-", "5-", "6-", "7-"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    file.save(&file_path).unwrap();

    let tables = ReferenceTables::load(&file_path).unwrap();
    assert_eq!(
        answer(&tables, "c super locrian"),
        "C Super Locrian: C, Db, Eb, Fb, Gb, Ab, Bb, C"
    );
}

/// Broken reference data is refused at load time
#[test]
fn test_broken_reference_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("broken.yaml");

    let broken = BUILTIN_REFERENCE.replace(
        r#""g": ["g", "a", "b", "c", "d", "e", "f+"]"#,
        r#""g": ["g", "a", "b", "c", "d", "e", "f"]"#,
    );
    assert_ne!(broken, BUILTIN_REFERENCE);
    fs::write(&file_path, broken).unwrap();

    let err = ReferenceTables::load(&file_path).unwrap_err();
    assert!(format!("{:#}", err).contains("misspelled"));
}

/// The session answers scales, mode listings, bad input and exit
#[test]
fn test_session_flow() {
    let tables = ReferenceTables::builtin().unwrap();
    let session = Session::new(&tables);

    let replies: Vec<Reply> = ["b flat major", "show modes", "Bflatminor", "-1"]
        .iter()
        .map(|line| session.respond(line).unwrap())
        .collect();

    assert_eq!(
        replies[0],
        Reply::Scale("Bb Major: Bb, C, D, Eb, F, G, A, Bb".to_string())
    );
    assert!(matches!(&replies[1], Reply::Modes(list) if list.contains("Phrygian Dominant")));
    assert_eq!(replies[2], Reply::Invalid);
    assert_eq!(replies[3], Reply::Exit);
}
