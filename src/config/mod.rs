// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the scale builder.
//!
//! Reference data (Major scales and mode definitions) is loaded from YAML
//! and checked into immutable tables before any request is served.
//! Application settings live in a separate TOML file, see [`settings`].

pub mod settings;

pub use settings::Settings;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{MajorScaleTable, ModeStep, ModeTable, Note, TableError};

/// Reference data shipped with the crate
pub const BUILTIN_REFERENCE: &str = include_str!("../../data/reference.yaml");

/// Reference data as written on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReferenceFile {
    /// Major scale per root, e.g. `"b-": [b-, c, d, e-, f, g, a]`
    #[serde(default)]
    pub majors: BTreeMap<String, Vec<String>>,
    /// Steps per mode, e.g. `"dorian": ["1", "2", "3-", ...]`
    #[serde(default)]
    pub modes: BTreeMap<String, Vec<String>>,
}

impl ReferenceFile {
    /// Load reference data from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read reference file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse reference data from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML reference data")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize reference data to YAML")
    }

    /// Save reference data to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write reference file: {:?}", path.as_ref()))
    }
}

/// Validated, read-only reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    majors: MajorScaleTable,
    modes: ModeTable,
}

impl ReferenceTables {
    /// Tables built from the reference data shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_REFERENCE).context("Built-in reference data is invalid")
    }

    /// Load and validate tables from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = ReferenceFile::load(path.as_ref())?;
        let tables = Self::from_file(&file)
            .with_context(|| format!("Invalid reference data in {:?}", path.as_ref()))?;
        info!(
            path = ?path.as_ref(),
            roots = tables.majors.len(),
            modes = tables.modes.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    /// Parse and validate tables from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file = ReferenceFile::from_yaml(yaml)?;
        Ok(Self::from_file(&file)?)
    }

    /// Convert raw reference data into checked tables
    pub fn from_file(file: &ReferenceFile) -> Result<Self, TableError> {
        let mut majors = HashMap::with_capacity(file.majors.len());
        for (root, notes) in &file.majors {
            let root_note = parse_note(root, "major scale roots")?;
            let context = format!("major scale {:?}", root);
            let notes = notes
                .iter()
                .map(|token| parse_note(token, &context))
                .collect::<Result<Vec<_>, _>>()?;
            majors.insert(root_note, notes);
        }

        let mut modes = BTreeMap::new();
        for (name, steps) in &file.modes {
            let name = normalize_mode_name(name);
            let steps = steps
                .iter()
                .map(|token| {
                    token.parse::<ModeStep>().map_err(|_| TableError::InvalidStep {
                        token: token.clone(),
                        mode: name.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            modes.insert(name, steps);
        }

        Ok(Self {
            majors: MajorScaleTable::new(majors)?,
            modes: ModeTable::new(modes)?,
        })
    }

    /// Get the Major scale table
    pub fn majors(&self) -> &MajorScaleTable {
        &self.majors
    }

    /// Get the mode table
    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }
}

/// Validate a reference file without using it
pub fn validate_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceTables> {
    ReferenceTables::load(path)
}

fn parse_note(token: &str, context: &str) -> Result<Note, TableError> {
    token.parse().map_err(|_| TableError::InvalidNote {
        token: token.to_string(),
        context: context.to_string(),
    })
}

/// Mode keys are matched against normalized input, so store them the same way
fn normalize_mode_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
