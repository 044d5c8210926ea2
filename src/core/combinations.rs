use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Color, ColorCombination};

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The combinations file could not be read at all (missing, unreadable).
    #[error("failed to read combinations file: {0}")]
    Io(#[from] io::Error),
    /// The file was read but is not a valid combinations document. Covers
    /// missing color attributes and values outside 0..=255.
    #[error("failed to parse combinations file: {0}")]
    Parse(#[from] quick_xml::DeError),
}

#[derive(Debug, Deserialize)]
struct CombinationsDoc {
    #[serde(default, rename = "combination")]
    combinations: Vec<CombinationEntry>,
}

#[derive(Debug, Deserialize)]
struct CombinationEntry {
    #[serde(default, rename = "color")]
    colors: Vec<ColorEntry>,
}

#[derive(Debug, Deserialize)]
struct ColorEntry {
    #[serde(rename = "@red")]
    red: u8,
    #[serde(rename = "@green")]
    green: u8,
    #[serde(rename = "@blue")]
    blue: u8,
}

/// Loads the combination list from the XML file. The watch loop calls this
/// every cycle, so edits to the file take effect without a restart.
pub fn load_combinations(path: &Path) -> Result<Vec<ColorCombination>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_combinations(&content)
}

fn parse_combinations(content: &str) -> Result<Vec<ColorCombination>, ConfigError> {
    let doc: CombinationsDoc = quick_xml::de::from_str(content)?;
    Ok(doc
        .combinations
        .into_iter()
        .map(|entry| {
            ColorCombination::new(
                entry
                    .colors
                    .into_iter()
                    .map(|c| Color::new(c.red, c.green, c.blue))
                    .collect(),
            )
        })
        .collect())
}
