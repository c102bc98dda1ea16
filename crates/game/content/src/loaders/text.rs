//! Localized text loader.
//!
//! ```toml
//! [strings.ClassicEffects]
//! heal = "Heal"
//!
//! [records]
//! 1548 = "<ce>Heal Health\nRestores health."
//! ```
//!
//! Record text uses `\n` for line breaks and a leading `<ce>` to center a line.

use std::collections::HashMap;
use std::path::Path;

use magic_core::TextToken;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::oracles::TextTable;

const CENTER_MARKER: &str = "<ce>";

/// Text table structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFile {
    pub strings: HashMap<String, HashMap<String, String>>,
    pub records: HashMap<String, String>,
}

/// Loader for localized text from TOML files.
pub struct TextLoader;

impl TextLoader {
    /// Load a text table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<TextTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a text table from TOML text.
    pub fn parse(content: &str) -> LoadResult<TextTable> {
        let file: TextFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse text TOML: {}", e))?;

        let mut table = TextTable::new();
        for (category, strings) in file.strings {
            for (key, text) in strings {
                table.insert_text(category.as_str(), key, text);
            }
        }
        for (code, text) in file.records {
            let code: u16 = code
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid text record code '{}': {}", code, e))?;
            table.insert_record(code, parse_record(&text));
        }

        Ok(table)
    }
}

/// Splits record text into tokens, ending with [`TextToken::EndOfRecord`].
pub fn parse_record(text: &str) -> Vec<TextToken> {
    let mut tokens = Vec::new();
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        let line = match line.strip_prefix(CENTER_MARKER) {
            Some(rest) => {
                tokens.push(TextToken::Center);
                rest
            }
            None => line,
        };
        if !line.is_empty() {
            tokens.push(TextToken::text(line));
        }
        if lines.peek().is_some() {
            tokens.push(TextToken::NewLine);
        }
    }

    tokens.push(TextToken::EndOfRecord);
    tokens
}
