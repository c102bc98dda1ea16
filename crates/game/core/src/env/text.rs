use super::OracleError;

/// Localized text provider.
///
/// Two lookup styles exist: named strings grouped by category (effect group
/// names, for example) and numbered text-resource records that carry
/// formatting tokens (spell descriptions).
pub trait TextOracle: Send + Sync {
    /// Resolves a named string within a category.
    fn text(&self, category: &str, key: &str) -> Result<String, OracleError>;

    /// Resolves a numbered text-resource record into tokens.
    fn rsc_tokens(&self, code: u16) -> Result<Vec<TextToken>, OracleError>;
}

/// One token of a text-resource record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextToken {
    /// Literal text run.
    Text(String),
    /// Line break.
    NewLine,
    /// Center the following line.
    Center,
    /// Terminates the record.
    EndOfRecord,
}

impl TextToken {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Flattens tokens into plain text, one line per `NewLine`.
    pub fn to_plain_text(tokens: &[TextToken]) -> String {
        let mut out = String::new();
        for token in tokens {
            match token {
                Self::Text(text) => out.push_str(text),
                Self::NewLine => out.push('\n'),
                Self::Center | Self::EndOfRecord => {}
            }
        }
        out
    }
}
