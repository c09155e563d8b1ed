//! Font-face descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownFontType;

/// Format tag for a font source, as written inside CSS `format("...")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontType {
    Woff,
    Woff2,
    Truetype,
    Opentype,
    EmbeddedOpentype,
    Svg,
}

impl FontType {
    pub const ALL: [FontType; 6] = [
        FontType::Woff,
        FontType::Woff2,
        FontType::Truetype,
        FontType::Opentype,
        FontType::EmbeddedOpentype,
        FontType::Svg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontType::Woff => "woff",
            FontType::Woff2 => "woff2",
            FontType::Truetype => "truetype",
            FontType::Opentype => "opentype",
            FontType::EmbeddedOpentype => "embedded-opentype",
            FontType::Svg => "svg",
        }
    }
}

impl fmt::Display for FontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontType {
    type Err = UnknownFontType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownFontType(s.to_string()))
    }
}

/// One loadable file for a font face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSource {
    /// Locator placed inside `url("...")`. Usually resolved by a bundler or
    /// rewritten with [`crate::Design::with_asset_base`].
    pub src: String,
    pub format: FontType,
}

impl FontSource {
    pub fn new(src: impl Into<String>, format: FontType) -> Self {
        Self {
            src: src.into(),
            format,
        }
    }
}

/// A `font-weight` value: numeric (`700`, `450.5`) or a keyword (`"bold"`).
///
/// Numbers are kept as written and never range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Number(serde_json::Number),
    Keyword(String),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Number(n) => write!(f, "{n}"),
            FontWeight::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<&str> for FontWeight {
    fn from(value: &str) -> Self {
        FontWeight::Keyword(value.to_string())
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        FontWeight::Number(value.into())
    }
}

/// Descriptor for a single `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FontFace {
    /// Family name, emitted inside single quotes.
    pub name: String,
    /// Sources in preference order. Should be non-empty; not enforced.
    pub sources: Vec<FontSource>,
    pub font_weight: FontWeight,
    pub font_style: String,
}

impl FontFace {
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
