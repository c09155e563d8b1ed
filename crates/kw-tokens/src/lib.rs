//! kw design tokens
//!
//! The immutable token set a kw theme is generated from: colors, font
//! families and sizes, border radii, and the `@font-face` descriptors for
//! the fonts the theme ships with.
//!
//! Token sets are plain values. They are built once (or taken from
//! [`Design::default`]) and read by the stylesheet generator. Nothing here
//! validates CSS; every string is passed through verbatim.
//!
//! # Example
//!
//! ```
//! use kw_tokens::Design;
//!
//! let design = Design::default();
//! assert_eq!(design.action_color, "#E8398E");
//! assert_eq!(design.font_faces.len(), 2);
//! ```

pub mod design;
pub mod font;

pub use design::{default_design, Design, HIND_LIGHT_WOFF2, HIND_MEDIUM_WOFF2};
pub use font::{FontFace, FontSource, FontType, FontWeight};

/// Token loading error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Token error at line {line}, column {column}: {message}")]
pub struct TokenError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        let mut message = err.to_string();
        // serde_json appends its own position; ours is carried separately
        if err.line() > 0 {
            if let Some(idx) = message.rfind(" at line ") {
                message.truncate(idx);
            }
        }
        Self {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}

/// A font format tag outside the set CSS `format()` understands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font format '{0}'")]
pub struct UnknownFontType(pub String);
