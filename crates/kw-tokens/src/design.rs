//! The design token set and its built-in default.

use serde::{Deserialize, Serialize};

use crate::font::{FontFace, FontSource, FontType, FontWeight};
use crate::TokenError;

/// Locator of the bundled Hind light webfont (regular weight).
pub const HIND_LIGHT_WOFF2: &str = "hind-light-webfont.woff2";
/// Locator of the bundled Hind medium webfont (bold weight).
pub const HIND_MEDIUM_WOFF2: &str = "hind-medium-webfont.woff2";

const DEFAULT_FONT_FAMILY: &str = "Hind, Arial, sans-serif";

/// A complete set of theme values.
///
/// Every field is required. Scalar fields are opaque CSS text; they become
/// `--kw-*` custom properties in the order given by [`Design::variables`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Design {
    pub text_color: String,
    pub headline_color: String,
    pub action_color: String,
    pub action_text_color: String,
    pub action_hover_color: String,
    pub action_disabled_color: String,
    pub background_color: String,
    pub feedback_positive_color: String,
    pub feedback_partial_positive_color: String,
    pub feedback_negative_color: String,
    pub feedback_solution_color: String,
    pub text_font_size: String,
    pub text_font_family: String,
    pub headline_font_family: String,
    pub headline_font_weight: String,
    pub button_border_radius: String,
    pub font_faces: Vec<FontFace>,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            text_color: "#000".into(),
            headline_color: "#000".into(),
            action_color: "#E8398E".into(),
            action_text_color: "#fff".into(),
            action_hover_color: "rgb(235,87,159)".into(),
            action_disabled_color: "#939393".into(),
            background_color: "#fff".into(),
            feedback_positive_color: "#008c14".into(),
            feedback_partial_positive_color: "rgb(135, 135, 135)".into(),
            feedback_negative_color: "#c80000".into(),
            feedback_solution_color: "#ebaf0b".into(),
            text_font_size: "18px".into(),
            text_font_family: DEFAULT_FONT_FAMILY.into(),
            headline_font_family: DEFAULT_FONT_FAMILY.into(),
            headline_font_weight: "300".into(),
            button_border_radius: "0".into(),
            font_faces: vec![
                hind_face(HIND_LIGHT_WOFF2, "normal"),
                hind_face(HIND_MEDIUM_WOFF2, "bold"),
            ],
        }
    }
}

fn hind_face(src: &str, weight: &str) -> FontFace {
    FontFace {
        name: "Hind".into(),
        sources: vec![FontSource::new(src, FontType::Woff2)],
        font_weight: FontWeight::from(weight),
        font_style: "normal".into(),
    }
}

/// The built-in token set.
pub fn default_design() -> Design {
    Design::default()
}

impl Design {
    /// Number of scalar (custom property) fields.
    pub const VARIABLE_COUNT: usize = 16;

    /// Scalar fields as `(kebab-case name, value)` pairs, in emission order.
    pub fn variables(&self) -> [(&'static str, &str); Self::VARIABLE_COUNT] {
        [
            ("text-color", self.text_color.as_str()),
            ("headline-color", self.headline_color.as_str()),
            ("action-color", self.action_color.as_str()),
            ("action-text-color", self.action_text_color.as_str()),
            ("action-hover-color", self.action_hover_color.as_str()),
            ("action-disabled-color", self.action_disabled_color.as_str()),
            ("background-color", self.background_color.as_str()),
            ("feedback-positive-color", self.feedback_positive_color.as_str()),
            (
                "feedback-partial-positive-color",
                self.feedback_partial_positive_color.as_str(),
            ),
            ("feedback-negative-color", self.feedback_negative_color.as_str()),
            ("feedback-solution-color", self.feedback_solution_color.as_str()),
            ("text-font-size", self.text_font_size.as_str()),
            ("text-font-family", self.text_font_family.as_str()),
            ("headline-font-family", self.headline_font_family.as_str()),
            ("headline-font-weight", self.headline_font_weight.as_str()),
            ("button-border-radius", self.button_border_radius.as_str()),
        ]
    }

    /// Parse a token set from its camelCase JSON form.
    pub fn from_json(source: &str) -> Result<Self, TokenError> {
        let design: Design = serde_json::from_str(source)?;
        log::debug!(
            target: "kw_tokens",
            "loaded design with {} font face(s)",
            design.font_faces.len()
        );
        Ok(design)
    }

    /// Serialize to pretty-printed camelCase JSON.
    pub fn to_json(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with every relative font locator placed under `base`.
    ///
    /// Locators that are already absolute (`https://...`, `//cdn/...`,
    /// `/fonts/...`, `data:...`) are kept as they are.
    pub fn with_asset_base(&self, base: &str) -> Design {
        let mut design = self.clone();
        if base.is_empty() {
            return design;
        }
        let base = base.trim_end_matches('/');
        for source in design
            .font_faces
            .iter_mut()
            .flat_map(|face| face.sources.iter_mut())
        {
            if is_relative_locator(&source.src) {
                let rel = source.src.trim_start_matches("./");
                source.src = format!("{base}/{rel}");
            }
        }
        log::trace!(target: "kw_tokens", "applied asset base '{base}'");
        design
    }
}

fn is_relative_locator(src: &str) -> bool {
    !(src.starts_with('/') || src.starts_with("data:") || src.contains("://"))
}
