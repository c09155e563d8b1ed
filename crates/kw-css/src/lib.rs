//! kw stylesheet generator
//!
//! Turns a [`Design`] token set into the CSS a page needs to render kw
//! components: `@font-face` rules, a `:root` block of `--kw-*` custom
//! properties, and the fixed component rule library that reads them.
//!
//! ```text
//! Design → font_face::generate ─┐
//!        → variables::generate ─┼→ + rules::RULES → minify → String
//! ```
//!
//! Every function here is pure. Token values are interpolated verbatim.

pub mod font_face;
pub mod minify;
pub mod rules;
pub mod variables;

pub use kw_tokens::Design;
pub use minify::minify;
pub use rules::RULES;
pub use variables::VARIABLE_PREFIX;

/// All generated parts for one design.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOutput {
    pub font_faces: String,
    pub css_variables: String,
    pub styles: String,
}

/// `@font-face` rules for every font face in the design.
pub fn get_font_faces(design: &Design) -> String {
    font_face::generate(design)
}

/// The `:root` custom-property block.
pub fn get_css_variables(design: &Design) -> String {
    variables::generate(design)
}

/// The complete minified stylesheet: font faces, variables, then the
/// component rule library.
pub fn get_styles(design: &Design) -> String {
    assemble(&get_font_faces(design), &get_css_variables(design))
}

/// Generate every part at once, sharing the emitter output.
pub fn compile(design: &Design) -> StyleOutput {
    let font_faces = get_font_faces(design);
    let css_variables = get_css_variables(design);
    let styles = assemble(&font_faces, &css_variables);
    StyleOutput {
        font_faces,
        css_variables,
        styles,
    }
}

fn assemble(font_faces: &str, css_variables: &str) -> String {
    let mut css = String::with_capacity(font_faces.len() + css_variables.len() + RULES.len());
    css.push_str(font_faces);
    css.push('\n');
    css.push_str(css_variables);
    css.push('\n');
    css.push_str(RULES);

    let styles = minify(&css);
    log::debug!(
        target: "kw_css",
        "assembled stylesheet: {} bytes raw, {} bytes minified",
        css.len(),
        styles.len()
    );
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use kw_tokens::{FontFace, FontSource, FontType, FontWeight};
    use pretty_assertions::assert_eq;

    fn plain_design() -> Design {
        Design {
            font_faces: Vec::new(),
            ..Design::default()
        }
    }

    // =========================================================================
    // get_styles
    // =========================================================================

    #[test]
    fn test_styles_have_no_newlines_or_double_spaces() {
        let styles = get_styles(&Design::default());
        assert!(!styles.contains('\n'));
        assert!(!styles.contains("  "));
    }

    #[test]
    fn test_styles_block_order() {
        let styles = get_styles(&Design::default());
        let font_face = styles.find("@font-face").unwrap();
        let root = styles.find(":root").unwrap();
        let paragraph = styles.find(".kw-paragraph").unwrap();
        assert!(font_face < root);
        assert!(root < paragraph);
    }

    #[test]
    fn test_styles_default_prefix() {
        let styles = get_styles(&Design::default());
        assert!(styles.starts_with(
            "@font-face {font-family: 'Hind';src: url(\"hind-light-webfont.woff2\") format(\"woff2\");font-weight: normal;font-style: normal;font-display: block;}@font-face {font-family: 'Hind';"
        ));
        assert!(styles.contains(
            "font-display: block;}:root {--kw-text-color: #000;--kw-headline-color: #000;--kw-action-color: #E8398E;"
        ));
    }

    #[test]
    fn test_styles_without_font_faces() {
        let styles = get_styles(&plain_design());
        assert!(styles.starts_with(":root {--kw-text-color: #000;"));
        assert!(!styles.contains("@font-face"));
    }

    #[test]
    fn test_styles_contain_rule_library() {
        let design = Design {
            action_color: "papayawhip".into(),
            ..plain_design()
        };
        let styles = get_styles(&design);
        for selector in [
            ".kw-paragraph,.kw-link {",
            ".kw-headline6 {font-size: 18px;font-weight: bold;}",
            ".kw-button-primary,.kw-button-secondary {",
            ".kw-button-primary:focus {outline: 2px solid var(--kw-action-hover-color);}",
            ".kw-button-secondary:not([disabled]):hover {",
        ] {
            assert!(styles.contains(selector), "missing {selector}");
        }
        assert!(styles.ends_with("box-shadow: 0 0 5px rgba(0, 0, 0, .4);}"));
    }

    #[test]
    fn test_styles_keep_single_spaces() {
        let styles = get_styles(&plain_design());
        assert!(styles.contains(".kw-paragraph a:not([disabled]):hover,"));
        assert!(styles.contains("background: transparent !important;"));
        assert!(styles.contains("--kw-feedback-partial-positive-color: rgb(135, 135, 135);"));
    }

    #[test]
    fn test_styles_are_idempotent_under_minify() {
        let styles = get_styles(&Design::default());
        assert_eq!(minify(&styles), styles);
    }

    #[test]
    fn test_styles_minify_token_whitespace() {
        let design = Design {
            text_font_family: "Hind,\n    Arial".into(),
            ..plain_design()
        };
        assert!(get_styles(&design).contains("--kw-text-font-family: Hind,Arial;"));
    }

    #[test]
    fn test_styles_are_deterministic() {
        let design = Design::default();
        assert_eq!(get_styles(&design), get_styles(&design.clone()));
    }

    // =========================================================================
    // compile
    // =========================================================================

    #[test]
    fn test_compile_matches_individual_functions() {
        let mut design = Design::default();
        design.font_faces.push(FontFace {
            name: "Mono".into(),
            sources: vec![FontSource::new("mono.ttf", FontType::Truetype)],
            font_weight: FontWeight::from(400u16),
            font_style: "normal".into(),
        });
        let output = compile(&design);
        assert_eq!(output.font_faces, get_font_faces(&design));
        assert_eq!(output.css_variables, get_css_variables(&design));
        assert_eq!(output.styles, get_styles(&design));
    }

    #[test]
    fn test_compile_threads() {
        let design = Design::default();
        let expected = get_styles(&design);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let design = design.clone();
                std::thread::spawn(move || get_styles(&design))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
