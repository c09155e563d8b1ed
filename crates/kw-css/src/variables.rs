//! `:root` custom-property emitter.

use kw_tokens::Design;

/// Prefix shared by every generated custom property.
pub const VARIABLE_PREFIX: &str = "kw-";

/// One `--kw-<name>: <value>;` declaration per scalar token, in
/// [`Design::variables`] order.
pub fn generate(design: &Design) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in design.variables() {
        css.push_str(&format!("    --{VARIABLE_PREFIX}{name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_action_color() {
        let css = generate(&Design::default());
        assert!(css.contains("--kw-action-color: #E8398E;"));
    }

    #[test]
    fn test_full_default_block() {
        assert_eq!(
            generate(&Design::default()),
            ":root {
    --kw-text-color: #000;
    --kw-headline-color: #000;
    --kw-action-color: #E8398E;
    --kw-action-text-color: #fff;
    --kw-action-hover-color: rgb(235,87,159);
    --kw-action-disabled-color: #939393;
    --kw-background-color: #fff;
    --kw-feedback-positive-color: #008c14;
    --kw-feedback-partial-positive-color: rgb(135, 135, 135);
    --kw-feedback-negative-color: #c80000;
    --kw-feedback-solution-color: #ebaf0b;
    --kw-text-font-size: 18px;
    --kw-text-font-family: Hind, Arial, sans-serif;
    --kw-headline-font-family: Hind, Arial, sans-serif;
    --kw-headline-font-weight: 300;
    --kw-button-border-radius: 0;
}
"
        );
    }

    #[test]
    fn test_one_declaration_per_scalar() {
        let design = Design::default();
        let css = generate(&design);
        assert_eq!(css.matches("--kw-").count(), Design::VARIABLE_COUNT);
        for (name, value) in design.variables() {
            let decl = format!("--kw-{name}: {value};");
            assert_eq!(css.matches(&decl).count(), 1, "{decl}");
        }
    }

    #[test]
    fn test_values_verbatim() {
        let design = Design {
            button_border_radius: "4px 0 /* odd */".into(),
            headline_font_weight: "}".into(),
            ..Design::default()
        };
        let css = generate(&design);
        assert!(css.contains("--kw-button-border-radius: 4px 0 /* odd */;"));
        assert!(css.contains("--kw-headline-font-weight: };"));
    }

    #[test]
    fn test_ignores_font_faces() {
        let design = Design {
            font_faces: Vec::new(),
            ..Design::default()
        };
        assert_eq!(generate(&design), generate(&Design::default()));
    }
}
