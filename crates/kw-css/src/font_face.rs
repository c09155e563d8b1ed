//! `@font-face` emitter.

use kw_tokens::{Design, FontFace, FontSource};

/// One `@font-face` block per font face, in order, with no separator.
pub fn generate(design: &Design) -> String {
    let css: String = design.font_faces.iter().map(font_face_rule).collect();
    log::trace!(
        target: "kw_css",
        "emitted {} @font-face rule(s)",
        design.font_faces.len()
    );
    css
}

fn font_face_rule(face: &FontFace) -> String {
    format!(
        "@font-face {{\n    font-family: '{}';\n    src: {};\n    font-weight: {};\n    font-style: {};\n    font-display: block;\n}}\n",
        face.name,
        src_list(&face.sources),
        face.font_weight,
        face.font_style,
    )
}

/// `url("...") format("...")` terms joined by a bare comma.
fn src_list(sources: &[FontSource]) -> String {
    sources
        .iter()
        .map(|source| format!("url(\"{}\") format(\"{}\")", source.src, source.format))
        .collect::<Vec<_>>()
        .join(",")
}
