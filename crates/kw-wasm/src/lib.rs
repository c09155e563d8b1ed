//! WASM bindings for the kw stylesheet generator.
//!
//! Exposes `getFontFaces()`, `getCssVariables()`, `getStyles()` and
//! `render()` to JavaScript via wasm-bindgen. Each takes a design token
//! object in camelCase form (`{ textColor, actionColor, fontFaces, ... }`);
//! `undefined` or `null` selects the built-in default design.

use std::fmt;

use kw_tokens::Design;
use wasm_bindgen::prelude::*;

fn design_from_js(value: JsValue) -> Result<Design, JsError> {
    let converted = if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(value))
    };
    design_or_default(converted).map_err(|message| JsError::new(&message))
}

/// `None` (a missing design) selects the defaults; a failed conversion
/// becomes the message thrown to JS.
fn design_or_default<E: fmt::Display>(
    converted: Option<Result<Design, E>>,
) -> Result<Design, String> {
    match converted {
        None => Ok(Design::default()),
        Some(result) => result.map_err(|e| format!("Invalid design tokens: {e}")),
    }
}

/// `@font-face` rules for the design's font faces.
#[wasm_bindgen(js_name = getFontFaces)]
pub fn get_font_faces(design: JsValue) -> Result<String, JsError> {
    Ok(kw_css::get_font_faces(&design_from_js(design)?))
}

/// The `:root` block of `--kw-*` custom properties.
#[wasm_bindgen(js_name = getCssVariables)]
pub fn get_css_variables(design: JsValue) -> Result<String, JsError> {
    Ok(kw_css::get_css_variables(&design_from_js(design)?))
}

/// The complete minified stylesheet, ready for a `<style>` element.
#[wasm_bindgen(js_name = getStyles)]
pub fn get_styles(design: JsValue) -> Result<String, JsError> {
    Ok(kw_css::get_styles(&design_from_js(design)?))
}

/// Generate every part at once.
///
/// Returns a JS object `{ fontFaces: string, cssVariables: string, styles: string }`.
#[wasm_bindgen]
pub fn render(design: JsValue) -> Result<JsValue, JsError> {
    let output = kw_css::compile(&design_from_js(design)?);

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"fontFaces".into(), &output.font_faces.into())
        .map_err(|_| JsError::new("Failed to set fontFaces property"))?;
    js_sys::Reflect::set(&js_obj, &"cssVariables".into(), &output.css_variables.into())
        .map_err(|_| JsError::new("Failed to set cssVariables property"))?;
    js_sys::Reflect::set(&js_obj, &"styles".into(), &output.styles.into())
        .map_err(|_| JsError::new("Failed to set styles property"))?;

    Ok(js_obj.into())
}

/// The built-in design tokens as a plain JS object.
#[wasm_bindgen(js_name = defaultDesign)]
pub fn default_design() -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    serde::Serialize::serialize(&Design::default(), &serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
