//! Component rule library.
//!
//! Structural CSS for kw typography, links, headlines and buttons. Theme
//! values come only from `var(--kw-*)`; the literals here (padding,
//! shadows, transition timings, headline sizes) are not themeable.

/// Unminified rule library, appended after the custom-property block.
pub const RULES: &str = r#".kw-paragraph,
.kw-link {
    font-family: var(--kw-text-font-family);
    font-size: var(--kw-text-font-size);
    font-weight: 300;
    line-height: 1.6em;
    color: var(--kw-text-color);
}

.kw-paragraph a,
.kw-link {
    text-decoration: none;
    color: var(--kw-action-color);
    cursor: pointer;
}

.kw-paragraph a:not([disabled]):hover,
.kw-link:not([disabled]):hover {
    color: var(--kw-action-hover-color);
}

.kw-paragraph a[disabled],
.kw-link[disabled] {
    color: var(--kw-action-disabled-color);
    cursor: not-allowed;
}

.kw-headline2,
.kw-headline3,
.kw-headline4,
.kw-headline5,
.kw-headline6 {
    font-family: var(--kw-headline-font-family);
    font-weight: var(--kw-headline-font-weight);
    line-height: 1.2em;
    color: var(--kw-headline-color);
}

.kw-headline2 {
    font-size: 32px;
}

.kw-headline3 {
    font-size: 28px;
}

.kw-headline4 {
    font-size: 24px;
}

.kw-headline5 {
    font-size: 20px;
    line-height: 1.3em;
}

.kw-headline6 {
    font-size: 18px;
    font-weight: bold;
}

.kw-button-primary,
.kw-button-secondary {
    font-family: var(--kw-text-font-family);
    font-size: var(--kw-text-font-size);
    font-weight: 300;
    line-height: 1.6em;
    background: var(--kw-action-color);
    color: var(--kw-action-text-color);
    border: none;
    text-decoration: none;
    display: inline-block;
    padding: 7px 20px;
    box-shadow: 0 0 2px rgba(0, 0, 0, .3);
    cursor: pointer;
    transition: box-shadow 100ms ease-out;
    appearance: none;
    border-radius: var(--kw-button-border-radius);
}

.kw-button-primary:not([disabled]):hover {
    background: var(--kw-action-hover-color);
    color: var(--kw-action-text-color);
    box-shadow: 0 0 5px rgba(0, 0, 0, .6);
}

.kw-button-primary[disabled] {
    background: var(--kw-action-disabled-color);
    cursor: not-allowed;
    box-shadow: none;
}

.kw-button-primary:focus {
    outline: 2px solid var(--kw-action-hover-color);
}

.kw-button-secondary {
    background-color: transparent;
    color: var(--kw-action-color);
    box-shadow: none;
    outline: 1.5px solid var(--kw-action-color);
    outline-offset: -1px;
}

.kw-button-secondary[disabled] {
    color: var(--kw-action-disabled-color);
    background-color: transparent;
    cursor: not-allowed;
    outline-color: var(--kw-action-disabled-color);
}

.kw-button-secondary:not([disabled]):hover {
    color: var(--kw-action-hover-color);
    outline-color: var(--kw-action-hover-color);
    background: transparent !important;
    box-shadow: 0 0 5px rgba(0, 0, 0, .4);
}
"#;
