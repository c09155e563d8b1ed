//! Whitespace-only minification.
//!
//! Each pass drops every newline and every run of two or more spaces found
//! in its input. Single spaces stay, so descendant combinators
//! (`.kw-paragraph a`) and multi-value declarations (`0 0 2px`) keep their
//! meaning. Comments, tabs and semicolons are untouched.

/// Strip newlines and runs of 2+ spaces.
///
/// Passes repeat until nothing changes: a single space on each side of a
/// newline survives one pass as a new two-space run. The result never
/// contains `\n` or two adjacent spaces, so applying it twice gives the
/// same string.
pub fn minify(css: &str) -> String {
    let mut current = strip_pass(css);
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_pass(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut spaces = 0usize;
    for ch in css.chars() {
        if ch == ' ' {
            spaces += 1;
            continue;
        }
        if spaces == 1 {
            out.push(' ');
        }
        spaces = 0;
        if ch != '\n' {
            out.push(ch);
        }
    }
    if spaces == 1 {
        out.push(' ');
    }
    out
}
