/// Terminal output helpers

/// Wrap `label` in an OSC 8 escape so supporting terminals render it as a link to `url`
pub fn hyperlink(label: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{label}\x1b]8;;\x1b\\")
}
