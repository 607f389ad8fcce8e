use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest display width among `names`, clamped to `min..=max`.
pub fn max_name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    names.map(UnicodeWidthStr::width).max().unwrap_or(min).clamp(min, max)
}

/// Pad `s` with spaces to exactly `width` terminal columns, truncating with
/// "..." when it is wider.
pub fn fit_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w <= width {
        return format!("{s}{}", " ".repeat(width - w));
    }
    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str(&".".repeat(width.min(3)));
    out.push_str(&" ".repeat(budget - used));
    out
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
