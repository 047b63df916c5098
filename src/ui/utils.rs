use unicode_width::UnicodeWidthChar;

use crate::recipients::fit::display_width;

/// Clip `s` to `max_width` cells, appending "…" if anything was cut 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out + "…"
}

/// Pack names into lines of at most `width` cells without splitting a name.
///
/// Every name but the last keeps its trailing comma, so the lines joined with a
/// single space read exactly like the comma-joined list. A name wider than a
/// whole line is clipped with [`truncate`].
pub fn wrap_names(names: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for (i, name) in names.iter().enumerate() {
        let token = if i + 1 < names.len() {
            format!("{},", name)
        } else {
            name.clone()
        };
        let token = truncate(&token, width);

        if current.is_empty() {
            current = token;
        } else if display_width(&current) + 1 + display_width(&token) <= width {
            current.push(' ');
            current.push_str(&token);
        } else {
            lines.push(std::mem::take(&mut current));
            current = token;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
