/// First `max_chars` characters of `s`, with `...` appended when cut.
pub fn truncate_preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Collapses line breaks and runs of whitespace into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_preview_keeps_short_text() {
        assert_eq!(truncate_preview("Agenda", 100), "Agenda");
        assert_eq!(truncate_preview("", 100), "");
    }

    #[test]
    fn truncate_preview_counts_characters_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate_preview(&text, 3), "ééé...");
        assert_eq!(truncate_preview(&text, 5), text);
    }

    #[test]
    fn single_line_collapses_breaks() {
        assert_eq!(single_line("Quarterly\nResults\t 2024 "), "Quarterly Results 2024");
    }
}
