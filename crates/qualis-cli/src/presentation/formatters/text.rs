pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Left-align `text` in `width` columns, counting chars rather than bytes.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Widest of `header` and every cell, for sizing a table column.
pub fn column_width<'a>(header: &str, cells: impl IntoIterator<Item = &'a str>) -> usize {
    cells
        .into_iter()
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer text", 10), "a much ...");
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("né", 4), "né  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width("CHECK", ["Not Null", "Range (0 - 120)"]), 15);
        assert_eq!(column_width("DETAILS", Vec::<&str>::new()), 7);
    }
}
