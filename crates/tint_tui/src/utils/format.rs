//! Formatting helpers for fixed-width TUI text.

/// Truncate `s` to at most `max_width` characters, appending `suffix` when truncated.
/// Uses character count (not grapheme clusters); suitable for terminal column width in simple cases.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let take = max_width - suffix_len;
    format!("{}{}", s.chars().take(take).collect::<String>(), suffix)
}

/// Truncate to `max_width` with "…" suffix when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}

/// Filled cells of a slider bar `width` cells wide for `value` in `0..=max`.
pub fn slider_fill(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || width == 0 {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ellipsis_short() {
        assert_eq!(truncate_ellipsis("Clear Sky", 12), "Clear Sky");
    }

    #[test]
    fn truncate_ellipsis_long() {
        assert_eq!(truncate_ellipsis("Mono Light Dark", 8), "Mono Li…");
        assert_eq!(truncate_ellipsis("ab", 1), "a");
        assert_eq!(truncate_ellipsis("abc", 1), "…");
    }

    #[test]
    fn slider_fill_bounds() {
        assert_eq!(slider_fill(0.0, 255.0, 20), 0);
        assert_eq!(slider_fill(255.0, 255.0, 20), 20);
        assert_eq!(slider_fill(0.5, 1.0, 20), 10);
        assert_eq!(slider_fill(300.0, 255.0, 20), 20);
        assert_eq!(slider_fill(1.0, 0.0, 20), 0);
    }
}
