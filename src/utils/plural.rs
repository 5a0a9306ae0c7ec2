//! Pluralization for summary and warning lines.

/// `""` for one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(6, "sidebar section")` -> `"6 sidebar sections"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "nav item"), "0 nav items");
        assert_eq!(plural_count(1, "social link"), "1 social link");
        assert_eq!(plural_count(7, "nav item"), "7 nav items");
    }
}
