//! Inline CSS helpers.

/// Join property/value pairs into an inline style string.
///
/// ```rust
/// use domkit::style::css_text;
///
/// assert_eq!(css_text([("color", "red"), ("margin", "0 auto")]), "color: red; margin: 0 auto");
/// ```
pub fn css_text<I, K, V>(declarations: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    declarations
        .into_iter()
        .map(|(property, value)| format!("{}: {}", property.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_empty() {
        assert_eq!(css_text(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn test_single() {
        assert_eq!(css_text([("display", "none")]), "display: none");
    }

    #[test]
    fn test_owned_map() {
        let mut styles = IndexMap::new();
        styles.insert("width".to_string(), "10px".to_string());
        styles.insert("height".to_string(), "20px".to_string());
        assert_eq!(css_text(&styles), "width: 10px; height: 20px");
    }
}
