//! Built-in rules for the sigil dialect.
//!
//! | Markup          | HTML                                     |
//! |-----------------|------------------------------------------|
//! | `***text***`    | `<b>text</b>`                            |
//! | `___text___`    | `<i>text</i>`                            |
//! | `+++text+++`    | `<u>text</u>`                            |
//! | `{[label](url)}`| `<a href='url' target='_blank'>label</a>` |
//!
//! Rules run in table order over the output of the previous rule. Spans do
//! not nest.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;

static HTML_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        bold_to_html(),
        italic_to_html(),
        underline_to_html(),
        link_to_html(),
    ]
});

static MARKDOWN_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        bold_to_markdown(),
        italic_to_markdown(),
        underline_to_markdown(),
        link_to_markdown(),
    ]
});

/// Rules turning markup sigils into HTML tags
pub fn html_rules() -> &'static [Rule] {
    &HTML_RULES
}

/// Rules turning HTML tags back into markup sigils
pub fn markdown_rules() -> &'static [Rule] {
    &MARKDOWN_RULES
}

fn rule(pattern: &str, replacement: &str) -> Rule {
    Rule::from_regex(
        Regex::new(pattern).expect("valid dialect regex"),
        replacement,
    )
}

fn bold_to_html() -> Rule {
    rule(r"\*\*\*([^*]+)\*\*\*", "<b>${1}</b>")
}

fn italic_to_html() -> Rule {
    rule(r"___([^_]+)___", "<i>${1}</i>")
}

fn underline_to_html() -> Rule {
    rule(r"\+\+\+([^+]+)\+\+\+", "<u>${1}</u>")
}

fn link_to_html() -> Rule {
    rule(
        r"\{\[([^\]]+)\]\(([^)]+)\)\}",
        "<a href='${2}' target='_blank'>${1}</a>",
    )
}

// Content stops at the first closing tag of the same element and stays on
// one line.

fn bold_to_markdown() -> Rule {
    rule(r"<b>(.+?)</b>", "***${1}***")
}

fn italic_to_markdown() -> Rule {
    rule(r"<i>(.+?)</i>", "___${1}___")
}

fn underline_to_markdown() -> Rule {
    rule(r"<u>(.+?)</u>", "+++${1}+++")
}

fn link_to_markdown() -> Rule {
    rule(
        r"<a href='([^']*)' target='_blank'>(.*?)</a>",
        "{[${2}](${1})}",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let html: Vec<_> = html_rules().iter().map(|r| r.replacement()).collect();
        assert_eq!(
            html,
            vec![
                "<b>${1}</b>",
                "<i>${1}</i>",
                "<u>${1}</u>",
                "<a href='${2}' target='_blank'>${1}</a>"
            ]
        );
        assert_eq!(markdown_rules().len(), 4);
    }

    #[test]
    fn test_bold_excludes_asterisk() {
        assert!(!html_rules()[0].pattern().is_match("***a*b***"));
        assert!(html_rules()[0].pattern().is_match("***ab***"));
    }

    #[test]
    fn test_link_groups() {
        let caps = html_rules()[3]
            .pattern()
            .captures("{[label](https://x.test/a?b=c)}")
            .unwrap();
        assert_eq!(&caps[1], "label");
        assert_eq!(&caps[2], "https://x.test/a?b=c");
    }
}
