//! Inline markup transcoding between the sigil dialect and HTML.
//!
//! Both directions are plain string rewrites; text without matches comes
//! back unchanged. They are inverses only on output of the opposite
//! direction with non-nested, non-overlapping spans.

mod dialect;
mod rule;

pub use dialect::{html_rules, markdown_rules};
pub use rule::Rule;

use std::borrow::Cow;

use indexmap::IndexMap;
use log::debug;

/// Convert markup sigils to inline HTML tags
pub fn to_html(text: &str) -> String {
    apply_all(text, html_rules().iter())
}

/// Convert inline HTML tags back to markup sigils
pub fn to_markdown(text: &str) -> String {
    apply_all(text, markdown_rules().iter())
}

/// Apply rules in sequence, each one seeing the previous one's output
fn apply_all<'r>(text: &str, rules: impl Iterator<Item = &'r Rule>) -> String {
    let mut out = Cow::Borrowed(text);
    for rule in rules {
        let replaced = match rule.apply(&out) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = replaced {
            out = Cow::Owned(s);
        }
    }
    out.into_owned()
}

/// Ordered collection of rules for one direction
pub struct Rules {
    /// Built-in dialect rules (applied first)
    builtin: &'static [Rule],
    /// Rules added by the user, applied after the built-ins in insertion order
    custom_rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Rules for markup to HTML
    pub fn html() -> Self {
        Self {
            builtin: html_rules(),
            custom_rules: IndexMap::new(),
        }
    }

    /// Rules for HTML to markup
    pub fn markdown() -> Self {
        Self {
            builtin: markdown_rules(),
            custom_rules: IndexMap::new(),
        }
    }

    /// Add or replace a custom rule
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Remove a custom rule
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.custom_rules.shift_remove(key)
    }

    /// All rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.builtin.iter().chain(self.custom_rules.values())
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.custom_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every rule over `text`
    pub fn apply(&self, text: &str) -> String {
        apply_all(text, self.iter())
    }
}

/// Transcoder with the built-in dialect plus caller-supplied rules
pub struct Transcoder {
    html_rules: Rules,
    markdown_rules: Rules,
}

impl Transcoder {
    /// Create a transcoder with only the built-in rules
    pub fn new() -> Self {
        Self {
            html_rules: Rules::html(),
            markdown_rules: Rules::markdown(),
        }
    }

    /// Add a rule to the markup to HTML direction
    pub fn add_html_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        debug!("adding html rule `{}`: {}", key, rule.pattern());
        self.html_rules.add(key, rule);
        self
    }

    /// Add a rule to the HTML to markup direction
    pub fn add_markdown_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        debug!("adding markdown rule `{}`: {}", key, rule.pattern());
        self.markdown_rules.add(key, rule);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    pub fn html_rules(&self) -> &Rules {
        &self.html_rules
    }

    pub fn markdown_rules(&self) -> &Rules {
        &self.markdown_rules
    }

    /// Convert markup sigils to inline HTML
    pub fn to_html(&self, text: &str) -> String {
        self.html_rules.apply(text)
    }

    /// Convert inline HTML to markup sigils
    pub fn to_markdown(&self, text: &str) -> String {
        self.markdown_rules.apply(text)
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(to_html("***bold***"), "<b>bold</b>");
        assert_eq!(to_markdown("<b>bold</b>"), "***bold***");
    }

    #[test]
    fn test_italic() {
        assert_eq!(to_html("___it___"), "<i>it</i>");
        assert_eq!(to_markdown("<i>it</i>"), "___it___");
    }

    #[test]
    fn test_underline() {
        assert_eq!(to_html("+++u+++"), "<u>u</u>");
        assert_eq!(to_markdown("<u>u</u>"), "+++u+++");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            to_html("{[go](http://x)}"),
            "<a href='http://x' target='_blank'>go</a>"
        );
        assert_eq!(
            to_markdown("<a href='http://x' target='_blank'>go</a>"),
            "{[go](http://x)}"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "nothing * to _ see + here [x](y) <p>para</p>";
        assert_eq!(to_html(text), text);
        assert_eq!(to_markdown(text), text);
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(
            to_html("***a*** then ***b*** and ___c___ +++d+++"),
            "<b>a</b> then <b>b</b> and <i>c</i> <u>d</u>"
        );
    }

    #[test]
    fn test_bold_content_spans_lines() {
        assert_eq!(to_html("***two\nlines***"), "<b>two\nlines</b>");
    }

    #[test]
    fn test_unterminated_sigils_pass_through() {
        assert_eq!(to_html("***open"), "***open");
        assert_eq!(to_html("______"), "______");
        assert_eq!(to_markdown("<b>open"), "<b>open");
    }

    #[test]
    fn test_link_label_with_other_sigils() {
        assert_eq!(
            to_html("{[***x***](http://y)}"),
            "<a href='http://y' target='_blank'><b>x</b></a>"
        );
    }

    #[test]
    fn test_italic_and_underline_stop_at_own_closing_tag() {
        assert_eq!(
            to_markdown("<i>a</i> and <i>b</i>"),
            "___a___ and ___b___"
        );
        assert_eq!(
            to_markdown("<u>a</u>, <u>b</u>"),
            "+++a+++, +++b+++"
        );
        assert_eq!(
            to_markdown("<b>x</b> <i>y</b></i>"),
            "***x*** ___y</b>___"
        );
    }

    #[test]
    fn test_round_trip_from_markup() {
        let markup = "Say ***hi*** to ___you___, +++now+++ via {[site](https://e.x/p?q=1)}.";
        assert_eq!(to_markdown(&to_html(markup)), markup);
    }

    #[test]
    fn test_round_trip_from_html() {
        let html = "<b>one</b> <i>two</i> <u>three</u> <a href='/rel' target='_blank'>four</a>";
        assert_eq!(to_html(&to_markdown(html)), html);
    }

    #[test]
    fn test_custom_rules_run_after_builtins() {
        let mut transcoder = Transcoder::new();
        transcoder
            .add_html_rule("strike", Rule::new(r"~~~([^~]+)~~~", "<s>${1}</s>").unwrap())
            .add_markdown_rule("strike", Rule::new(r"<s>(.+?)</s>", "~~~${1}~~~").unwrap());

        assert_eq!(transcoder.to_html("~~~x~~~ ***y***"), "<s>x</s> <b>y</b>");
        assert_eq!(transcoder.to_markdown("<s>x</s> <b>y</b>"), "~~~x~~~ ***y***");
        assert_eq!(transcoder.html_rules().len(), 5);
    }

    #[test]
    fn test_replacing_and_removing_custom_rules() {
        let mut rules = Rules::html();
        rules.add("tag", Rule::new("@@", "<hr>").unwrap());
        rules.add("tag", Rule::new("@@", "<br>").unwrap());
        assert_eq!(rules.apply("a@@b"), "a<br>b");
        assert!(rules.remove("tag").is_some());
        assert_eq!(rules.apply("a@@b"), "a@@b");
        assert!(!rules.is_empty());
    }

    #[test]
    fn test_plugin() {
        fn emoji(t: &mut Transcoder) {
            t.add_html_rule("smile", Rule::new(r":\)", "&#128578;").unwrap());
        }

        let mut transcoder = Transcoder::default();
        transcoder.use_plugin(emoji);
        assert_eq!(transcoder.to_html("hi :)"), "hi &#128578;");
    }
}
