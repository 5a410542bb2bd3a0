use regex::Regex;
use std::sync::OnceLock;

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Rewrites `**text**` emphasis into `<strong>text</strong>`.
pub fn render_emphasis(content: &str) -> String {
    bold_pattern()
        .replace_all(content, "<strong>$1</strong>")
        .into_owned()
}
