//! Bionic Markdown rendering.

use crate::model::Page;
use crate::text::split;

/// Render text with the highlighted prefix of every word in bold.
///
/// Words are re-joined with single spaces. A word whose prefix is empty is
/// emitted as is.
pub fn to_bionic_markdown(text: &str) -> String {
    text.split_whitespace()
        .map(bionic_markdown_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one page, one sentence per line.
pub fn page_to_bionic_markdown(page: &Page) -> String {
    page.sentences()
        .iter()
        .map(|s| to_bionic_markdown(s))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bionic_markdown_word(word: &str) -> String {
    let parts = split(word);
    if parts.highlighted.is_empty() {
        return parts.rest;
    }
    format!("**{}**{}", escape_markdown(&parts.highlighted), escape_markdown(&parts.rest))
}

/// Escape characters that would break emphasis markers.
fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '\\' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bionic_markdown() {
        assert_eq!(
            to_bionic_markdown("Speed  reading is fun"),
            "**Sp**eed **rea**ding **i**s **fu**n"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(to_bionic_markdown("   "), "");
    }

    #[test]
    fn test_escapes_emphasis_characters() {
        assert_eq!(to_bionic_markdown("a*b"), "**a\\***b");
    }

    #[test]
    fn test_page_to_bionic_markdown() {
        let page = Page::new(
            1,
            "I read. You too".to_string(),
            vec!["I".into(), "read.".into(), "You".into(), "too".into()],
            vec!["I read".into(), "You too".into()],
        );
        assert_eq!(page_to_bionic_markdown(&page), "**I** **r**ead\n**Yo**u **to**o");
    }
}
