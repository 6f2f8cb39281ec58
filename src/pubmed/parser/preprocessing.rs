//! XML preprocessing applied before deserialization

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::debug;

/// Strip inline HTML-like formatting tags from XML content
///
/// Titles and abstracts routinely contain `<i>`, `<sup>`, `<sub>`, `<b>` and
/// similar markup, which the serde deserializer would otherwise treat as child
/// elements and lose the surrounding text.
///
/// ```ignore
/// let cleaned = strip_inline_html_tags("<AbstractText>CO<sup>2</sup> levels</AbstractText>");
/// assert_eq!(cleaned, "<AbstractText>CO2 levels</AbstractText>");
/// ```
pub(crate) fn strip_inline_html_tags(xml: &str) -> Cow<'_, str> {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is a valid regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned
}
