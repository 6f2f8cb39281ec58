//! Custom serde deserializers for mixed-content PubMed XML fields
//!
//! Elements such as `ArticleTitle` and `AbstractText` may carry attributes and
//! text split around nested markup. They do not map cleanly onto a plain
//! `$text` field, so their content is collected by hand.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// Text content of an element, with every text chunk concatenated
///
/// Attributes (`@Label`, `@NlmCategory`, ...) and nested elements are skipped.
/// Inline formatting tags are already stripped during preprocessing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct MixedText(pub String);

impl MixedText {
    pub fn into_trimmed(self) -> Option<String> {
        let text = self.0.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for MixedText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_mixed_text(deserializer).map(MixedText)
    }
}

fn deserialize_mixed_text<'de, D>(deserializer: D) -> result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};

    struct MixedTextVisitor;

    impl<'de> Visitor<'de> for MixedTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("element text content")
        }

        fn visit_str<E>(self, value: &str) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_unit<E>(self) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_map<M>(self, mut map: M) -> result::Result<String, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut text_parts = Vec::new();
            while let Some(key) = map.next_key::<String>()? {
                if key == "$text" || key == "$value" {
                    let value: String = map.next_value()?;
                    text_parts.push(value);
                } else {
                    let _: IgnoredAny = map.next_value()?;
                }
            }
            Ok(text_parts.join(""))
        }
    }

    deserializer.deserialize_any(MixedTextVisitor)
}
