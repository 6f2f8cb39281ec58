//! EFetch request URL construction

use std::borrow::Cow;

/// Append the non-empty identifiers to `base_url`, comma separated
///
/// Identifiers are inserted verbatim; callers are responsible for passing
/// values that are safe inside a URL (see [`build_url_encoded`]).
///
/// # Example
///
/// ```
/// use pubmed_fetch::pubmed::request::build_url;
///
/// let url = build_url("https://example.org/efetch?id=", &["a", "", "b"]);
/// assert_eq!(url, "https://example.org/efetch?id=a,b");
/// ```
pub fn build_url<S: AsRef<str>>(base_url: &str, identifiers: &[S]) -> String {
    join_ids(base_url, identifiers, Cow::Borrowed)
}

/// Same as [`build_url`], percent-encoding every identifier
pub fn build_url_encoded<S: AsRef<str>>(base_url: &str, identifiers: &[S]) -> String {
    join_ids(base_url, identifiers, urlencoding::encode)
}

fn join_ids<'a, S, F>(base_url: &str, identifiers: &'a [S], render: F) -> String
where
    S: AsRef<str>,
    F: Fn(&'a str) -> Cow<'a, str>,
{
    let mut url = String::from(base_url);
    let mut first = true;
    for id in identifiers.iter().map(AsRef::as_ref).filter(|id| !id.is_empty()) {
        if !first {
            url.push(',');
        }
        url.push_str(&render(id));
        first = false;
    }
    url
}

/// Whether the batch has at least one identifier worth sending
pub(crate) fn has_identifiers<S: AsRef<str>>(identifiers: &[S]) -> bool {
    identifiers.iter().any(|id| !id.as_ref().is_empty())
}
