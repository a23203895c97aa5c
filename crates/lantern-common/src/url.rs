//! URL resolution against a document base.
//!
//! [§ 4.2.3 The base element](https://html.spec.whatwg.org/multipage/semantics.html#the-base-element)
//! [URL Standard](https://url.spec.whatwg.org/)
//!
//! The layout engine hands the container references in every form HTML
//! allows:
//!
//! ```text
//! https://foo.test/blah.css    absolute
//! //foo.test/blah.css          scheme-relative (network path)
//! /foo/bar.css                 server-relative
//! foo/bar.css                  document-relative
//! #section                     fragment-only
//! ```
//!
//! [`resolve_url`] maps each of them to an address the host can fetch. The
//! document's base URL is explicit context ([`DocumentBase`]) rather than
//! ambient state, so resolution stays pure and several documents can be
//! resolved side by side.

use ::url::{ParseError, Url};

/// The base URL of the document currently being rendered.
///
/// [§ 2.5 URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#document-base-url)
///
/// Set once when a document starts loading and read by every resolution
/// until the next document replaces it. Replacing never merges with the
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBase {
    url: String,
}

impl DocumentBase {
    /// Create a document base from an absolute URL (or local path).
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Replace the base with the URL of a newly loading document.
    pub fn set(&mut self, url: &str) {
        url.clone_into(&mut self.url);
    }

    /// The base URL as given, or `""` before any document was loaded.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// True before any document was loaded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Resolve `reference` against `base`, falling back to the document base.
///
/// [URL Standard § 4.4 URL parsing](https://url.spec.whatwg.org/#url-parsing)
///
/// # Algorithm
///
/// STEP 1: A reference that already carries a scheme is returned unchanged.
///
/// STEP 2: A fragment-only reference (`#id`, including a lone `#`) is
/// returned unchanged; it names a location in the current document and is
/// never rebased.
///
/// STEP 3: The effective base is `base` when non-empty, else `document`.
///
/// STEP 4: `//host/path` borrows only the scheme of the base.
///
/// STEP 5: `/path` keeps the scheme and authority of the base, discarding
/// its path.
///
/// STEP 6: Anything else is resolved against the base's directory.
///
/// STEP 7: For 5 and 6 the joined path is normalized: the URL parser
/// collapses `.` and `..` segments, and runs of `/` are folded into one.
/// Malformed segments are tolerated rather than rejected.
///
/// An empty reference yields the effective base as-is. When no usable base
/// exists the reference is returned unchanged. No I/O is performed.
#[must_use]
pub fn resolve_url(reference: &str, base: &str, document: &DocumentBase) -> String {
    // STEP 1: Already absolute.
    //
    // [URL Standard § 4.3](https://url.spec.whatwg.org/#url-parsing)
    // "An absolute-URL string is a URL-scheme string, followed by U+003A (:),
    // followed by a scheme-specific part."
    if has_scheme(reference) {
        return reference.to_string();
    }

    // STEP 2: Fragment-only.
    if reference.starts_with('#') {
        return reference.to_string();
    }

    // STEP 3: Effective base.
    let effective_base = if base.is_empty() {
        document.as_str()
    } else {
        base
    };

    if reference.is_empty() {
        return effective_base.to_string();
    }

    let Ok(base_url) = parse_base(effective_base) else {
        return reference.to_string();
    };

    // STEP 4: Scheme-relative ("network path").
    if reference.starts_with("//") {
        let joined = format!("{}:{reference}", base_url.scheme());
        return Url::parse(&joined).map_or(joined, |url| url.to_string());
    }

    // STEP 5 + STEP 6 + STEP 7: server- and document-relative, normalized.
    base_url.join(reference).map_or_else(
        |_| reference.to_string(),
        |url| collapse_slashes(url).to_string(),
    )
}

/// Fold every run of `/` in the path into a single `/`.
///
/// The URL parser keeps empty segments, so `a//b` survives a join.
fn collapse_slashes(mut url: Url) -> Url {
    if url.path().contains("//") {
        let mut path = String::with_capacity(url.path().len());
        for ch in url.path().chars() {
            if ch != '/' || !path.ends_with('/') {
                path.push(ch);
            }
        }
        url.set_path(&path);
    }
    url
}

/// The directory part of a resolved URL: everything before the last `/`.
///
/// Used as the base for references found inside an imported stylesheet.
#[must_use]
pub fn url_directory(resolved: &str) -> &str {
    resolved.rsplit_once('/').map_or(resolved, |(dir, _)| dir)
}

/// True if `reference` parses as a URL with a non-empty scheme.
fn has_scheme(reference: &str) -> bool {
    Url::parse(reference).is_ok_and(|url| !url.scheme().is_empty())
}

/// Parse a base URL, accepting absolute filesystem paths as `file:` URLs.
fn parse_base(base: &str) -> Result<Url, ParseError> {
    Url::parse(base)
        .or_else(|_| Url::from_file_path(base).map_err(|()| ParseError::RelativeUrlWithoutBase))
}
