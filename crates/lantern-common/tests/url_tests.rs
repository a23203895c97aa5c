//! Integration tests for URL resolution.

use lantern_common::url::{DocumentBase, resolve_url, url_directory};

const BASE: &str = "https://x.test/a/b";

fn no_document() -> DocumentBase {
    DocumentBase::default()
}

#[test]
fn test_document_relative() {
    assert_eq!(
        resolve_url("foo/bar.css", BASE, &no_document()),
        "https://x.test/a/foo/bar.css"
    );
}

#[test]
fn test_server_relative_discards_base_path() {
    assert_eq!(
        resolve_url("/foo/bar.css", BASE, &no_document()),
        "https://x.test/foo/bar.css"
    );
}

#[test]
fn test_redundant_slashes_are_collapsed() {
    assert_eq!(
        resolve_url("foo//bar.css", BASE, &no_document()),
        "https://x.test/a/foo/bar.css"
    );
    assert_eq!(
        resolve_url("/foo//bar.css", BASE, &no_document()),
        "https://x.test/foo/bar.css"
    );
    assert_eq!(
        resolve_url("img///dir/", BASE, &no_document()),
        "https://x.test/a/img/dir/"
    );
    // The query is not part of the path.
    assert_eq!(
        resolve_url("q.css?next=a//b", BASE, &no_document()),
        "https://x.test/a/q.css?next=a//b"
    );
}

#[test]
fn test_scheme_relative_borrows_base_scheme() {
    assert_eq!(
        resolve_url("//y.test/z", BASE, &no_document()),
        "https://y.test/z"
    );
    assert_eq!(
        resolve_url("//y.test/z", "http://x.test/", &no_document()),
        "http://y.test/z"
    );
}

#[test]
fn test_fragment_only_is_unchanged() {
    assert_eq!(resolve_url("#frag", BASE, &no_document()), "#frag");
    assert_eq!(resolve_url("#", BASE, &no_document()), "#");
    assert_eq!(
        resolve_url("#frag", "", &DocumentBase::new("https://doc.test/p")),
        "#frag"
    );
}

#[test]
fn test_absolute_is_unchanged() {
    assert_eq!(
        resolve_url("https://z.test/q", BASE, &no_document()),
        "https://z.test/q"
    );
    // Not re-serialized: no trailing slash is added.
    assert_eq!(
        resolve_url("https://z.test", "", &no_document()),
        "https://z.test"
    );
}

#[test]
fn test_empty_reference_yields_effective_base() {
    assert_eq!(resolve_url("", BASE, &no_document()), BASE);
    let document = DocumentBase::new("https://doc.test/dir/page.html?q=1");
    assert_eq!(
        resolve_url("", "", &document),
        "https://doc.test/dir/page.html?q=1"
    );
}

#[test]
fn test_document_base_used_when_base_is_empty() {
    let document = DocumentBase::new("https://doc.test/dir/page.html");
    assert_eq!(
        resolve_url("img/logo.png", "", &document),
        "https://doc.test/dir/img/logo.png"
    );
    assert_eq!(
        resolve_url("/logo.png", "", &document),
        "https://doc.test/logo.png"
    );
}

#[test]
fn test_dot_segments_are_normalized() {
    assert_eq!(
        resolve_url("../c/./d.css", BASE, &no_document()),
        "https://x.test/c/d.css"
    );
    assert_eq!(
        resolve_url("/x/../y/./z.css", BASE, &no_document()),
        "https://x.test/y/z.css"
    );
    // Climbing above the root is tolerated.
    assert_eq!(
        resolve_url("../../../../q.css", BASE, &no_document()),
        "https://x.test/q.css"
    );
}

#[test]
fn test_base_query_and_fragment_dropped() {
    assert_eq!(
        resolve_url("p.css", "https://x.test/a/b?x=1#top", &no_document()),
        "https://x.test/a/p.css"
    );
}

#[test]
fn test_no_base_returns_reference() {
    assert_eq!(
        resolve_url("foo/bar.css", "", &no_document()),
        "foo/bar.css"
    );
    assert_eq!(
        resolve_url("foo/bar.css", "not a base", &no_document()),
        "foo/bar.css"
    );
}

#[test]
fn test_local_path_base() {
    assert_eq!(
        resolve_url("style.css", "/srv/site/index.html", &no_document()),
        "file:///srv/site/style.css"
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let document = DocumentBase::new("https://doc.test/a/");
    let first = resolve_url("b/c.png", "", &document);
    let second = resolve_url("b/c.png", "", &document);
    assert_eq!(first, second);
}

#[test]
fn test_document_base_replaced_not_merged() {
    let mut document = DocumentBase::new("https://one.test/a/");
    document.set("https://two.test/b/");
    assert_eq!(document.as_str(), "https://two.test/b/");
    assert_eq!(
        resolve_url("c.png", "", &document),
        "https://two.test/b/c.png"
    );
}

#[test]
fn test_url_directory() {
    assert_eq!(
        url_directory("https://x.test/css/site.css"),
        "https://x.test/css"
    );
    assert_eq!(url_directory("site.css"), "site.css");
}
