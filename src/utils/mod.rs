//! Utility functions and helpers.

pub mod date;
pub mod fs;
pub mod http;

use url::Url;

/// Make a site-relative link absolute against the origin of `base`.
///
/// Only paths starting with a single `/` are rewritten. Anything else,
/// absolute URLs included, is returned byte-for-byte so the link stays
/// comparable with previously stored ones.
pub fn resolve_url(base: &Url, href: &str) -> String {
    if href.starts_with('/') && !href.starts_with("//") {
        format!("{}{}", base.origin().ascii_serialization(), href)
    } else {
        href.to_string()
    }
}

/// Listing URL for a page index. Page 1 is the bare base URL.
pub fn page_url(base: &Url, page: u32) -> Url {
    let mut url = base.clone();
    if page > 1 {
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
    }
    url
}
