//! Parsing of nav link targets and address-bar fragments.

/// Where a nav entry or jump button points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// `href="#about"` style.
    Section(String),
    /// `data-section="1"` style.
    Index(i64),
}

impl LinkTarget {
    /// Read a target from an element's `href` and `data-section` attributes.
    ///
    /// An `href` leaving the current document (`page_path`) is never a
    /// section link. A same-document fragment wins over `data-section`.
    pub fn from_attributes(
        href: Option<&str>,
        data_section: Option<&str>,
        page_path: &str,
    ) -> Option<Self> {
        if let Some(href) = href {
            let (path, fragment) = match href.find('#') {
                Some(hash) => href.split_at(hash),
                None => (href, ""),
            };
            if !same_document(path, page_path) {
                return None;
            }
            let id = fragment_id(fragment);
            if !id.is_empty() {
                return Some(LinkTarget::Section(id));
            }
        }
        data_section
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(LinkTarget::Index)
    }
}

/// Whether the part of an `href` before its `#` refers to the current page.
fn same_document(path: &str, page_path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    // other schemes, hosts and query strings leave the page
    if path.contains(':') || path.starts_with("//") || path.contains('?') {
        return false;
    }
    let dir_index = |p: &str| p.strip_suffix("index.html").unwrap_or(p).to_string();
    let page = page_path.trim_start_matches('/');
    if let Some(abs) = path.strip_prefix('/') {
        return dir_index(abs) == dir_index(page);
    }
    let path = path.strip_prefix("./").unwrap_or(path);
    let page_file = page.rsplit('/').next().unwrap_or(page);
    dir_index(path) == dir_index(page_file)
}

/// Strip the leading `#` of a fragment and percent-decode it.
pub fn fragment_id(fragment: &str) -> String {
    let s = fragment.strip_prefix('#').unwrap_or(fragment);
    percent_encoding::percent_decode_str(s)
        .decode_utf8()
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| s.to_string())
}
