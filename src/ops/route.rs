use percent_encoding::percent_decode_str;

use crate::model::SidebarConfig;

/// Ensure a leading slash and strip a trailing one (`"/"` stays `"/"`)
pub fn normalize_slash(path: &str) -> String {
    let mut p = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        p.push('/');
    }
    p.push_str(path);
    if p.len() > 1 && p.ends_with('/') {
        p.pop();
    }
    p
}

/// Percent-decode a raw location from the navigation layer.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; a bad location
/// can only ever fail to match, never abort a pass.
pub fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Drop the first occurrence of a locale route prefix from a path.
///
/// No-op for an empty (or bare-slash) prefix.
pub fn remove_route_prefix(path: &str, prefix: &str) -> String {
    if prefix.is_empty() || prefix == "/" {
        return path.to_string();
    }
    path.replacen(prefix, "", 1)
}

/// Strip the application base path from the front of a location.
///
/// Paths outside the base are returned unchanged; the remainder is
/// re-normalized so `base` alone maps to `/`.
pub fn remove_base(path: &str, base: &str) -> String {
    if base.is_empty() || base == "/" {
        return path.to_string();
    }
    let base = normalize_slash(base);
    match path.strip_prefix(&base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

/// Href-insensitive form used for comparison: leading slash, no trailing
/// slash, no `.html` suffix, no trailing `index` segment.
fn normalize_href(path: &str) -> String {
    let mut p = normalize_slash(path);
    if let Some(stripped) = p.strip_suffix(".html") {
        p = stripped.to_string();
    }
    if let Some(stripped) = p.strip_suffix("/index") {
        p = if stripped.is_empty() {
            "/".to_string()
        } else {
            stripped.to_string()
        };
    }
    if p.len() > 1 && p.ends_with('/') {
        p.pop();
    }
    p
}

/// Whether a candidate link matches the current location.
///
/// `exact` compares normalized hrefs for equality; otherwise the candidate
/// also matches as a whole-segment prefix of the location (`/guide` matches
/// `/guide/start` but not `/guidebook`). An empty candidate never matches.
pub fn is_active(current_path: &str, candidate_link: &str, exact: bool) -> bool {
    if candidate_link.is_empty() {
        return false;
    }
    let current = normalize_href(current_path);
    let target = normalize_href(candidate_link);
    if current == target {
        return true;
    }
    if exact {
        return false;
    }
    target == "/" || current.starts_with(&format!("{target}/"))
}

/// Build the sidebar's per-location link matcher.
///
/// Composed the way the presentation layer needs it: the locale prefix is
/// stripped from both sides, the base path from the current location only,
/// and the comparison is exact.
pub fn active_matcher(config: &SidebarConfig, pathname: &str) -> impl Fn(&str) -> bool {
    let prefix = normalize_slash(&config.lang_route_prefix);
    let current = remove_base(&remove_route_prefix(pathname, &prefix), &config.base);
    move |link: &str| is_active(&current, &remove_route_prefix(link, &prefix), true)
}
