//! Slash normalization and URL path joining.
//!
//! Every helper treats the empty string and the bare root as `/`.

/// Removes trailing slashes.
///
/// # Example
///
/// ```
/// use bric_util::trim_trailing_slash;
///
/// assert_eq!(trim_trailing_slash("path/to/file///"), "path/to/file");
/// assert_eq!(trim_trailing_slash(""), "/");
/// ```
pub fn trim_trailing_slash(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    path.trim_end_matches('/').to_string()
}

/// Removes leading slashes.
///
/// # Example
///
/// ```
/// use bric_util::trim_leading_slash;
///
/// assert_eq!(trim_leading_slash("///path/to/file"), "path/to/file");
/// assert_eq!(trim_leading_slash(""), "/");
/// ```
pub fn trim_leading_slash(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    path.trim_start_matches('/').to_string()
}

/// Ensures the path ends with a single trailing slash.
pub fn append_trailing_slash(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Ensures the path starts with a single leading slash.
pub fn prepend_leading_slash(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Joins URL path segments onto a base, inserting a single `/` between
/// parts and collapsing duplicate slash runs. Slash runs immediately
/// after `:` survive, so protocol separators like `https://` stay
/// intact.
///
/// Empty segments are skipped; with no segments the base (or `/`) is
/// returned unchanged. Everything empty yields `/`.
///
/// # Example
///
/// ```
/// use bric_util::join_url;
///
/// assert_eq!(join_url("api/", &["/users"]), "api/users");
/// assert_eq!(join_url("https://api.example.com", &["v1/users"]), "https://api.example.com/v1/users");
/// assert_eq!(join_url("api//v1/", &["//users///"]), "api/v1/users/");
/// ```
pub fn join_url(base: &str, segments: &[&str]) -> String {
    if segments.is_empty() {
        return if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        };
    }

    let mut path = base.to_string();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if path.is_empty() {
            path.push_str(segment);
            continue;
        }
        let trailing = path.ends_with('/');
        let leading = segment.starts_with('/');
        if trailing && leading {
            path.push_str(&segment[1..]);
        } else {
            if !trailing && !leading {
                path.push('/');
            }
            path.push_str(segment);
        }
    }

    let joined = normalize_slashes(&path);
    if joined.is_empty() { "/".to_string() } else { joined }
}

/// Collapses every slash run to a single `/`, except runs immediately
/// preceded by `:`.
fn normalize_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let chars: Vec<char> = path.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '/' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && chars[i] == '/' {
            i += 1;
        }
        if run_start > 0 && chars[run_start - 1] == ':' {
            for _ in run_start..i {
                out.push('/');
            }
        } else {
            out.push('/');
        }
    }
    out
}
