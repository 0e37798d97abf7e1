//! Minimal URL splitting for page-load events.

use percent_encoding::percent_decode_str;

/// Host and path of a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Lowercased scheme, e.g. `"https"`.
    pub scheme: String,
    /// Lowercased host without port or user info.
    pub host: String,
    /// Percent-decoded path starting with `/`. Defaults to `/`.
    pub path: String,
}

impl Location {
    /// Parse `scheme://[user@]host[:port]/path?query#fragment`.
    ///
    /// Query and fragment are discarded and the path is percent-decoded.
    /// Returns `None` when the string has no scheme separator.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let idx = url.find("://")?;
        let scheme = &url[..idx];
        let rest = &url[idx + 3..];

        let rest = rest.split('#').next().unwrap_or_default();
        let rest = rest.split('?').next().unwrap_or_default();

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let authority = match authority.rfind('@') {
            Some(i) => &authority[i + 1..],
            None => authority,
        };
        let host = match authority.rfind(':') {
            Some(i) if authority[i + 1..].parse::<u16>().is_ok() => &authority[..i],
            _ => authority,
        };

        Some(Location {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            path: percent_decode_str(path).decode_utf8_lossy().into_owned(),
        })
    }

    /// Whether the scheme is `http` or `https`.
    pub fn is_web(&self) -> bool {
        matches!(self.scheme.as_str(), "http" | "https")
    }
}
