/// Allowlist for remote images referenced by journal entries.
///
/// The rendering layer refuses to emit an `<img>` for any source that is
/// not HTTPS on a host under one of the allowed suffixes. A rejected URL
/// is simply not rendered; it is never an error.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RemoteImagePattern {
    pub protocol: &'static str,
    /// Matched against the end of the hostname; any subdomain depth.
    pub hostname_suffix: &'static str,
}

pub(crate) const REMOTE_IMAGE_PATTERNS: &[RemoteImagePattern] = &[RemoteImagePattern {
    protocol: "https",
    hostname_suffix: ".com",
}];

pub(crate) fn image_url_allowed(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    // Explicit ports are outside the allowlist (default port only).
    let Some(host) = authority.split(['@']).last().map(str::to_string) else {
        return false;
    };
    if host.contains(':') || host.is_empty() {
        return false;
    }

    REMOTE_IMAGE_PATTERNS.iter().any(|p| {
        scheme.eq_ignore_ascii_case(p.protocol)
            && host.ends_with(p.hostname_suffix)
            && host.len() > p.hostname_suffix.len()
    })
}
