use log::debug;
use std::collections::HashSet;

/// Outcome of matching an incoming `Origin` against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    /// The origin is in the allow-list as sent.
    Exact,
    /// The origin matched once its trailing slash was dropped.
    TrailingSlash,
    Denied,
}

impl OriginMatch {
    pub fn is_allowed(self) -> bool {
        !matches!(self, OriginMatch::Denied)
    }
}

/// Expanded set of origins permitted to make cross-origin requests.
///
/// Built once from the operator's comma-separated configuration and shared
/// read-only afterwards. An empty set denies everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginAllowlist {
    origins: HashSet<String>,
}

impl OriginAllowlist {
    /// Expands a raw configuration value. `None` yields a deny-all list.
    pub fn from_config(raw: Option<&str>) -> Self {
        let origins = raw.map(expand).unwrap_or_default();

        for origin in &origins {
            debug!("🔧 Allowed origin: {}", origin);
        }

        OriginAllowlist { origins }
    }

    pub fn check(&self, origin: &str) -> OriginMatch {
        if self.origins.contains(origin) {
            return OriginMatch::Exact;
        }

        // Only one slash is removed; `https://a.com//` stays denied.
        match origin.strip_suffix('/') {
            Some(trimmed) if self.origins.contains(trimmed) => OriginMatch::TrailingSlash,
            _ => OriginMatch::Denied,
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.check(origin).is_allowed()
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

/// Expands every non-empty entry of a comma-separated allow-list.
pub fn expand(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .flat_map(expand_entry)
        .collect()
}

/// Expands a single trimmed entry into the origins it stands for.
///
/// Localhost entries only gain a scheme when they lack one. Every other
/// entry always yields both the bare and the `www.` host under one scheme.
pub fn expand_entry(entry: &str) -> Vec<String> {
    if entry.contains("localhost") {
        if entry.contains("://") {
            return vec![entry.to_string()];
        }
        return vec![format!("http://{}", entry), format!("https://{}", entry)];
    }

    let (scheme, domain) = if let Some(rest) = entry.strip_prefix("http://") {
        ("http", rest)
    } else if let Some(rest) = entry.strip_prefix("https://") {
        ("https", rest)
    } else {
        ("https", entry)
    };

    let domain = domain.strip_suffix('/').unwrap_or(domain);
    let base_domain = domain.strip_prefix("www.").unwrap_or(domain);

    vec![
        format!("{}://{}", scheme, base_domain),
        format!("{}://www.{}", scheme, base_domain),
    ]
}
