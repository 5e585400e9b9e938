use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Trim configured origins and drop empty entries.
#[must_use]
pub fn parse_cors_origins(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `origin` matches the configured entry `allowed`.
///
/// The match is exact, except that an entry without a port also covers
/// that scheme and host on any port: `http://localhost` matches
/// `http://localhost:3000` but not `http://localhost.example.com`.
#[must_use]
pub fn origin_matches(origin: &str, allowed: &str) -> bool {
    match origin.strip_prefix(allowed) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix(':')
            .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())),
        None => false,
    }
}

/// Build a CORS layer for the item API with the given allowed origins.
///
/// See [`origin_matches`] for how an origin is checked against each entry.
/// Pass "*" in the origins list to allow all origins.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }

            origin.to_str().is_ok_and(|origin_str| {
                cors_origins
                    .iter()
                    .any(|allowed| origin_matches(origin_str, allowed))
            })
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_origins_trims_and_filters() {
        let raw = vec![
            " http://localhost:3000 ".to_string(),
            String::new(),
            "  ".to_string(),
            "https://app.example.com".to_string(),
        ];
        assert_eq!(
            parse_cors_origins(&raw),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_origin_matches_exact_and_any_port() {
        assert!(origin_matches("http://localhost", "http://localhost"));
        assert!(origin_matches("http://localhost:5173", "http://localhost"));
        assert!(origin_matches("https://app.example.com", "https://app.example.com"));
        assert!(origin_matches("http://127.0.0.1:8080", "http://127.0.0.1"));
    }

    #[test]
    fn test_origin_matches_rejects_lookalike_hosts() {
        assert!(!origin_matches("http://localhost.attacker.example", "http://localhost"));
        assert!(!origin_matches("http://localhostevil.com", "http://localhost"));
        assert!(!origin_matches("http://127.0.0.1.nip.io", "http://127.0.0.1"));
        assert!(!origin_matches("http://localhost:", "http://localhost"));
        assert!(!origin_matches("http://localhost:80@evil.com", "http://localhost"));
        assert!(!origin_matches("https://localhost", "http://localhost"));
    }

    #[test]
    fn test_origin_with_port_entry_is_exact() {
        assert!(origin_matches("http://localhost:3000", "http://localhost:3000"));
        assert!(!origin_matches("http://localhost:30001", "http://localhost:3000"));
    }

    #[test]
    fn test_default_origins_parse() {
        let raw: Vec<String> = DEFAULT_CORS_ORIGINS
            .split(',')
            .map(str::to_string)
            .collect();
        let origins = parse_cors_origins(&raw);
        assert_eq!(origins.len(), 4);
        assert!(origins.contains(&"http://localhost".to_string()));
    }
}
