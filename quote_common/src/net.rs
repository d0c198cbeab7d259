//! Shared networking constants and helpers used by client and server.
use std::time::Duration;

/// Port the quote server listens on by default.
pub const SERVER_PORT: u16 = 8080;
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";
/// Base URL of the upstream quote API; the pair (`USD-BRL`) is appended.
pub const PROVIDER_BASE_URL: &str = "https://economia.awesomeapi.com.br/json/last";

/// Default deadline for the server's call to the provider.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);
/// Default deadline for the server's store write.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Default deadline for the client's whole request.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Helper to format an address with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Join a base URL and a path segment with exactly one slash between them.
pub fn join_url(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/cotacao"),
            "http://localhost:8080/cotacao"
        );
        assert_eq!(join_url(PROVIDER_BASE_URL, "USD-BRL"), format!("{PROVIDER_BASE_URL}/USD-BRL"));
    }
}
