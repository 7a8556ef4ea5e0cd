use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

/// Token every mutating request must present, shared with handlers as request data.
#[derive(Clone)]
pub struct ExpectedToken(pub String);

/// API token passed in the `token` header
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "token",
    key_in = "header",
    checker = "api_token_checker"
)]
#[allow(dead_code)]
pub struct ApiToken(pub String);

async fn api_token_checker(req: &Request, api_key: ApiKey) -> Option<String> {
    let Some(expected) = req.data::<ExpectedToken>() else {
        tracing::error!("no API token configured; rejecting request");
        return None;
    };

    if token_matches(&expected.0, &api_key.key) {
        Some(api_key.key)
    } else {
        tracing::warn!(path = %req.uri().path(), "rejected request with invalid token");
        None
    }
}

fn token_matches(expected: &str, presented: &str) -> bool {
    expected.len() == presented.len()
        && expected
            .bytes()
            .zip(presented.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_identical_token() {
        assert!(token_matches("s3cret", "s3cret"));
    }

    #[test]
    fn should_reject_token_when_different() {
        assert!(!token_matches("s3cret", "s3creT"));
        assert!(!token_matches("s3cret", "s3cre"));
        assert!(!token_matches("s3cret", ""));
    }
}
