//! Root greeting endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

/// Greeting returned to smoke-test a finished deployment.
pub const GREETING: &str = "Hello CI/CD World - Automated Deployment!";

#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: GREETING })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_greeting() {
        let Json(resp) = root().await;
        assert_eq!(resp.message, GREETING);
    }

    #[test]
    fn serializes_to_exact_body() {
        let body = serde_json::to_string(&GreetingResponse { message: GREETING }).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Hello CI/CD World - Automated Deployment!"}"#
        );
    }
}
