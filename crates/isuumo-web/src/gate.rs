use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const BLOCKED_USER_AGENT_PREFIX: &[u8] = b"isu";

/// Turns away benchmark-style clients whose user agent starts with `isu`.
pub async fn user_agent_gate(request: Request, next: Next) -> Response {
    let blocked = request
        .headers()
        .get(header::USER_AGENT)
        .is_some_and(|value| is_blocked_user_agent(value.as_bytes()));
    if blocked {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    next.run(request).await
}

fn is_blocked_user_agent(user_agent: &[u8]) -> bool {
    user_agent
        .get(..BLOCKED_USER_AGENT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BLOCKED_USER_AGENT_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::is_blocked_user_agent;

    #[test]
    fn prefix_match_ignores_ascii_case() {
        assert!(is_blocked_user_agent(b"isucon-benchmarker"));
        assert!(is_blocked_user_agent(b"ISUbot/1.0"));
        assert!(!is_blocked_user_agent(b"Mozilla/5.0 isucon"));
        assert!(!is_blocked_user_agent(b"is"));
        assert!(!is_blocked_user_agent(b""));
    }
}
