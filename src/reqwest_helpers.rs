use anyhow::{Context, Result};
use http::Extensions;
use log::{debug, error};
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Client, Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use std::time::Instant;

pub const DEFAULT_USER_AGENT: &str = concat!(
    "osrs-alch-margins/",
    env!("CARGO_PKG_VERSION"),
    " (alch margin report)"
);

/// No retry middleware here: a failed request fails the whole run.
pub fn create_client(user_agent: &str) -> Result<ClientWithMiddleware> {
    let reqwest_client = Client::builder()
        .build()
        .context("Failed to build http client")?;

    let user_agent_middleware = UserAgentMiddleware::new(user_agent)?;

    let client = ClientBuilder::new(reqwest_client)
        .with(user_agent_middleware)
        .with(ErrorLoggingMiddleware)
        .build();

    Ok(client)
}

/// The prices api blocks requests that come with a default library user-agent.
struct UserAgentMiddleware {
    user_agent: HeaderValue,
}

impl UserAgentMiddleware {
    pub fn new(user_agent: &str) -> Result<Self> {
        let user_agent = HeaderValue::from_str(user_agent)
            .with_context(|| format!("Invalid user-agent '{}'", user_agent))?;
        Ok(Self { user_agent })
    }
}

#[async_trait::async_trait]
impl Middleware for UserAgentMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut().insert(USER_AGENT, self.user_agent.clone());

        next.run(req, extensions).await
    }
}

pub struct ErrorLoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for ErrorLoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let start = Instant::now();
        let method = req.method().clone();
        let url = req.url().clone();

        let result = next.run(req, extensions).await;

        let duration = start.elapsed();

        match &result {
            Ok(resp) if !resp.status().is_success() => {
                error!(
                    "Request failed: {} {} - Status: {}, Duration: {:?}",
                    method,
                    url,
                    resp.status(),
                    duration
                );
            }
            Err(e) => {
                error!(
                    "Request error: {} {} - Error: {}, Duration: {:?}",
                    method, url, e, duration
                );
            }
            _ => {
                debug!(
                    "Request succeeded: {} {} - Duration: {:?}",
                    method, url, duration
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_user_agent_with_control_characters() {
        assert!(create_client("bad\nagent").is_err());
    }

    #[test]
    fn accepts_default_user_agent() {
        assert!(create_client(DEFAULT_USER_AGENT).is_ok());
    }
}
