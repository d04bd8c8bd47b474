use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::LinkedinConfig;
use crate::linkedin::profile::{
    Elements, MeResponse, PositionElement, ProfileBundle, SkillElement,
};

const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const API_BASE: &str = "https://api.linkedin.com/v2";
const RESTLI_VERSION: &str = "2.0.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LinkedinError {
    #[error("LinkedIn request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LinkedIn returned {status} for {endpoint}: {body}")]
    Api {
        status: StatusCode,
        endpoint: String,
        body: String,
    },
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth token exchange and member profile reads.
#[derive(Clone)]
pub struct LinkedinClient {
    http: reqwest::Client,
}

impl LinkedinClient {
    pub fn new() -> Result<Self, LinkedinError> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
        })
    }

    /// Exchanges an authorization code for an access token.
    pub async fn exchange_code(
        &self,
        app: &LinkedinConfig,
        code: &str,
    ) -> Result<String, LinkedinError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", app.redirect_uri.as_str()),
            ("client_id", app.client_id.as_str()),
            ("client_secret", app.client_secret.as_str()),
        ];
        let response = self.http.post(TOKEN_URL).form(&params).send().await?;
        let token: TokenResponse = read_json(response, "oauth/v2/accessToken").await?;
        info!("Exchanged LinkedIn authorization code");
        Ok(token.access_token)
    }

    /// Reads `/me`, `/skills` and `/positions` for the token's member.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<ProfileBundle, LinkedinError> {
        let (me, skills, positions) = tokio::try_join!(
            self.get_json::<MeResponse>(access_token, "me"),
            self.get_json::<Elements<SkillElement>>(access_token, "skills"),
            self.get_json::<Elements<PositionElement>>(access_token, "positions"),
        )?;
        Ok(ProfileBundle {
            me,
            skills,
            positions,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        access_token: &str,
        endpoint: &str,
    ) -> Result<T, LinkedinError> {
        let response = self
            .http
            .get(format!("{API_BASE}/{endpoint}"))
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", RESTLI_VERSION)
            .send()
            .await?;
        read_json(response, endpoint).await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    endpoint: &str,
) -> Result<T, LinkedinError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LinkedinError::Api {
            status,
            endpoint: endpoint.to_string(),
            body,
        });
    }
    debug!("LinkedIn {endpoint} returned {status}");
    Ok(response.json().await?)
}
