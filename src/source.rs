use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;

/// Anything that can turn a listing URL into post texts.
pub trait TextSource {
    fn fetch_text_units(&self, url: &str) -> Result<Vec<String>, FetchError>;
}

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub struct Child {
    pub data: Post,
}

#[derive(Debug, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
}

impl Post {
    pub fn text_unit(&self) -> String {
        format!("{} {}", self.title, self.selftext)
    }
}

/// Parse a listing body into one text unit per post.
pub fn parse_listing(url: &str, body: &str) -> Result<Vec<String>, FetchError> {
    let listing: Listing = serde_json::from_str(body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })?;
    Ok(listing
        .data
        .children
        .iter()
        .map(|c| c.data.text_unit())
        .collect())
}

pub struct HttpListingSource {
    client: Client,
    user_agent: String,
}

impl HttpListingSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpListingSource {
            client,
            user_agent: user_agent.to_string(),
        })
    }
}

impl TextSource for HttpListingSource {
    fn fetch_text_units(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        debug!(url, bytes = body.len(), "listing downloaded");
        parse_listing(url, &body)
    }
}
