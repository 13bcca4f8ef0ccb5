//! Blocking Meraki Dashboard client for the network clients listing

use tracing::debug;

use crate::config::RunConfig;
use crate::consts::API_KEY_HEADER;
use crate::core::{Page, PageRequest, PageSource};
use crate::error::ApiError;

use super::link::next_link;
use super::types::ClientRecord;

/// A full page of 1000 clients is a few hundred KB; leave generous headroom.
const MAX_PAGE_BYTES: u64 = 64 * 1024 * 1024;

pub(crate) struct MerakiClient {
    agent: ureq::Agent,
    api_key: String,
    clients_url: String,
    timespan: u64,
    per_page: u32,
}

impl MerakiClient {
    pub(crate) fn new(config: &RunConfig) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            api_key: config.api_key.clone(),
            clients_url: clients_url(&config.base_url, &config.network_id),
            timespan: config.window_seconds,
            per_page: config.per_page,
        }
    }

    fn get(
        &self,
        request: &PageRequest,
    ) -> (String, ureq::RequestBuilder<ureq::typestate::WithoutBody>) {
        match request {
            PageRequest::First => {
                let builder = self
                    .agent
                    .get(&self.clients_url)
                    .query("timespan", self.timespan.to_string())
                    .query("perPage", self.per_page.to_string());
                (self.clients_url.clone(), builder)
            }
            // Follow-up links already carry every query parameter.
            PageRequest::Next(url) => (url.clone(), self.agent.get(url)),
        }
    }
}

impl PageSource for MerakiClient {
    type Item = ClientRecord;

    fn fetch(&self, request: &PageRequest) -> Result<Page<ClientRecord>, ApiError> {
        let (url, builder) = self.get(request);
        debug!(%url, "fetching clients page");

        let mut response = builder
            .header(API_KEY_HEADER, &self.api_key)
            .call()
            .map_err(|e| classify_error(&url, e))?;

        let link = link_header(response.headers());

        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_PAGE_BYTES)
            .read_to_string()
            .map_err(|e| classify_error(&url, e))?;

        parse_page(&url, &body, link.as_deref())
    }
}

pub(crate) fn clients_url(base_url: &str, network_id: &str) -> String {
    format!(
        "{}/networks/{}/clients",
        base_url.trim_end_matches('/'),
        network_id
    )
}

pub(crate) fn parse_page(
    url: &str,
    body: &str,
    link_header: Option<&str>,
) -> Result<Page<ClientRecord>, ApiError> {
    let items: Vec<ClientRecord> =
        serde_json::from_str(body).map_err(|source| ApiError::MalformedResponse {
            url: url.to_string(),
            source,
        })?;
    Ok(Page {
        items,
        next: link_header.and_then(next_link),
    })
}

/// Every `Link` header line joined into one list. Servers may split links
/// across several lines.
fn link_header(headers: &ureq::http::HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(ureq::http::header::LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn classify_error(url: &str, err: ureq::Error) -> ApiError {
    let url = url.to_string();
    match err {
        ureq::Error::StatusCode(status @ (401 | 403)) => ApiError::Unauthorized { status, url },
        ureq::Error::StatusCode(404) => ApiError::NetworkNotFound { url },
        ureq::Error::StatusCode(status) => ApiError::Status { status, url },
        other => ApiError::Transport {
            url,
            source: Box::new(other),
        },
    }
}
