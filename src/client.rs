// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{ClientConfig, Error, ErrorKind, Executor, GeocodeResponse,
    HyperExecutor};
use hyper::{Method, StatusCode};
use url::Url;

/// Search endpoint used unless another one is configured.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Looks up free-text locations with a Nominatim search endpoint.
///
/// The client keeps no state between lookups, so it can be shared freely
/// as long as its executor can.
#[derive(Clone, Debug)]
pub struct GeocodeClient<E = HyperExecutor> {
    executor: E,
    endpoint: Option<Url>,
}

impl GeocodeClient {
    pub fn new() -> Self {
        GeocodeClient::with_executor(HyperExecutor::new())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let mut executor = HyperExecutor::new();
        if let Some(agent) = &config.user_agent {
            executor = executor.user_agent(agent)?;
        }
        let mut client = GeocodeClient::with_executor(executor);
        client.endpoint = config.endpoint.clone();
        Ok(client)
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        GeocodeClient::new()
    }
}

impl<E: Executor> GeocodeClient<E> {
    pub fn with_executor(executor: E) -> Self {
        GeocodeClient {executor, endpoint: None}
    }

    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn executor(&self) -> &E {&self.executor}

    /// Builds the search URL for `location`.
    ///
    /// `location` is passed through as is, with form encoding.
    pub fn request_url(&self, location: &str) -> Result<Url, Error> {
        let mut url = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => Url::parse(DEFAULT_ENDPOINT)
                .map_err(|e| Error::new(ErrorKind::RequestConstruction, e))?,
        };
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::new(ErrorKind::RequestConstruction,
                format!("Unsupported endpoint scheme: {}", scheme))),
        }
        url.query_pairs_mut()
            .append_pair("q", location)
            .append_pair("format", "json")
            .append_pair("addressdetails", "1");
        Ok(url)
    }

    /// Runs a search and returns every match, best first.
    pub async fn search(&self, location: &str)
        -> Result<GeocodeResponse, Error>
    {
        let url = self.request_url(location)?;
        let resp = self.executor.execute(Method::GET, &url, None).await?;
        if resp.status != StatusCode::OK {
            return Err(ErrorKind::UnexpectedStatus.into());
        }
        GeocodeResponse::from_slice(&resp.body)
    }

    /// Returns the country code of the best match for `location`.
    ///
    /// The code may be empty if the provider has no country for the match.
    pub async fn country_code(&self, location: &str) -> Result<String, Error> {
        let resp = self.search(location).await?;
        resp.country_code().map(str::to_owned)
    }
}
