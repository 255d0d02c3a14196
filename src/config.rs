// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde_derive::{Deserialize, Serialize};
use std::io::Read;
use url::Url;

/// Settings for a `GeocodeClient` built with the default executor.
///
/// Every field is optional. An empty JSON object gives the same client as
/// `GeocodeClient::new`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClientConfig {
    /// Search endpoint. Defaults to `DEFAULT_ENDPOINT`.
    pub endpoint: Option<Url>,
    /// `User-Agent` header value. None is sent if unset.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn from_reader<R: Read>(config: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(config)
    }
}
