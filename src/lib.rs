// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

//! Resolves free-text locations to ISO 3166-1 alpha-2 country codes using
//! the Nominatim search API.
//!
//! ```no_run
//! # async fn lookup() -> Result<(), geocode_country::Error> {
//! let client = geocode_country::GeocodeClient::new();
//! let code = client.country_code("Stockholm").await?;
//! assert_eq!(code, "se");
//! # Ok(())
//! # }
//! ```

#![deny(warnings)]

mod client;
mod config;
mod err;
mod executor;
mod nominatim;

pub use crate::client::{DEFAULT_ENDPOINT, GeocodeClient};
pub use crate::config::ClientConfig;
pub use crate::err::{Error, ErrorKind};
pub use crate::executor::{BasicAuth, Executor, HttpResponse, HyperExecutor};
pub use crate::nominatim::{GeocodeAddress, GeocodeResponse, GeocodeResult};
pub use hyper::body::Bytes;
pub use hyper::{Method, StatusCode};
pub use url::Url;

use serde_derive::Serialize;

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
