// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

//! Response format of the Nominatim search endpoint.
//!
//! Only the fields the client cares about are decoded, everything else the
//! provider sends (`place_id`, `licence`, `boundingbox`, ...) is skipped.

use crate::{Coordinates, Error, ErrorKind};
use serde::de::{self, Deserializer};
use serde_derive::{Deserialize, Serialize};
use std::slice;

/// Structured address of a search result.
///
/// Fields the provider leaves out or sets to `null` are empty strings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GeocodeAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub municipality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postcode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// ISO 3166-1 alpha-2 code in lower case, e.g. `se`.
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
}

/// One match returned by the provider.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GeocodeResult {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Provider-defined relevance. Only meaningful relative to the other
    /// results of the same response.
    #[serde(deserialize_with = "null_as_default")]
    pub importance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub address: GeocodeAddress,
}

impl GeocodeResult {
    /// Parses the textual coordinates of this result.
    ///
    /// `None` unless both values are finite numbers.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let latitude = parse_finite(&self.lat)?;
        let longitude = parse_finite(&self.lon)?;
        Some(Coordinates {latitude, longitude})
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: de::Deserialize<'de> + Default,
{
    <Option<T> as de::Deserialize>::deserialize(d)
        .map(Option::unwrap_or_default)
}

/// All matches for a query, best match first.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeocodeResponse(Vec<GeocodeResult>);

impl GeocodeResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn best_match(&self) -> Option<&GeocodeResult> {
        self.0.first()
    }

    /// Country code of the best match.
    ///
    /// An empty response is a `NoMatch` error. A best match without country
    /// data yields an empty string.
    pub fn country_code(&self) -> Result<&str, Error> {
        self.best_match()
            .map(|r| r.address.country_code.as_str())
            .ok_or_else(|| ErrorKind::NoMatch.into())
    }

    pub fn len(&self) -> usize {self.0.len()}

    pub fn is_empty(&self) -> bool {self.0.is_empty()}

    pub fn iter(&self) -> slice::Iter<'_, GeocodeResult> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<GeocodeResult> {self.0}
}

impl From<Vec<GeocodeResult>> for GeocodeResponse {
    fn from(results: Vec<GeocodeResult>) -> Self {
        GeocodeResponse(results)
    }
}

impl<'a> IntoIterator for &'a GeocodeResponse {
    type Item = &'a GeocodeResult;
    type IntoIter = slice::Iter<'a, GeocodeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for GeocodeResponse {
    type Item = GeocodeResult;
    type IntoIter = std::vec::IntoIter<GeocodeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
