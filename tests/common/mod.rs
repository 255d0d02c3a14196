//! Executor doubles shared by the integration tests.

#![allow(dead_code)]

use futures::future::BoxFuture;
use geocode_country::{BasicAuth, Bytes, Error, ErrorKind, Executor,
    HttpResponse, Method, StatusCode, Url};

pub const STOCKHOLM: &str = r#"[
    {
        "place_id": 128726,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0. https://osm.org/copyright",
        "osm_type": "node",
        "osm_id": 25929985,
        "boundingbox": ["59.1651172", "59.4851172", "17.9110935", "18.2310935"],
        "lat": "59.3251172",
        "lon": "18.0710935",
        "display_name": "Stockholm, Stockholms kommun, Stockholms län, Svealand, 111 29, Sverige",
        "class": "place",
        "type": "city",
        "importance": 0.840175301943447,
        "icon": "https://nominatim.openstreetmap.org/images/mapicons/poi_place_city.p.20.png",
        "address": {
            "city": "Stockholm",
            "municipality": "Stockholms kommun",
            "state": "Stockholms län",
            "region": "Svealand",
            "postcode": "111 29",
            "country": "Sverige",
            "country_code": "se"
        }
    }
]"#;

/// Answers every request with the same status and body.
pub struct Canned {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Canned {
    pub fn new(status: u16, body: &str) -> Self {
        Canned {
            status: StatusCode::from_u16(status).unwrap(),
            body: Bytes::from(body.to_string()),
        }
    }
}

impl Executor for Canned {
    fn execute<'a>(&'a self, _method: Method, _url: &'a Url,
        _auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        let resp = HttpResponse {status: self.status, body: self.body.clone()};
        Box::pin(async move {Ok::<_, Error>(resp)})
    }
}

/// Fails every request as if the network were down.
pub struct Unreachable;

impl Executor for Unreachable {
    fn execute<'a>(&'a self, _method: Method, _url: &'a Url,
        _auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        Box::pin(async {
            Err::<HttpResponse, _>(
                Error::new(ErrorKind::Transport, "network is unreachable"))
        })
    }
}

/// Answers with a single match whose country code is the `q` parameter,
/// after yielding so concurrent lookups interleave.
pub struct Echo;

impl Executor for Echo {
    fn execute<'a>(&'a self, _method: Method, url: &'a Url,
        _auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        Box::pin(async move {
            let q = url.query_pairs()
                .find(|(k, _)| k == "q")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            tokio::task::yield_now().await;
            let body = serde_json::json!([{"address": {"country_code": q}}]);
            Ok::<_, Error>(HttpResponse {
                status: StatusCode::OK,
                body: Bytes::from(body.to_string()),
            })
        })
    }
}
