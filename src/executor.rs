// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Error, ErrorKind};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::BoxFuture;
use hyper::body::Bytes;
use hyper::client::HttpConnector;
use hyper::header::{AUTHORIZATION, HeaderValue, USER_AGENT};
use hyper::{Body, Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use std::fmt::{Debug, self};
use std::sync::Arc;
use url::Url;

/// Carries out HTTP requests on behalf of a `GeocodeClient`.
///
/// Implementations decide everything about the transport: connection
/// reuse, TLS, timeouts, cancellation. Errors are handed back to the caller
/// untouched.
pub trait Executor: Send + Sync {
    fn execute<'a>(&'a self, method: Method, url: &'a Url,
        auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>;
}

impl<'e, E: Executor + ?Sized> Executor for &'e E {
    fn execute<'a>(&'a self, method: Method, url: &'a Url,
        auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        (**self).execute(method, url, auth)
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn execute<'a>(&'a self, method: Method, url: &'a Url,
        auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        (**self).execute(method, url, auth)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute<'a>(&'a self, method: Method, url: &'a Url,
        auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        (**self).execute(method, url, auth)
    }
}

/// Status and full body of a response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP Basic credentials.
#[derive(Clone, Eq, PartialEq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P)
        -> Self
    {
        BasicAuth {username: username.into(), password: password.into()}
    }

    fn header_value(&self) -> Result<HeaderValue, Error> {
        let token = STANDARD.encode(
            format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|e| Error::new(ErrorKind::RequestConstruction, e))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Default executor backed by a hyper client over plain HTTP or TLS.
///
/// No timeout is applied. The only header added on top of hyper's defaults
/// is `User-Agent`, and only when configured.
#[derive(Clone, Debug)]
pub struct HyperExecutor {
    client: hyper::Client<HttpsConnector<HttpConnector>>,
    user_agent: Option<HeaderValue>,
}

impl HyperExecutor {
    pub fn new() -> Self {
        let client = hyper::Client::builder()
            .build::<_, Body>(HttpsConnector::new());
        HyperExecutor {client, user_agent: None}
    }

    pub fn user_agent(mut self, agent: &str) -> Result<Self, Error> {
        let agent = HeaderValue::from_str(agent)
            .map_err(|e| Error::new(ErrorKind::RequestConstruction, e))?;
        self.user_agent = Some(agent);
        Ok(self)
    }

    fn request(&self, method: Method, url: &Url, auth: Option<&BasicAuth>)
        -> Result<Request<Body>, Error>
    {
        let mut builder = Request::builder().method(method).uri(url.as_str());
        if let Some(agent) = &self.user_agent {
            builder = builder.header(USER_AGENT, agent.clone());
        }
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth.header_value()?);
        }
        Ok(builder.body(Body::empty())?)
    }

    async fn send(&self, method: Method, url: &Url, auth: Option<&BasicAuth>)
        -> Result<HttpResponse, Error>
    {
        let req = self.request(method, url, auth)?;
        tracing::debug!(method = %req.method(), %url, "sending request");
        let resp = self.client.request(req).await?;
        let status = resp.status();
        let body = hyper::body::to_bytes(resp.into_body()).await?;
        tracing::debug!(%status, len = body.len(), "received response");
        Ok(HttpResponse {status, body})
    }
}

impl Default for HyperExecutor {
    fn default() -> Self {
        HyperExecutor::new()
    }
}

impl Executor for HyperExecutor {
    fn execute<'a>(&'a self, method: Method, url: &'a Url,
        auth: Option<&'a BasicAuth>)
        -> BoxFuture<'a, Result<HttpResponse, Error>>
    {
        Box::pin(self.send(method, url, auth))
    }
}
