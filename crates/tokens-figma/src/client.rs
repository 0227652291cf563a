//! Variables API client.

use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FigmaError, Result};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::types::{LocalVariablesResponse, PostVariablesRequest, PostVariablesResponse};

/// Figma REST API base URL.
pub const FIGMA_API_URL: &str = "https://api.figma.com";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "x-figma-token";

/// Maximum number of redirects followed for a single call.
pub const MAX_REDIRECTS: u32 = 5;

/// Per-call request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers. They cannot replace the access token header.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }
}

/// Client for the variables endpoints of the Figma REST API.
#[derive(Debug, Clone)]
pub struct FigmaClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
    token: HeaderValue,
}

impl FigmaClient<ReqwestTransport> {
    /// Creates a client that talks to the public API.
    ///
    /// # Arguments
    /// * `token` - Personal access token sent with every request
    pub fn new(token: &str) -> Result<Self> {
        Self::with_transport(ReqwestTransport::new()?, token)
    }
}

impl<T: Transport> FigmaClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(transport: T, token: &str) -> Result<Self> {
        let mut token = HeaderValue::from_str(token).map_err(|_| FigmaError::InvalidHeader {
            name: TOKEN_HEADER.to_string(),
        })?;
        token.set_sensitive(true);
        Ok(Self {
            transport,
            base_url: parse_url(FIGMA_API_URL)?,
            token,
        })
    }

    /// Points the client at another API root (proxies, tests).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Retrieves all local variables and collections of a file.
    ///
    /// # Arguments
    /// * `file_key` - The file identifier from the file URL
    pub async fn get_local_variables(&self, file_key: &str) -> Result<LocalVariablesResponse> {
        self.request(
            &format!("/v1/files/{file_key}/variables/local"),
            RequestOptions::default(),
            None,
        )
        .await
    }

    /// Creates, updates or deletes variables in a file.
    pub async fn post_variables(
        &self,
        file_key: &str,
        payload: &PostVariablesRequest,
    ) -> Result<PostVariablesResponse> {
        self.request(
            &format!("/v1/files/{file_key}/variables"),
            RequestOptions::post(),
            Some(encode_json(payload)?),
        )
        .await
    }

    /// Issues a request and decodes the JSON response.
    ///
    /// Redirects with a `Location` header are followed up to
    /// [`MAX_REDIRECTS`] times, re-sending the same method, headers and body.
    /// Non-2xx responses fail with [`FigmaError::RequestFailed`]. An empty
    /// 2xx body decodes as `{}`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        body: Option<Vec<u8>>,
    ) -> Result<R> {
        let mut url = join_url(&self.base_url, path)?;
        let headers = self.build_headers(options.headers, body.as_deref());
        let mut redirects = 0;

        loop {
            debug!(method = %options.method, url = %url, redirects, "sending request");
            let response = self
                .transport
                .send(HttpRequest {
                    method: options.method.clone(),
                    url: url.clone(),
                    headers: headers.clone(),
                    body: body.clone(),
                })
                .await?;
            let status = response.status;

            if status.is_redirection()
                && let Some(location) = response.location()
            {
                if redirects >= MAX_REDIRECTS {
                    return Err(FigmaError::TooManyRedirects {
                        location: location.to_string(),
                    });
                }
                url = join_url(&url, location)?;
                redirects += 1;
                debug!(status = status.as_u16(), location = %url, redirects, "following redirect");
                continue;
            }

            if !status.is_success() {
                return Err(FigmaError::RequestFailed {
                    status: status.as_u16(),
                    body: response.text(),
                });
            }

            return decode_body(&response.body);
        }
    }

    fn build_headers(&self, extra: HeaderMap, body: Option<&[u8]>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.extend(extra);
        headers.insert(HeaderName::from_static(TOKEN_HEADER), self.token.clone());
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }
        headers
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| FigmaError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn join_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|e| FigmaError::InvalidUrl {
        url: path.to_string(),
        message: e.to_string(),
    })
}

fn encode_json<B: Serialize + ?Sized>(payload: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|e| FigmaError::Encode(e.to_string()))
}

fn decode_body<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let decoded = if body.is_empty() {
        serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()))
    } else {
        serde_json::from_slice(body)
    };
    decoded.map_err(|e| FigmaError::Decode(e.to_string()))
}
