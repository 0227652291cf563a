//! Client for the Figma variables REST API.
//!
//! [`FigmaClient`] wraps a [`Transport`] and adds the pieces the API needs:
//! the access token header, JSON bodies, bounded redirect following and
//! status/decode error mapping.
//!
//! ```no_run
//! use tokens_figma::FigmaClient;
//!
//! async fn fetch(token: &str) -> tokens_figma::Result<()> {
//!     let client = FigmaClient::new(token)?;
//!     let response = client.get_local_variables("FILE_KEY").await?;
//!     println!("{} variables", response.meta.variables.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{FIGMA_API_URL, FigmaClient, MAX_REDIRECTS, RequestOptions, TOKEN_HEADER};
pub use error::{FigmaError, Result};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{
    ChangeAction, LocalVariablesResponse, PostVariablesMeta, PostVariablesRequest,
    PostVariablesResponse, VariableChange, VariableCollectionChange, VariableModeChange,
    VariableModeValue,
};

pub use reqwest::header;
pub use reqwest::{Method, StatusCode, Url};
