//! The request pipeline shared by every remote operation:
//! encode, transmit, decode the outer envelope, classify.

use crate::error::{ApiError, Error};
use crate::request::{Multipart, Request};
use crate::types::ApiResponse;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Low-level Bot API caller: owns the HTTP client and the token-scoped base
/// URL. Cheap to share; all calls are `&self`.
#[derive(Debug)]
pub(crate) struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{base_url}{token}"),
        }
    }

    /// Issue `req` and classify the response.
    pub async fn call<R: Request>(&self, req: &R) -> Result<R::Response, Error> {
        self.execute(req, None).await
    }

    /// Like [`Api::call`], with a per-request timeout sized for long polls.
    pub async fn call_long_poll<R: Request>(
        &self,
        req: &R,
        timeout: Duration,
    ) -> Result<R::Response, Error> {
        self.execute(req, Some(timeout)).await
    }

    async fn execute<R: Request>(
        &self,
        req: &R,
        timeout: Option<Duration>,
    ) -> Result<R::Response, Error> {
        let url = format!("{}/{}", self.base_url, R::METHOD);
        let mut builder = self.http.post(&url);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        // Encoding dispatch: a request that produces a multipart rendition
        // (i.e. actually carries a file) wins over plain JSON.
        builder = match req.multipart() {
            Some(form) => builder.multipart(form.into_form()),
            None => {
                let body = serde_json::to_vec(req).map_err(Error::Encode)?;
                builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body)
            }
        };

        let resp = builder.send().await.map_err(Error::Transport)?;

        // The envelope's `ok` flag is authoritative, not the HTTP status.
        // Reading the whole body up front also drains the connection even
        // when decoding fails afterwards.
        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        let envelope: ApiResponse = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
        classify(envelope)
    }
}

impl Multipart {
    fn into_form(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
            form = form.part(file.name, part);
        }
        form
    }
}

/// Second decode phase: split the envelope into a typed result or a
/// structured API error. The inner `result` is only parsed once `ok` is
/// confirmed, since its shape is operation-specific.
fn classify<T: serde::de::DeserializeOwned>(envelope: ApiResponse) -> Result<T, Error> {
    if !envelope.ok {
        return Err(Error::Api(ApiError {
            code: envelope.error_code.unwrap_or_default(),
            description: envelope.description.unwrap_or_default(),
            parameters: envelope.parameters,
        }));
    }
    let result = envelope.result.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(result).map_err(Error::Decode)
}
