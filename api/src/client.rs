use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::model::{EquipmentResult, HistoryEntry, RecordId};

/// Everything the client needs from the server.
///
/// Futures are not `Send`: the web build runs on a single-threaded executor and the
/// desktop shell drives these from the UI task as well.
#[async_trait(?Send)]
pub trait Backend {
    /// Upload a CSV file and receive its processed result.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<EquipmentResult>;
    /// Previously processed uploads, newest first as ordered by the server.
    async fn history(&self) -> Result<Vec<HistoryEntry>>;
    async fn summary(&self, id: &RecordId) -> Result<EquipmentResult>;
    /// Raw PDF bytes of the generated report.
    async fn report(&self, id: &RecordId) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorized(self.client.get(self.config.endpoint(path)))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, self.config.authorization())
    }

    /// `POST upload/` with the CSV under `file` and its name under `name`.
    fn upload_request(&self, file_name: &str, bytes: Vec<u8>) -> Result<RequestBuilder> {
        let form = upload_form(file_name, bytes)?;
        Ok(self
            .authorized(self.client.post(self.config.endpoint("upload/")))
            .multipart(form))
    }

    async fn send(&self, label: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("{label} request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("{label} returned {status}: {body}"));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, label: &str, path: &str) -> Result<T> {
        let response = self.send(label, self.get(path)).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("{label} returned malformed JSON"))
    }
}

fn upload_form(file_name: &str, bytes: Vec<u8>) -> Result<multipart::Form> {
    let part = multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str("text/csv")
        .context("invalid upload mime type")?;
    Ok(multipart::Form::new()
        .part("file", part)
        .text("name", file_name.to_string()))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<EquipmentResult> {
        let request = self.upload_request(file_name, bytes)?;
        tracing::debug!(file_name, "uploading dataset");
        let response = self.send("upload", request).await?;
        response
            .json::<EquipmentResult>()
            .await
            .context("upload returned malformed JSON")
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.get_json("history", "history/").await
    }

    async fn summary(&self, id: &RecordId) -> Result<EquipmentResult> {
        self.get_json("summary", &format!("summary/{id}/")).await
    }

    async fn report(&self, id: &RecordId) -> Result<Vec<u8>> {
        let response = self.send("report", self.get(&format!("report/{id}/"))).await?;
        let bytes = response
            .bytes()
            .await
            .context("report body could not be read")?;
        Ok(bytes.to_vec())
    }
}
