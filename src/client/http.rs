//! Cliente HTTP de la API de conductores
//!
//! Implementa `DriversApi` con reqwest contra la URL base del servidor.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use tracing::debug;

use super::api::{ClientError, DriversApi};
use crate::dto::driver_dto::DriverRequest;
use crate::forms::FileSelection;
use crate::models::{AttachmentKind, AttachmentMetadata, Driver};

/// Cuerpo de error que devuelve el servidor
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpDriversClient {
    client: Client,
    base_url: String,
}

impl HttpDriversClient {
    /// Crear nuevo cliente HTTP con la URL base del servidor
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convertir respuestas no exitosas en `ClientError::Api`
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DriversApi for HttpDriversClient {
    async fn list(&self) -> Result<Vec<Driver>, ClientError> {
        debug!("📤 GET /drivers");
        let response = self.client.get(self.url("/drivers")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get(&self, id: i64) -> Result<Driver, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/drivers/{}", id)))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, request: &DriverRequest) -> Result<Driver, ClientError> {
        debug!("📤 POST /drivers");
        let response = self
            .client
            .post(self.url("/drivers"))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, id: i64, request: &DriverRequest) -> Result<(), ClientError> {
        debug!("📤 PUT /drivers/{}", id);
        let response = self
            .client
            .put(self.url(&format!("/drivers/{}", id)))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), ClientError> {
        debug!("📤 DELETE /drivers/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("/drivers/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn upload_attachment(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
        file: &FileSelection,
    ) -> Result<AttachmentMetadata, ClientError> {
        debug!("📤 PUT /drivers/{}/attachments/{}", driver_id, kind);
        let part = multipart::Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .put(self.url(&format!("/drivers/{}/attachments/{}", driver_id, kind)))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpDriversClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/drivers"), "http://localhost:3000/drivers");
    }
}
