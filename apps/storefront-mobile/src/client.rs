//! Catalog HTTP client

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{DataEnvelope, Product};
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};

const PRODUCTS_PATH: &str = "/products";

pub const FETCH_FAILED: &str = "Failed to fetch products";
pub const ADD_FAILED: &str = "Failed to add product";
pub const UPDATE_FAILED: &str = "Failed to update product";

/// Thin client over the five catalog operations.
///
/// Non-success statuses become `ClientError::Fetch` with a fixed message,
/// transport failures propagate as `ClientError::Network`. `verify_id` is
/// the exception: it never fails and answers `false` when in doubt.
pub struct ProductClient<T: HttpTransport> {
    transport: Arc<T>,
}

impl ProductClient<ReqwestTransport> {
    /// Client over the default reqwest transport
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(ReqwestTransport::new(config)?))
    }
}

impl<T: HttpTransport> ProductClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// `GET /products`
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ClientResult<Vec<Product>> {
        let response = self.send(Method::GET, PRODUCTS_PATH.to_string(), None).await?;
        let envelope: DataEnvelope<Vec<Product>> = expect_success(&response, FETCH_FAILED)?;
        Ok(envelope.data)
    }

    /// `POST /products`, returns the stored product
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(&self, product: &Product) -> ClientResult<Product> {
        let body = encode(product)?;
        let response = self
            .send(Method::POST, PRODUCTS_PATH.to_string(), Some(body))
            .await?;
        let envelope: DataEnvelope<Product> = expect_success(&response, ADD_FAILED)?;
        Ok(envelope.data)
    }

    /// `PUT /products/{id}` with the full product, returns the merged record
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update_product(&self, product: &Product) -> ClientResult<Product> {
        let body = encode(product)?;
        let response = self
            .send(Method::PUT, product_path(&product.id), Some(body))
            .await?;
        let envelope: DataEnvelope<Product> = expect_success(&response, UPDATE_FAILED)?;
        Ok(envelope.data)
    }

    /// `DELETE /products/{id}`; `Ok(false)` when the server refused
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        let response = self.send(Method::DELETE, product_path(id), None).await?;
        if !response.is_success() {
            error!(status = %response.status, id, "Failed to delete product");
        }
        Ok(response.is_success())
    }

    /// `GET /products/verification/{id}`; any failure reads as "does not exist"
    #[instrument(skip(self))]
    pub async fn verify_id(&self, id: &str) -> bool {
        let path = format!("{}/verification/{}", PRODUCTS_PATH, urlencoding::encode(id));
        let response = match self.send(Method::GET, path, None).await {
            Ok(response) => response,
            Err(_) => return false,
        };

        if !response.is_success() {
            warn!(status = %response.status, id, "Identifier verification failed");
            return false;
        }

        matches!(response.json::<Value>(), Ok(Value::Bool(true)))
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> ClientResult<HttpResponse> {
        self.transport
            .send(method.clone(), &path, body)
            .await
            .inspect_err(|e| error!(%method, path = %path, error = %e, "Catalog request failed"))
            .map_err(ClientError::from)
    }
}

impl<T: HttpTransport> Clone for ProductClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

fn product_path(id: &str) -> String {
    format!("{}/{}", PRODUCTS_PATH, urlencoding::encode(id))
}

fn encode(product: &Product) -> ClientResult<Value> {
    serde_json::to_value(product).map_err(|e| ClientError::Decode(e.to_string()))
}

fn expect_success<B: DeserializeOwned>(response: &HttpResponse, failure: &str) -> ClientResult<B> {
    if !response.is_success() {
        error!(status = %response.status, body = %response.body, "{}", failure);
        return Err(ClientError::Fetch(failure.to_string()));
    }

    response.json().map_err(|e| {
        error!(error = %e, "Catalog response did not match the expected shape");
        ClientError::Decode(e.to_string())
    })
}
