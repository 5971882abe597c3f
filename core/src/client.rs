//! Library backend HTTP client.
//!
//! One `reqwest` client bound to the configured base address. Cloning is
//! cheap and shares the underlying connection pool.

use serde::Serialize;
use serde::de::DeserializeOwned;

use salsi_types::{Collection, Game, NewCollection};

use crate::backend::{GameQuery, LibraryBackend};
use crate::{ApiConfig, Error};

const GAMES_PATH: &str = "/jogos";
const COLLECTIONS_PATH: &str = "/colecoes";

/// Library backend API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `config.base_url`.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Performs a GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        tracing::debug!(%url, ?params, "GET");

        let mut req = self.http.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Performs a POST request with a JSON body. The response body is discarded.
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Lists games, in backend order.
    pub async fn list_games(&self, query: &GameQuery) -> Result<Vec<Game>, Error> {
        self.get_json(GAMES_PATH, &query.params()).await
    }

    /// Lists collections, in backend order.
    pub async fn list_collections(&self) -> Result<Vec<Collection>, Error> {
        self.get_json(COLLECTIONS_PATH, &[]).await
    }

    /// Creates a collection.
    pub async fn create_collection(&self, collection: &NewCollection) -> Result<(), Error> {
        self.post_json(COLLECTIONS_PATH, collection).await
    }

    /// Resolves a stored cover path against this client's base address.
    pub fn media_url(&self, path: &str) -> Option<String> {
        salsi_types::media_url(&self.base_url, path)
    }
}

impl LibraryBackend for ApiClient {
    async fn list_games(&self, query: &GameQuery) -> Result<Vec<Game>, Error> {
        ApiClient::list_games(self, query).await
    }

    async fn list_collections(&self) -> Result<Vec<Collection>, Error> {
        ApiClient::list_collections(self).await
    }

    async fn create_collection(&self, collection: &NewCollection) -> Result<(), Error> {
        ApiClient::create_collection(self, collection).await
    }
}
