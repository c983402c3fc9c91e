//! REST record store: `<prefix>/list`, `/add`, `/update`, `/delete`.

use async_trait::async_trait;
use contracts::shared::crud::{
    ActionResponse, CrudEntity, DeleteRequest, DeleteResponse, RecordId, RecordRepository,
    StoreError,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub struct RemoteRecordStore<R> {
    base: String,
    _entity: PhantomData<fn() -> R>,
}

impl<R: CrudEntity> RemoteRecordStore<R> {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            base: api_base.into(),
            _entity: PhantomData,
        }
    }

    fn url(&self, action: &str) -> String {
        format!("{}{}/{}", self.base, R::ENDPOINT, action)
    }
}

/// Sends a JSON body with POST and decodes the reply.
///
/// The server reports rejections as 4xx with a regular body, so the body is
/// decoded whatever the status. Only an undecodable non-2xx reply is a
/// transport error.
pub(crate) async fn post_json<B, T>(url: &str, body: &B) -> Result<T, StoreError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(url)
        .json(body)
        .map_err(|e| StoreError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Transport(format!("Request failed: {}", e)))?;
    decode_reply(url, &response).await
}

/// PUT counterpart of [`post_json`].
pub(crate) async fn put_json<B, T>(url: &str, body: &B) -> Result<T, StoreError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::put(url)
        .json(body)
        .map_err(|e| StoreError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Transport(format!("Request failed: {}", e)))?;
    decode_reply(url, &response).await
}

async fn decode_reply<T: DeserializeOwned>(url: &str, response: &Response) -> Result<T, StoreError> {
    if !response.ok() {
        log::warn!("{} answered HTTP {}", url, response.status());
    }
    match response.json::<T>().await {
        Ok(data) => Ok(data),
        Err(_) if !response.ok() => Err(StoreError::Transport(format!(
            "HTTP error: {}",
            response.status()
        ))),
        Err(e) => Err(StoreError::Decode(e.to_string())),
    }
}

/// GET returning a JSON body; any non-2xx status is a failure.
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, StoreError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| StoreError::Transport(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(StoreError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<R: CrudEntity> RecordRepository<R> for RemoteRecordStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        get_json(&self.url("list")).await
    }

    async fn add(&self, record: R) -> Result<ActionResponse, StoreError> {
        post_json(&self.url("add"), &record).await
    }

    async fn update(&self, id: RecordId, mut record: R) -> Result<ActionResponse, StoreError> {
        record.set_id(Some(id));
        post_json(&self.url("update"), &record).await
    }

    async fn delete(&self, id: RecordId) -> Result<DeleteResponse, StoreError> {
        post_json(&self.url("delete"), &DeleteRequest { id }).await
    }
}
