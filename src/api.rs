use std::fmt;

use js_sys::Reflect;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use basho_core::endpoint;
use basho_core::model::{AvatarPatch, Card, NewCard, Profile, ProfilePatch};

use crate::settings::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiError {
    Http { status: u16, status_text: String },
    Network(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http {
                status,
                status_text,
            } => write!(f, "request rejected: {status} {status_text}"),
            ApiError::Network(reason) => write!(f, "network failure: {reason}"),
            ApiError::Decode(reason) => write!(f, "bad response body: {reason}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

pub(crate) struct RemoteClient {
    base_url: String,
    group_id: String,
    token: String,
}

impl RemoteClient {
    pub(crate) fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            group_id: config.group_id.clone(),
            token: config.token.clone(),
        }
    }

    pub(crate) async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.request("GET", endpoint::PROFILE_PATH, None).await
    }

    pub(crate) async fn fetch_cards(&self) -> Result<Vec<Card>, ApiError> {
        self.request("GET", endpoint::CARDS_PATH, None).await
    }

    pub(crate) async fn fetch_initial_data(&self) -> Result<(Profile, Vec<Card>), ApiError> {
        let profile = self.fetch_profile().await?;
        let cards = self.fetch_cards().await?;
        Ok((profile, cards))
    }

    pub(crate) async fn create_card(&self, payload: &NewCard) -> Result<Card, ApiError> {
        self.request("POST", endpoint::CARDS_PATH, Some(encode_body(payload)?))
            .await
    }

    pub(crate) async fn delete_card(&self, card_id: &str) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .request("DELETE", &endpoint::card_path(card_id), None)
            .await?;
        Ok(())
    }

    pub(crate) async fn add_like(&self, card_id: &str) -> Result<Card, ApiError> {
        self.request("PUT", &endpoint::like_path(card_id), None)
            .await
    }

    pub(crate) async fn remove_like(&self, card_id: &str) -> Result<Card, ApiError> {
        self.request("DELETE", &endpoint::like_path(card_id), None)
            .await
    }

    pub(crate) async fn update_profile(&self, patch: &ProfilePatch) -> Result<Profile, ApiError> {
        self.request("PATCH", endpoint::PROFILE_PATH, Some(encode_body(patch)?))
            .await
    }

    pub(crate) async fn update_avatar(&self, avatar: &str) -> Result<Profile, ApiError> {
        let patch = AvatarPatch {
            avatar: avatar.to_string(),
        };
        self.request("PATCH", endpoint::AVATAR_PATH, Some(encode_body(&patch)?))
            .await
    }

    fn url(&self, path: &str) -> String {
        endpoint::join_url(&self.base_url, &self.group_id, path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let headers =
            Headers::new().map_err(|err| ApiError::Network(js_message(&err)))?;
        headers
            .set("authorization", &self.token)
            .map_err(|err| ApiError::Network(js_message(&err)))?;
        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = body {
            headers
                .set("Content-Type", "application/json")
                .map_err(|err| ApiError::Network(js_message(&err)))?;
            init.set_body(&JsValue::from_str(&body));
        }
        init.set_headers(headers.as_ref());
        let request = Request::new_with_str_and_init(&self.url(path), &init)
            .map_err(|err| ApiError::Network(js_message(&err)))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| ApiError::Network(js_message(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch returned a non-response".to_string()))?;
        decode_response(response).await
    }
}

fn encode_body<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text_promise = response
        .text()
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}
