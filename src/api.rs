//! Backend client over the browser fetch API.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::ApiConfig;
use crate::explorer::{Category, Dataset, PaperLink, SearchResult};
use crate::voting::{VoteBoard, VoteReceipt, VoteRequest};

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("no window")]
	NoWindow,
	#[error("request error: {0}")]
	Request(String),
	#[error("fetch error: {0}")]
	Fetch(String),
	#[error("HTTP {0}")]
	Status(u16),
	#[error("encode error: {0}")]
	Encode(#[from] serde_json::Error),
	#[error("decode error: {0}")]
	Decode(String),
}

fn js_error(value: JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value))
}

pub fn author_papers_path(ids: &[String]) -> Result<String, ApiError> {
	let json = serde_json::to_string(ids)?;
	Ok(format!("/author_papers?q={}", urlencoding::encode(&json)))
}

pub fn autocomplete_path(query: &str) -> String {
	format!("/autocomplete?q={}", urlencoding::encode(query))
}

pub fn vote_search_path(query: &str) -> String {
	format!("/wayr/autocomplete?q={}", urlencoding::encode(query))
}

#[derive(Clone, Debug)]
pub struct ApiClient {
	base_url: String,
}

impl ApiClient {
	pub fn new(config: &ApiConfig) -> Self {
		Self {
			base_url: config.base_url.trim_end_matches('/').to_owned(),
		}
	}

	fn url(&self, path: &str) -> String {
		if path.starts_with('/') || self.base_url.is_empty() {
			format!("{}{}", self.base_url, path)
		} else {
			format!("{}/{}", self.base_url, path)
		}
	}

	async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
		let window = web_sys::window().ok_or(ApiError::NoWindow)?;
		let value = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(|e| ApiError::Fetch(js_error(e)))?;
		let resp: Response = value
			.dyn_into()
			.map_err(|_| ApiError::Fetch("response is not a Response".into()))?;

		if !resp.ok() {
			return Err(ApiError::Status(resp.status()));
		}

		let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(js_error(e)))?)
			.await
			.map_err(|e| ApiError::Decode(js_error(e)))?;
		serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
	}

	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
		let opts = RequestInit::new();
		opts.set_method("GET");
		let request = Request::new_with_str_and_init(&self.url(path), &opts)
			.map_err(|e| ApiError::Request(js_error(e)))?;
		self.send(request).await
	}

	pub async fn post_json<B: Serialize, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, ApiError> {
		let body = serde_json::to_string(body)?;
		let opts = RequestInit::new();
		opts.set_method("POST");
		opts.set_body(&JsValue::from_str(&body));
		let request = Request::new_with_str_and_init(&self.url(path), &opts)
			.map_err(|e| ApiError::Request(js_error(e)))?;
		request
			.headers()
			.set("Content-Type", "application/json")
			.map_err(|e| ApiError::Request(js_error(e)))?;
		self.send(request).await
	}

	pub async fn dataset(&self, path: &str) -> Result<Dataset, ApiError> {
		self.get(path).await
	}

	pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
		self.get("/categories").await
	}

	pub async fn author_papers(&self, ids: &[String]) -> Result<Vec<PaperLink>, ApiError> {
		self.get(&author_papers_path(ids)?).await
	}

	pub async fn autocomplete(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
		self.get(&autocomplete_path(query)).await
	}

	pub async fn current_votes(&self) -> Result<VoteBoard, ApiError> {
		self.get("/wayr/current_votes").await
	}

	pub async fn search_votes(&self, query: &str) -> Result<VoteBoard, ApiError> {
		self.get(&vote_search_path(query)).await
	}

	pub async fn vote(&self, ids: Vec<String>) -> Result<VoteReceipt, ApiError> {
		self.post_json("/wayr/vote", &VoteRequest { ids }).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn author_papers_query_is_encoded_json_array() {
		let path = author_papers_path(&["A. Smith".into(), "B. Lee".into()]).unwrap();
		assert_eq!(
			path,
			"/author_papers?q=%5B%22A.%20Smith%22%2C%22B.%20Lee%22%5D"
		);
	}

	#[test]
	fn search_paths_encode_query() {
		assert_eq!(autocomplete_path("gan & vae"), "/autocomplete?q=gan%20%26%20vae");
		assert_eq!(vote_search_path("bert"), "/wayr/autocomplete?q=bert");
	}

	#[test]
	fn urls_join_base_and_path() {
		let local = ApiClient::new(&ApiConfig::default());
		assert_eq!(local.url("/categories"), "/categories");
		assert_eq!(local.url("static/authors.json"), "static/authors.json");

		let remote = ApiClient::new(&ApiConfig {
			base_url: "https://example.org/".into(),
		});
		assert_eq!(remote.url("/categories"), "https://example.org/categories");
		assert_eq!(
			remote.url("static/authors.json"),
			"https://example.org/static/authors.json"
		);
	}

	#[test]
	fn status_error_reads_like_http() {
		assert_eq!(ApiError::Status(502).to_string(), "HTTP 502");
	}
}
