//! Page Data
//!
//! Data injected by the hosting page, read once at startup. Preferred source
//! is a JSON `<script id="page-data" type="application/json">` element; pages
//! that set a `window.pageData` object are supported as well.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::ClientConfig;
use crate::models::{Campaign, Record, VoterResult};

pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";
pub const PAGE_DATA_GLOBAL: &str = "pageData";

#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("no page data found (#page-data element or window.pageData)")]
    Missing,

    #[error("invalid page data JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid page data object: {0}")]
    Object(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub voter_results: Option<Vec<VoterResult>>,
    #[serde(default)]
    pub user_results: Option<Vec<Record>>,
    #[serde(default)]
    pub team_results: Option<Vec<Record>>,
    /// Campaign the validation page works on
    #[serde(default, deserialize_with = "optional_id")]
    pub campaign_id: Option<u32>,
    /// Never fails the page data; see [`ClientConfig::from_value`]
    #[serde(default, deserialize_with = "lenient_config")]
    pub config: ClientConfig,
}

impl PageData {
    pub fn from_json(text: &str) -> Result<Self, PageDataError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn voter_records(&self) -> Vec<Record> {
        self.voter_results
            .iter()
            .flatten()
            .cloned()
            .map(Record::from)
            .collect()
    }
}

/// Campaign ids come from the URL and may be rendered as strings
fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u32),
        Text(String),
    }

    match Option::<Id>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Id::Number(id)) => Ok(Some(id)),
        Some(Id::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid campaign id {text:?}"))),
    }
}

fn lenient_config<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ClientConfig, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(ClientConfig::from_value(value))
}

/// Read the page data injected by the hosting page
pub fn load_page_data() -> Result<PageData, PageDataError> {
    let window = web_sys::window().ok_or(PageDataError::Missing)?;

    let script = window
        .document()
        .and_then(|doc| doc.get_element_by_id(PAGE_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content());
    if let Some(text) = script {
        return PageData::from_json(&text);
    }

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_DATA_GLOBAL))
        .map_err(|e| PageDataError::Object(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Err(PageDataError::Missing);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| PageDataError::Object(e.to_string()))
}

/// Origin of the current page, e.g. `https://canvass.example`
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
