#![allow(non_snake_case)]
#![allow(dead_code)]
use serde::Deserialize;

pub const MISSING_SSID: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NetworkRecord {
    #[serde(default)]
    pub ssid: Option<String>,
}

impl NetworkRecord {
    pub fn ssid(&self) -> &str {
        self.ssid.as_deref().unwrap_or(MISSING_SSID)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WigleSearchResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub totalResults: Option<u64>,
    #[serde(default)]
    pub results: Vec<NetworkRecord>,
}
