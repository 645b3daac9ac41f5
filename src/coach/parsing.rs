//! Extracts the JSON payload from chat model replies, which often wrap it in
//! prose or code fences.

use serde::de::DeserializeOwned;

use super::{SummarizeResponse, TipsResponse};
use crate::error::{Error, Result};

const RAW_PREVIEW_CHARS: usize = 200;

pub fn parse_tips(response: &str) -> Result<Vec<String>> {
    let parsed: TipsResponse = parse_json_object(response)?;
    Ok(parsed
        .tips
        .into_iter()
        .map(|tip| tip.trim().to_string())
        .filter(|tip| !tip.is_empty())
        .collect())
}

pub fn parse_summary(response: &str) -> Result<String> {
    let parsed: SummarizeResponse = parse_json_object(response)?;
    let summary = parsed.summary.trim();
    if summary.is_empty() {
        return Err(Error::GenerationFailed("empty summary from model".into()));
    }
    Ok(summary.to_string())
}

fn parse_json_object<T: DeserializeOwned>(response: &str) -> Result<T> {
    let response = response.trim();
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|e| {
                Error::GenerationFailed(format!(
                    "Invalid JSON from model: {e} | Raw: {}",
                    preview(json_str)
                ))
            })
        }
        _ => Err(Error::GenerationFailed(format!(
            "No JSON found in model response | Raw: {}",
            preview(response)
        ))),
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > RAW_PREVIEW_CHARS {
        let head: String = text.chars().take(RAW_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
