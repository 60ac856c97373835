//! Client for the narrative-generation service
//!
//! Hands the profile corpus to an external text-generation API and gets
//! back structured summary sections. The service is a best-effort
//! collaborator: any transport failure, unexpected response shape, or
//! malformed payload becomes a recoverable [`Error::Narrative`], and the
//! already-computed profile is never affected.
//!
//! The response text is model-generated JSON and arrives wrapped in varying
//! amounts of Markdown decoration; [`clean_model_json`] strips code fences,
//! stray backticks, and trailing commentary before deserialization.

use crate::config::NarrativeConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One generated summary section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    /// Illustrative quotes, possibly empty
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// The full generated narrative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Narrative {
    pub sections: Vec<Section>,
}

/// Instructional template sent ahead of the corpus.
const TEMPLATE: &str = r#"Analyze the following shell usage profile and generate a summary with insights and quotes in the following JSON format:

{
  "sections": [
    {
      "title": "Section Title",
      "description": "Section description.",
      "quotes": ["Quote1", "Quote2"]
    }
  ]
}

Shell usage profile: "#;

/// HTTP client for the narrative service.
pub struct NarrativeClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl NarrativeClient {
    /// Create a client from configuration.
    ///
    /// The API key comes from config, or from the `SHELLPRINT_API_KEY` /
    /// `GEMINI_API_KEY` environment variables.
    pub fn new(config: &NarrativeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SHELLPRINT_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| Error::Narrative("no API key configured".to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Narrative(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    /// Generate narrative sections from the profile corpus.
    ///
    /// One blocking request, no retry. Every failure mode maps to
    /// [`Error::Narrative`].
    pub async fn generate(&self, corpus: &str) -> Result<Narrative> {
        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let payload = request_payload(corpus);

        let response = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Narrative(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(Error::Narrative(format!("API error ({}): {}", status, body)));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Narrative(format!("failed to read response: {}", e)))?;

        parse_response(&body)
    }
}

fn request_payload(corpus: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{
                "text": format!("{}{}", TEMPLATE, corpus),
            }]
        }]
    })
}

/// Pull the generated text out of the response envelope and parse it.
fn parse_response(body: &serde_json::Value) -> Result<Narrative> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::Narrative("unexpected response shape".to_string()))?;

    let cleaned = clean_model_json(text);
    serde_json::from_str(&cleaned)
        .map_err(|e| Error::Narrative(format!("malformed narrative JSON: {}", e)))
}

/// Strip Markdown decoration the model wraps around its JSON.
fn clean_model_json(text: &str) -> String {
    let mut cleaned = text.trim();
    cleaned = cleaned.strip_prefix("```json").unwrap_or(cleaned);
    cleaned = cleaned.strip_prefix("```").unwrap_or(cleaned);
    cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned);

    let mut cleaned = cleaned.replace('`', "");

    // Some responses append commentary after the JSON body
    if let Some(note) = cleaned.find("**Note:**") {
        cleaned.truncate(note);
    }

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_happy_path() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"sections\":[{\"title\":\"Night Shift\",\"description\":\"Most commands ran after dark.\",\"quotes\":[\"22:00 again?\"]}]}"
                    }]
                }
            }]
        });

        let narrative = parse_response(&body).unwrap();
        assert_eq!(narrative.sections.len(), 1);
        assert_eq!(narrative.sections[0].title, "Night Shift");
        assert_eq!(narrative.sections[0].quotes.len(), 1);
    }

    #[test]
    fn test_parse_response_fenced_json() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "```json\n{\"sections\":[]}\n```\n**Note:** model commentary"
                    }]
                }
            }]
        });

        let narrative = parse_response(&body).unwrap();
        assert!(narrative.sections.is_empty());
    }

    #[test]
    fn test_parse_response_bad_shape() {
        let body = serde_json::json!({"error": {"message": "quota exceeded"}});
        assert!(matches!(parse_response(&body), Err(Error::Narrative(_))));
    }

    #[test]
    fn test_missing_quotes_default_empty() {
        let narrative: Narrative =
            serde_json::from_str("{\"sections\":[{\"title\":\"t\",\"description\":\"d\"}]}")
                .unwrap();
        assert!(narrative.sections[0].quotes.is_empty());
    }

    #[test]
    fn test_clean_model_json() {
        assert_eq!(clean_model_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(clean_model_json("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(clean_model_json("{\"a\":1}\n**Note:** blah"), "{\"a\":1}");
    }
}
