use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const GENERATIVE_LANGUAGE_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

/// Persona prefix applied to every user message, matching the tone the
/// assistant is expected to answer in.
const PERSONA_PROMPT: &str = "You are CineBot, an AI movie recommendation assistant. \
Be helpful, friendly, and enthusiastic about movies. Keep responses concise but informative.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Send one user message through the generative-language endpoint and
/// return the first candidate's text.
pub async fn generate_reply(
    client: &Client,
    api_key: &str,
    model: &str,
    message: &str,
) -> Result<String> {
    let url = format!(
        "{}/{}:generateContent?key={}",
        GENERATIVE_LANGUAGE_BASE_URL, model, api_key
    );

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("{} User message: {}", PERSONA_PROMPT, message),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: 0.7,
            max_output_tokens: 1000,
        },
    };

    debug!(model = %model, "Sending assistant request");

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!("Assistant request failed: {} - {}", status, error_text));
    }

    let body: GenerateResponse = response.json().await?;
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| anyhow!("Assistant response contained no candidates"))?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Try Blade Runner."}]}}]}"#,
        )
        .unwrap();
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("Try Blade Runner."));
    }

    #[test]
    fn test_empty_candidates() {
        let body: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(body.candidates.is_empty());
    }
}
