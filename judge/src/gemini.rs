//! GenerateContent request/response plumbing.
//!
//! Unlike a chat client this never streams: the game needs exactly one
//! structured verdict per serve, so the non-streaming `:generateContent`
//! endpoint is used with a JSON response schema constraining the model to
//! the four-field [`CookingResult`] shape.

use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{CookingResult, DishSnapshot, JudgeConfig, REQUEST_TIMEOUT_SECS, Result, http_client};

/// Model the game judges with unless configuration says otherwise.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

/// Judge a served dish.
///
/// Always resolves to a verdict: any failure in the request or in parsing
/// the structured response yields [`CookingResult::fallback`]. Never panics,
/// never returns an error.
pub async fn judge(config: &JudgeConfig, dish: &DishSnapshot) -> CookingResult {
    match try_judge(config, dish).await {
        Ok(result) => {
            tracing::debug!(dish = %result.dish_name, score = result.score, "Dish judged");
            result
        }
        Err(e) => {
            tracing::warn!(%e, "Judging failed; serving the fallback verdict");
            CookingResult::fallback()
        }
    }
}

async fn try_judge(config: &JudgeConfig, dish: &DishSnapshot) -> Result<CookingResult> {
    let url = format!(
        "{base}/models/{model}:generateContent",
        base = config.base_url(),
        model = config.model()
    );
    let body = build_request_body(&build_prompt(dish));

    let response = http_client(config.base_url())
        .post(&url)
        .header("x-goog-api-key", config.api_key())
        .header("content-type", "application/json")
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .json(&body)
        .send()
        .await
        .context("judge request failed")?;

    let status = response.status();
    if !status.is_success() {
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY_BYTES {
            let mut end = MAX_ERROR_BODY_BYTES;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
            body.push_str("...(truncated)");
        }
        bail!("judge API error {status}: {body}");
    }

    let response: GenerateContentResponse = response
        .json()
        .await
        .context("failed to parse GenerateContent response")?;
    let text = extract_text(response)?;

    serde_json::from_str(&text).context("judge returned a malformed verdict")
}

fn build_prompt(dish: &DishSnapshot) -> String {
    format!(
        "A user cooked a dish in a game.\n\
         Ingredients used: {names}\n\
         Cooking Time: {seconds} seconds\n\
         Heat Intensity: {heat}\n\
         \n\
         If the time is < 3s, it's RAW.\n\
         If the time is > 10s and heat is high, it's BURNT.\n\
         If the ingredients are weird (e.g. Steak and Chocolate), make a funny comment.\n\
         \n\
         Respond in JSON format.",
        names = dish.ingredient_names(),
        seconds = dish.seconds,
        heat = dish.heat,
    )
}

fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }],
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "dishName": { "type": "STRING" },
                    "critique": { "type": "STRING" },
                    "score": { "type": "NUMBER" },
                    "rating": {
                        "type": "STRING",
                        "description": "One word rating like 'Delicious', 'Abomination', 'Average'",
                    },
                },
                "required": ["dishName", "critique", "score", "rating"],
            },
        },
    })
}

// Tolerant wire shapes: Gemini responses carry plenty of fields this client
// has no use for (safety ratings, usage metadata). Only the verdict text is
// parsed strictly, as a CookingResult.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .context("GenerateContent response contained no text part")
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MODEL, build_prompt, build_request_body, extract_text};
    use serde_json::json;
    use skillet_types::{DishSnapshot, HeatLevel, Ingredient, IngredientCategory};

    fn snapshot() -> DishSnapshot {
        DishSnapshot {
            ingredients: vec![
                Ingredient {
                    id: "1".to_string(),
                    name: "Steak".to_string(),
                    emoji: "🥩".to_string(),
                    category: IngredientCategory::Protein,
                    color: "red".to_string(),
                },
                Ingredient {
                    id: "10".to_string(),
                    name: "Chocolate".to_string(),
                    emoji: "🍫".to_string(),
                    category: IngredientCategory::Misc,
                    color: "amber".to_string(),
                },
            ],
            seconds: 2,
            heat: HeatLevel::High,
        }
    }

    #[test]
    fn prompt_embeds_dish_details() {
        let prompt = build_prompt(&snapshot());
        assert!(prompt.contains("Ingredients used: Steak, Chocolate"));
        assert!(prompt.contains("Cooking Time: 2 seconds"));
        assert!(prompt.contains("Heat Intensity: high"));
    }

    #[test]
    fn prompt_states_house_rules() {
        let prompt = build_prompt(&snapshot());
        assert!(prompt.contains("If the time is < 3s, it's RAW."));
        assert!(prompt.contains("If the time is > 10s and heat is high, it's BURNT."));
        assert!(prompt.contains("make a funny comment"));
    }

    #[test]
    fn request_body_constrains_response_shape() {
        let body = build_request_body("test prompt");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(
            schema["required"],
            json!(["dishName", "critique", "score", "rating"])
        );
        for field in ["dishName", "critique", "rating"] {
            assert_eq!(schema["properties"][field]["type"], "STRING");
        }
        assert_eq!(schema["properties"]["score"]["type"], "NUMBER");
    }

    #[test]
    fn request_body_carries_prompt_as_user_part() {
        let body = build_request_body("judge me");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "judge me");
    }

    #[test]
    fn extract_text_takes_first_text_part() {
        let response = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"ok\":true}" }], "role": "model" },
                "finishReason": "STOP",
            }],
            "usageMetadata": { "totalTokenCount": 42 },
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"ok\":true}");
    }

    #[test]
    fn extract_text_fails_on_empty_candidates() {
        let response = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(extract_text(response).is_err());
    }

    #[test]
    fn default_model_is_flash_preview() {
        assert_eq!(DEFAULT_MODEL, "gemini-3-flash-preview");
    }
}
