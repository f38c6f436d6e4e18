use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatClient, ChatError};
use crate::modernize::annotate;
use crate::parser::{split_blocks, split_title_body};
use crate::prompts::recommendation_prompt;

const RECOMMEND_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    // Absent field behaves like an empty one: both are a validation
    // error at the handler, not a body-decode rejection.
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub modernized: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-request dependencies, shared read-only across requests.
#[derive(Clone)]
pub struct RecommendContext {
    pub chat: Arc<ChatClient>,
}

impl RecommendContext {
    pub fn new(chat: ChatClient) -> Self {
        Self {
            chat: Arc::new(chat),
        }
    }
}

/// Run the full recommendation pipeline for one validated query,
/// strictly sequentially: the primary call first, then one
/// modernization call per parsed block, in block order. Only the
/// primary call's failure is fatal; per-block failures degrade inside
/// `annotate`.
pub async fn recommend(ctx: &RecommendContext, input: &str) -> Result<Vec<Recipe>, ChatError> {
    let raw = ctx
        .chat
        .complete(&recommendation_prompt(input), RECOMMEND_MAX_TOKENS)
        .await?;

    let mut recipes = Vec::new();
    for block in split_blocks(&raw) {
        let (title, description) = split_title_body(block);
        let suggestions = annotate(ctx.chat.as_ref(), block).await;
        recipes.push(Recipe {
            title,
            description,
            modernized: suggestions.join("；"),
        });
    }
    Ok(recipes)
}
