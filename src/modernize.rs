use crate::llm_client::ChatClient;
use crate::prompts::modernization_prompt;

pub const FALLBACK_SUGGESTION: &str = "无法获取AI改进建议，请稍后再试";

/// Marker the model uses for "no current improvement suggestions"; the
/// prompt also allows a bare "无", so both are treated as empty.
const NO_SUGGESTION_MARKER: &str = "暂无改良建议";
const NO_SUGGESTION_LITERAL: &str = "无";

const MODERNIZE_MAX_TOKENS: u32 = 500;

/// Ask the model for modernization suggestions for one recipe block.
/// Failures are absorbed here: a bad per-block call degrades to the
/// fixed fallback suggestion and never fails the surrounding request.
pub async fn annotate(chat: &ChatClient, block: &str) -> Vec<String> {
    let prompt = modernization_prompt(block);
    let content = match chat.complete(&prompt, MODERNIZE_MAX_TOKENS).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "modernization call failed, using fallback");
            return vec![FALLBACK_SUGGESTION.to_string()];
        }
    };
    if content.contains(NO_SUGGESTION_MARKER) || content.trim() == NO_SUGGESTION_LITERAL {
        return Vec::new();
    }
    content
        .split('；')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
