pub const TITLE_PLACEHOLDER: &str = "未命名药膳";
pub const DESCRIPTION_PLACEHOLDER: &str = "无详细描述";

/// Split the model's raw recommendation text into recipe blocks on
/// blank lines. Best-effort: the upstream format is not guaranteed, so
/// malformed input degrades into fewer/larger blocks, never an error.
pub fn split_blocks(raw: &str) -> Vec<&str> {
    raw.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .collect()
}

/// First non-empty trimmed line is the title, the rest joined by
/// newline is the description; placeholders fill either gap.
pub fn split_title_body(block: &str) -> (String, String) {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let title = lines
        .first()
        .map_or_else(|| TITLE_PLACEHOLDER.to_string(), |l| l.to_string());
    let description = if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        DESCRIPTION_PLACEHOLDER.to_string()
    };
    (title, description)
}
