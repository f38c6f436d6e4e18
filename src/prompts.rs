/// Section of a recipe block, detected by marker containment. Drives
/// which flavor of modernization advice is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Cautions,
    Preparation,
    Ingredients,
    Other,
}

impl BlockKind {
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Cautions => "注意事项",
            BlockKind::Preparation => "制作方法",
            BlockKind::Ingredients => "原料配方",
            BlockKind::Other => "其他",
        }
    }
}

// Ordered: the first marker found wins.
const BLOCK_MARKERS: [(&str, BlockKind); 3] = [
    ("注意事项", BlockKind::Cautions),
    ("制作方法", BlockKind::Preparation),
    ("原料配方", BlockKind::Ingredients),
];

pub fn classify_block(block: &str) -> BlockKind {
    for (marker, kind) in BLOCK_MARKERS {
        if block.contains(marker) {
            return kind;
        }
    }
    BlockKind::Other
}

pub fn recommendation_prompt(query: &str) -> String {
    format!(
        "根据以下用户的身体状况和需求，推荐适合的中医药膳方：\n\
         用户描述：{query}\n\
         \n\
         请按照以下格式返回推荐：\n\
         1. 药膳名称\n\
         2. 主要功效\n\
         3. 原料配方\n\
         4. 制作方法\n\
         5. 适用人群\n\
         6. 注意事项"
    )
}

pub fn modernization_prompt(block: &str) -> String {
    let kind = classify_block(block).label();
    format!(
        "根据以下药膳内容的{kind}部分，提供针对性的现代化改良建议：\n\
         {block}\n\
         \n\
         要求：\n\
         1. 建议必须与{kind}直接相关\n\
         2. 每条建议简洁明确(10字以内)\n\
         3. 用中文分号分隔不同建议\n\
         4. 若无相关建议则返回\"无\"\n\
         \n\
         示例：\n\
         {kind}相关建议：使用电压力锅；选用新鲜食材"
    )
}
