use crate::core::categories::Category;

/// Persisted as the answer whenever the knowledge base cannot produce one.
pub const FALLBACK_ANSWER: &str =
    "申し訳ございませんが、現在回答を生成することができません。後ほど担当者からご連絡いたします。";

/// Instruction used for `その他`, unknown categories and uncategorized records.
pub const GENERIC_TONE: &str = "お客様からの問い合わせに丁寧で親切な回答をしてください。";

/// Generation settings for classification: a short, near-deterministic reply.
pub const CLASSIFY_MAX_TOKENS: u32 = 50;
pub const CLASSIFY_TEMPERATURE: f32 = 0.1;

/// Builds the single-turn classification prompt listing every category.
#[must_use]
pub fn build_classification_prompt(inquiry_text: &str) -> String {
    let category_list = Category::ALL
        .iter()
        .map(|c| format!("- {}: {}", c.name(), c.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "以下の問い合わせ内容を分析し、最も適切なカテゴリを1つ選んでください。

カテゴリ:
{category_list}

問い合わせ内容:
{inquiry_text}

指示:
- 上記のカテゴリの中から最も適切なものを1つ選んでください
- カテゴリ名のみを回答してください（説明は不要）
- 判断が困難な場合は「{catch_all}」を選んでください

回答:",
        catch_all = Category::CATCH_ALL.name(),
    )
}

/// Tone instruction for a stored category name.
#[must_use]
pub fn tone_instruction(category: Option<&str>) -> &'static str {
    match category.and_then(Category::from_name) {
        Some(Category::PositiveFeedback) => {
            "お客様からの嬉しいお言葉に対して、感謝の気持ちを込めて丁寧に返答してください。"
        }
        Some(Category::NegativeFeedback) => {
            "お客様のご不満に対して、謝罪の気持ちを込めて改善への取り組みを示しながら丁寧に返答してください。"
        }
        Some(Category::Question) => {
            "お客様からの質問に対して、正確で分かりやすい情報を提供してください。"
        }
        Some(Category::ImprovementRequest) => {
            "お客様からの貴重なご意見として受け止め、検討することをお伝えしながら丁寧に返答してください。"
        }
        Some(Category::Other) | None => GENERIC_TONE,
    }
}

/// Input text sent to the knowledge base: tone instruction, then the inquiry.
#[must_use]
pub fn build_answer_input(category: Option<&str>, inquiry_text: &str) -> String {
    format!("{}\n\n質問: {inquiry_text}", tone_instruction(category))
}
