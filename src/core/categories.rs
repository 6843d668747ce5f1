//! The closed set of inquiry categories.

/// Inquiry category. Variants are declared in the order used both for the
/// prompt listing and for the substring fallback in [`parse_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Question,
    ImprovementRequest,
    PositiveFeedback,
    NegativeFeedback,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Question,
        Category::ImprovementRequest,
        Category::PositiveFeedback,
        Category::NegativeFeedback,
        Category::Other,
    ];

    /// Catch-all used when the model reply matches nothing.
    pub const CATCH_ALL: Category = Category::Other;

    /// Name as stored in the table and expected back from the model.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Question => "質問",
            Self::ImprovementRequest => "改善要望",
            Self::PositiveFeedback => "ポジティブな感想",
            Self::NegativeFeedback => "ネガティブな感想",
            Self::Other => "その他",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Question => "お客様からの質問や疑問",
            Self::ImprovementRequest => "サービスや商品の改善に関する要望",
            Self::PositiveFeedback => "満足度の高い感想や評価",
            Self::NegativeFeedback => "不満や問題点に関する感想",
            Self::Other => "上記に該当しない内容",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a free-form model reply onto a category.
///
/// An exact (trimmed) match wins. Otherwise the first category, in
/// declaration order, whose name appears inside the reply is taken, which
/// copes with verbose answers such as `「質問」に分類されます`. Anything
/// else falls back to [`Category::CATCH_ALL`].
#[must_use]
pub fn parse_category(reply: &str) -> Category {
    let reply = reply.trim();

    if let Some(exact) = Category::from_name(reply) {
        return exact;
    }

    Category::ALL
        .into_iter()
        .find(|c| reply.contains(c.name()))
        .unwrap_or(Category::CATCH_ALL)
}
