// Self-review protocol shared between the prompt template and the response
// parser. The agent replies in Korean; these exact strings are what it is
// instructed to emit and what the parser scans for.

/// Heading separating the specification body from the trailing self-review.
pub const REVIEW_HEADING: &str = "## 🤖 에이전트 자가 평가";

/// Label preceding the numeric score ("score").
pub const RATING_LABEL: &str = "점수";
/// Label preceding the strengths text ("what went well").
pub const STRENGTHS_LABEL: &str = "잘한 점";
/// Label preceding the gaps text ("what was not considered").
pub const GAPS_LABEL: &str = "고려하지 못한 점";

/// Field value when no review block was present at all.
pub const REVIEW_DEFAULT: &str = "N/A";
/// Field value when a review block exists but the field's label is missing
/// ("review text not found").
pub const REVIEW_FIELD_MISSING: &str = "평가 텍스트를 찾을 수 없음";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfReview {
    /// Score in `0..=10`; 0 when none could be extracted.
    pub rating: u8,
    pub strengths: String,
    pub gaps: String,
}

impl Default for SelfReview {
    fn default() -> Self {
        Self {
            rating: 0,
            strengths: REVIEW_DEFAULT.to_string(),
            gaps: REVIEW_DEFAULT.to_string(),
        }
    }
}
