use specstage_core::review::{
    GAPS_LABEL, RATING_LABEL, REVIEW_FIELD_MISSING, REVIEW_HEADING, STRENGTHS_LABEL,
};
use specstage_core::SelfReview;

/// An agent response split into the specification body and the self-review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Everything before the review heading (the whole response when the
    /// heading is absent).
    pub specification: String,
    pub review: SelfReview,
}

/// Split a raw agent response on the first occurrence of the review heading.
///
/// Extraction of the review fields is independent and total: a missing or
/// malformed field degrades to its placeholder without affecting the others,
/// and this function never fails.
pub fn split_response(raw: &str) -> ParsedResponse {
    match raw.split_once(REVIEW_HEADING) {
        Some((specification, review_block)) if !review_block.trim().is_empty() => ParsedResponse {
            specification: specification.to_string(),
            review: parse_review_block(review_block),
        },
        Some((specification, _)) => ParsedResponse {
            specification: specification.to_string(),
            review: SelfReview::default(),
        },
        None => ParsedResponse {
            specification: raw.to_string(),
            review: SelfReview::default(),
        },
    }
}

fn parse_review_block(block: &str) -> SelfReview {
    SelfReview {
        rating: extract_rating(block),
        strengths: extract_strengths(block)
            .unwrap_or_else(|| REVIEW_FIELD_MISSING.to_string()),
        gaps: extract_gaps(block).unwrap_or_else(|| REVIEW_FIELD_MISSING.to_string()),
    }
}

/// First integer after the rating label, clamped to the 0..=10 scale.
/// Occurrences of the label with no number after them are skipped.
fn extract_rating(block: &str) -> u8 {
    let mut rest = block;
    while let Some(pos) = rest.find(RATING_LABEL) {
        let after = rest[pos + RATING_LABEL.len()..].trim_start_matches([':', '*', ' ', '\t']);
        let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            // A non-empty digit run can only fail to parse by overflow
            return digits.parse::<u32>().map_or(10, |n| n.min(10) as u8);
        }
        rest = &rest[pos + RATING_LABEL.len()..];
    }
    0
}

/// Strengths text: from its label up to the next `###` subsection line or
/// the gaps label's own line, else the end of the block.
fn extract_strengths(block: &str) -> Option<String> {
    let after = text_after_label(block, STRENGTHS_LABEL)?;
    let mut out = String::new();
    for (i, line) in after.lines().enumerate() {
        if i > 0 && (line.trim_start().starts_with("###") || is_label_line(line, GAPS_LABEL)) {
            break;
        }
        out.push_str(line);
        out.push('\n');
    }
    Some(out.trim().to_string())
}

/// Gaps text: from its label to the end of the block.
fn extract_gaps(block: &str) -> Option<String> {
    text_after_label(block, GAPS_LABEL).map(|after| after.trim().to_string())
}

/// The text following `label`, with the punctuation joining label to value
/// (colon, bold markers, spaces) skipped. An occurrence that opens a line
/// wins over a bare mention inside prose; the prose mention is only a
/// fallback when no line carries the label.
fn text_after_label<'a>(block: &'a str, label: &str) -> Option<&'a str> {
    let pos = find_label_line(block, label).or_else(|| block.find(label))?;
    Some(block[pos + label.len()..].trim_start_matches([':', '*', ' ', '\t']))
}

/// Byte offset of the first `label` occurrence that starts a line, ignoring
/// leading whitespace and bold markers.
fn find_label_line(block: &str, label: &str) -> Option<usize> {
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if is_label_line(line, label) {
            let lead = line.len() - line.trim_start_matches(['*', ' ', '\t']).len();
            return Some(offset + lead);
        }
        offset += line.len();
    }
    None
}

fn is_label_line(line: &str, label: &str) -> bool {
    line.trim_start_matches(['*', ' ', '\t']).starts_with(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use specstage_core::review::REVIEW_DEFAULT;

    const FULL_RESPONSE: &str = "# 최종 기능 명세서\n\n\
본문 내용입니다.\n\n\
## 🤖 에이전트 자가 평가\n\
**점수:** 8\n\
**잘한 점:** 요구사항 반영이 충실함\n\
**고려하지 못한 점:** 마이그레이션 경로\n";

    #[test]
    fn split_reconstructs_original() {
        let parsed = split_response(FULL_RESPONSE);
        let (_, remainder) = FULL_RESPONSE.split_once(REVIEW_HEADING).unwrap();
        let rebuilt = format!("{}{REVIEW_HEADING}{remainder}", parsed.specification);
        assert_eq!(rebuilt, FULL_RESPONSE);
    }

    #[test]
    fn split_extracts_all_fields() {
        let parsed = split_response(FULL_RESPONSE);
        assert!(parsed.specification.contains("# 최종 기능 명세서"));
        assert!(!parsed.specification.contains(REVIEW_HEADING));
        assert_eq!(parsed.review.rating, 8);
        assert_eq!(parsed.review.strengths, "요구사항 반영이 충실함");
        assert_eq!(parsed.review.gaps, "마이그레이션 경로");
    }

    #[test]
    fn no_heading_keeps_defaults() {
        let raw = "명세서만 있고 자가 평가는 없습니다.";
        let parsed = split_response(raw);
        assert_eq!(parsed.specification, raw);
        assert_eq!(parsed.review, SelfReview::default());
    }

    #[test]
    fn heading_with_empty_remainder_keeps_defaults() {
        let raw = format!("본문\n\n{REVIEW_HEADING}\n  ");
        let parsed = split_response(&raw);
        assert_eq!(parsed.specification, "본문\n\n");
        assert_eq!(parsed.review, SelfReview::default());
    }

    #[test]
    fn rating_alone_leaves_other_fields_placeholder() {
        let raw = format!("본문\n{REVIEW_HEADING}\n점수: 7\n");
        let parsed = split_response(&raw);
        assert_eq!(parsed.review.rating, 7);
        assert_eq!(parsed.review.strengths, REVIEW_FIELD_MISSING);
        assert_eq!(parsed.review.gaps, REVIEW_FIELD_MISSING);
    }

    #[test]
    fn fields_extract_independently() {
        let raw = format!("본문\n{REVIEW_HEADING}\n**고려하지 못한 점:** 성능 측정\n");
        let parsed = split_response(&raw);
        assert_eq!(parsed.review.rating, 0);
        assert_eq!(parsed.review.strengths, REVIEW_FIELD_MISSING);
        assert_eq!(parsed.review.gaps, "성능 측정");
    }

    #[test]
    fn unrecognizable_block_degrades_per_field() {
        let raw = format!("본문\n{REVIEW_HEADING}\n여기는 알 수 없는 텍스트뿐입니다.\n");
        let parsed = split_response(&raw);
        assert_eq!(parsed.review.rating, 0);
        assert_eq!(parsed.review.strengths, REVIEW_FIELD_MISSING);
        assert_eq!(parsed.review.gaps, REVIEW_FIELD_MISSING);
        assert_ne!(parsed.review.strengths, REVIEW_DEFAULT);
    }

    #[test]
    fn only_first_heading_splits() {
        let raw = format!(
            "본문\n{REVIEW_HEADING}\n점수: 6\n인용: {REVIEW_HEADING} 형식을 따랐음\n"
        );
        let parsed = split_response(&raw);
        assert_eq!(parsed.specification, "본문\n");
        assert_eq!(parsed.review.rating, 6);
    }

    #[test]
    fn rating_skips_bold_punctuation() {
        assert_eq!(extract_rating("**점수:** 9"), 9);
        assert_eq!(extract_rating("점수: 3"), 3);
        assert_eq!(extract_rating("점수:10"), 10);
    }

    #[test]
    fn rating_out_of_scale_is_clamped() {
        assert_eq!(extract_rating("점수: 99"), 10);
        assert_eq!(extract_rating("점수: 11점"), 10);
        assert_eq!(extract_rating("점수: 99999999999"), 10);
    }

    #[test]
    fn rating_without_number_is_zero() {
        assert_eq!(extract_rating("점수: 미정"), 0);
        assert_eq!(extract_rating("자가 평가 없음"), 0);
    }

    #[test]
    fn rating_skips_bare_label_then_finds_number() {
        assert_eq!(extract_rating("점수 항목 참고\n점수: 4"), 4);
    }

    #[test]
    fn rating_stops_at_slash() {
        assert_eq!(extract_rating("점수: 8/10"), 8);
    }

    #[test]
    fn strengths_stop_before_gaps_line() {
        let block = "**잘한 점:** 구조가 명확함\n세부 항목도 있음\n**고려하지 못한 점:** 보안\n";
        let strengths = extract_strengths(block).unwrap();
        assert_eq!(strengths, "구조가 명확함\n세부 항목도 있음");
    }

    #[test]
    fn strengths_stop_before_subsection() {
        let block = "**잘한 점:**\n- 체크리스트 포함\n- 예시 포함\n### 기타 메모\n이후 내용\n";
        let strengths = extract_strengths(block).unwrap();
        assert_eq!(strengths, "- 체크리스트 포함\n- 예시 포함");
    }

    #[test]
    fn gaps_run_to_end_of_block() {
        let block = "**고려하지 못한 점:** 오프라인 동작\n### 참고\n추가 메모\n";
        let gaps = extract_gaps(block).unwrap();
        assert_eq!(gaps, "오프라인 동작\n### 참고\n추가 메모");
    }

    #[test]
    fn labels_anchor_on_their_own_line_over_prose_mentions() {
        let block = "**잘한 점:** 모든 요구사항(고려하지 못한 점 포함)를 빠짐없이 정리함\n\
                     **고려하지 못한 점:** 성능 측정\n";
        assert_eq!(
            extract_strengths(block).unwrap(),
            "모든 요구사항(고려하지 못한 점 포함)를 빠짐없이 정리함"
        );
        assert_eq!(extract_gaps(block).unwrap(), "성능 측정");
    }

    #[test]
    fn prose_mention_is_a_fallback_when_no_label_line_exists() {
        let block = "자가 평가 메모: 고려하지 못한 점 없음\n";
        assert_eq!(extract_gaps(block).unwrap(), "없음");
    }

    #[test]
    fn labels_missing_return_none() {
        assert_eq!(extract_strengths("아무 라벨도 없음"), None);
        assert_eq!(extract_gaps("아무 라벨도 없음"), None);
    }
}
