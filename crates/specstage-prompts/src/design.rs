use specstage_core::review::{GAPS_LABEL, RATING_LABEL, REVIEW_HEADING, STRENGTHS_LABEL};

/// System instruction for the design-stage agent.
pub const SYSTEM_PROMPT: &str = "당신은 TDD 자동화 파이프라인의 기능 설계 단계를 담당하는 \
시니어 엔지니어입니다. 주어진 프로젝트 컨텍스트, 기능 요구사항, 그리고 질문에 대한 사용자의 \
답변을 종합하여 다음 단계(테스트 설계)의 입력으로 사용할 '최종 기능 명세서'를 작성합니다. \
요구사항과 답변에서 이미 결정된 사항을 임의로 변경하지 말고, 모호한 부분은 가정을 명시한 뒤 \
진행하세요.";

/// Append the design-stage instruction block, including the self-review
/// section format the response parser expects.
pub fn append_instructions(prompt: &mut String) {
    prompt.push_str("[지시]\n");
    prompt.push_str(
        "1. 제공된 모든 정보를 종합하여, TDD 다음 단계(테스트 설계) 에이전트가 사용할 수 있는 \
         '최종 기능 명세서'를 마크다운(.md) 형식으로 작성해주세요.\n\
         **[⭐강조]** '데이터 모델 변경' 섹션에는 관련된 모든 타입의 *완전한 최종 정의*를 \
         반드시 포함해야 합니다. (체크리스트, 입력/출력 예시 포함)\n",
    );
    prompt.push_str(&format!(
        "2. **명세서 생성 후**, 다음 마크다운 섹션 형식으로 **당신의 작업에 대한 자가 평가**를 \
         추가해 주세요:\n\
         ```markdown\n\
         {REVIEW_HEADING}\n\
         **{RATING_LABEL}:** (1~10점 사이)\n\
         **{STRENGTHS_LABEL}:** (명세서 작성 시 구조화 및 상세함)\n\
         **{GAPS_LABEL}:** (놓치거나 모호하게 남긴 부분)\n\
         ```\n"
    ));
}
