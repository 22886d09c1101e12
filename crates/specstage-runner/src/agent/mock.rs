use anyhow::{bail, Result};
use async_trait::async_trait;

use super::Agent;

/// Canned response used when the mock backend is selected from
/// configuration; shaped like a real design-stage reply so a dry run
/// exercises the full split/strip/write path.
pub const SAMPLE_RESPONSE: &str = "```markdown\n\
# 최종 기능 명세서 (모의 실행)\n\n\
## 개요\n\
모의 백엔드가 생성한 자리표시 명세서입니다.\n\n\
## 데이터 모델 변경\n\
(없음)\n\n\
## 🤖 에이전트 자가 평가\n\
**점수:** 5\n\
**잘한 점:** 모의 응답 형식 준수\n\
**고려하지 못한 점:** 실제 요구사항 미반영\n\
```";

/// A mock agent for testing that returns a preconfigured response
/// or a preconfigured failure.
pub struct MockAgent {
    reply: Result<String, String>,
}

impl MockAgent {
    /// Create a mock that succeeds with the given response text.
    pub fn respond_with(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
        }
    }

    /// Create a mock whose invocation fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn name(&self) -> &str {
        "mock"
    }

    async fn preflight_check(&self) -> Result<()> {
        Ok(())
    }

    async fn run(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => bail!("{message}"),
        }
    }
}
