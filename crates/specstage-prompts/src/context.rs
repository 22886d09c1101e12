/// One snapshotted source file, for inclusion in the prompt.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    /// Path as configured, relative to the project root.
    pub path: String,
    /// File contents, or the missing-file placeholder.
    pub content: String,
}

/// All the context needed to assemble the design-stage prompt.
#[derive(Debug, Clone)]
pub struct DesignContext {
    pub requirement: String,
    pub answers: String,
    pub structure: Option<String>,
    pub snapshots: Vec<FileSnapshot>,
}

impl DesignContext {
    /// Render the numbered prompt sections: project context, requirement, answers.
    pub fn append_sections(&self, prompt: &mut String) {
        prompt.push_str("[1. 기존 프로젝트 컨텍스트]\n");
        if let Some(ref structure) = self.structure {
            prompt.push_str("[프로젝트 파일 구조]\n");
            prompt.push_str(structure);
            prompt.push_str("\n---\n");
        }
        for (i, snapshot) in self.snapshots.iter().enumerate() {
            prompt.push_str(&format!("[핵심 파일 {}: {}]\n", i + 1, snapshot.path));
            prompt.push_str(&snapshot.content);
            prompt.push_str("\n---\n");
        }

        prompt.push_str("\n[2. 새로운 기능 요구사항]\n");
        prompt.push_str(&self.requirement);
        prompt.push_str("\n\n[3. (중요) 나의 답변]\n");
        prompt.push_str(&self.answers);
        prompt.push_str("\n\n");
    }
}
