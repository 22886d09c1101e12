pub mod context;
pub mod design;

pub use context::{DesignContext, FileSnapshot};

/// Assemble the full user prompt for the design stage.
pub fn assemble_user_prompt(ctx: &DesignContext) -> String {
    let mut prompt = String::new();
    ctx.append_sections(&mut prompt);
    design::append_instructions(&mut prompt);
    prompt
}

/// System instruction paired with the assembled user prompt.
pub fn system_prompt() -> &'static str {
    design::SYSTEM_PROMPT
}
