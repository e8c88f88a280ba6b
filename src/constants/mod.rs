pub mod email_templates;
pub mod prompts;
