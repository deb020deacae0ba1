// Single-turn career assistant. The reply text is passed through unmodified.

pub mod handlers;
pub mod prompts;
