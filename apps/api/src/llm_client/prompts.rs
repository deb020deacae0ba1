// Shared prompt constants. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds cross-cutting fragments.

/// System instruction that enforces bare-JSON output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
