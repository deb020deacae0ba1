// Prompt templates for the AI ranker.

/// Ranking prompt. Replace `{skills}`, `{interests}`, `{qualification}`,
/// `{sectors}`, `{location}`, `{top_k}` and `{roles}` before sending.
pub const RANKING_PROMPT_TEMPLATE: &str = r#"Analyze the following student profile and the list of available internship roles.

Student Profile:
- Skills: {skills}
- Interests: {interests}
- Qualification: {qualification}
- Preferred Sectors: {sectors}
- Location Preference: {location}

Available Roles Sample:
{roles}

Based on skill relevance, interests and qualification, identify the top {top_k} most relevant roles for this student from the list above.
Return ONLY a valid JSON array of at most {top_k} "role_id" strings, best match first.
Do not include any other text, explanations, or markdown formatting.
Example format: ["role123", "role456", "role789"]"#;
