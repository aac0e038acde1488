// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs next to it and builds on these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps resource suggestions to links a reader can actually open.
pub const RESOURCE_INSTRUCTION: &str = "\
    Only recommend learning resources from well-known, stable sites \
    (official documentation, major course platforms). Every resource must have \
    a full https URL. Never invent URLs.";
