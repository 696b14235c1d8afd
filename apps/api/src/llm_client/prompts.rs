// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Instruction appended to system prompts whose output is shown to students verbatim.
pub const PLAIN_PROSE_INSTRUCTION: &str = "Respond in plain, friendly prose. \
    Do NOT use markdown headings, tables, or code fences. \
    Do NOT return JSON.";

/// Instruction that keeps advice grounded in the supplied course list.
pub const GROUNDING_INSTRUCTION: &str = "Only recommend courses that appear in the \
    list provided. Do NOT invent course names, codes, or prerequisites.";
