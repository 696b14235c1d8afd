// Curriculum recommendation engine.
// Implements: eligibility filtering, interest ranking, LLM advisory with local fallback.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod advisory;
pub mod eligibility;
pub mod engine;
pub mod handlers;
pub mod interests;
pub mod prompts;
