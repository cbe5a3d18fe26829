// Heuristic tailoring: builds a tailored resume from the master by ranking
// and filtering content against a job description. No LLM calls.

pub mod handlers;
pub mod selector;
