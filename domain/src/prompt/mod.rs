//! Prompt domain
//!
//! Templates for generating the question sent to the model.

mod template;

pub use template::PromptTemplate;
