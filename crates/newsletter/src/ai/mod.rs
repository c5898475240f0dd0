//! Text-generation integration.
//!
//! This module provides:
//! - AI provider abstraction
//! - OpenAI chat-completions implementation

pub mod openai;
pub mod provider;

pub use openai::OpenAIProvider;
pub use provider::{AIMessage, AIProvider, AIResponse, AIRole, GenerateOptions, TokenUsage};
