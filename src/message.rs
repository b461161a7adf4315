// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Default, Deserialize)]
pub struct ChatRequest {
    // An absent field behaves like an empty message so `{}` still gets the
    // "No message provided" response instead of a deserialization error.
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
