use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A role-tagged unit of conversational content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

/// Descriptor for a function the model may invoke via structured output.
///
/// `parameters` is a JSON Schema object forwarded to the API as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Value,
}

/// The message object of a single response choice, returned verbatim.
///
/// `content` is absent when the model answers with a function-call
/// directive instead of text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
    pub function_call: Option<FunctionCall>,
}

/// A function-call directive emitted by the model.
///
/// `arguments` is the raw JSON string from the API; it is not parsed or
/// validated locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}
