//! # chatgpt-connector
//!
//! Thin synchronous client for the OpenAI chat completions API.
//!
//! One configured [`Connector`] exposes one operation:
//! [`generate`](Connector::generate) forwards a conversation (and an
//! optional list of callable-function schemas) to the model and returns
//! the first response choice's message unmodified. There is no retry, no
//! streaming, and no session state; failed calls simply fail.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatgpt_connector::{ChatRole, Connector, ConnectorConfig, Message};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OPENAI_API_KEY from the environment.
//!     let connector = Connector::new(ConnectorConfig::default())?;
//!
//!     let reply = connector.generate(
//!         &[Message {
//!             role: ChatRole::User,
//!             content: "Say hello.".to_string(),
//!         }],
//!         None,
//!     )?;
//!
//!     println!("{}", reply.content.unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod types;

pub use config::{API_BASE, API_KEY_ENV_VAR, ConnectorConfig, DEFAULT_MODEL};
pub use connector::Connector;
pub use error::ConnectorError;
pub use types::{ChatRole, Function, FunctionCall, Message, ResponseMessage};
