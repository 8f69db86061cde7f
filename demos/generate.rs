//! Minimal text generation against the live API.
//!
//! Requires `OPENAI_API_KEY` in the environment (a `.env` file works):
//!
//! ```sh
//! cargo run --example generate
//! ```

use chatgpt_connector::{ChatRole, Connector, ConnectorConfig, Message};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connector = Connector::new(ConnectorConfig::default())?;

    let reply = connector.generate(
        &[
            Message {
                role: ChatRole::System,
                content: "You answer in one short sentence.".to_string(),
            },
            Message {
                role: ChatRole::User,
                content: "What is nucleus sampling?".to_string(),
            },
        ],
        None,
    )?;

    println!("{}", reply.content.unwrap_or_default());
    Ok(())
}
