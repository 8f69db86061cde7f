//! Exposing a function schema to the model and printing what it asks for.
//!
//! ```sh
//! cargo run --example function-calling
//! ```

use chatgpt_connector::{ChatRole, Connector, ConnectorConfig, Function, Message};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connector = Connector::new(ConnectorConfig::default())?;

    let functions = vec![Function {
        name: "get_weather".to_string(),
        description: Some("Look up current weather for a city.".to_string()),
        parameters: json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name, e.g. Lisbon" }
            },
            "required": ["city"]
        }),
    }];

    let reply = connector.generate(
        &[Message {
            role: ChatRole::User,
            content: "What's the weather like in Lisbon right now?".to_string(),
        }],
        Some(&functions),
    )?;

    match reply.function_call {
        Some(call) => println!("model wants {} with args {}", call.name, call.arguments),
        None => println!("{}", reply.content.unwrap_or_default()),
    }
    Ok(())
}
