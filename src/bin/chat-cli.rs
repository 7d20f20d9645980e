use clap::{Parser, Subcommand};
use serde_json::Value;

use chat_backend::llm::Message;
use chat_backend::Envelope;

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Command-line client for the chat backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one message and print the reply
    Send {
        /// Message text
        text: String,
        /// Optional system instruction for this message
        #[arg(short, long)]
        system: Option<String>,
    },
    /// Fetch chat history
    History,
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Send { text, system } => {
            let message = Message {
                system,
                ..Message::new(text)
            };
            let res = client
                .post(format!("{}/chat/", base))
                .json(&message)
                .send()
                .await?;
            let envelope = read_envelope(res).await?;
            match envelope.data.get("reply").and_then(Value::as_str) {
                Some(reply) if envelope.is_success() => println!("{}", reply),
                _ => print_envelope(&envelope)?,
            }
        }
        Commands::History => {
            let res = client.get(format!("{}/chat/", base)).send().await?;
            print_envelope(&read_envelope(res).await?)?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_envelope(&read_envelope(res).await?)?;
        }
    }

    Ok(())
}

async fn read_envelope(res: reqwest::Response) -> Result<Envelope, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Envelope>(&text) {
        Ok(envelope) => {
            if !envelope.is_success() {
                eprintln!("Error: server returned status {} (code {})", status, envelope.code);
            }
            Ok(envelope)
        }
        Err(_) => Err(format!("server returned status {}: {}", status, text).into()),
    }
}

fn print_envelope(envelope: &Envelope) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}
