//! Chatline CLI
//!
//! Command-line client for a running Chatline server:
//! - List and create channels
//! - Read and post messages
//! - Sign up and log in
//! - Check server status

use chatline::config::generate_default_config;
use chatline::{Channel, Message};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatline-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for Chatline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all channels
    Channels,

    /// Create a channel
    CreateChannel {
        /// Channel name
        name: String,
    },

    /// Show messages in a channel
    Messages {
        /// Channel id
        channel: i64,
        /// Maximum number of messages
        #[arg(short, long, default_value = "100")]
        limit: i64,
        /// Only messages after this message id
        #[arg(short, long, default_value = "0")]
        after: i64,
    },

    /// Post a message to a channel
    Send {
        /// Channel id
        channel: i64,
        /// Message text
        text: String,
        /// Author's user id (see `login`)
        #[arg(short, long)]
        user: i64,
    },

    /// Create a user account
    Signup { username: String, password: String },

    /// Check credentials and print the user id
    Login { username: String, password: String },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Channels => {
            let response = client.get(format!("{}/channels", base)).send().await?;
            let response = check(response, "Failed to fetch channels").await;

            let channels: Option<Vec<Channel>> = response.json().await?;
            let channels = channels.unwrap_or_default();

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&channels)?);
            } else if channels.is_empty() {
                println!("No channels yet.");
                println!();
                println!("Create one with:");
                println!("  chatline-cli create-channel general");
            } else {
                println!("{:<8} {}", "ID", "Name");
                println!("{}", "-".repeat(40));
                for channel in channels {
                    println!("{:<8} {}", channel.id, channel.name);
                }
            }
        }

        Commands::CreateChannel { name } => {
            let response = client
                .post(format!("{}/channels", base))
                .json(&json!({ "name": name }))
                .send()
                .await?;
            let response = check(response, "Failed to create channel").await;

            let created: serde_json::Value = response.json().await?;
            println!(
                "Created channel #{} ({})",
                name,
                created["id"].as_i64().unwrap_or_default()
            );
        }

        Commands::Messages {
            channel,
            limit,
            after,
        } => {
            let response = client
                .get(format!("{}/messages", base))
                .query(&[
                    ("channelID", channel.to_string()),
                    ("limit", limit.to_string()),
                    ("lastMessageID", after.to_string()),
                ])
                .send()
                .await?;
            let response = check(response, "Failed to fetch messages").await;

            let messages: Option<Vec<Message>> = response.json().await?;
            let messages = messages.unwrap_or_default();

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else if messages.is_empty() {
                println!("No messages.");
            } else {
                for message in messages {
                    println!("{}", format_message(&message));
                }
            }
        }

        Commands::Send {
            channel,
            text,
            user,
        } => {
            let response = client
                .post(format!("{}/messages", base))
                .json(&json!({ "channel_id": channel, "user_id": user, "text": text }))
                .send()
                .await?;
            let response = check(response, "Failed to send message").await;

            let created: serde_json::Value = response.json().await?;
            println!("Sent message {}", created["id"].as_i64().unwrap_or_default());
        }

        Commands::Signup { username, password } => {
            let response = client
                .post(format!("{}/users", base))
                .json(&json!({ "username": username, "password": password }))
                .send()
                .await?;
            let response = check(response, "Sign-up failed").await;

            let created: serde_json::Value = response.json().await?;
            println!(
                "Created user {} (id {})",
                username,
                created["id"].as_i64().unwrap_or_default()
            );
        }

        Commands::Login { username, password } => {
            let response = client
                .post(format!("{}/login", base))
                .json(&json!({ "username": username, "password": password }))
                .send()
                .await?;
            let response = check(response, "Login failed").await;

            let body: serde_json::Value = response.json().await?;
            println!("{}", body["id"].as_i64().unwrap_or_default());
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", base)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Chatline v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Database:   {}",
                        health["database"].as_str().unwrap_or("unknown")
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:     {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Chatline API at {}", base);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Chatline server is running:");
                    eprintln!("  cargo run --bin chatline");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Exit with the server's error text on a non-success status
async fn check(response: reqwest::Response, context: &str) -> reqwest::Response {
    if response.status().is_success() {
        return response;
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or(text);

    eprintln!("{} ({}): {}", context, status, detail);
    std::process::exit(1);
}

fn format_message(message: &Message) -> String {
    let author = if message.user_name.is_empty() {
        format!("user {}", message.user_id)
    } else {
        message.user_name.clone()
    };
    format!("[{}] {}: {}", message.id, author, message.text)
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}
