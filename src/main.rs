use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whispermind::chat::{ChatController, Role, SubmitOutcome};
use whispermind::completion::HttpCompletionClient;
use whispermind::config::AppConfig;
use whispermind::notify::LogNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whispermind=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(
        "Starting WhisperMind against {} ({})",
        config.completion.base_url, config.completion.model
    );

    let client = HttpCompletionClient::new(config.completion.clone());
    let chat = ChatController::new(client, Arc::new(LogNotifier));

    println!("WhisperMind. Type a message, /new to start over, /quit to exit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/quit" => break,
            "/new" => {
                chat.reset();
                println!("(new chat)");
            }
            text => match chat.submit(text).await {
                SubmitOutcome::Answered => {
                    let snapshot = chat.snapshot();
                    if let Some(reply) = snapshot
                        .messages
                        .iter()
                        .rev()
                        .find(|m| m.role == Role::Assistant)
                    {
                        println!("{}", reply.content);
                    }
                }
                SubmitOutcome::Failed => {
                    println!("(no response; see log for details)");
                }
                SubmitOutcome::Rejected | SubmitOutcome::Discarded => {}
            },
        }
    }

    Ok(())
}
