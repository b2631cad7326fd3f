// CalmCoach terminal entry point.
// Thin REPL standing in for the host application: it supplies user text,
// usage stats and a place to persist history, and renders replies.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calmcoach_core::{CoachConfig, CoachSession, SqliteKvStore, UsageStats};

const DEFAULT_DB_PATH: &str = "data/calmcoach.sqlite";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let db_path =
        std::env::var("COACH_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    if let Some(parent) = Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent).context("creating data directory")?;
    }

    let kv = Arc::new(
        SqliteKvStore::connect(&db_path)
            .await
            .context("opening conversation store")?,
    );

    // Demo stats; the real application derives these from session history.
    let stats = Arc::new(|| UsageStats {
        total_minutes: 320,
        total_sessions: 24,
        current_streak: 3,
        longest_streak: 9,
    });

    let session = CoachSession::bootstrap(kv, stats, CoachConfig::default())
        .await
        .context("starting coach session")?;
    info!("REPL ready");

    println!("CalmCoach — type a message, /clear to reset, /quit to exit.");
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
            "/clear" => {
                session.clear().await?;
                println!("(history cleared)");
            }
            input => {
                if let Some(response) = session.respond(input).await? {
                    println!("\n{}\n", response.text);
                    if let Some(action) = &response.action {
                        println!("  [{}] -> {}", action.label, action.deep_link);
                    }
                }
            }
        }
    }

    session.flush().await?;
    Ok(())
}
