//! Pokedex - A command-line Pokedex backed by the PokeAPI
//!
//! Reads commands from stdin until `exit`, end of input, or Ctrl+C.

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Context;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, Flow, PokeApiClient, Session, TtlCache, PROMPT};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper task
/// 4. Hand the cache to the API client and the client to the session
/// 5. Run the prompt loop until exit, EOF, or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "error" so logs don't interleave with REPL output,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}",
        config.cache_ttl, config.api_base_url
    );

    let cache = TtlCache::new(config.cache_ttl()).context("failed to create response cache")?;
    let client = PokeApiClient::from_config(&config, cache);
    let mut session = Session::new(client);

    let mut lines = spawn_stdin_reader();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = signal::ctrl_c() => {
                writeln!(stdout)?;
                info!("Received Ctrl+C, exiting");
                break;
            }
        };

        // None means stdin reached EOF
        let Some(line) = line else {
            writeln!(stdout)?;
            break;
        };
        let line = line.context("failed to read from stdin")?;

        match session.execute(&line, &mut stdout).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                debug!("Command failed: {}", err);
                writeln!(stdout, "Error: {}", err)?;
            }
        }
    }

    let stats = session.client().cache().stats();
    debug!(
        "Cache stats: hits={}, misses={}, reaped={}, entries={}",
        stats.hits, stats.misses, stats.reaped, stats.total_entries
    );
    Ok(())
}

/// Reads stdin lines on a dedicated thread.
///
/// A blocking read on a runtime thread would keep the runtime from shutting
/// down after Ctrl+C, so the thread is detached and simply dies with the process.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(1);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}
