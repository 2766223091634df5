//! REPL Module
//!
//! Command dispatch for the interactive Pokedex prompt.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forward/back through location areas
//! - `explore <area>` - List Pokemon found in an area
//! - `catch <pokemon>` - Try to catch a Pokemon
//! - `inspect <pokemon>` - Show a caught Pokemon

pub mod commands;
pub mod input;

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;
use crate::models::Pokemon;

pub use commands::{catch_threshold, Command};
pub use input::clean_input;

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// What the REPL loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// Per-process REPL state.
///
/// The session owns the API client, and through it the response cache handle;
/// commands reach the cache only through the client.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    /// URL of the next location area page, `None` before the first `map`
    next: Option<String>,
    /// URL of the previous location area page, `None` on the first page
    previous: Option<String>,
    /// Caught Pokemon by lowercase name
    pokedex: HashMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    /// Creates a session with an entropy-seeded catch RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided RNG.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: HashMap::new(),
            rng,
        }
    }

    /// Returns the API client, and through it the session's cache.
    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Returns a caught Pokemon by name.
    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(&name.to_lowercase())
    }

    // == Execute ==
    /// Handles one line of user input, writing command output to `out`.
    ///
    /// Blank lines are ignored and unknown commands print `Unknown command`.
    /// Only the first argument after the command word is used.
    ///
    /// # Errors
    /// Returns the command's error; the caller reports it and keeps going.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some(word) = words.first() else {
            return Ok(Flow::Continue);
        };
        let arg = words.get(1).map(String::as_str).unwrap_or("");

        let Some(command) = Command::parse(word) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };
        debug!(command = command.name(), arg, "Executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.map_back(out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
        }
        Ok(Flow::Continue)
    }
}
