//! REPL commands
//!
//! The command table and one handler per command.

use std::io::Write;

use rand::Rng;

use super::Session;
use crate::error::{PokedexError, Result};

// == Command Table ==
/// A REPL command, selected by the first word of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 7] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
    ];

    /// Looks up a command by its (already lowercased) name.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == word)
    }

    /// The word that invokes this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
        }
    }

    /// One-line summary shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of 20 location areas in the Pokemon world",
            Command::Mapb => "Displays the previous 20 locations",
            Command::Explore => "See the list of all pokemon at a given location",
            Command::Catch => "Adds pokemon to Pokedex",
            Command::Inspect => "Inspect details about caught pokemon in pokedex",
        }
    }
}

// == Catch Chance ==
/// Highest roll (out of 0..100) that still catches a Pokemon with the given
/// base experience. Stronger Pokemon are harder to catch.
pub fn catch_threshold(base_experience: u32) -> u32 {
    match base_experience {
        0..=39 => 75,
        40..=150 => 35,
        151..=300 => 20,
        _ => 10,
    }
}

// == Handlers ==
impl Session {
    pub(super) fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        write!(out, "Usage:\n\n")?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    /// Shows the next page of location areas, or the first page on first use.
    pub(super) async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(self.next.as_deref()).await?;

        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    pub(super) async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.previous.as_deref() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_areas(Some(previous)).await?;

        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    pub(super) async fn explore<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        if name.is_empty() {
            return Err(PokedexError::MissingArgument(
                "you must provide a location area name",
            ));
        }

        let area = self.client.location_area(name).await?;

        writeln!(out, "Exploring {}...", name)?;
        writeln!(out, "Found Pokemon:")?;
        for encounter in &area.pokemon_encounters {
            writeln!(out, "- {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    pub(super) async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        if name.is_empty() {
            return Err(PokedexError::MissingArgument(
                "requires a valid pokemon name",
            ));
        }
        let name = name.to_lowercase();

        let pokemon = self.client.pokemon(&name).await?;

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let roll = self.rng.gen_range(0..100);
        if roll <= catch_threshold(pokemon.base_experience.unwrap_or(0)) {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(name, pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    pub(super) fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        if name.is_empty() {
            return Err(PokedexError::MissingArgument(
                "you must provide a pokemon name",
            ));
        }

        let Some(pokemon) = self.caught(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }
}
