//! Interactive Loop Module
//!
//! Reads commands line by line and drives the caching API client.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the loop
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the Pokemon found in an area
//! - `catch <pokemon>` - Throw a Pokeball; harder for high base experience
//! - `inspect <pokemon>` - Show a caught Pokemon's details
//! - `pokedex` - List caught Pokemon
//! - `stats [json]` - Show response cache statistics

mod commands;

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::ApiClient;
use crate::models::Pokemon;

pub use commands::{clean_input, Command, COMMANDS};

const PROMPT: &str = "Pokedex > ";

/// Base experience at or above which a catch always fails.
const MAX_BASE_EXPERIENCE: u32 = 400;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State carried between commands: the client, the pagination cursor and
/// the caught Pokemon.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    next_url: Option<String>,
    prev_url: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    /// Starts a session positioned before the first page of location areas.
    pub fn new(client: ApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Starts a session whose catch rolls come from `rng`.
    pub fn with_rng(client: ApiClient, rng: StdRng) -> Self {
        let next_url = Some(client.first_location_areas_url());
        Self {
            client,
            next_url,
            prev_url: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Caught Pokemon, keyed by name.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    /// Ends the session, handing back the client for teardown.
    pub fn into_client(self) -> ApiClient {
        self.client
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> anyhow::Result<Flow> {
        match command {
            Command::Help => {
                writeln!(out)?;
                writeln!(out, "Welcome to the Pokedex!")?;
                writeln!(out, "Usage:")?;
                writeln!(out)?;
                for (name, description) in COMMANDS {
                    writeln!(out, "  {}: {}", name, description)?;
                }
                writeln!(out)?;
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => match self.next_url.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "You're on the last page")?,
            },
            Command::MapBack => match self.prev_url.clone() {
                Some(url) => self.show_page(&url, out).await?,
                None => writeln!(out, "You're on the first page")?,
            },
            Command::Explore(name) => {
                let area = self.client.location_area(&name).await?;

                writeln!(out, "Exploring {}...", area.location.name)?;
                writeln!(out, "Found Pokemon:")?;
                if area.pokemon_encounters.is_empty() {
                    writeln!(out, "  No Pokemon found in this area.")?;
                }
                for encounter in &area.pokemon_encounters {
                    writeln!(out, "  - {}", encounter.pokemon.name)?;
                }
            }
            Command::Catch(name) => {
                let pokemon = self.client.pokemon(&name).await?;
                writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

                if self.roll_catch(&pokemon) {
                    writeln!(out, "{} was caught!", pokemon.name)?;
                    writeln!(out, "You may now inspect it with the inspect command.")?;
                    debug!("Caught {}", pokemon.name);
                    self.pokedex.insert(pokemon.name.clone(), pokemon);
                } else {
                    writeln!(out, "{} escaped!", pokemon.name)?;
                }
            }
            Command::Inspect(name) => match self.pokedex.get(&name) {
                Some(pokemon) => write_details(pokemon, out)?,
                None => writeln!(out, "you have not caught that pokemon")?,
            },
            Command::Pokedex => {
                if self.pokedex.is_empty() {
                    writeln!(out, "Your Pokedex is empty. Go catch some Pokemon!")?;
                } else {
                    writeln!(out, "Your Pokedex:")?;
                    for name in self.pokedex.keys() {
                        writeln!(out, " - {}", name)?;
                    }
                }
            }
            Command::Stats { json: true } => {
                let stats = self.client.cache().stats().await;
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            }
            Command::Stats { json: false } => {
                let cache = self.client.cache();
                let stats = cache.stats().await;

                writeln!(out, "Cache TTL: {:?}", cache.ttl())?;
                writeln!(out, "Entries: {}", stats.total_entries)?;
                writeln!(out, "Hits: {}", stats.hits)?;
                writeln!(out, "Misses: {}", stats.misses)?;
                writeln!(out, "Reaped: {}", stats.reaped)?;
                writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
            }
        }

        Ok(Flow::Continue)
    }

    /// A catch succeeds when a roll in `0..MAX_BASE_EXPERIENCE` reaches the
    /// Pokemon's base experience. A missing base experience always succeeds.
    fn roll_catch(&mut self, pokemon: &Pokemon) -> bool {
        let threshold = pokemon
            .base_experience
            .unwrap_or(0)
            .min(MAX_BASE_EXPERIENCE);
        self.rng.gen_range(0..MAX_BASE_EXPERIENCE) >= threshold
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> anyhow::Result<()> {
        let page = self.client.location_areas(url).await?;

        self.next_url = page.next;
        self.prev_url = page.previous;

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }
}

fn write_details<W: Write>(pokemon: &Pokemon, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for slot in &pokemon.types {
        writeln!(out, "  - {}", slot.kind.name)?;
    }
    Ok(())
}

/// Reads commands from `input` until `exit` or end of input.
///
/// Parse and command failures are reported on `out` and the loop continues.
/// Only I/O failures on `input` or `out` end the loop with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };

        let command = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match session.execute(command, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}
