//! Crawl orchestration
//!
//! Drives a full run: fetch the bounded entity listing, then for each entity
//! fetch the detail resource, run the three enrichments concurrently, merge
//! the results into one document, and upsert it. Entities are processed
//! strictly sequentially; the per-entity enrichment join is the only fan-out.

use crate::api::{ListingPage, NamedRef, PokemonResource};
use crate::config::Config;
use crate::crawler::Fetcher;
use crate::enrich::{MoveEnricher, SpeciesEnricher, TypeEffectivenessResolver};
use crate::model::EntityRecord;
use crate::storage::{DocumentStore, SqliteStore};
use crate::Result;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Base-record projection of the entity detail resource, before enrichment
#[derive(Debug, PartialEq)]
struct BaseRecord {
    id: u32,
    name: String,
    weight: u32,
    height: u32,
    image: Option<String>,
    types: Vec<String>,
}

/// Projects the identity and physical fields out of the detail resource.
///
/// Weight is rounded from hectograms to kilograms; height is scaled from
/// decimeters to centimeters.
fn project_base(pokemon: &PokemonResource) -> BaseRecord {
    BaseRecord {
        id: pokemon.id,
        name: pokemon.name.clone(),
        weight: (pokemon.weight + 5) / 10,
        height: pokemon.height * 10,
        image: pokemon.sprites.other.official_artwork.front_default.clone(),
        types: pokemon
            .types
            .iter()
            .map(|slot| slot.type_ref.name.clone())
            .collect(),
    }
}

/// One in-place progress line per saved entity.
///
/// Returns to column zero and clears to end of line, so a shorter name
/// following a longer one leaves no residue on screen.
fn progress_line(count: u32, name: &str) -> String {
    format!("\rSaved #{} {}\x1b[K", count, name)
}

/// Main crawl coordinator.
///
/// Generic over the document store so tests can substitute a recording
/// store; production runs use [`SqliteStore`] via [`crawl`].
pub struct Coordinator<S: DocumentStore> {
    base_url: String,
    page_limit: u32,
    fetcher: Fetcher,
    store: S,
    types: TypeEffectivenessResolver,
    species: SpeciesEnricher,
    moves: MoveEnricher,
}

impl<S: DocumentStore> Coordinator<S> {
    /// Creates a coordinator with fresh run-scoped caches
    pub fn new(config: Config, store: S) -> Result<Self> {
        let fetcher = Fetcher::new()?;
        let types = TypeEffectivenessResolver::new(config.enrichment.effectiveness);
        let species = SpeciesEnricher::new(
            &config.api.base_url,
            &config.localization.language,
            &config.localization.version,
        );
        let moves = MoveEnricher::new(&config.localization.language);

        Ok(Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            page_limit: config.api.page_limit,
            fetcher,
            store,
            types,
            species,
            moves,
        })
    }

    /// Runs the full crawl.
    ///
    /// Persisted writes occur in listing order, one at a time; the loop is
    /// strictly forward and terminates at the end of the listing or at the
    /// first fatal error. Entities written before an abort remain written.
    pub async fn run(&mut self) -> Result<()> {
        let start = Instant::now();

        let listing_url = format!("{}/pokemon?limit={}", self.base_url, self.page_limit);
        let listing: ListingPage = self.fetcher.fetch_json(&listing_url).await?;
        tracing::info!("Listed {} entities", listing.results.len());

        self.store.ensure_indexes()?;

        let mut stdout = io::stdout();
        let mut count = 0u32;
        for entry in &listing.results {
            let record = self.process_entity(entry).await?;
            let name = record.name.clone();

            if let Err(e) = self.store.upsert(&record) {
                tracing::error!("Failed to persist '{}': {}", name, e);
                return Err(e.into());
            }

            count += 1;
            write!(stdout, "{}", progress_line(count, &name))?;
            stdout.flush()?;
        }

        println!();
        println!("Time taken: {:.2?}", start.elapsed());
        println!("Done");
        tracing::info!("Crawl completed: {} entities in {:?}", count, start.elapsed());

        Ok(())
    }

    /// Fetches one entity's detail and produces its merged document.
    ///
    /// The three enrichments have no data dependency on each other and run
    /// concurrently; the join waits for all three or for the first failure.
    async fn process_entity(&mut self, entry: &NamedRef) -> Result<EntityRecord> {
        let pokemon: PokemonResource = self.fetcher.fetch_json(&entry.url).await?;
        let base = project_base(&pokemon);

        let type_refs: Vec<NamedRef> = pokemon
            .types
            .iter()
            .map(|slot| slot.type_ref.clone())
            .collect();
        let move_refs: Vec<NamedRef> = pokemon
            .moves
            .iter()
            .map(|slot| slot.move_ref.clone())
            .collect();

        let (damage_relations, species_info, moves) = tokio::try_join!(
            self.types.resolve(&self.fetcher, &type_refs),
            self.species.resolve(&self.fetcher, &pokemon.species),
            self.moves.resolve(&self.fetcher, &move_refs),
        )?;

        Ok(EntityRecord {
            id: base.id,
            name: base.name,
            weight: base.weight,
            height: base.height,
            image: base.image,
            types: base.types,
            damage_relations,
            evolves_from: species_info.evolves_from,
            description: species_info.description,
            genus: species_info.genus,
            moves,
        })
    }
}

/// Runs a full crawl against the SQLite store named in the configuration
pub async fn crawl(config: Config) -> Result<()> {
    let store = SqliteStore::open(Path::new(&config.output.database_path))?;
    let mut coordinator = Coordinator::new(config, store)?;
    coordinator.run().await
}
