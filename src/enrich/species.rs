//! Species enrichment: lineage, description, and genus

use crate::api::{NamedRef, PokemonResource, SpeciesResource};
use crate::crawler::Fetcher;
use crate::enrich::normalize_flavor_text;
use crate::model::{EvolutionRef, SpeciesInfo};
use crate::{LookupError, Result};

/// Resolves an entity's species ref into lineage and localized text.
///
/// Uncached: species are 1:1 with entities in this domain, so no reuse is
/// expected across the run.
pub struct SpeciesEnricher {
    base_url: String,
    language: String,
    version: String,
}

impl SpeciesEnricher {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.into(),
            version: version.into(),
        }
    }

    /// Fetches the species resource and derives lineage, description, genus.
    ///
    /// The description must match both the pinned language and the pinned
    /// release version; the genus must match the pinned language. Either
    /// missing is a fatal lookup failure.
    pub async fn resolve(&self, fetcher: &Fetcher, species_ref: &NamedRef) -> Result<SpeciesInfo> {
        let species: SpeciesResource = fetcher.fetch_json(&species_ref.url).await?;

        let evolves_from = match &species.evolves_from_species {
            Some(predecessor) => Some(self.resolve_predecessor(fetcher, &predecessor.name).await?),
            None => None,
        };

        let flavor = species
            .flavor_text_entries
            .iter()
            .find(|entry| {
                entry.language.name == self.language && entry.version.name == self.version
            })
            .ok_or_else(|| LookupError::SpeciesFlavorText {
                resource: species.name.clone(),
                language: self.language.clone(),
                version: self.version.clone(),
            })?;

        let genus = species
            .genera
            .iter()
            .find(|entry| entry.language.name == self.language)
            .ok_or_else(|| LookupError::Genus {
                resource: species.name.clone(),
                language: self.language.clone(),
            })?;

        Ok(SpeciesInfo {
            evolves_from,
            description: normalize_flavor_text(&flavor.flavor_text),
            genus: genus.genus.clone(),
        })
    }

    /// Resolves the immediate predecessor, one hop only.
    ///
    /// Fetches the predecessor's own entity resource (not its species) solely
    /// for the artwork sprite; the predecessor's lineage is never followed.
    async fn resolve_predecessor(&self, fetcher: &Fetcher, name: &str) -> Result<EvolutionRef> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let pokemon: PokemonResource = fetcher.fetch_json(&url).await?;
        Ok(EvolutionRef {
            name: name.to_string(),
            image: pokemon.sprites.other.official_artwork.front_default,
        })
    }
}
