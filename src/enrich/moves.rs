//! Move description enrichment with a run-scoped cache

use crate::api::{MoveResource, NamedRef};
use crate::crawler::Fetcher;
use crate::enrich::normalize_flavor_text;
use crate::model::MoveInfo;
use crate::{LookupError, Result};
use std::collections::HashMap;

/// Resolves move refs into localized, single-line move descriptions.
///
/// The cache is keyed by move *name*, not URL, and is shared across every
/// entity processed in the run: two entities referencing the same move by
/// name reuse one fetch regardless of minor URL variation.
pub struct MoveEnricher {
    language: String,
    cache: HashMap<String, MoveInfo>,
}

impl MoveEnricher {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            cache: HashMap::new(),
        }
    }

    /// Resolves each move ref in order, one output per input.
    pub async fn resolve(
        &mut self,
        fetcher: &Fetcher,
        move_refs: &[NamedRef],
    ) -> Result<Vec<MoveInfo>> {
        let mut moves = Vec::with_capacity(move_refs.len());
        for move_ref in move_refs {
            if let Some(cached) = self.cache.get(&move_ref.name) {
                moves.push(cached.clone());
                continue;
            }

            let resource: MoveResource = fetcher.fetch_json(&move_ref.url).await?;
            let flavor = resource
                .flavor_text_entries
                .iter()
                .find(|entry| entry.language.name == self.language)
                .ok_or_else(|| LookupError::MoveFlavorText {
                    resource: move_ref.name.clone(),
                    language: self.language.clone(),
                })?;

            let info = MoveInfo {
                name: move_ref.name.clone(),
                description: normalize_flavor_text(&flavor.flavor_text),
                type_name: resource.type_ref.name.clone(),
            };
            self.cache.insert(move_ref.name.clone(), info.clone());
            moves.push(info);
        }
        Ok(moves)
    }
}
