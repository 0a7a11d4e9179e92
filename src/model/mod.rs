//! The persisted document model and enrichment result types
//!
//! `EntityRecord` is the whole-document upsert unit; it serializes with
//! camelCase keys to match the document shape served by the read-side API.

use serde::{Deserialize, Serialize};

/// One fully enriched, persisted creature document.
///
/// `id` is the upsert key: re-running the pipeline on the same source entity
/// produces the same `id` and overwrites the stored document in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    /// Kilograms, rounded from the source's hectograms
    pub weight: u32,
    /// Centimeters, scaled from the source's decimeters
    pub height: u32,
    /// Official artwork URL; absent for entities without one
    pub image: Option<String>,
    /// Ordered type names, 1 or 2 entries
    pub types: Vec<String>,
    pub damage_relations: TypeRelations,
    pub evolves_from: Option<EvolutionRef>,
    pub description: String,
    pub genus: String,
    pub moves: Vec<MoveInfo>,
}

/// Derived type-effectiveness sets, in one of two deployment-selected shapes.
///
/// Serialized untagged: a stored document carries exactly one shape and the
/// field names distinguish them on read-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRelations {
    #[serde(rename_all = "camelCase")]
    Detailed {
        weak_to: Vec<String>,
        resistant_to: Vec<String>,
        immune_to: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Simple {
        strong_against: Vec<String>,
        weak_against: Vec<String>,
    },
}

/// The immediate prior evolution, one hop only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRef {
    pub name: String,
    pub image: Option<String>,
}

/// One localized, single-line move description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Species-level enrichment result, folded into the entity record
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    pub evolves_from: Option<EvolutionRef>,
    pub description: String,
    pub genus: String,
}
