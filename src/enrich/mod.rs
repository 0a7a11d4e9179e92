//! Per-entity enrichment resolvers
//!
//! Each resolver takes data already present on the fetched entity detail
//! (type refs, the species ref, move refs) and turns it into one slice of the
//! final document. The type and move resolvers own run-scoped caches; the
//! species resolver is uncached because species are 1:1 with entities.

mod effectiveness;
mod moves;
mod species;

pub use effectiveness::TypeEffectivenessResolver;
pub use moves::MoveEnricher;
pub use species::SpeciesEnricher;

/// Collapses a raw flavor text to a single line.
///
/// Source flavor texts embed hard line breaks from the original game screens;
/// each becomes a single space in the stored description.
pub fn normalize_flavor_text(text: &str) -> String {
    text.replace('\n', " ")
}
