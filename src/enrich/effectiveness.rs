//! Derived type-effectiveness relations
//!
//! Computes the weak/resistant/immune (detailed) or strong-against/
//! weak-against (simple) sets for an entity's 1-2 elemental types from the
//! raw per-type damage-relation lists.

use crate::api::{DamageRelations, NamedRef, TypeResource};
use crate::config::EffectivenessMode;
use crate::crawler::Fetcher;
use crate::model::TypeRelations;
use crate::Result;
use std::collections::{HashMap, HashSet};

/// Multiplier assigned to each raw relation category when combining dual types
const DOUBLE_DAMAGE: f64 = 2.0;
const HALF_DAMAGE: f64 = 0.5;
const NO_DAMAGE: f64 = 0.0;

/// Resolves an entity's type refs into derived effectiveness sets.
///
/// Owns the run-scoped damage-relation cache, keyed by type URL. The type
/// roster is small and finite, so the cache is append-only and never evicted;
/// each type URL is fetched at most once per run.
pub struct TypeEffectivenessResolver {
    mode: EffectivenessMode,
    cache: HashMap<String, DamageRelations>,
}

impl TypeEffectivenessResolver {
    pub fn new(mode: EffectivenessMode) -> Self {
        Self {
            mode,
            cache: HashMap::new(),
        }
    }

    /// Fetches (or reuses cached) damage relations for each type ref and
    /// computes the configured relation shape.
    pub async fn resolve(
        &mut self,
        fetcher: &Fetcher,
        type_refs: &[NamedRef],
    ) -> Result<TypeRelations> {
        let mut relations = Vec::with_capacity(type_refs.len());
        for type_ref in type_refs {
            if let Some(cached) = self.cache.get(&type_ref.url) {
                relations.push(cached.clone());
                continue;
            }
            let resource: TypeResource = fetcher.fetch_json(&type_ref.url).await?;
            self.cache
                .insert(type_ref.url.clone(), resource.damage_relations.clone());
            relations.push(resource.damage_relations);
        }

        Ok(match self.mode {
            EffectivenessMode::Detailed => detailed_relations(&relations),
            EffectivenessMode::Simple => simple_relations(&relations),
        })
    }
}

/// Computes the detailed weak/resistant/immune shape.
///
/// A single type's relation lists project straight through. Dual types are
/// combined multiplicatively, simulating both types reacting at once to the
/// same attacking type.
fn detailed_relations(relations: &[DamageRelations]) -> TypeRelations {
    if let [first, second] = relations {
        return combine_dual(first, second);
    }

    let single = relations.first().cloned().unwrap_or_default();
    TypeRelations::Detailed {
        weak_to: names(&single.double_damage_from),
        resistant_to: names(&single.half_damage_from),
        immune_to: names(&single.no_damage_from),
    }
}

/// Flattens one type's relation lists into `(attacking type, multiplier)` pairs
fn multipliers(relations: &DamageRelations) -> Vec<(String, f64)> {
    let mut flat = Vec::new();
    for (refs, multiplier) in [
        (&relations.double_damage_from, DOUBLE_DAMAGE),
        (&relations.half_damage_from, HALF_DAMAGE),
        (&relations.no_damage_from, NO_DAMAGE),
    ] {
        for type_ref in refs {
            flat.push((type_ref.name.clone(), multiplier));
        }
    }
    flat
}

/// Combines two types' relation sets into one detailed shape.
///
/// Attacking types present on both defenders get their multipliers multiplied
/// together; types present on exactly one pass through unchanged. The union is
/// then bucketed by final multiplier: `> 1` weak, `0 < x < 1` resistant,
/// `0` immune. A multiplier of exactly 1 means the two types cancel out and
/// the attacking type is not emitted at all.
fn combine_dual(first: &DamageRelations, second: &DamageRelations) -> TypeRelations {
    let first_flat = multipliers(first);
    let second_flat = multipliers(second);

    let second_by_name: HashMap<&str, f64> = second_flat
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    let first_names: HashSet<&str> = first_flat.iter().map(|(name, _)| name.as_str()).collect();

    let mut combined: Vec<(String, f64)> = Vec::new();
    for (name, value) in &first_flat {
        match second_by_name.get(name.as_str()) {
            Some(other) => combined.push((name.clone(), value * other)),
            None => combined.push((name.clone(), *value)),
        }
    }
    for (name, value) in &second_flat {
        if !first_names.contains(name.as_str()) {
            combined.push((name.clone(), *value));
        }
    }

    let mut weak_to = Vec::new();
    let mut resistant_to = Vec::new();
    let mut immune_to = Vec::new();
    for (name, value) in combined {
        if value > 1.0 {
            weak_to.push(name);
        } else if value > 0.0 && value < 1.0 {
            resistant_to.push(name);
        } else if value == 0.0 {
            immune_to.push(name);
        }
        // exactly 1.0: not emitted
    }

    TypeRelations::Detailed {
        weak_to,
        resistant_to,
        immune_to,
    }
}

/// Computes the simple strong-against/weak-against shape.
///
/// Unions `double_damage_to` and `double_damage_from` across all of the
/// entity's types, first-seen order, deduplicated.
fn simple_relations(relations: &[DamageRelations]) -> TypeRelations {
    let mut strong_against = Vec::new();
    let mut weak_against = Vec::new();
    for relation in relations {
        push_unique(&mut strong_against, &relation.double_damage_to);
        push_unique(&mut weak_against, &relation.double_damage_from);
    }
    TypeRelations::Simple {
        strong_against,
        weak_against,
    }
}

fn names(refs: &[NamedRef]) -> Vec<String> {
    refs.iter().map(|r| r.name.clone()).collect()
}

fn push_unique(out: &mut Vec<String>, refs: &[NamedRef]) {
    for type_ref in refs {
        if !out.iter().any(|existing| existing == &type_ref.name) {
            out.push(type_ref.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NamedRef {
        NamedRef {
            name: name.to_string(),
            url: format!("https://api.example/type/{}/", name),
        }
    }

    fn relations(
        double_from: &[&str],
        half_from: &[&str],
        no_from: &[&str],
        double_to: &[&str],
    ) -> DamageRelations {
        DamageRelations {
            double_damage_from: double_from.iter().map(|n| named(n)).collect(),
            half_damage_from: half_from.iter().map(|n| named(n)).collect(),
            no_damage_from: no_from.iter().map(|n| named(n)).collect(),
            double_damage_to: double_to.iter().map(|n| named(n)).collect(),
        }
    }

    #[test]
    fn test_single_type_projects_straight_through() {
        let input = [relations(&["fire", "flying"], &["water"], &["ground"], &[])];

        let result = detailed_relations(&input);
        assert_eq!(
            result,
            TypeRelations::Detailed {
                weak_to: vec!["fire".to_string(), "flying".to_string()],
                resistant_to: vec!["water".to_string()],
                immune_to: vec!["ground".to_string()],
            }
        );
    }

    #[test]
    fn test_dual_type_cancellation_is_not_emitted() {
        // 2 x 0.5 = 1: the attacking type lands in no bucket at all
        let first = relations(&["fire"], &[], &[], &[]);
        let second = relations(&[], &["fire"], &[], &[]);

        let result = detailed_relations(&[first, second]);
        assert_eq!(
            result,
            TypeRelations::Detailed {
                weak_to: vec![],
                resistant_to: vec![],
                immune_to: vec![],
            }
        );
    }

    #[test]
    fn test_dual_type_compounds_shared_weakness() {
        // 2 x 2 = 4: still a weakness
        let first = relations(&["rock"], &[], &[], &[]);
        let second = relations(&["rock"], &[], &[], &[]);

        let result = detailed_relations(&[first, second]);
        let TypeRelations::Detailed { weak_to, .. } = result else {
            panic!("expected detailed shape");
        };
        assert_eq!(weak_to, vec!["rock".to_string()]);
    }

    #[test]
    fn test_dual_type_immunity_dominates() {
        // 2 x 0 = 0: immunity wins over the other type's weakness
        let first = relations(&["ground"], &[], &[], &[]);
        let second = relations(&[], &[], &["ground"], &[]);

        let result = detailed_relations(&[first, second]);
        assert_eq!(
            result,
            TypeRelations::Detailed {
                weak_to: vec![],
                resistant_to: vec![],
                immune_to: vec!["ground".to_string()],
            }
        );
    }

    #[test]
    fn test_dual_type_symmetric_difference_passes_through() {
        let first = relations(&["ice"], &[], &[], &[]);
        let second = relations(&[], &["steel"], &[], &[]);

        let result = detailed_relations(&[first, second]);
        assert_eq!(
            result,
            TypeRelations::Detailed {
                weak_to: vec!["ice".to_string()],
                resistant_to: vec!["steel".to_string()],
                immune_to: vec![],
            }
        );
    }

    #[test]
    fn test_dual_type_half_and_half_stays_resistant() {
        // 0.5 x 0.5 = 0.25: still resistant
        let first = relations(&[], &["grass"], &[], &[]);
        let second = relations(&[], &["grass"], &[], &[]);

        let result = detailed_relations(&[first, second]);
        let TypeRelations::Detailed { resistant_to, .. } = result else {
            panic!("expected detailed shape");
        };
        assert_eq!(resistant_to, vec!["grass".to_string()]);
    }

    #[test]
    fn test_simple_variant_unions_across_types() {
        let first = relations(&["water"], &[], &[], &["grass", "bug"]);
        let second = relations(&["water", "rock"], &[], &[], &["bug", "fire"]);

        let result = simple_relations(&[first, second]);
        assert_eq!(
            result,
            TypeRelations::Simple {
                strong_against: vec![
                    "grass".to_string(),
                    "bug".to_string(),
                    "fire".to_string()
                ],
                weak_against: vec!["water".to_string(), "rock".to_string()],
            }
        );
    }

    #[test]
    fn test_no_types_yields_empty_sets() {
        let result = detailed_relations(&[]);
        assert_eq!(
            result,
            TypeRelations::Detailed {
                weak_to: vec![],
                resistant_to: vec![],
                immune_to: vec![],
            }
        );
    }
}
