//! Query evaluation against one index generation
//!
//! Every query word is matched on its own:
//!
//! 1. Indexed words sharing q-grams with the query word collect a gram
//!    overlap score. A gram contributes the smaller of its two occurrence
//!    counts, so one repeated gram cannot dominate.
//! 2. Candidates failing the prefix edit-distance check are dropped.
//! 3. Each surviving word adds its overlap score to every item containing it.
//!
//! Items must then match every query word; their weights are summed and the
//! result is sorted by weight, heaviest first, ties in corpus order.

use ahash::AHashMap;
use tracing::debug;

use super::distance::is_prefix_match;
use crate::index::{IndexGeneration, ItemId, WordId};
use crate::qgram::gram_counts;
use crate::tokenize::tokenize;

/// Per-word match weights: item → accumulated gram overlap
type Weights = AHashMap<ItemId, u32>;

/// Ranked `(item, weight)` pairs for `text`.
pub(crate) fn rank<T>(index: &IndexGeneration<T>, text: &str) -> Vec<(ItemId, u32)> {
    let words = tokenize(text);
    if words.is_empty() || index.is_empty() {
        return Vec::new();
    }

    let per_word: Vec<Weights> = words.iter().map(|word| match_word(index, word)).collect();

    let mut ranked = intersect(&per_word);
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    debug!(
        words = words.len(),
        results = ranked.len(),
        generation = index.generation(),
        "query evaluated"
    );

    ranked
}

/// Items matched by a single query word.
fn match_word<T>(index: &IndexGeneration<T>, word: &str) -> Weights {
    let config = index.config();
    let delta = config.delta.delta_for(word.chars().count());

    let mut candidates: AHashMap<WordId, u32> = AHashMap::new();
    for (gram, count) in gram_counts(word, config.q) {
        for &(candidate, indexed) in index.grams().postings(&gram) {
            *candidates.entry(candidate).or_insert(0) += count.min(indexed);
        }
    }

    let mut weights = Weights::new();
    for (candidate, overlap) in candidates {
        if overlap == 0 || !is_prefix_match(word, index.inverted().word(candidate), delta) {
            continue;
        }
        for &item in index.inverted().items(candidate) {
            let weight = weights.entry(item).or_insert(0);
            *weight = weight.saturating_add(overlap);
        }
    }
    weights
}

/// Items present in every per-word map, with summed weights.
fn intersect(per_word: &[Weights]) -> Vec<(ItemId, u32)> {
    if let [only] = per_word {
        return only.iter().map(|(&item, &weight)| (item, weight)).collect();
    }

    let Some((smallest, seed)) = per_word.iter().enumerate().min_by_key(|(_, w)| w.len()) else {
        return Vec::new();
    };

    seed.iter()
        .filter_map(|(&item, &weight)| {
            per_word
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != smallest)
                .try_fold(weight, |total, (_, other)| {
                    other.get(&item).map(|w| total.saturating_add(*w))
                })
                .map(|total| (item, total))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeltaPolicy, EngineConfig};
    use std::sync::Arc;

    fn build(titles: &[&str], config: EngineConfig) -> IndexGeneration<String> {
        let items = titles.iter().map(|t| Arc::new(t.to_string())).collect();
        IndexGeneration::build(items, config, 1)
    }

    fn weights(pairs: &[(ItemId, u32)]) -> Weights {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_overlap_scores() {
        let index = build(&["Calculator", "Calendar"], EngineConfig::default());
        // "  c", " ca", "cal", "alc"
        assert_eq!(rank(&index, "calc"), vec![(0, 4), (1, 3)]);
    }

    #[test]
    fn test_overlap_is_capped_by_rarer_count() {
        let index = build(&["ana", "banana"], EngineConfig::new().with_q(2));
        // query "anana": " a", "an", "na", "an", "na" -> an x2, na x2
        // "ana" holds " a", "an", "na" once each: overlap 3
        // "banana" holds " b", "ba", "an" x2, "na" x2: overlap 4
        let ranked = rank(&index, "anana");
        let banana = ranked.iter().find(|(item, _)| *item == 1);
        assert_eq!(banana, Some(&(1, 4)));
    }

    #[test]
    fn test_edit_distance_filter_rejects() {
        let config = EngineConfig::new().with_delta(DeltaPolicy::Fixed(0));
        let index = build(&["Calculator", "Calendar"], config);
        assert_eq!(rank(&index, "calc"), vec![(0, 4)]);
    }

    #[test]
    fn test_divisor_policy() {
        let config = EngineConfig::new().with_delta(DeltaPolicy::Divisor(4));
        let index = build(&["Firefox"], config);
        // "firfox" has 6 chars -> delta 1
        assert_eq!(rank(&index, "firfox").len(), 1);
        // "fx" has 2 chars -> delta 0, and "fx" is no prefix of "firefox"
        assert!(rank(&index, "fx").is_empty());
    }

    #[test]
    fn test_no_gram_overlap() {
        let index = build(&["Calculator", "Calendar"], EngineConfig::default());
        assert!(rank(&index, "xyz").is_empty());
    }

    #[test]
    fn test_empty_query_and_corpus() {
        let index = build(&["Calculator"], EngineConfig::default());
        assert!(rank(&index, "").is_empty());
        assert!(rank(&index, "  ,.; ").is_empty());

        let empty = build(&[], EngineConfig::default());
        assert!(rank(&empty, "calc").is_empty());
    }

    #[test]
    fn test_intersect_single_map_passes_through() {
        let mut result = intersect(&[weights(&[(3, 5), (1, 2)])]);
        result.sort_unstable();
        assert_eq!(result, vec![(1, 2), (3, 5)]);
    }

    #[test]
    fn test_intersect_requires_every_map() {
        let maps = [
            weights(&[(1, 2), (2, 3), (3, 1)]),
            weights(&[(2, 4), (3, 1)]),
            weights(&[(2, 1), (4, 9)]),
        ];
        assert_eq!(intersect(&maps), vec![(2, 8)]);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let maps = [weights(&[(1, 2)]), weights(&[(2, 2)])];
        assert!(intersect(&maps).is_empty());
        assert!(intersect(&[]).is_empty());
    }

    #[test]
    fn test_ties_follow_corpus_order() {
        let index = build(&["Terminal", "Terminal", "Terminal"], EngineConfig::default());
        let ranked = rank(&index, "term");
        assert_eq!(ranked.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
