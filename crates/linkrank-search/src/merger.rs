//! Combining relevance and authority into one ranking

use linkrank_corpus::DocumentId;
use linkrank_engine::ScoreTable;

/// One entry of the final ranked output. Ephemeral, produced only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub doc_id: DocumentId,
    /// `relevance + pagerank_weight * authority`
    pub score: f64,
}

/// Merge an externally produced relevance ranking with authority scores.
///
/// The input is the retrieval engine's candidate list (already its top
/// matches, not a corpus rescan) and is consumed incrementally, but the
/// result must be fully materialized: the final order depends on the
/// combined score, not the input order. Documents absent from the authority
/// table contribute 0.0 — not an error.
///
/// The sort is stable and descending, so entries with equal combined scores
/// keep their relevance order. At most `top_k` entries come back; fewer
/// inputs mean a shorter list, never padding.
pub fn merge(
    relevance_ranked: impl IntoIterator<Item = (DocumentId, f64)>,
    authority: &ScoreTable,
    top_k: usize,
    pagerank_weight: f64,
) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = relevance_ranked
        .into_iter()
        .map(|(doc_id, relevance)| RankedEntry {
            doc_id,
            score: relevance + pagerank_weight * authority.get(doc_id),
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(top_k);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(DocumentId, f64)]) -> ScoreTable {
        pairs.iter().copied().collect()
    }

    #[test]
    fn weight_can_flip_the_relevance_order() {
        let authority = table(&[(10, 2.0), (11, 8.0)]);
        let ranked = merge([(10, 0.9), (11, 0.5)], &authority, 2, 0.1);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], RankedEntry { doc_id: 11, score: 1.3 });
        assert_eq!(ranked[1], RankedEntry { doc_id: 10, score: 1.1 });
    }

    #[test]
    fn truncates_to_top_k() {
        let authority = ScoreTable::default();
        let ranked = merge([(1, 3.0), (2, 2.0), (3, 1.0)], &authority, 2, 1.0);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].doc_id, 1);
        assert_eq!(ranked[1].doc_id, 2);
    }

    #[test]
    fn short_input_comes_back_whole() {
        let ranked = merge([(1, 1.0)], &ScoreTable::default(), 10, 1.0);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge(std::iter::empty(), &ScoreTable::default(), 5, 1.0).is_empty());
    }

    #[test]
    fn ties_keep_relevance_order() {
        let ranked = merge(
            [(7, 1.0), (3, 1.0), (9, 1.0)],
            &ScoreTable::default(),
            3,
            1.0,
        );
        let ids: Vec<_> = ranked.iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![7, 3, 9]);
    }

    #[test]
    fn unknown_documents_get_zero_authority() {
        let authority = table(&[(1, 5.0)]);
        let ranked = merge([(1, 0.1), (2, 0.1)], &authority, 2, 1.0);
        assert_eq!(ranked[0].doc_id, 1);
        assert_eq!(ranked[1].score, 0.1);
    }

    #[test]
    fn raising_the_weight_never_demotes_higher_authority() {
        let authority = table(&[(1, 4.0), (2, 1.0)]);
        let relevance = [(2, 0.8), (1, 0.5)];
        for weight in [0.0, 0.1, 0.5, 1.0, 2.0] {
            let ranked = merge(relevance, &authority, 2, weight);
            let pos_1 = ranked.iter().position(|e| e.doc_id == 1).unwrap();
            let pos_2 = ranked.iter().position(|e| e.doc_id == 2).unwrap();
            // Once doc 1 overtakes doc 2 it stays ahead at every larger
            // weight; with weight 0.1 doc 2 still leads on relevance.
            if weight >= 0.5 {
                assert!(pos_1 < pos_2, "weight {weight} should rank doc 1 first");
            } else if weight == 0.0 {
                assert!(pos_2 < pos_1);
            }
        }
    }

    #[test]
    fn output_is_fully_sorted_descending() {
        let authority = table(&[(1, 3.0), (2, 0.5), (3, 2.0), (4, 0.0)]);
        let ranked = merge(
            [(1, 0.2), (2, 0.9), (3, 0.1), (4, 1.5)],
            &authority,
            4,
            1.0,
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
