use crate::core::models::edge::Edge;
use tracing::{info, instrument};

/// Collapses one order's edge list so every undirected pair survives exactly once,
/// preserving the input order of the surviving records.
#[instrument(skip_all, name = "duplicate_canonicalization_task")]
pub fn run(edges: Vec<Edge>) -> Vec<Edge> {
    let num_raw = edges.len();
    let marks = mark_duplicates(&edges);
    let survivors = eliminate(&edges, &marks);

    info!(
        num_raw = num_raw,
        num_canonical = survivors.len(),
        "Collapsed duplicate edge records."
    );

    survivors
}

/// Marks the records canonicalization will drop, without touching the list.
///
/// Two passes, both reading marks made earlier in the same traversal:
/// 1. Mirror pass, outer index ascending: edge `i` is marked when any still-unmarked
///    edge covers the same pair in the opposite direction. Of a mirrored pair the
///    earlier record is marked and the later one survives; a self-edge mirrors
///    itself and is always marked, which is what removes the transient self
///    candidates of the order-3 expansion.
/// 2. Same-direction pass: for each surviving edge `i`, every later unmarked record
///    with identical (source, target) is marked, so the first occurrence wins and
///    keeps its multiplicity.
pub fn mark_duplicates(edges: &[Edge]) -> Vec<bool> {
    let mut marks = vec![false; edges.len()];

    for i in 0..edges.len() {
        if (0..edges.len()).any(|j| !marks[j] && edges[j].is_mirror_of(&edges[i])) {
            marks[i] = true;
        }
    }

    for i in 0..edges.len() {
        if marks[i] {
            continue;
        }
        for j in (i + 1)..edges.len() {
            if !marks[j] && edges[j].same_direction_as(&edges[i]) {
                marks[j] = true;
            }
        }
    }

    marks
}

/// Removes the marked records, keeping the survivors in their original order.
pub fn eliminate(edges: &[Edge], marks: &[bool]) -> Vec<Edge> {
    edges
        .iter()
        .zip(marks)
        .filter(|&(_, &marked)| !marked)
        .map(|(edge, _)| *edge)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;
    use crate::core::models::ids::AtomId;
    use slotmap::KeyData;

    fn key(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn edge(source: u64, target: u64) -> Edge {
        Edge::derived(key(source), key(target), BondOrder::Secondary)
    }

    fn pairs(edges: &[Edge]) -> Vec<(AtomId, AtomId)> {
        edges.iter().map(|e| (e.source, e.target)).collect()
    }

    mod marking {
        use super::*;

        #[test]
        fn mirrored_pair_marks_the_earlier_record() {
            let edges = vec![edge(1, 2), edge(2, 1)];
            assert_eq!(mark_duplicates(&edges), vec![true, false]);
        }

        #[test]
        fn self_edge_marks_itself() {
            let edges = vec![edge(1, 1), edge(1, 2)];
            assert_eq!(mark_duplicates(&edges), vec![true, false]);
        }

        #[test]
        fn same_direction_duplicates_keep_the_first_record() {
            let edges = vec![edge(1, 2), edge(1, 2), edge(3, 4)];
            assert_eq!(mark_duplicates(&edges), vec![false, true, false]);
        }

        #[test]
        fn mirrors_interleaved_with_repeats_leave_exactly_one_record() {
            // Pass 1 marks both (1,2) records against the unmarked mirror; the
            // mirror itself survives, and pass 2 finds nothing left to compare.
            let edges = vec![edge(1, 2), edge(2, 1), edge(1, 2)];
            assert_eq!(mark_duplicates(&edges), vec![true, true, false]);
        }

        #[test]
        fn distinct_pairs_are_never_marked() {
            let edges = vec![edge(1, 2), edge(2, 3), edge(3, 1)];
            assert_eq!(mark_duplicates(&edges), vec![false, false, false]);
        }

        #[test]
        fn empty_list_yields_no_marks() {
            assert!(mark_duplicates(&[]).is_empty());
        }
    }

    mod elimination {
        use super::*;

        #[test]
        fn removes_exactly_the_marked_records() {
            let edges = vec![edge(1, 2), edge(2, 1)];
            let survivors = eliminate(&edges, &[false, true]);
            assert_eq!(pairs(&survivors), vec![(key(1), key(2))]);
        }

        #[test]
        fn preserves_the_input_order_of_survivors() {
            let edges = vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(4, 5)];
            let survivors = eliminate(&edges, &[false, true, false, false]);
            assert_eq!(
                pairs(&survivors),
                vec![(key(1), key(2)), (key(3), key(4)), (key(4), key(5))]
            );
        }

        #[test]
        fn unmarked_list_passes_through() {
            let edges = vec![edge(1, 2), edge(2, 3)];
            let survivors = eliminate(&edges, &[false, false]);
            assert_eq!(survivors, edges);
        }
    }

    mod full_pass {
        use super::*;

        #[test]
        fn mirrored_records_collapse_to_the_later_one() {
            // Materialized derived lists carry every pair once per traversal
            // direction; the canonical set keeps one record per pair.
            let edges = vec![edge(1, 3), edge(3, 1)];
            let survivors = run(edges);
            assert_eq!(pairs(&survivors), vec![(key(3), key(1))]);
        }

        #[test]
        fn self_edges_vanish_entirely() {
            let edges = vec![edge(1, 1), edge(1, 1), edge(2, 2)];
            assert!(run(edges).is_empty());
        }

        #[test]
        fn surviving_pairs_keep_their_relative_order() {
            let edges = vec![
                edge(1, 3),
                edge(2, 4),
                edge(3, 1),
                edge(4, 2),
                edge(5, 6),
            ];
            let survivors = run(edges);
            assert_eq!(
                pairs(&survivors),
                vec![(key(3), key(1)), (key(4), key(2)), (key(5), key(6))]
            );
        }

        #[test]
        fn canonical_set_has_one_record_per_undirected_pair() {
            let edges = vec![
                edge(1, 2),
                edge(1, 2),
                edge(2, 1),
                edge(2, 1),
                edge(2, 3),
                edge(3, 2),
            ];
            let survivors = run(edges);

            assert_eq!(survivors.len(), 2);
            let mut normalized: Vec<(AtomId, AtomId)> = survivors
                .iter()
                .map(|e| {
                    if e.source < e.target {
                        (e.source, e.target)
                    } else {
                        (e.target, e.source)
                    }
                })
                .collect();
            normalized.sort();
            normalized.dedup();
            assert_eq!(normalized.len(), 2);
        }

        #[test]
        fn first_same_direction_record_keeps_its_multiplicity() {
            let mut first = Edge::new(key(1), key(2), BondOrder::Primary, 2.0);
            first.distance = 1.2;
            let second = Edge::new(key(1), key(2), BondOrder::Primary, 3.0);

            let survivors = run(vec![first, second]);

            assert_eq!(survivors.len(), 1);
            assert_eq!(survivors[0].multiplicity, 2.0);
        }
    }
}
