//! Integration tests: the sequence laws, checked over a grid of
//! small models of every kind.

use urnkit_kernel::{Urn, UrnError, UrnKind, kind};

const KINDS: [UrnKind; 4] = [
    UrnKind::OrderedWithRepetition,
    UrnKind::OrderedWithoutRepetition,
    UrnKind::UnorderedWithRepetition,
    UrnKind::UnorderedWithoutRepetition,
];

/// Every constructible small model, across all four kinds.
fn small_models() -> Vec<Urn> {
    let mut models = Vec::new();
    for kind in KINDS {
        for n in 0..=4u32 {
            for k in 0..=3u32 {
                if let Ok(urn) = Urn::new(n, k, kind) {
                    models.push(urn);
                }
            }
        }
    }
    models
}

#[test]
fn unrank_and_stepping_are_mutually_consistent() {
    for urn in small_models() {
        for ordinal in 0..urn.count() as i64 - 1 {
            let here = urn.unrank(ordinal).unwrap();
            let there = urn.unrank(ordinal + 1).unwrap();
            assert_eq!(
                urn.successor(&here).unwrap(),
                there,
                "{} n={} k={} successor(unrank({ordinal}))",
                urn.kind(),
                urn.n(),
                urn.k()
            );
            assert_eq!(
                urn.predecessor(&there).unwrap(),
                here,
                "{} n={} k={} predecessor(unrank({}))",
                urn.kind(),
                urn.n(),
                urn.k(),
                ordinal + 1
            );
        }
    }
}

#[test]
fn first_and_last_bracket_the_sequence() {
    for urn in small_models() {
        if urn.count() == 0 {
            assert!(matches!(urn.first_draw(), Err(UrnError::OutOfRange { .. })));
            assert!(matches!(urn.last_draw(), Err(UrnError::OutOfRange { .. })));
            continue;
        }
        assert_eq!(urn.first_draw().unwrap(), urn.unrank(0).unwrap());
        assert_eq!(
            urn.last_draw().unwrap(),
            urn.unrank(urn.count() as i64 - 1).unwrap()
        );
    }
}

#[test]
fn every_unranked_draw_is_accepted() {
    for urn in small_models() {
        for ordinal in 0..urn.count() as i64 {
            let draw = urn.unrank(ordinal).unwrap();
            assert!(urn.is_accepted(&draw));
            if !urn.kind().repetition_allowed() {
                assert!(!kind::has_duplicate(&draw));
            }
            if !urn.kind().order_matters() {
                assert!(!kind::descends_somewhere(&draw));
            }
        }
    }
}

#[test]
fn iteration_agrees_with_unranking() {
    for urn in small_models() {
        let via_iter: Vec<_> = urn.iter().collect();
        let via_unrank: Vec<_> = (0..urn.count() as i64)
            .map(|i| urn.unrank(i).unwrap())
            .collect();
        assert_eq!(via_iter, via_unrank);
    }
}

#[test]
fn cursor_laws_hold() {
    for urn in small_models() {
        let begin = urn.begin();
        let end = urn.end();
        assert_eq!(end.distance(&begin), urn.count() as i64);
        if urn.count() > 0 {
            assert!(begin < end);
        } else {
            assert_eq!(begin, end);
        }
        for i in 0..urn.count() as i64 {
            assert_eq!(begin.at(i).unwrap(), begin.offset(i).draw().unwrap());
        }
    }
}

#[test]
fn reverse_traversal_mirrors_forward() {
    for urn in small_models() {
        let mut forward: Vec<_> = urn.iter().collect();
        let reversed: Vec<_> = urn.iter().rev().collect();
        forward.reverse();
        assert_eq!(forward, reversed);
    }
}
