//! Property tests for pagination invariants

use msgpage_core::marker::{digit_count, parse_marker, strip_marker};
use msgpage_core::{paginate, reassemble, Numbering, Paginator, PaginatorConfig};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9éü🎉.,!?]{1,12}"
}

fn message_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec(word_strategy(), 0..60),
        prop_oneof![Just(" "), Just("\n"), Just("  "), Just("\t \n")],
    )
        .prop_map(|(words, sep)| {
            let message = format!("{sep}{}{sep}", words.join(sep));
            (words, message)
        })
}

fn exact_paginator(max_length: usize) -> Paginator {
    Paginator::new(
        PaginatorConfig::builder()
            .max_length(max_length)
            .numbering(Numbering::Exact)
            .build()
            .unwrap(),
    )
}

fn recovered_words(chunks: &[String]) -> Vec<String> {
    chunks
        .iter()
        .flat_map(|c| strip_marker(c).split_whitespace())
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn words_survive_pagination((words, message) in message_strategy(), max in 8usize..200) {
        let chunks = paginate(&message, max);
        prop_assert_eq!(recovered_words(&chunks), words);
    }

    #[test]
    fn markers_run_from_one_to_total((_words, message) in message_strategy(), max in 8usize..200) {
        let chunks = paginate(&message, max);
        if chunks.len() > 1 {
            let total = chunks.len();
            for (i, chunk) in chunks.iter().enumerate() {
                let (marker, _) = parse_marker(chunk).expect("multi-part chunk has a marker");
                prop_assert_eq!(marker.index, i + 1);
                prop_assert_eq!(marker.total, total);
            }
        }
    }

    #[test]
    fn short_messages_stay_whole((words, message) in message_strategy()) {
        let normalized = words.join(" ");
        let chunks = paginate(&message, normalized.len().max(1));
        if words.is_empty() {
            prop_assert!(chunks.is_empty());
        } else {
            prop_assert_eq!(chunks, vec![normalized]);
        }
    }

    #[test]
    fn single_chunk_output_is_idempotent((_words, message) in message_strategy(), max in 8usize..200) {
        let chunks = paginate(&message, max);
        if chunks.len() == 1 && parse_marker(&chunks[0]).is_none() {
            prop_assert_eq!(paginate(&chunks[0], max), chunks);
        }
    }

    #[test]
    fn exact_numbering_respects_capacity((words, message) in message_strategy(), max in 8usize..200) {
        let chunks = exact_paginator(max).paginate(&message).unwrap();
        for chunk in &chunks {
            let single_word = !strip_marker(chunk).contains(' ');
            prop_assert!(chunk.len() <= max || single_word, "{:?} exceeds {}", chunk, max);
        }
        prop_assert_eq!(recovered_words(&chunks), words);
    }

    #[test]
    fn placeholder_slack_is_bounded((_words, message) in message_strategy(), max in 8usize..200) {
        let chunks = paginate(&message, max);
        let slack = digit_count(chunks.len()).saturating_sub(2);
        for chunk in &chunks {
            let single_word = !strip_marker(chunk).contains(' ');
            prop_assert!(chunk.len() <= max + slack || single_word);
        }
    }

    #[test]
    fn shuffled_chunks_reassemble((words, message) in message_strategy(), max in 8usize..200, seed in any::<u64>()) {
        prop_assume!(!words.is_empty());
        let mut chunks = paginate(&message, max);
        let len = chunks.len();
        chunks.rotate_left((seed as usize) % len);
        chunks.reverse();
        prop_assert_eq!(reassemble(&chunks).unwrap(), words.join(" "));
    }
}
