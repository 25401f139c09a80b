#![forbid(unsafe_code)]

//! Demo driver for the listmorph reconciliation engine.
//!
//! Runs two fixed scenarios plus a seeded randomized stress pair and
//! prints one line per emitted operation. Set `LISTMORPH_SEED` to replay
//! a randomized run.

use listmorph::{Element, Key, compute_diff};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

fn clean(keys: &[i64]) -> Vec<Element> {
    keys.iter().map(|&k| Element::clean(Key::new(k))).collect()
}

fn print_ops(label: &str, before: &[Element], after: &[Element]) {
    println!("== {label} ==");
    for op in compute_diff(before, after) {
        println!("{op}");
    }
    println!();
}

/// Strictly increasing random keys, so each collection is duplicate-free.
fn random_keys(rng: &mut SmallRng, len: usize, start: i64, max_step: i64) -> Vec<i64> {
    let mut keys = Vec::with_capacity(len);
    let mut key = start;
    for _ in 0..len {
        keys.push(key);
        key += rng.random_range(1..=max_step);
    }
    keys
}

fn main() {
    // Shrink to a dirty survivor and two fresh keys.
    let before = clean(&[0, 1, 2, 3, 4, 5]);
    let after = vec![
        Element::dirty(Key::new(5)),
        Element::clean(Key::new(6)),
        Element::clean(Key::new(7)),
    ];
    print_ops("shrink with surviving tail", &before, &after);

    // Prepend two fresh keys, reorder and dirty part of the survivors.
    let before = clean(&[0, 1, 2, 3, 4, 5]);
    let after = vec![
        Element::clean(Key::new(6)),
        Element::clean(Key::new(7)),
        Element::dirty(Key::new(5)),
        Element::dirty(Key::new(3)),
        Element::clean(Key::new(4)),
    ];
    print_ops("grow with moves and updates", &before, &after);

    // Randomized stress pair, reproducible via LISTMORPH_SEED.
    let seed = std::env::var("LISTMORPH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    println!("seed: {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let before_start = rng.random_range(0..7);
    let before: Vec<Element> = random_keys(&mut rng, 500, before_start, 7)
        .into_iter()
        .map(|k| Element::clean(Key::new(k)))
        .collect();
    let after_start = rng.random_range(10..15);
    let after: Vec<Element> = random_keys(&mut rng, 100, after_start, 5)
        .into_iter()
        .map(|k| Element {
            key: Key::new(k),
            dirty: k % 2 == 1,
        })
        .collect();
    print_ops("randomized stress", &before, &after);
}
