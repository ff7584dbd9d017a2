//! Tests for lexing from several threads at once.

mod common;
use common::*;

use std::sync::{Arc, Barrier};
use std::thread;

use oxide_sql_params::{lex, render};

#[test]
fn first_use_from_many_threads() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                CORPUS
                    .iter()
                    .map(|query| {
                        let tokens = lex(query);
                        assert_eq!(render(&tokens), *query);
                        tokens.len()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("lexing thread panicked"))
        .collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
