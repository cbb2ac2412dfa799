/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use adts::{Dictionary, HashTable};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn dictionary_put(c: &mut Criterion) {
    let limit = 1_000;

    c.bench_function("dictionary put", move |b| {
        b.iter(|| {
            let mut dictionary: Dictionary<usize> = Dictionary::new();

            for i in 0..limit {
                let _ = dictionary.put(format!("key-{}", i), i);
            }

            dictionary
        });
    });
}

fn dictionary_get(c: &mut Criterion) {
    let limit = 1_000;
    let mut dictionary: Dictionary<usize> = Dictionary::new();

    for i in 0..limit {
        let _ = dictionary.put(format!("key-{}", i), i);
    }

    c.bench_function("dictionary get", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(dictionary.get(&format!("key-{}", i)));
            }
        });
    });
}

fn hash_table_get(c: &mut Criterion) {
    let limit = 1_000;
    let mut table: HashTable<usize> = HashTable::new();

    for i in 0..limit {
        let _ = table.put(format!("key-{}", i), i);
    }

    c.bench_function("hash table get", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(table.get(&format!("key-{}", i)));
            }
        });
    });
}

criterion_group!(benches, dictionary_put, dictionary_get, hash_table_get);
criterion_main!(benches);
