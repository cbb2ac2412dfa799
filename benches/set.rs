/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use adts::Set;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn set_insert(c: &mut Criterion) {
    let limit = 1_000;

    c.bench_function("set insert", move |b| {
        b.iter(|| {
            let mut set: Set<usize> = Set::new();

            for i in 0..limit {
                set.insert(i);
            }

            set
        });
    });
}

fn set_union(c: &mut Criterion) {
    let limit = 1_000;
    let left: Set<usize> = (0..limit).collect();
    let right: Set<usize> = (limit / 2..limit + limit / 2).collect();

    c.bench_function("set union", move |b| {
        b.iter(|| black_box(left.union(&right)));
    });
}

fn set_intersection(c: &mut Criterion) {
    let limit = 1_000;
    let left: Set<usize> = (0..limit).collect();
    let right: Set<usize> = (limit / 2..limit + limit / 2).collect();

    c.bench_function("set intersection", move |b| {
        b.iter(|| black_box(left.intersection(&right)));
    });
}

criterion_group!(benches, set_insert, set_union, set_intersection);
criterion_main!(benches);
