// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the inbound color payload parser — the only
// wire format the bridge validates.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use drehwerk_core::types::SparkColor;

fn bench_color_parse(c: &mut Criterion) {
    c.bench_function("parse color payload (well-formed)", |b| {
        b.iter(|| {
            let color = black_box("0.91,0.34,0.08").parse::<SparkColor>();
            assert!(color.is_ok());
        });
    });

    c.bench_function("parse color payload (malformed)", |b| {
        b.iter(|| {
            let color = black_box("0.91,chartreuse,0.08").parse::<SparkColor>();
            assert!(color.is_err());
        });
    });
}

criterion_group!(benches, bench_color_parse);
criterion_main!(benches);
