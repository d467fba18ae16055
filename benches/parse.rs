// benches/parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use quillshelf::catalog::{parse, parse_strict};

fn synthetic_catalog(rows: usize) -> String {
    let mut text = String::from("TITLE,DESCRIPTION,CATEGORY,COVER_LINK,AMAZON_LINK\n");
    for i in 0..rows {
        text.push_str(&format!(
            "Book {i},A short description for book {i},Category {},https://example.com/cover{i}.jpg,https://example.com/buy/{i}\n",
            i % 7
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_catalog(1_000);

    c.bench_function("parse_naive_1k", |b| {
        b.iter(|| {
            let set = parse(black_box(&text)).unwrap();
            black_box(set.len())
        })
    });

    c.bench_function("parse_strict_1k", |b| {
        b.iter(|| {
            let set = parse_strict(black_box(&text)).unwrap();
            black_box(set.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
