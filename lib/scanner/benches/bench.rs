use criterion::{criterion_group, criterion_main, Criterion};
use scanner::TokenStream;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("scan mixed source", |b| {
        b.iter(|| {
            let source = r#"
                var greeting = "hello" + ", " + "world";
                // numbers in every shape the scanner accepts
                var n = 1 + 123.45 - 12.;
                if (n <= 200) { print greeting; } else { print nil; }
            "#;
            TokenStream::new(source).count()
        })
    });

    c.bench_function("scan comment heavy source", |b| {
        let source = "// line\n".repeat(1024) + "fun done() {}";
        b.iter(|| TokenStream::new(&source).count())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
