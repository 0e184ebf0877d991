use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bingo_cards::core::{assemble, rng::seeded};
use bingo_cards::term::{wrap, CardView};

fn pool(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("Someone mentions item number {} again", i))
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let pool = pool(100);
    let mut rng = seeded(12345);

    c.bench_function("assemble_5x5_free", |b| {
        b.iter(|| assemble(black_box(&pool), 5, true, &mut rng))
    });
}

fn bench_wrap(c: &mut Criterion) {
    let grid = assemble(&pool(100), 5, true, &mut seeded(7)).unwrap();
    let matrix = CardView::output().matrix(&grid);

    c.bench_function("wrap_5x5", |b| b.iter(|| wrap(black_box(&matrix))));
}

fn bench_render(c: &mut Criterion) {
    let grid = assemble(&pool(100), 5, true, &mut seeded(7)).unwrap();
    let view = CardView::print();

    c.bench_function("render_5x5", |b| b.iter(|| view.render(black_box(&grid))));
    c.bench_function("render_5x5_ascii", |b| {
        let ascii = view.with_ascii(true);
        b.iter(|| ascii.render(black_box(&grid)))
    });
}

criterion_group!(benches, bench_assemble, bench_wrap, bench_render);
criterion_main!(benches);
