use rust_deck::{join, Deck, DeckRng};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        shuffling_full_deck,
        splitting_and_joining,
        dealing_four_hands,
        cutting_and_restacking,
}

fn fresh() -> Deck<u32> {
    (0..52).collect()
}

fn shuffling_full_deck(c: &mut criterion::Criterion) {
    let mut rng = DeckRng::new(42);
    let mut deck = fresh();
    c.bench_function("shuffle a 52-item Deck", |b| {
        b.iter(|| {
            deck.shuffle(&mut rng);
        })
    });
}

fn splitting_and_joining(c: &mut criterion::Criterion) {
    c.bench_function("split a 52-item Deck into 4 and join", |b| {
        b.iter_batched(
            fresh,
            |mut deck| join(deck.split(4).unwrap_or_default()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn dealing_four_hands(c: &mut criterion::Criterion) {
    c.bench_function("deal a 52-item Deck to 4 hands", |b| {
        b.iter_batched(
            fresh,
            |mut deck| deck.deal_hands(4, None).map(|hands| hands.len()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn cutting_and_restacking(c: &mut criterion::Criterion) {
    let mut deck = fresh();
    c.bench_function("cut 26 and restack", |b| {
        b.iter(|| {
            if let Ok(mut cut) = deck.cut(26) {
                deck.add_deck_to_bottom(&mut cut);
            }
        })
    });
}
