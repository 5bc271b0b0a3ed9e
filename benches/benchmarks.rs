criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        encoding_move_window,
        predicting_with_network,
        training_single_step,
        playing_full_round,
        learning_cycle_adversary,
}

use neuralhand::*;

fn window() -> Features {
    Features::from([
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Rock,
        Move::Paper,
    ])
}

fn encoding_move_window(c: &mut criterion::Criterion) {
    let moves = (0..WINDOW_SIZE).map(|_| Move::random()).collect::<Vec<_>>();
    c.bench_function("encode a 5-move window", |b| {
        b.iter(|| Features::from(moves.as_slice()))
    });
}

fn predicting_with_network(c: &mut criterion::Criterion) {
    let network = Network::new(0);
    let features = window();
    c.bench_function("predict a Distribution", |b| {
        b.iter(|| network.predict(&features))
    });
}

fn training_single_step(c: &mut criterion::Criterion) {
    let mut network = Network::new(0);
    let features = window();
    let target = indicator(Move::Scissors);
    c.bench_function("train one Adam step", |b| {
        b.iter(|| network.train(&features, &target))
    });
}

fn playing_full_round(c: &mut criterion::Criterion) {
    let mut predictor = Predictor::new(0);
    let mut adversary = Adversary::new(Pattern::Random, 0);
    for m in adversary.by_ref().take(2 * WINDOW_SIZE) {
        let _ = predictor.record_move_and_train(m);
    }
    c.bench_function("predict and record one round", |b| {
        b.iter(|| {
            let agent = predictor.predict_counter_move();
            let _ = predictor.record_move_and_train(adversary.play());
            agent
        })
    });
}

fn learning_cycle_adversary(c: &mut criterion::Criterion) {
    c.bench_function("learn 100 rounds of a cycling adversary", |b| {
        b.iter(|| {
            let mut predictor = Predictor::new(0);
            Adversary::new(Pattern::Cycle, 0)
                .take(100)
                .map(|m| predictor.record_move_and_train(m))
                .filter(Training::is_applied)
                .count()
        })
    });
}
