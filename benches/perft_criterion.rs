use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_core::game_state::game_state::GameState;
use chess_core::move_generation::legal_move_apply::apply_move;
use chess_core::move_generation::perft::perft_legal;
use chess_core::utils::move_notation::simplified_to_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    line: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        line: "",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "after_e4",
        line: "e4",
        expected_nodes: &[20, 600],
    },
];

fn play_line(line: &str) -> GameState {
    let mut game = GameState::new_game();
    for token in line.split_whitespace() {
        let mv = simplified_to_move(&game, token).expect("benchmark line should resolve");
        game = apply_move(&game, mv).expect("benchmark line should apply");
    }
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = play_line(case.line);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft_legal(&game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
