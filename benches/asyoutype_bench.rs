use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rasyoutype::AsYouTypeFormatter;

type TestEntity = (&'static str, &'static str);

fn setup_inputs() -> Vec<TestEntity> {
    vec![
        ("6502532222", "US"),
        ("16502532222", "US"),
        ("011442083661177", "US"),
        ("+442083661177", "US"),
        ("02083661177", "GB"),
        ("0501234567", "IL"),
        ("+85291234567", "ZZ"),
    ]
}

fn keystroke_session_benchmark(c: &mut Criterion) {
    let inputs = setup_inputs();

    let mut group = c.benchmark_group("As-you-type formatting");

    group.bench_function("full keystroke sessions", |b| {
        b.iter(|| {
            for (keystrokes, region) in &inputs {
                let mut formatter = AsYouTypeFormatter::new(black_box(region));
                for next_char in keystrokes.chars() {
                    black_box(formatter.insert_character(black_box(next_char), false));
                }
            }
        })
    });

    group.bench_function("reused sessions with reset", |b| {
        let mut formatters: Vec<(&str, AsYouTypeFormatter)> = inputs
            .iter()
            .map(|(keystrokes, region)| (*keystrokes, AsYouTypeFormatter::new(region)))
            .collect();
        b.iter(|| {
            for (keystrokes, formatter) in formatters.iter_mut() {
                formatter.reset();
                for next_char in keystrokes.chars() {
                    black_box(formatter.insert_character(black_box(next_char), false));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, keystroke_session_benchmark);
criterion_main!(benches);
