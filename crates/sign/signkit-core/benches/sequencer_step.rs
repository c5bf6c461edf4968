use criterion::{black_box, criterion_group, criterion_main, Criterion};

use signkit_core::{AvatarSession, HeadlessSurface, SequencerConfig, Skeleton};
use signkit_test_fixtures::rigs;

fn spell_sentence(c: &mut Criterion) {
    let rig = Skeleton::from_json(&rigs::json("ybot").expect("ybot fixture")).expect("ybot rig");

    c.bench_function("spell_sentence_to_idle", |b| {
        b.iter(|| {
            let mut session = AvatarSession::new(
                rig.clone(),
                HeadlessSurface::default(),
                SequencerConfig::new(0.1, 0.0),
            )
            .expect("session");
            session.compile_text(black_box("time you bridgely"), true);
            let mut ticks = 0u32;
            while session.step(1.0 / 60.0).keep_ticking {
                ticks += 1;
            }
            black_box(ticks)
        })
    });
}

criterion_group!(benches, spell_sentence);
criterion_main!(benches);
