use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec3;
use tweenloop::{Animation, AnimationFrame, Easing, Seconds, Transform};

fn build_animation(clips: usize, easing: &Easing) -> Animation {
    let mut animation = Animation::new();
    for i in 0..clips {
        let x = i as f32;
        animation.add(
            AnimationFrame::new(
                Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
                Transform::new(Vec3::new(x + 1.0, 1.0, 0.0), Vec3::splat(2.0), 1.0),
                easing.clone(),
            ),
            Seconds::new(0.5),
        );
    }
    animation
}

fn bench_animation_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_update");
    let delta = Seconds::new(1.0 / 60.0);

    for (name, easing) in [
        ("linear", Easing::Linear),
        ("cubic_in_out", Easing::CubicInOut),
    ] {
        for clips in [1, 16, 256] {
            let mut animation = build_animation(clips, &easing);

            group.bench_function(format!("{name}_clips_{clips}"), |b| {
                b.iter(|| {
                    animation.update(black_box(delta)).ok();
                    black_box(animation.matrix().ok());
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_animation_update);
criterion_main!(benches);
