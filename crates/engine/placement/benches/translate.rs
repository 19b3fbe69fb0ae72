//! Drag translator benchmark
//!
//! The translation runs once per pointer move event; this keeps an eye on
//! its cost staying trivial.

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2};
use std::hint::black_box;
use placement::{CameraFrame, DragConfig, DragTranslator};

fn bench_translate(c: &mut Criterion) {
    let translator = DragTranslator::new(DragConfig::default());
    let frame = CameraFrame::from_rotation(Quat::from_rotation_y(0.7));

    c.bench_function("translate_single_step", |b| {
        b.iter(|| translator.translate(black_box(Vec2::new(12.0, -7.0)), black_box(&frame)))
    });

    c.bench_function("translate_move_burst", |b| {
        b.iter(|| {
            let mut acc = glam::Vec3::ZERO;
            for i in 0..120 {
                let delta = Vec2::new(i as f32 * 0.5, -(i as f32) * 0.25);
                acc += translator.translate(black_box(delta), black_box(&frame));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
