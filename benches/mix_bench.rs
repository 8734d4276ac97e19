//! Mix Render Performance Benchmark
//!
//! Measures offline render and WAV encode throughput on a synthetic
//! 30-second timeline. Both stages should run far faster than realtime;
//! the render is the pipeline's only CPU-heavy section.

use canticle::audio::{PcmBuffer, RENDER_SAMPLE_RATE};
use canticle::mix::renderer;
use canticle::mix::timeline::MixTimeline;
use canticle::mix::wav::encode_wav;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sine_buffer(seconds: usize, frequency_hz: f32, amplitude: f32) -> PcmBuffer {
    let frames = RENDER_SAMPLE_RATE as usize * seconds;
    let mut samples = Vec::with_capacity(frames * 2);
    for frame in 0..frames {
        let t = frame as f32 / RENDER_SAMPLE_RATE as f32;
        let value = (2.0 * std::f32::consts::PI * frequency_hz * t).sin() * amplitude;
        samples.push(value);
        samples.push(value);
    }
    PcmBuffer::new(samples, RENDER_SAMPLE_RATE).expect("valid buffer")
}

fn bench_offline_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix_render");

    // 10s music bed under 3 segments of ~9s each + gaps: ~30s total
    let music = sine_buffer(10, 220.0, 0.8);
    let speech = vec![
        sine_buffer(9, 440.0, 0.5),
        sine_buffer(9, 550.0, 0.5),
        sine_buffer(9, 660.0, 0.5),
    ];
    let timeline = MixTimeline::plan(music, speech, 1.0, 0.15).expect("valid plan");

    group.bench_function("render_30s_timeline", |b| {
        b.iter(|| {
            let mix = renderer::render(black_box(&timeline));
            black_box(mix);
        });
    });

    group.finish();
}

fn bench_wav_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix_encode");

    let music = sine_buffer(10, 220.0, 0.8);
    let speech = vec![sine_buffer(19, 440.0, 0.5)];
    let timeline = MixTimeline::plan(music, speech, 1.0, 0.15).expect("valid plan");
    let mix = renderer::render(&timeline);

    group.bench_function("encode_20s_wav", |b| {
        b.iter(|| {
            let blob = encode_wav(black_box(mix.samples()), mix.sample_rate(), 2);
            black_box(blob);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_offline_render, bench_wav_encode);
criterion_main!(benches);
