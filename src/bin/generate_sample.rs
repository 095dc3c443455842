use std::f64::consts::PI;
use std::io::Write;

// Writes a small deterministic raw u8 waveform for trying the viewer:
//   cargo run --bin generate_sample && cargo run -- sample_wave.bin

fn main() {
    let sample_rate = 8000.0;
    let duration_secs = 1.0;
    let n = (sample_rate * duration_secs) as usize;

    // 440 Hz tone with a linear fade-out, centred on 128.
    let samples: Vec<u8> = (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let envelope = 1.0 - t / duration_secs;
            let value = (2.0 * PI * 440.0 * t).sin() * envelope;
            (128.0 + value * 127.0).round().clamp(0.0, 255.0) as u8
        })
        .collect();

    let output_path = "sample_wave.bin";
    let mut file = std::fs::File::create(output_path).expect("Failed to create output file");
    file.write_all(&samples).expect("Failed to write samples");

    println!("Wrote {n} samples to {output_path}");
}
