//! Renders a small grid of PAD corner emotions to WAV files.

use padvox::{render_to_wav, RenderParams};

fn main() {
    let emotions = [
        ("joy", 0.9, 0.7, 0.7),
        ("calm", 0.8, 0.2, 0.6),
        ("anger", 0.2, 0.9, 0.8),
        ("fear", 0.2, 0.8, 0.2),
        ("sadness", 0.2, 0.3, 0.3),
        ("neutral", 0.5, 0.5, 0.5),
    ];

    for (name, pleasure, arousal, dominance) in emotions {
        let params = RenderParams {
            pleasure,
            arousal,
            dominance,
            duration_seconds: 1.2,
            seed: 42,
        };

        match render_to_wav(&params) {
            Ok(wav) => {
                let path = format!("{name}.wav");
                wav.write_to_file(&path).expect("failed to write WAV");
                println!(
                    "{path}: {:.2} s, pcm hash {}",
                    wav.duration_seconds(),
                    &wav.pcm_hash[..16]
                );
            }
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
}
