//! Deterministic WAV encoding.
//!
//! The persisted form of a vocalization is a 16-bit PCM mono WAV at the
//! render sample rate, written with no timestamps or variable metadata so
//! that identical buffers produce identical files. Samples are peak
//! normalized before quantization; the BLAKE3 hash of the PCM data serves as
//! a compact determinism check.

use std::io::{self, Write};
use std::path::Path;

use crate::error::SynthResult;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1 for vocalizations).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Peak-normalizes samples in place: divides by the maximum absolute value.
///
/// A silent buffer is left untouched, and re-normalizing an already
/// normalized buffer is a no-op.
pub fn normalize_peak(samples: &mut [f64]) {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
    if peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= peak;
        }
    }
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected in [-1.0, 1.0]; values outside are clipped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Decodes 16-bit PCM bytes back to f64 samples.
///
/// Inverse of [`samples_to_pcm16`] up to quantization error (±1/32767).
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f64> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / 32767.0)
        .collect()
}

/// Result of encoding a vocalization to WAV.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples: peak normalization, then 16-bit quantization.
    pub fn from_samples(samples: &[f64], sample_rate: u32) -> Self {
        let mut normalized = samples.to_vec();
        normalize_peak(&mut normalized);

        let pcm = samples_to_pcm16(&normalized);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV file to disk.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> SynthResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_format() {
        let mono = WavFormat::mono(44_100);
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.sample_rate, 44_100);
        assert_eq!(mono.byte_rate(), 88_200);
        assert_eq!(mono.block_align(), 2);
    }

    #[test]
    fn test_samples_to_pcm16() {
        let samples = vec![0.0, 1.0, -1.0, 0.5, -0.5];
        let pcm = samples_to_pcm16(&samples);

        assert_eq!(pcm.len(), 10); // 5 samples * 2 bytes
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
    }

    #[test]
    fn test_clipping() {
        let samples = vec![2.0, -2.0]; // Out of range
        let pcm = samples_to_pcm16(&samples);

        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
    }

    #[test]
    fn test_wav_header_layout() {
        let result = WavResult::from_samples(&vec![0.1; 100], 44_100);
        let wav = &result.wav_data;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // 100 samples * 2 bytes
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 200);

        let channels = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(channels, 1);
    }

    #[test]
    fn test_normalize_peak_scales_to_unit() {
        let mut samples = vec![0.25, -0.5, 0.1];
        normalize_peak(&mut samples);
        assert_eq!(samples, vec![0.5, -1.0, 0.2]);
    }

    #[test]
    fn test_normalize_peak_is_idempotent() {
        let mut once = vec![0.25, -0.5, 0.1];
        normalize_peak(&mut once);
        let mut twice = once.clone();
        normalize_peak(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_peak_leaves_silence_alone() {
        let mut samples = vec![0.0; 16];
        normalize_peak(&mut samples);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_pcm_roundtrip_within_quantization_error() {
        let samples: Vec<f64> = (0..500).map(|i| (i as f64 * 0.13).sin() * 0.9).collect();
        let decoded = pcm16_to_samples(&samples_to_pcm16(&samples));

        assert_eq!(decoded.len(), samples.len());
        for (original, round_tripped) in samples.iter().zip(decoded.iter()) {
            assert!((original - round_tripped).abs() <= 1.0 / 32767.0);
        }
    }

    #[test]
    fn test_extract_pcm_data() {
        let result = WavResult::from_samples(&vec![0.5; 100], 44_100);
        let pcm = extract_pcm_data(&result.wav_data).expect("should extract PCM");
        assert_eq!(pcm.len(), 200);
    }

    #[test]
    fn test_pcm_hash_determinism() {
        let samples = vec![0.5, -0.5, 0.3, -0.3, 0.0];
        let result1 = WavResult::from_samples(&samples, 44_100);
        let result2 = WavResult::from_samples(&samples, 44_100);

        assert_eq!(result1.pcm_hash, result2.pcm_hash);
        assert_eq!(result1.pcm_hash.len(), 64); // BLAKE3 produces 64 hex chars
    }

    #[test]
    fn test_duration() {
        let result = WavResult::from_samples(&vec![0.0; 22_050], 44_100);
        assert!((result.duration_seconds() - 0.5).abs() < 1e-12);
    }
}
