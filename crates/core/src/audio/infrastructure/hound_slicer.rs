use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavWriter};

use crate::audio::domain::audio_slicer::{AudioSlicer, SliceError};
use crate::audio::domain::boundary_clips::BoundaryClips;
use crate::audio::domain::frame_range::FrameRange;
use crate::audio::domain::trim_window::TrimWindow;
use crate::shared::constants::BOUNDARY_CLIP_SECONDS;

type Reader = WavReader<BufReader<File>>;
type Writer = WavWriter<BufWriter<File>>;

/// Frame-accurate WAV slicing backed by hound.
///
/// Writers are finalized before return so headers and buffered frames hit
/// disk on every path; readers release their handles on drop.
pub struct HoundSlicer;

impl HoundSlicer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HoundSlicer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSlicer for HoundSlicer {
    fn extract_boundary_clips(
        &self,
        input: &Path,
        start_out: &Path,
        end_out: &Path,
    ) -> Result<BoundaryClips, SliceError> {
        let mut reader = open_reader(input)?;
        let spec = reader.spec();
        let total_frames = reader.duration();
        let clip_frames = BOUNDARY_CLIP_SECONDS * spec.sample_rate;

        // The end clip must start strictly after the start clip ends.
        let required = 2 * clip_frames + 1;
        if total_frames < required {
            return Err(SliceError::InputTooShort {
                frames: total_frames,
                required,
            });
        }

        let mut start_writer = create_writer(start_out, spec)?;
        copy_frames(&mut reader, &mut start_writer, clip_frames, input, start_out)?;
        finalize(start_writer, start_out)?;

        let end_clip_index = total_frames - clip_frames - 1;
        reader
            .seek(end_clip_index)
            .map_err(|e| io_error(input, e))?;
        let mut end_writer = create_writer(end_out, spec)?;
        copy_frames(&mut reader, &mut end_writer, clip_frames, input, end_out)?;
        finalize(end_writer, end_out)?;

        let rate = spec.sample_rate as f64;
        Ok(BoundaryClips {
            start_clip: start_out.to_path_buf(),
            end_clip: end_out.to_path_buf(),
            end_clip_offset: end_clip_index as f64 / rate,
            duration: total_frames as f64 / rate,
        })
    }

    fn trim(&self, input: &Path, output: &Path, window: TrimWindow) -> Result<(), SliceError> {
        let mut reader = open_reader(input)?;
        let spec = reader.spec();
        let total_frames = reader.duration();
        let rate = spec.sample_rate as f64;

        let start_frame = (window.start * rate).round() as i64;
        let end_frame = (window.end * rate).round() as i64;
        let range = if start_frame < 0 || end_frame > i64::from(u32::MAX) {
            None
        } else {
            FrameRange::new(start_frame as u32, end_frame as u32, total_frames)
        };
        let range = range.ok_or(SliceError::RangeOutOfBounds {
            start: start_frame,
            end: end_frame,
            total_frames,
        })?;

        reader
            .seek(range.start())
            .map_err(|e| io_error(input, e))?;
        let mut writer = create_writer(output, spec)?;
        copy_frames(&mut reader, &mut writer, range.len(), input, output)?;
        finalize(writer, output)
    }
}

fn open_reader(path: &Path) -> Result<Reader, SliceError> {
    WavReader::open(path).map_err(|e| wav_error(path, e))
}

fn create_writer(path: &Path, spec: hound::WavSpec) -> Result<Writer, SliceError> {
    WavWriter::create(path, spec).map_err(|e| wav_error(path, e))
}

fn finalize(writer: Writer, path: &Path) -> Result<(), SliceError> {
    writer.finalize().map_err(|e| wav_error(path, e))
}

/// Copy `frames` frames from the reader's current position, sample for
/// sample, preserving the container parameters.
fn copy_frames(
    reader: &mut Reader,
    writer: &mut Writer,
    frames: u32,
    input: &Path,
    output: &Path,
) -> Result<(), SliceError> {
    let spec = reader.spec();
    let samples = frames as usize * spec.channels as usize;
    match spec.sample_format {
        SampleFormat::Int => {
            for sample in reader.samples::<i32>().take(samples) {
                let sample = sample.map_err(|e| wav_error(input, e))?;
                writer
                    .write_sample(sample)
                    .map_err(|e| wav_error(output, e))?;
            }
        }
        SampleFormat::Float => {
            if spec.bits_per_sample != 32 {
                return Err(SliceError::UnsupportedFormat {
                    bits: spec.bits_per_sample,
                });
            }
            for sample in reader.samples::<f32>().take(samples) {
                let sample = sample.map_err(|e| wav_error(input, e))?;
                writer
                    .write_sample(sample)
                    .map_err(|e| wav_error(output, e))?;
            }
        }
    }
    Ok(())
}

fn wav_error(path: &Path, source: hound::Error) -> SliceError {
    SliceError::Wav {
        path: path.to_path_buf(),
        source,
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SliceError {
    SliceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    /// Writes a mono 16-bit WAV whose sample values cycle through frame
    /// indices, so slices can be checked byte-exactly against positions.
    fn write_fixture(path: &Path, sample_rate: u32, frames: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for i in 0..frames {
            writer.write_sample((i % 32768) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    fn read_samples(path: &Path) -> (hound::WavSpec, Vec<i32>) {
        let mut reader = WavReader::open(path).unwrap();
        let spec = reader.spec();
        let samples = reader.samples::<i32>().map(|s| s.unwrap()).collect();
        (spec, samples)
    }

    #[test]
    fn test_boundary_clips_have_exact_frame_counts() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        let rate = 100;
        let clip_frames = BOUNDARY_CLIP_SECONDS * rate;
        let total = 2 * clip_frames + 50;
        write_fixture(&input, rate, total);

        let slicer = HoundSlicer::new();
        let clips = slicer
            .extract_boundary_clips(
                &input,
                &tmp.path().join("first.wav"),
                &tmp.path().join("second.wav"),
            )
            .unwrap();

        let (start_spec, start_samples) = read_samples(&clips.start_clip);
        let (end_spec, end_samples) = read_samples(&clips.end_clip);
        assert_eq!(start_samples.len() as u32, clip_frames);
        assert_eq!(end_samples.len() as u32, clip_frames);
        assert_eq!(start_spec.sample_rate, rate);
        assert_eq!(end_spec.sample_rate, rate);

        // Start clip begins at frame 0.
        assert_eq!(start_samples[0], 0);
        assert_eq!(start_samples[clip_frames as usize - 1], clip_frames as i32 - 1);

        // End clip covers [total - clip_frames - 1, total - 1).
        let end_index = total - clip_frames - 1;
        assert_eq!(end_samples[0], end_index as i32);
        assert_relative_eq!(clips.end_clip_offset, end_index as f64 / rate as f64);
        assert_relative_eq!(clips.duration, total as f64 / rate as f64);
    }

    #[test]
    fn test_short_input_rejected() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        let rate = 100;
        write_fixture(&input, rate, 2 * BOUNDARY_CLIP_SECONDS * rate);

        let slicer = HoundSlicer::new();
        let err = slicer
            .extract_boundary_clips(
                &input,
                &tmp.path().join("first.wav"),
                &tmp.path().join("second.wav"),
            )
            .unwrap_err();
        assert!(matches!(err, SliceError::InputTooShort { .. }));
    }

    #[test]
    fn test_trim_copies_exact_frame_range() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        let rate = 100;
        write_fixture(&input, rate, 1000);
        let (_, source) = read_samples(&input);

        let output = tmp.path().join("out.wav");
        let slicer = HoundSlicer::new();
        let window = TrimWindow {
            start: 2.0,
            end: 5.0,
        };
        slicer.trim(&input, &output, window).unwrap();

        let (spec, samples) = read_samples(&output);
        assert_eq!(spec.sample_rate, rate);
        assert_eq!(samples.len(), 300);
        assert_eq!(samples, source[200..500].to_vec());
    }

    #[test]
    fn test_trim_rounds_fractional_seconds() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        write_fixture(&input, 100, 1000);

        let output = tmp.path().join("out.wav");
        let slicer = HoundSlicer::new();
        slicer
            .trim(
                &input,
                &output,
                TrimWindow {
                    start: 1.004,
                    end: 2.006,
                },
            )
            .unwrap();

        // round(100.4) = 100, round(200.6) = 201.
        let (_, samples) = read_samples(&output);
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], 100);
    }

    #[test]
    fn test_trim_full_extent_is_identity() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        write_fixture(&input, 100, 1000);

        let slicer = HoundSlicer::new();
        let first = tmp.path().join("trimmed.wav");
        slicer
            .trim(
                &input,
                &first,
                TrimWindow {
                    start: 1.0,
                    end: 9.0,
                },
            )
            .unwrap();

        // Trimming the trimmed file to its own full extent reproduces it.
        let second = tmp.path().join("again.wav");
        slicer
            .trim(
                &first,
                &second,
                TrimWindow {
                    start: 0.0,
                    end: 8.0,
                },
            )
            .unwrap();

        assert_eq!(read_samples(&first), read_samples(&second));
    }

    #[test]
    fn test_trim_out_of_range_rejected() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        write_fixture(&input, 100, 1000);

        let slicer = HoundSlicer::new();
        let err = slicer
            .trim(
                &input,
                &tmp.path().join("out.wav"),
                TrimWindow {
                    start: 2.0,
                    end: 20.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, SliceError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn test_stereo_params_preserved() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("raw.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&input, spec).unwrap();
        for i in 0..2000i32 {
            writer.write_sample((i % 32768) as i16).unwrap();
        }
        writer.finalize().unwrap();

        let output = tmp.path().join("out.wav");
        let slicer = HoundSlicer::new();
        slicer
            .trim(
                &input,
                &output,
                TrimWindow {
                    start: 1.0,
                    end: 4.0,
                },
            )
            .unwrap();

        let (out_spec, samples) = read_samples(&output);
        assert_eq!(out_spec.channels, 2);
        assert_eq!(out_spec.bits_per_sample, 16);
        // 300 frames, two samples each.
        assert_eq!(samples.len(), 600);
        assert_eq!(samples[0], 200);
    }
}
