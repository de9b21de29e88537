use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Duration in milliseconds of an encoded audio buffer.
///
/// The buffer is written to a temporary file which is removed before this
/// returns, whether or not probing succeeded.
pub async fn buffer_duration(audio: Bytes) -> anyhow::Result<u64> {
    tokio::task::spawn_blocking(move || {
        let mut file = tempfile::Builder::new()
            .suffix(".mp3")
            .tempfile()
            .context("failed to create temporary audio file")?;
        file.write_all(&audio)
            .and_then(|_| file.flush())
            .context("failed to write temporary audio file")?;
        file_duration(file.path())
    })
    .await
    .context("duration probe task failed")?
}

/// Duration in milliseconds of the default track of an audio file.
pub fn file_duration(path: &Path) -> anyhow::Result<u64> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("unrecognized audio container")?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .context("audio file has no tracks")?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("audio track has no sample rate")?;
    let n_frames = track.codec_params.n_frames;

    let frames = match n_frames {
        Some(frames) => frames,
        None => {
            // No frame count in the container header (e.g. MP3 without a Xing
            // frame); add up the packet durations instead.
            let mut frames = 0;
            loop {
                match format.next_packet() {
                    Ok(packet) if packet.track_id() == track_id => frames += packet.dur(),
                    Ok(_) => {}
                    Err(SymphoniaError::IoError(e))
                        if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                    {
                        break
                    }
                    Err(e) => return Err(e).context("failed to read audio packets"),
                }
            }
            frames
        }
    };

    let duration = frames_to_millis(frames, sample_rate);
    tracing::trace!(frames, sample_rate, duration, "probed audio duration");
    Ok(duration)
}

/// Converts a frame count to milliseconds, rounded to the nearest one.
pub fn frames_to_millis(frames: u64, sample_rate: u32) -> u64 {
    (frames as f64 * 1000.0 / sample_rate as f64).round() as u64
}
