//! Video decoding abstraction and the ffmpeg-sidecar implementation.
//!
//! The extraction engine reads frames through the [`VideoDecoder`] /
//! [`FrameStream`] traits so the sampling logic can be tested against
//! synthetic streams. The production implementation spawns ffmpeg and
//! consumes raw RGB24 frames from its stdout pipe. The decoder process is
//! released when the stream is dropped, on every exit path.

use crate::error::{CoreError, CoreResult};
use crate::external::probe;
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use ffmpeg_sidecar::iter::FfmpegIterator;
use std::path::Path;

/// Properties of an opened video source, probed once at open time.
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Native frame rate in frames per second. Always finite and positive.
    pub fps: f64,
    /// Total frame count when the container reports one.
    pub total_frames: Option<u64>,
    /// Duration in seconds when known.
    pub duration_secs: Option<f64>,
    /// Width of the video stream.
    pub width: Option<i64>,
    /// Height of the video stream.
    pub height: Option<i64>,
}

/// A single decoded RGB24 frame at a known ordinal index.
///
/// Frames are ephemeral: the sampling loop owns each one for a single
/// iteration and never retains it.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ordinal index within the source, starting at 0
    pub index: u64,
    pub width: u32,
    pub height: u32,
    /// Packed RGB24 pixel data, `width * height * 3` bytes
    pub data: Vec<u8>,
}

/// A sequential, non-restartable stream of decoded frames.
pub trait FrameStream {
    fn metadata(&self) -> &SourceMetadata;

    /// Returns the next frame, `Ok(None)` at end of stream, or an error for
    /// an unreadable frame.
    fn next_frame(&mut self) -> CoreResult<Option<Frame>>;
}

/// Trait representing something that can open a video source.
pub trait VideoDecoder {
    type Stream: FrameStream + Send;

    /// Opens the source, probing its metadata. Failure means the whole
    /// extraction cannot proceed (`SourceUnavailable`).
    fn open(&self, input: &Path) -> CoreResult<Self::Stream>;
}

/// Concrete implementation of [`VideoDecoder`] using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarDecoder;

impl VideoDecoder for SidecarDecoder {
    type Stream = SidecarFrameStream;

    fn open(&self, input: &Path) -> CoreResult<SidecarFrameStream> {
        let info = probe::get_media_info(input).map_err(|e| match e {
            CoreError::SourceUnavailable(msg) => CoreError::SourceUnavailable(msg),
            other => CoreError::SourceUnavailable(format!("{}: {}", input.display(), other)),
        })?;
        let fps = probe::get_frame_rate(input)
            .map_err(|e| CoreError::SourceUnavailable(format!("{}: {}", input.display(), e)))?;

        let meta = SourceMetadata {
            fps,
            total_frames: info.total_frames,
            duration_secs: info.duration,
            width: info.width,
            height: info.height,
        };

        let mut cmd = FfmpegCommand::new();
        cmd.hide_banner();
        cmd.input(input.to_string_lossy().as_ref());
        cmd.arg("-map");
        cmd.arg("0:v:0");
        cmd.arg("-an");
        cmd.arg("-sn");
        cmd.rawvideo();

        log::debug!("Running frame decode command: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| {
            CoreError::SourceUnavailable(format!(
                "failed to start ffmpeg for {}: {}",
                input.display(),
                e
            ))
        })?;

        let events = child.iter().map_err(|e| {
            CoreError::SourceUnavailable(format!(
                "failed to read decoded frames from {}: {}",
                input.display(),
                e
            ))
        })?;

        Ok(SidecarFrameStream {
            child,
            events,
            meta,
            next_index: 0,
        })
    }
}

/// Frame stream backed by a running ffmpeg process.
pub struct SidecarFrameStream {
    child: FfmpegChild,
    events: FfmpegIterator,
    meta: SourceMetadata,
    next_index: u64,
}

impl FrameStream for SidecarFrameStream {
    fn metadata(&self) -> &SourceMetadata {
        &self.meta
    }

    fn next_frame(&mut self) -> CoreResult<Option<Frame>> {
        // The event stream interleaves frames with logs and progress lines;
        // only frames are surfaced.
        for event in self.events.by_ref() {
            match event {
                FfmpegEvent::OutputFrame(raw) => {
                    let index = self.next_index;
                    self.next_index += 1;
                    return Ok(Some(Frame {
                        index,
                        width: raw.width,
                        height: raw.height,
                        data: raw.data,
                    }));
                }
                FfmpegEvent::Log(level, message) => {
                    log::trace!("ffmpeg [{level:?}]: {message}");
                }
                _ => {}
            }
        }
        Ok(None)
    }
}

impl Drop for SidecarFrameStream {
    fn drop(&mut self) {
        // Scoped release of the decoder process on every exit path.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
