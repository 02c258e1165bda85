//! Frame sampling at a fixed time interval.
//!
//! Only one frame per sampling interval is worth the cost of OCR; everything
//! between sampled instants is discarded without further processing. The
//! sampler is a lazy, finite, non-restartable iterator over a sequential
//! frame stream, so the selection arithmetic can be tested without decoding
//! real video.

use crate::error::CoreResult;
use crate::external::decoder::{Frame, FrameStream, SourceMetadata};

/// Computes the sampling step in frames from the native frame rate and the
/// interval in seconds. Always at least 1, so sampling can never stall on a
/// zero step.
pub fn sample_step(fps: f64, interval_secs: f64) -> u64 {
    let step = (fps * interval_secs).round();
    if step.is_finite() && step >= 1.0 {
        step as u64
    } else {
        1
    }
}

/// Number of frames a sampler will yield for a source of `total_frames`
/// frames and the given step: every exact multiple of the step, starting at
/// frame 0.
pub fn expected_samples(total_frames: u64, frame_step: u64) -> u64 {
    if total_frames == 0 {
        0
    } else {
        (total_frames - 1) / frame_step.max(1) + 1
    }
}

/// Lazy iterator yielding only the frames whose ordinal index is an exact
/// multiple of the frame step.
///
/// Terminates when the stream reports no further frames. A mid-stream decode
/// error is yielded once, after which the sampler fuses.
pub struct FrameSampler<S> {
    stream: S,
    frame_step: u64,
    finished: bool,
}

impl<S: FrameStream> FrameSampler<S> {
    pub fn new(stream: S, interval_secs: f64) -> Self {
        let frame_step = sample_step(stream.metadata().fps, interval_secs);
        Self {
            stream,
            frame_step,
            finished: false,
        }
    }

    pub fn frame_step(&self) -> u64 {
        self.frame_step
    }

    pub fn metadata(&self) -> &SourceMetadata {
        self.stream.metadata()
    }
}

impl<S: FrameStream> Iterator for FrameSampler<S> {
    type Item = CoreResult<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.stream.next_frame() {
                Ok(Some(frame)) => {
                    if frame.index % self.frame_step == 0 {
                        return Some(Ok(frame));
                    }
                }
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    struct VecStream {
        meta: SourceMetadata,
        total: u64,
        next: u64,
        fail_at: Option<u64>,
    }

    impl VecStream {
        fn new(fps: f64, total: u64) -> Self {
            Self {
                meta: SourceMetadata {
                    fps,
                    total_frames: Some(total),
                    duration_secs: None,
                    width: Some(4),
                    height: Some(4),
                },
                total,
                next: 0,
                fail_at: None,
            }
        }
    }

    impl FrameStream for VecStream {
        fn metadata(&self) -> &SourceMetadata {
            &self.meta
        }

        fn next_frame(&mut self) -> CoreResult<Option<Frame>> {
            if self.fail_at == Some(self.next) {
                return Err(CoreError::InvalidFrame(format!(
                    "synthetic failure at {}",
                    self.next
                )));
            }
            if self.next >= self.total {
                return Ok(None);
            }
            let index = self.next;
            self.next += 1;
            Ok(Some(Frame {
                index,
                width: 4,
                height: 4,
                data: vec![0; 4 * 4 * 3],
            }))
        }
    }

    fn sampled_indices(fps: f64, total: u64, interval: f64) -> Vec<u64> {
        FrameSampler::new(VecStream::new(fps, total), interval)
            .map(|r| r.expect("sampled frame").index)
            .collect()
    }

    #[test]
    fn test_step_arithmetic() {
        assert_eq!(sample_step(30.0, 10.0), 300);
        assert_eq!(sample_step(29.97, 10.0), 300);
        assert_eq!(sample_step(25.0, 1.0), 25);
        assert_eq!(sample_step(23.976, 2.0), 48);
    }

    #[test]
    fn test_step_never_below_one() {
        // round(2.0 * 0.1) == 0 would stall the pass; clamp to 1.
        assert_eq!(sample_step(2.0, 0.1), 1);
        assert_eq!(sample_step(0.5, 0.5), 1);
        assert_eq!(sample_step(f64::NAN, 10.0), 1);
    }

    #[test]
    fn test_sampled_count_formula() {
        // floor((N-1)/step) + 1 sampled frames
        for (fps, total, interval) in [
            (30.0, 300u64, 10.0),
            (30.0, 301, 10.0),
            (25.0, 1000, 2.0),
            (24.0, 7, 0.001),
        ] {
            let step = sample_step(fps, interval);
            let expected = (total - 1) / step + 1;
            assert_eq!(
                sampled_indices(fps, total, interval).len() as u64,
                expected,
                "fps={fps} total={total} interval={interval}"
            );
            assert_eq!(expected_samples(total, step), expected);
        }
    }

    #[test]
    fn test_single_sample_for_short_video() {
        // 30 fps, 300 frames, 10 s interval: step 300, only frame 0 sampled.
        assert_eq!(sampled_indices(30.0, 300, 10.0), vec![0]);
    }

    #[test]
    fn test_yields_exact_multiples_only() {
        assert_eq!(sampled_indices(30.0, 100, 1.0), vec![0, 30, 60, 90]);
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        assert!(sampled_indices(30.0, 0, 10.0).is_empty());
        assert_eq!(expected_samples(0, 300), 0);
    }

    #[test]
    fn test_fuses_after_stream_error() {
        let mut stream = VecStream::new(30.0, 100);
        stream.fail_at = Some(35);
        let mut sampler = FrameSampler::new(stream, 1.0);

        assert_eq!(sampler.next().expect("first").expect("frame").index, 0);
        assert_eq!(sampler.next().expect("second").expect("frame").index, 30);
        assert!(sampler.next().expect("error item").is_err());
        assert!(sampler.next().is_none());
        assert!(sampler.next().is_none());
    }
}
