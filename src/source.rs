//! Frame sources: where each cycle's hand landmarks come from.
//!
//! The main loop does not care whether landmarks are simulated from the
//! mouse or replayed from a recording; both implement [`LandmarkSource`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Error;
use crate::types::{HandLandmarks, LANDMARK_COUNT, Landmark};

/// One frame worth of detector output.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Capture time relative to the start of the recording, when known.
    /// Live sources leave this empty and the wall clock is used.
    pub offset: Option<Duration>,
    /// `None` when no hand was detected this frame.
    pub hand: Option<HandLandmarks>,
}

impl Sample {
    /// Clock time for this sample when the recording started at `start`.
    /// `Ok(None)` for live samples, which run on the wall clock.
    pub fn due(&self, start: Instant) -> Result<Option<Instant>, Error> {
        match self.offset {
            None => Ok(None),
            Some(offset) => start
                .checked_add(offset)
                .map(Some)
                .ok_or_else(|| Error::Replay(format!("timestamp {offset:?} out of clock range"))),
        }
    }
}

/// Window input that a simulated source may turn into a hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    /// Pointer in normalized window coordinates, if inside the window.
    pub position: Option<(f32, f32)>,
    pub point_button: bool,
    pub fist_key: bool,
    pub thumb_key: bool,
    pub hide_hand: bool,
}

/// Anything that can deliver one [`Sample`] per cycle.
pub trait LandmarkSource {
    /// Next sample, or `Ok(None)` once the source is exhausted.
    fn poll(&mut self, input: &PointerInput) -> Result<Option<Sample>, Error>;
}

// ── Replay ─────────────────────────────────────────────────

/// One line of a replay file: `{"t": 0.033, "hand": [[x, y], ...]}` or
/// `{"t": 0.066, "hand": null}`.
#[derive(Debug, Deserialize)]
struct ReplayLine {
    t: f64,
    hand: Option<Vec<[f32; 2]>>,
}

/// Plays back landmarks recorded as JSON lines.
pub struct ReplaySource {
    samples: std::vec::IntoIter<Sample>,
}

impl ReplaySource {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)
            .map_err(|e| Error::Replay(format!("open {}: {e}", path.display())))?;
        let source = Self::from_reader(BufReader::new(file))?;
        info!("replaying {} frames from {}", source.samples.len(), path.display());
        Ok(source)
    }

    /// Parse every line up front so a malformed recording fails before any frame runs.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut samples = Vec::new();
        let mut last = Duration::ZERO;
        for (n, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::Replay(format!("line {}: {e}", n + 1)))?;
            if line.trim().is_empty() {
                continue;
            }
            let parsed: ReplayLine = serde_json::from_str(&line)
                .map_err(|e| Error::Replay(format!("line {}: {e}", n + 1)))?;
            let sample = parse_sample(parsed, n + 1, last)?;
            last = sample.offset.unwrap_or(last);
            samples.push(sample);
        }
        Ok(Self { samples: samples.into_iter() })
    }
}

/// `previous` is the timestamp of the line before; time may not run backwards.
fn parse_sample(line: ReplayLine, line_no: usize, previous: Duration) -> Result<Sample, Error> {
    let offset = Duration::try_from_secs_f64(line.t)
        .map_err(|e| Error::Replay(format!("line {line_no}: bad timestamp {}: {e}", line.t)))?;
    if offset < previous {
        return Err(Error::Replay(format!(
            "line {line_no}: timestamp {} goes back before {}",
            line.t,
            previous.as_secs_f64()
        )));
    }
    let hand = match line.hand {
        None => None,
        Some(points) => {
            if points.len() != LANDMARK_COUNT {
                return Err(Error::Replay(format!(
                    "line {line_no}: expected {LANDMARK_COUNT} landmarks, got {}",
                    points.len()
                )));
            }
            let mut pts = [Landmark::default(); LANDMARK_COUNT];
            for (dst, [x, y]) in pts.iter_mut().zip(points) {
                *dst = Landmark::new(x, y);
            }
            Some(HandLandmarks::new(pts))
        }
    };
    Ok(Sample { offset: Some(offset), hand })
}

impl LandmarkSource for ReplaySource {
    fn poll(&mut self, _input: &PointerInput) -> Result<Option<Sample>, Error> {
        let next = self.samples.next();
        if next.is_none() {
            debug!("replay exhausted");
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_json(x: f32, y: f32) -> String {
        let pts: Vec<String> = (0..LANDMARK_COUNT).map(|_| format!("[{x},{y}]")).collect();
        format!("[{}]", pts.join(","))
    }

    #[test]
    fn test_replay_reads_frames_in_order() {
        let text = format!(
            "{{\"t\": 0.0, \"hand\": null}}\n\n{{\"t\": 0.5, \"hand\": {}}}\n",
            hand_json(0.25, 0.75)
        );
        let mut src = ReplaySource::from_reader(text.as_bytes()).unwrap();
        let input = PointerInput::default();

        let first = src.poll(&input).unwrap().unwrap();
        assert_eq!(first.offset, Some(Duration::ZERO));
        assert!(first.hand.is_none());

        let second = src.poll(&input).unwrap().unwrap();
        assert_eq!(second.offset, Some(Duration::from_millis(500)));
        let hand = second.hand.unwrap();
        assert_eq!(hand.get(20), Landmark::new(0.25, 0.75));

        assert!(src.poll(&input).unwrap().is_none());
    }

    #[test]
    fn test_replay_rejects_wrong_landmark_count() {
        let text = "{\"t\": 0.0, \"hand\": [[0.1, 0.2]]}\n";
        let err = ReplaySource::from_reader(text.as_bytes()).err().unwrap();
        assert!(matches!(err, Error::Replay(msg) if msg.contains("expected 21")));
    }

    #[test]
    fn test_replay_rejects_out_of_range_timestamp() {
        for t in ["1e20", "-1.0"] {
            let text = format!("{{\"t\": {t}, \"hand\": null}}\n");
            let err = ReplaySource::from_reader(text.as_bytes()).err().unwrap();
            assert!(matches!(err, Error::Replay(msg) if msg.contains("bad timestamp")), "t = {t}");
        }
    }

    #[test]
    fn test_replay_rejects_time_going_backwards() {
        let text = "{\"t\": 5.0, \"hand\": null}\n{\"t\": 1.0, \"hand\": null}\n";
        let err = ReplaySource::from_reader(text.as_bytes()).err().unwrap();
        assert!(matches!(err, Error::Replay(msg) if msg.contains("line 2")));

        // Equal timestamps are fine.
        let text = "{\"t\": 1.0, \"hand\": null}\n{\"t\": 1.0, \"hand\": null}\n";
        assert!(ReplaySource::from_reader(text.as_bytes()).is_ok());
    }

    #[test]
    fn test_due_reports_clock_overflow() {
        let start = Instant::now();
        let live = Sample { offset: None, hand: None };
        assert_eq!(live.due(start).unwrap(), None);

        let ok = Sample { offset: Some(Duration::from_millis(40)), hand: None };
        assert_eq!(ok.due(start).unwrap(), Some(start + Duration::from_millis(40)));

        let huge = Sample { offset: Some(Duration::MAX), hand: None };
        assert!(matches!(huge.due(start), Err(Error::Replay(_))));
    }

    #[test]
    fn test_replay_rejects_bad_json() {
        let err = ReplaySource::from_reader("not json\n".as_bytes()).err().unwrap();
        assert!(matches!(err, Error::Replay(_)));
    }
}
