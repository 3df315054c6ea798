use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Frames timed by the wall clock
///
/// The first frame has a zero delta.
pub struct RealTimeFrames {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl RealTimeFrames {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for RealTimeFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RealTimeFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        self.last_frame_time = now;
        Some(info)
    }
}

/// Frames with a constant delta, for headless and reproducible runs
#[derive(Debug, Clone)]
pub struct FixedStep {
    delta: f32,
    frame_number: u64,
}

impl FixedStep {
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            frame_number: 0,
        }
    }
}

impl Iterator for FixedStep {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let number = self.frame_number;
        self.frame_number += 1;
        Some(FrameInfo::new(
            number,
            (number + 1) as f32 * self.delta,
            self.delta,
        ))
    }
}

/// Fires at most once per `period` seconds of accumulated delta
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Accumulate `delta`, returns true when a period has passed
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.period {
            self.elapsed = (self.elapsed - self.period) % self.period.max(f32::EPSILON);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fixed_step_counts_frames() {
        let frames: Vec<_> = FixedStep::new(0.5).take(3).collect();
        assert_eq!(frames[0], FrameInfo::new(0, 0.5, 0.5));
        assert_eq!(frames[2], FrameInfo::new(2, 1.5, 0.5));
    }

    #[test]
    fn real_time_measures_delta() {
        let mut frames = RealTimeFrames::new();
        let first = frames.next().unwrap();
        assert_eq!(first.number, 0);
        assert!(first.delta < 0.005);

        thread::sleep(Duration::from_millis(10));
        let second = frames.next().unwrap();
        assert_eq!(second.number, 1);
        assert!(second.delta >= 0.009);
        assert!(second.time >= second.delta);
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut interval = Interval::new(1.0);
        assert!(!interval.tick(0.6));
        assert!(interval.tick(0.6));
        assert!(!interval.tick(0.6));
        assert!(interval.tick(0.4));
    }

    #[test]
    fn interval_keeps_leftover_time() {
        let mut interval = Interval::new(1.0);
        assert!(interval.tick(1.5));
        assert!(interval.tick(0.5));
        assert!(!interval.tick(0.75));
    }
}
