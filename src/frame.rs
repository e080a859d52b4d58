use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum Timing {
    RealTime { start: Instant, last_tick: Instant },
    Fixed { step: f32 },
}

/// Frame clock - wall-clock deltas for the window loop, fixed steps for scripted runs
/// Use as an iterator: `for frame in FrameClock::fixed(1.0 / 60.0).take(n) { ... }`
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_number: u64,
    time: f32,
    timing: Timing,
}

impl FrameClock {
    pub fn real_time() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            time: 0.0,
            timing: Timing::RealTime {
                start: now,
                last_tick: now,
            },
        }
    }

    pub fn fixed(step: f32) -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            timing: Timing::Fixed { step },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Advance one frame and return its timing
    pub fn tick(&mut self) -> FrameInfo {
        let delta = match &mut self.timing {
            Timing::RealTime { start, last_tick } => {
                let now = Instant::now();
                let delta = now.duration_since(*last_tick).as_secs_f32();
                *last_tick = now;
                self.time = now.duration_since(*start).as_secs_f32();
                delta
            }
            Timing::Fixed { step } => {
                self.time += *step;
                *step
            }
        };

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;
        info
    }

    /// Restart timing from now, e.g. after the window was hidden
    pub fn reset(&mut self) {
        if let Timing::RealTime { last_tick, .. } = &mut self.timing {
            *last_tick = Instant::now();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::real_time()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        Some(self.tick())
    }
}

/// Frames-per-second over a sliding reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Count one frame; returns the rate once per interval
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            let fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}
