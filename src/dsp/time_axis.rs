use std::ops::Deref;

/// Evenly spaced sample times from 0 to `duration`, both endpoints included.
///
/// Built once per scope and shared read-only by every synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    times: Vec<f64>,
    duration: f64,
}

impl TimeAxis {
    /// `len` points from 0.0 to `duration`.
    ///
    /// A single point sits at 0.0; the last of several is exactly `duration`.
    pub fn linspace(duration: f64, len: usize) -> Self {
        let times = match len {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let step = duration / (len - 1) as f64;
                let mut times: Vec<f64> = (0..len).map(|i| i as f64 * step).collect();
                times[len - 1] = duration;
                times
            }
        };

        Self { times, duration }
    }

    /// Axis over explicit sample times; the duration is the last one.
    pub fn from_times(times: Vec<f64>) -> Self {
        let duration = times.last().copied().unwrap_or(0.0);
        Self { times, duration }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Times in milliseconds, for plotting.
    pub fn millis(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().map(|t| t * 1000.0)
    }
}

impl Deref for TimeAxis {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.times
    }
}
