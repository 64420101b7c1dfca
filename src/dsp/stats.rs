/// Level summary of a rendered buffer, shown next to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalStats {
    pub peak: f64,
    pub rms: f64,
    /// Mean sample value
    pub dc: f64,
}

impl SignalStats {
    pub fn from_buffer(buffer: &[f64]) -> Self {
        if buffer.is_empty() {
            return Self::default();
        }

        let (mut sum, mut sum2, mut peak) = (0.0f64, 0.0f64, 0.0f64);
        for &x in buffer {
            sum += x;
            sum2 += x * x;
            peak = peak.max(x.abs());
        }
        let n = buffer.len() as f64;

        Self {
            peak,
            rms: (sum2 / n).sqrt(),
            dc: sum / n,
        }
    }
}
