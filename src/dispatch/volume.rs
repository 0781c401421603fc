/// Samples needed before a trend is reported; the comparison looks this far back.
const TREND_LAG: usize = 5;
/// Only the tail of the window is ever read, so older samples are dropped.
const MAX_SAMPLES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

impl Trend {
    pub fn sign(self) -> f32 {
        match self {
            Trend::Increase => 1.0,
            Trend::Decrease => -1.0,
        }
    }
}

/// Run of consecutive above-floor volume samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VolumeWindow {
    samples: Vec<f32>,
}

impl VolumeWindow {
    /// Records one sample and reports the trend for this tick, if any.
    ///
    /// A sample at or below `floor` ends the run. While the run is longer
    /// than five samples, every tick compares the sample five places from the
    /// end with `threshold`.
    pub fn push(&mut self, sample: f32, floor: f32, threshold: f32) -> Option<Trend> {
        if sample <= floor {
            self.samples.clear();
            return None;
        }
        self.samples.push(sample);
        if self.samples.len() > MAX_SAMPLES {
            let overflow = self.samples.len() - MAX_SAMPLES;
            self.samples.drain(0..overflow);
        }
        if self.samples.len() <= TREND_LAG {
            return None;
        }
        let probe = self.samples[self.samples.len() - TREND_LAG];
        if probe < threshold {
            Some(Trend::Decrease)
        } else {
            Some(Trend::Increase)
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
