//! Boundaries to the speech recognizer and the microphone level meter.
//!
//! The editor only needs a transcript buffer and one level per tick, so both
//! collaborators are traits. The manual implementations back the voice panel:
//! typed text stands in for recognized speech, a slider for the microphone.

use std::time::{Duration, Instant};

pub trait SpeechSource {
    fn start_listening(&mut self, continuous: bool);
    fn stop_listening(&mut self);
    fn is_listening(&self) -> bool;
    /// Text recognized since the last reset.
    fn transcript(&self) -> &str;
    fn reset_transcript(&mut self);
}

pub trait VolumeSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    /// The level for the current tick, or `None` between ticks.
    fn poll(&mut self, now: Instant) -> Option<f32>;
}

#[derive(Debug, Default)]
pub struct ManualSpeech {
    listening: bool,
    continuous: bool,
    transcript: String,
}

impl ManualSpeech {
    /// Appends an utterance as if the recognizer had produced it.
    pub fn recognize(&mut self, utterance: &str) {
        if !self.listening {
            return;
        }
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return;
        }
        if !self.transcript.is_empty() {
            self.transcript.push(' ');
        }
        self.transcript.push_str(utterance);
        if !self.continuous {
            self.listening = false;
        }
    }
}

impl SpeechSource for ManualSpeech {
    fn start_listening(&mut self, continuous: bool) {
        log::info!("speech listening started (continuous: {continuous})");
        self.listening = true;
        self.continuous = continuous;
    }

    fn stop_listening(&mut self) {
        log::info!("speech listening stopped");
        self.listening = false;
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn transcript(&self) -> &str {
        &self.transcript
    }

    fn reset_transcript(&mut self) {
        self.transcript.clear();
    }
}

#[derive(Debug)]
pub struct ManualVolume {
    pub level: f32,
    tick: Duration,
    running: bool,
    last_tick: Option<Instant>,
}

impl ManualVolume {
    pub fn new(tick: Duration) -> Self {
        Self {
            level: 0.0,
            tick,
            running: false,
            last_tick: None,
        }
    }

    pub fn set_tick(&mut self, tick: Duration) {
        self.tick = tick;
    }
}

impl VolumeSource for ManualVolume {
    fn start(&mut self) {
        log::info!("volume sampling started every {:?}", self.tick);
        self.running = true;
        self.last_tick = None;
    }

    fn stop(&mut self) {
        log::info!("volume sampling stopped");
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self, now: Instant) -> Option<f32> {
        if !self.running {
            return None;
        }
        let due = self
            .last_tick
            .is_none_or(|last| now.saturating_duration_since(last) >= self.tick);
        if !due {
            return None;
        }
        self.last_tick = Some(now);
        Some(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_only_records_while_listening() {
        let mut speech = ManualSpeech::default();
        speech.recognize("5");
        assert_eq!(speech.transcript(), "");

        speech.start_listening(true);
        speech.recognize(" hello ");
        speech.recognize("5");
        assert_eq!(speech.transcript(), "hello 5");
        speech.reset_transcript();
        assert_eq!(speech.transcript(), "");
        assert!(speech.is_listening());
    }

    #[test]
    fn one_shot_listening_stops_after_an_utterance() {
        let mut speech = ManualSpeech::default();
        speech.start_listening(false);
        speech.recognize("M");
        assert!(!speech.is_listening());
        speech.recognize("S");
        assert_eq!(speech.transcript(), "M");
    }

    #[test]
    fn volume_emits_once_per_tick() {
        let mut volume = ManualVolume::new(Duration::from_millis(50));
        let t0 = Instant::now();
        assert_eq!(volume.poll(t0), None);

        volume.level = 7.0;
        volume.start();
        assert_eq!(volume.poll(t0), Some(7.0));
        assert_eq!(volume.poll(t0 + Duration::from_millis(20)), None);
        assert_eq!(volume.poll(t0 + Duration::from_millis(50)), Some(7.0));

        volume.stop();
        assert_eq!(volume.poll(t0 + Duration::from_millis(200)), None);
    }
}
