use crate::dispatch::{EditorEvent, EventQueue, Session};
use crate::geometry::Corner;
use crate::settings;
use crate::voice::{ManualSpeech, ManualVolume, SpeechSource, VolumeSource};
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod help;
mod interaction;
mod render;
mod update;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ActiveDrag {
    Body { id: u64, grab_offset: egui::Vec2 },
    Corner { id: u64, corner: Corner },
    Rotate { id: u64 },
}

pub struct EllipseApp {
    session: Session,
    queue: EventQueue,
    speech: ManualSpeech,
    volume: ManualVolume,
    utterance: String,
    last_transcript: String,
    last_level: Option<f32>,
    active_drag: Option<ActiveDrag>,
    settings_path: PathBuf,
    status: Option<String>,
    show_help: bool,
}

impl EllipseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = settings::config_path();
        let settings = settings::load_or_default(&settings_path);
        let tick = Duration::from_millis(settings.volume_tick_ms);
        Self {
            session: Session::new(settings),
            queue: EventQueue::default(),
            speech: ManualSpeech::default(),
            volume: ManualVolume::new(tick),
            utterance: String::new(),
            last_transcript: String::new(),
            last_level: None,
            active_drag: None,
            settings_path,
            status: None,
            show_help: false,
        }
    }

    fn voice_active(&self) -> bool {
        self.speech.is_listening() || self.volume.is_running()
    }

    fn start_voice(&mut self) {
        self.volume
            .set_tick(Duration::from_millis(self.session.settings.volume_tick_ms));
        self.speech.start_listening(true);
        self.volume.start();
    }

    fn stop_voice(&mut self) {
        self.speech.stop_listening();
        self.volume.stop();
        self.session.volume_window.clear();
    }

    /// Turns collaborator output into queued events.
    fn collect_voice(&mut self) {
        let transcript = self.speech.transcript();
        if !transcript.is_empty() && transcript != self.last_transcript {
            self.last_transcript = transcript.to_string();
            self.queue
                .push(EditorEvent::SpeechToken(self.last_transcript.clone()));
        }
        if let Some(level) = self.volume.poll(Instant::now()) {
            self.last_level = Some(level);
            self.queue.push(EditorEvent::VolumeSample(level));
        }
    }

    fn apply_events(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        let report = self.session.process(&mut self.queue);
        log::trace!("{} events applied, {} ignored", report.applied, report.ignored);
        if report.speech_consumed {
            self.speech.reset_transcript();
            self.last_transcript.clear();
        }
    }

    fn save_settings(&mut self) {
        self.status = Some(
            match settings::save_settings(&self.settings_path, &self.session.settings) {
                Ok(()) => format!("Saved {}", self.settings_path.display()),
                Err(e) => format!("Save failed: {e}"),
            },
        );
    }
}
