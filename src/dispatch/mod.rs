//! Mode/axis state and the three input adapters.
//!
//! Every channel (pointer, keyboard, speech, volume) is reduced to an
//! [`EditorEvent`]. Events are queued in arrival order and applied one at a
//! time by [`Session::handle`], which is the only place the scene changes.

use crate::geometry::{Axis, Corner};
use crate::model::Scene;
use crate::settings::EditorSettings;
use crate::transform::{self, NudgeTarget};
use eframe::egui;
use std::collections::VecDeque;

mod keyboard;
mod speech;
mod volume;


pub use keyboard::KeyInput;
pub use speech::{SpeechCommand, parse_utterance};
pub use volume::{Trend, VolumeWindow};

use keyboard::{KeyCommand, key_command};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Move,
    Scale,
    Rotate,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Move, EditMode::Scale, EditMode::Rotate];

    pub fn label(self) -> &'static str {
        match self {
            EditMode::Move => "move",
            EditMode::Scale => "scale",
            EditMode::Rotate => "rotate",
        }
    }

    /// What a step along `axis` changes in this mode.
    pub fn nudge_target(self, axis: Axis) -> NudgeTarget {
        match self {
            EditMode::Move => NudgeTarget::Center(axis),
            EditMode::Scale => NudgeTarget::Radius(axis),
            EditMode::Rotate => NudgeTarget::Rotation,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    AddAt(egui::Pos2),
    ToggleSelect(u64),
    ClearSelection,
    DragBody { id: u64, target: egui::Pos2 },
    DragCorner { id: u64, corner: Corner, target: egui::Pos2 },
    DragRotate { id: u64, target: egui::Pos2 },
    DragEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
    SpeechToken(String),
    VolumeSample(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    Applied,
    Ignored,
}

impl Handled {
    fn from_bool(applied: bool) -> Self {
        if applied {
            Handled::Applied
        } else {
            Handled::Ignored
        }
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<EditorEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: EditorEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Outcome of draining an [`EventQueue`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub applied: usize,
    pub ignored: usize,
    /// A speech token was acted on; the recognizer buffer should be reset.
    pub speech_consumed: bool,
}

pub struct Session {
    pub scene: Scene,
    pub mode: EditMode,
    pub voice_axis: Axis,
    pub volume_window: VolumeWindow,
    pub settings: EditorSettings,
    rotate_handle: Option<(u64, egui::Pos2)>,
}

impl Session {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            scene: Scene::new(settings.shape_defaults()),
            mode: EditMode::default(),
            voice_axis: Axis::default(),
            volume_window: VolumeWindow::default(),
            settings,
            rotate_handle: None,
        }
    }

    /// Rotation-handle anchor reported by the engine during a rotate drag,
    /// keyed by the shape being rotated.
    pub fn rotate_handle(&self) -> Option<(u64, egui::Pos2)> {
        self.rotate_handle
    }

    pub fn process(&mut self, queue: &mut EventQueue) -> DrainReport {
        let mut report = DrainReport::default();
        while let Some(event) = queue.events.pop_front() {
            let handled = self.handle(&event);
            match handled {
                Handled::Applied => {
                    report.applied += 1;
                    if matches!(event, EditorEvent::SpeechToken(_)) {
                        report.speech_consumed = true;
                    }
                }
                Handled::Ignored => report.ignored += 1,
            }
        }
        report
    }

    pub fn handle(&mut self, event: &EditorEvent) -> Handled {
        let handled = match event {
            EditorEvent::Pointer(p) => self.handle_pointer(*p),
            EditorEvent::Key(k) => match key_command(k) {
                Some(command) => self.handle_key(command),
                None => Handled::Ignored,
            },
            EditorEvent::SpeechToken(text) => match parse_utterance(text) {
                Some(command) => self.handle_speech(command),
                None => Handled::Ignored,
            },
            EditorEvent::VolumeSample(level) => self.handle_volume(*level),
        };
        match handled {
            Handled::Applied => log::debug!("applied {event:?} (mode {:?})", self.mode),
            Handled::Ignored => log::trace!("ignored {event:?}"),
        }
        handled
    }

    fn select(&mut self, id: Option<u64>) {
        let changed = self.scene.active() != id;
        self.scene.select_shape(id);
        if changed && self.scene.active_shape().is_some() {
            self.mode = EditMode::Move;
        }
    }

    fn add(&mut self, position: egui::Pos2) -> u64 {
        let id = self.scene.add_shape(position, None);
        self.mode = EditMode::Move;
        id
    }

    fn duplicate(&mut self) -> u64 {
        let template = match self.scene.active() {
            Some(_) => self.scene.active_shape().copied(),
            None => self.scene.last_live_shape().copied(),
        };
        let id = match template {
            Some(t) => self.scene.add_shape(t.center, Some(&t)),
            None => self.scene.add_shape(egui::pos2(100.0, 100.0), None),
        };
        self.mode = EditMode::Move;
        id
    }

    /// Applies a step to the selected shape. No live selection, no effect.
    fn step_selected(&mut self, target: NudgeTarget, amount: f32) -> bool {
        let Some(shape) = self.scene.active_shape().copied() else {
            return false;
        };
        self.scene
            .replace_shape(shape.id, transform::nudge(&shape, target, amount))
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> Handled {
        match event {
            PointerEvent::AddAt(pos) => {
                self.add(pos);
                Handled::Applied
            }
            PointerEvent::ToggleSelect(id) => {
                if self.scene.active() == Some(id) {
                    self.select(None);
                } else if self.scene.shape(id).is_some() {
                    self.select(Some(id));
                } else {
                    if self.scene.is_removed(id) {
                        log::debug!("shape {id} was removed; click ignored");
                    }
                    return Handled::Ignored;
                }
                Handled::Applied
            }
            PointerEvent::ClearSelection => {
                self.select(None);
                Handled::Applied
            }
            PointerEvent::DragBody { id, target } => {
                let Some(shape) = self.scene.shape(id).copied() else {
                    return Handled::Ignored;
                };
                self.select(Some(id));
                self.mode = EditMode::Move;
                Handled::from_bool(self.scene.replace_shape(id, transform::move_to(&shape, target)))
            }
            PointerEvent::DragCorner { id, corner, target } => {
                let Some(shape) = self.scene.shape(id).copied() else {
                    return Handled::Ignored;
                };
                self.mode = EditMode::Scale;
                let resized = transform::resize_corner(&shape, corner, target);
                Handled::from_bool(self.scene.replace_shape(id, resized))
            }
            PointerEvent::DragRotate { id, target } => {
                let Some(shape) = self.scene.shape(id).copied() else {
                    return Handled::Ignored;
                };
                self.mode = EditMode::Rotate;
                let outcome =
                    transform::rotate_towards(&shape, target, self.settings.rotate_guide_length);
                self.rotate_handle = Some((id, outcome.handle));
                Handled::from_bool(self.scene.replace_shape(id, outcome.shape))
            }
            PointerEvent::DragEnd => {
                Handled::from_bool(self.rotate_handle.take().is_some())
            }
        }
    }

    fn handle_key(&mut self, command: KeyCommand) -> Handled {
        match command {
            KeyCommand::ClearSelection => self.select(None),
            KeyCommand::RemoveSelected => {
                let Some(id) = self.scene.remove_active() else {
                    return Handled::Ignored;
                };
                log::info!("removed shape {id}");
                self.select(None);
            }
            KeyCommand::Select(id) => self.select(Some(id)),
            KeyCommand::Step { direction, fast } => {
                let (target, sign) = direction.nudge_for(self.mode);
                let step = match target {
                    NudgeTarget::Rotation => self.settings.rotate_step,
                    NudgeTarget::Center(_) | NudgeTarget::Radius(_) => self.settings.move_step,
                };
                let multiplier = if fast {
                    self.settings.fast_multiplier
                } else {
                    1.0
                };
                return Handled::from_bool(self.step_selected(target, sign * step * multiplier));
            }
            KeyCommand::SetMode(mode) => self.mode = mode,
            KeyCommand::Duplicate => {
                self.duplicate();
            }
        }
        Handled::Applied
    }

    fn handle_speech(&mut self, command: SpeechCommand) -> Handled {
        match command {
            SpeechCommand::Select(id) => self.select(Some(id)),
            SpeechCommand::SetMode(mode) => self.mode = mode,
            SpeechCommand::Duplicate => {
                self.duplicate();
            }
            SpeechCommand::SetAxis(axis) => self.voice_axis = axis,
        }
        Handled::Applied
    }

    fn handle_volume(&mut self, level: f32) -> Handled {
        let Some(trend) = self.volume_window.push(
            level,
            self.settings.volume_floor,
            self.settings.volume_threshold,
        ) else {
            return Handled::Ignored;
        };
        let target = self.mode.nudge_target(self.voice_axis);
        let step = match target {
            NudgeTarget::Rotation => self.settings.volume_rotate_step,
            NudgeTarget::Center(_) | NudgeTarget::Radius(_) => self.settings.volume_move_step,
        };
        Handled::from_bool(self.step_selected(target, trend.sign() * step))
    }
}
