use super::EditMode;
use crate::geometry::Axis;
use crate::transform::NudgeTarget;
use eframe::egui;

/// A single key press as delivered by the windowing layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyInput {
    pub key: egui::Key,
    pub modifiers: egui::Modifiers,
}

impl KeyInput {
    pub fn new(key: egui::Key, modifiers: egui::Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: egui::Key) -> Self {
        Self::new(key, egui::Modifiers::NONE)
    }

    fn fast(&self) -> bool {
        self.modifiers.ctrl || self.modifiers.command
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Screen up is negative Y when moving, but "grow" when scaling.
    pub(super) fn nudge_for(self, mode: EditMode) -> (NudgeTarget, f32) {
        match (mode, self) {
            (EditMode::Move, Direction::Left) => (NudgeTarget::Center(Axis::X), -1.0),
            (EditMode::Move, Direction::Right) => (NudgeTarget::Center(Axis::X), 1.0),
            (EditMode::Move, Direction::Up) => (NudgeTarget::Center(Axis::Y), -1.0),
            (EditMode::Move, Direction::Down) => (NudgeTarget::Center(Axis::Y), 1.0),
            (EditMode::Scale, Direction::Left) => (NudgeTarget::Radius(Axis::X), -1.0),
            (EditMode::Scale, Direction::Right) => (NudgeTarget::Radius(Axis::X), 1.0),
            (EditMode::Scale, Direction::Up) => (NudgeTarget::Radius(Axis::Y), 1.0),
            (EditMode::Scale, Direction::Down) => (NudgeTarget::Radius(Axis::Y), -1.0),
            (EditMode::Rotate, Direction::Left | Direction::Down) => (NudgeTarget::Rotation, -1.0),
            (EditMode::Rotate, Direction::Right | Direction::Up) => (NudgeTarget::Rotation, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum KeyCommand {
    ClearSelection,
    RemoveSelected,
    Select(u64),
    Step { direction: Direction, fast: bool },
    SetMode(EditMode),
    Duplicate,
}

fn digit(key: egui::Key) -> Option<u64> {
    let d = match key {
        egui::Key::Num0 => 0,
        egui::Key::Num1 => 1,
        egui::Key::Num2 => 2,
        egui::Key::Num3 => 3,
        egui::Key::Num4 => 4,
        egui::Key::Num5 => 5,
        egui::Key::Num6 => 6,
        egui::Key::Num7 => 7,
        egui::Key::Num8 => 8,
        egui::Key::Num9 => 9,
        _ => return None,
    };
    Some(d)
}

fn direction(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowLeft | egui::Key::H => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::L => Some(Direction::Right),
        egui::Key::ArrowUp | egui::Key::K => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::J => Some(Direction::Down),
        _ => None,
    }
}

pub(super) fn key_command(input: &KeyInput) -> Option<KeyCommand> {
    if let Some(direction) = direction(input.key) {
        return Some(KeyCommand::Step {
            direction,
            fast: input.fast(),
        });
    }
    // Shortcuts with ctrl/cmd belong to the host, not the editor.
    if input.fast() {
        return None;
    }
    match input.key {
        egui::Key::Escape => Some(KeyCommand::ClearSelection),
        egui::Key::Backspace | egui::Key::Delete => Some(KeyCommand::RemoveSelected),
        egui::Key::M => Some(KeyCommand::SetMode(EditMode::Move)),
        egui::Key::S => Some(KeyCommand::SetMode(EditMode::Scale)),
        egui::Key::R => Some(KeyCommand::SetMode(EditMode::Rotate)),
        egui::Key::Plus | egui::Key::P => Some(KeyCommand::Duplicate),
        // Shift+= is how most layouts type '+'.
        egui::Key::Equals if input.modifiers.shift => Some(KeyCommand::Duplicate),
        key => digit(key).map(KeyCommand::Select),
    }
}
