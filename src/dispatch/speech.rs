use super::EditMode;
use crate::geometry::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechCommand {
    Select(u64),
    SetMode(EditMode),
    Duplicate,
    SetAxis(Axis),
}

/// Spoken forms of "R" that recognizers in Japanese locales produce.
const ROTATE_PHONETIC: [&str; 2] = ["あーる", "ある"];

/// Matches a recognized utterance against the voice commands.
///
/// Rules are tried in priority order and only the first match counts:
/// a digit anywhere selects that id, then mode letters, then `A`
/// (duplicate), then `X`/`Y` (voice axis). Matching is case-sensitive.
pub fn parse_utterance(text: &str) -> Option<SpeechCommand> {
    if let Some(d) = text.chars().find_map(|c| c.to_digit(10)) {
        return Some(SpeechCommand::Select(u64::from(d)));
    }
    let names_mode = text.contains(['M', 'S', 'R'])
        || ROTATE_PHONETIC.iter().any(|p| text.contains(p));
    if names_mode {
        let mode = match text {
            "M" => EditMode::Move,
            "S" => EditMode::Scale,
            _ => EditMode::Rotate,
        };
        return Some(SpeechCommand::SetMode(mode));
    }
    if text.contains('A') {
        return Some(SpeechCommand::Duplicate);
    }
    if text.contains('X') {
        return Some(SpeechCommand::SetAxis(Axis::X));
    }
    if text.contains('Y') {
        return Some(SpeechCommand::SetAxis(Axis::Y));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_win_over_everything() {
        assert_eq!(parse_utterance("5"), Some(SpeechCommand::Select(5)));
        assert_eq!(parse_utterance("MA 7 X"), Some(SpeechCommand::Select(7)));
    }

    #[test]
    fn exact_letters_pick_move_and_scale() {
        assert_eq!(parse_utterance("M"), Some(SpeechCommand::SetMode(EditMode::Move)));
        assert_eq!(parse_utterance("S"), Some(SpeechCommand::SetMode(EditMode::Scale)));
        assert_eq!(parse_utterance("R"), Some(SpeechCommand::SetMode(EditMode::Rotate)));
    }

    #[test]
    fn other_mode_utterances_rotate() {
        assert_eq!(parse_utterance("ある"), Some(SpeechCommand::SetMode(EditMode::Rotate)));
        assert_eq!(parse_utterance("あーる"), Some(SpeechCommand::SetMode(EditMode::Rotate)));
        assert_eq!(parse_utterance("MS"), Some(SpeechCommand::SetMode(EditMode::Rotate)));
    }

    #[test]
    fn duplicate_then_axis() {
        assert_eq!(parse_utterance("A"), Some(SpeechCommand::Duplicate));
        assert_eq!(parse_utterance("AX"), Some(SpeechCommand::Duplicate));
        assert_eq!(parse_utterance("X"), Some(SpeechCommand::SetAxis(Axis::X)));
        assert_eq!(parse_utterance("Y"), Some(SpeechCommand::SetAxis(Axis::Y)));
    }

    #[test]
    fn case_sensitive_and_unknown_text_is_ignored() {
        assert_eq!(parse_utterance("m"), None);
        assert_eq!(parse_utterance("hello"), None);
        assert_eq!(parse_utterance(""), None);
    }
}
