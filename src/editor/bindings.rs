//! Maps raw input to editor commands

use glam::Vec3;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::core::input::InputState;
use super::command::EditorCommand;

/// Number keys bound to palette slots, in order
pub const PALETTE_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

pub const SAVE_KEY: KeyCode = KeyCode::KeyK;
pub const LOAD_KEY: KeyCode = KeyCode::KeyL;

/// Commands triggered this frame, in a fixed order: edits, paints, spacing,
/// then save and load.
///
/// Only edges count (a held button fires once). Palette slots beyond the
/// number keys are ignored.
pub fn commands(input: &InputState, palette: &[[f32; 3]]) -> Vec<EditorCommand> {
    let mut out = Vec::new();

    if input.is_mouse_button_just_pressed(MouseButton::Left) {
        out.push(EditorCommand::AddVoxel);
    }
    if input.is_mouse_button_just_pressed(MouseButton::Right) {
        out.push(EditorCommand::RemoveVoxel);
    }

    for (key, rgb) in PALETTE_KEYS.iter().zip(palette) {
        if input.is_key_just_pressed(*key) {
            out.push(EditorCommand::Paint(Vec3::from_array(*rgb)));
        }
    }

    let scroll = input.scroll_delta();
    if scroll != 0.0 {
        out.push(EditorCommand::AdjustSpacing(scroll.signum()));
    }

    if input.is_key_just_pressed(SAVE_KEY) {
        out.push(EditorCommand::Save);
    }
    if input.is_key_just_pressed(LOAD_KEY) {
        out.push(EditorCommand::Load);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::EditorConfig;

    fn palette() -> Vec<[f32; 3]> {
        EditorConfig::default().palette
    }

    #[test]
    fn test_no_input_no_commands() {
        let input = InputState::new();
        assert!(commands(&input, &palette()).is_empty());
    }

    #[test]
    fn test_mouse_buttons() {
        let mut input = InputState::new();
        input.mouse_down(MouseButton::Left);
        input.mouse_down(MouseButton::Right);
        assert_eq!(
            commands(&input, &palette()),
            vec![EditorCommand::AddVoxel, EditorCommand::RemoveVoxel]
        );

        // Held across frames: fires once
        input.end_frame();
        assert!(commands(&input, &palette()).is_empty());
    }

    #[test]
    fn test_palette_keys() {
        let mut input = InputState::new();
        input.key_down(KeyCode::Digit3);
        assert_eq!(commands(&input, &palette()), vec![EditorCommand::Paint(Vec3::new(0.0, 0.0, 1.0))]);

        input.end_frame();
        input.key_down(KeyCode::Digit5);
        assert_eq!(commands(&input, &palette()), vec![EditorCommand::Paint(Vec3::ONE)]);
    }

    #[test]
    fn test_short_palette_ignores_extra_keys() {
        let mut input = InputState::new();
        input.key_down(KeyCode::Digit4);
        assert!(commands(&input, &[[1.0, 0.0, 0.0]]).is_empty());
    }

    #[test]
    fn test_scroll_steps_by_sign() {
        let mut input = InputState::new();
        input.scroll(3.5);
        assert_eq!(commands(&input, &palette()), vec![EditorCommand::AdjustSpacing(1.0)]);

        input.end_frame();
        input.scroll(-0.2);
        assert_eq!(commands(&input, &palette()), vec![EditorCommand::AdjustSpacing(-1.0)]);
    }

    #[test]
    fn test_save_and_load_keys() {
        let mut input = InputState::new();
        input.key_down(KeyCode::KeyL);
        input.key_down(KeyCode::KeyK);
        assert_eq!(commands(&input, &palette()), vec![EditorCommand::Save, EditorCommand::Load]);
    }
}
