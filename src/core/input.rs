use crate::shared::constants;

/// What a key press asks the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    StepBack,
    StepForward,
    SaveFrame,
    Quit,
    Unbound,
}

impl Command {
    /// Decodes the low byte of a highgui key code.
    pub fn from_key_code(code: i32) -> Self {
        match code & 0xFF {
            constants::KEY_SPACE => Command::TogglePause,
            constants::KEY_STEP_BACK => Command::StepBack,
            constants::KEY_STEP_FORWARD => Command::StepForward,
            constants::KEY_RETURN | constants::KEY_NEWLINE => Command::SaveFrame,
            constants::KEY_QUIT => Command::Quit,
            _ => Command::Unbound,
        }
    }
}
