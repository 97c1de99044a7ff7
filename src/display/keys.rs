pub const KEY_ESC: i32 = 27;

/// Keys the preview window reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    ToggleHelp,
    ToggleFullscreen,
}

impl KeyCommand {
    /// Map a raw key code from the window toolkit. `-1` means no key.
    pub fn from_key_code(code: i32) -> Option<Self> {
        if code == KEY_ESC {
            return Some(KeyCommand::Quit);
        }
        let ch = u8::try_from(code).ok()?;
        match ch.to_ascii_lowercase() {
            b'h' => Some(KeyCommand::ToggleHelp),
            b'f' => Some(KeyCommand::ToggleFullscreen),
            _ => None,
        }
    }
}

/// The two UI toggles. Nothing else survives between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub show_help: bool,
    pub fullscreen: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_help: true,
            fullscreen: false,
        }
    }
}

impl UiState {
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Flip fullscreen and return the new value for the window to apply.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(KeyCommand::from_key_code(KEY_ESC), Some(KeyCommand::Quit));
        for code in [b'h', b'H'] {
            assert_eq!(
                KeyCommand::from_key_code(code as i32),
                Some(KeyCommand::ToggleHelp)
            );
        }
        for code in [b'f', b'F'] {
            assert_eq!(
                KeyCommand::from_key_code(code as i32),
                Some(KeyCommand::ToggleFullscreen)
            );
        }
    }

    #[test]
    fn other_codes_are_ignored() {
        for code in [-1, 0, b'q' as i32, b'x' as i32, 255, 0x10_0048] {
            assert_eq!(KeyCommand::from_key_code(code), None, "code {code}");
        }
    }

    #[test]
    fn toggles_cancel_in_pairs() {
        let start = UiState::default();
        let mut ui = start;

        ui.toggle_help();
        assert!(!ui.show_help);
        ui.toggle_help();
        assert_eq!(ui, start);

        assert!(ui.toggle_fullscreen());
        assert!(!ui.toggle_fullscreen());
        assert_eq!(ui, start);
    }
}
