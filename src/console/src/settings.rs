use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub clear_screen: bool,
    pub pause_after_command: bool,
}

impl ConsoleSettings {
    pub fn interactive() -> Self {
        ConsoleSettings {
            clear_screen: true,
            pause_after_command: true,
        }
    }

    /// No screen clearing and no "press Enter" pauses, for piped input.
    pub fn plain() -> Self {
        ConsoleSettings {
            clear_screen: false,
            pause_after_command: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_mode(env::var("MODE").ok().as_deref())
    }

    fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some(mode) if mode.eq_ignore_ascii_case("PLAIN") => Self::plain(),
            _ => Self::interactive(),
        }
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::interactive()
    }
}
