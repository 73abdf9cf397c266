//! The closed set of tracked consoles

use std::fmt;

/// Hardware console whose firmware version is watched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Console {
    /// PlayStation 4
    Ps4,
    /// PlayStation 5
    Ps5,
}

impl Console {
    /// All tracked consoles, in the order they are checked every cycle
    pub const ALL: [Console; 2] = [Console::Ps4, Console::Ps5];

    /// Lowercase identifier used in support page URLs and the state file
    pub fn slug(&self) -> &'static str {
        match self {
            Console::Ps4 => "ps4",
            Console::Ps5 => "ps5",
        }
    }

    /// Name shown in notifications
    pub fn display_name(&self) -> &'static str {
        match self {
            Console::Ps4 => "PS4",
            Console::Ps5 => "PS5",
        }
    }
}

impl fmt::Display for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Console {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ps4" => Ok(Console::Ps4),
            "ps5" => Ok(Console::Ps5),
            _ => Err(()),
        }
    }
}
