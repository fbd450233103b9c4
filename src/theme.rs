use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two visual modes. Serializes/deserializes as the literal strings
/// "light" and "dark", which is also what gets persisted to disk.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    /// The fallback whenever we can't do better
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme for a toggle position. Checked means dark.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Position the toggle should show for this theme
    pub fn toggle_checked(self) -> bool {
        self.is_dark()
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(anyhow!("Invalid theme: {s}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{s}")
    }
}

// These impls are needed for serde
impl TryFrom<String> for Theme {
    type Error = <Theme as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.to_string()
    }
}
