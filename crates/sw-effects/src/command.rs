//! Operator commands.
//!
//! Commands arrive from the presentation layer as short text such as
//! `weather rainy` or `hazard strong_light`.  Parsing is the only place an
//! out-of-domain value can appear, so it is also the only place an
//! invalid-command error is raised.
//!
//! | Text                                   | Command                        |
//! |----------------------------------------|--------------------------------|
//! | `start` / `stop`                       | `Start` / `Stop`               |
//! | `window open\|closed\|toggle`          | `Window(..)`                   |
//! | `weather sunny\|cloudy\|rainy`         | `Weather(..)`                  |
//! | `hazard <name>`                        | `Hazard(..)` (toggles)         |

use std::fmt;
use std::str::FromStr;

use crate::{EffectError, Hazard, Weather};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WindowCommand {
    Open,
    Close,
    Toggle,
}

impl FromStr for WindowCommand {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open"             => Ok(WindowCommand::Open),
            "close" | "closed" => Ok(WindowCommand::Close),
            "toggle"           => Ok(WindowCommand::Toggle),
            _                  => Err(EffectError::UnknownWindowState(s.to_owned())),
        }
    }
}

/// A single operator command.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Command {
    Start,
    Stop,
    Window(WindowCommand),
    Weather(Weather),
    /// Toggle one hazard flag.
    Hazard(Hazard),
}

impl FromStr for Command {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().map(str::to_ascii_lowercase);
        let arg = words.next();
        if words.next().is_some() {
            return Err(EffectError::InvalidCommand(s.to_owned()));
        }

        match (verb.as_deref(), arg) {
            (Some("start"), None)        => Ok(Command::Start),
            (Some("stop"), None)         => Ok(Command::Stop),
            (Some("window"), Some(arg))  => Ok(Command::Window(arg.parse()?)),
            (Some("weather"), Some(arg)) => Ok(Command::Weather(arg.parse()?)),
            (Some("hazard"), Some(arg))  => Ok(Command::Hazard(arg.parse()?)),
            _                            => Err(EffectError::InvalidCommand(s.to_owned())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Start                         => f.write_str("start"),
            Command::Stop                          => f.write_str("stop"),
            Command::Window(WindowCommand::Open)   => f.write_str("window open"),
            Command::Window(WindowCommand::Close)  => f.write_str("window closed"),
            Command::Window(WindowCommand::Toggle) => f.write_str("window toggle"),
            Command::Weather(w)                    => write!(f, "weather {w}"),
            Command::Hazard(h)                     => write!(f, "hazard {h}"),
        }
    }
}
