/*
 * Command Module
 *
 * The show's command surface. UI buttons, keyboard shortcuts and headless
 * scripts all funnel into the same five ShowCommand values, which the
 * SwarmController executes.
 *
 * Text form, one command per entry, optional key=value overrides:
 *   reset-camera [duration=2]
 *   reset-formation [duration=2]
 *   sphere [radius=10] [duration=2]
 *   helix [radius=10] [height=20] [duration=2]
 *   reset-all [duration=2]
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_DURATION: f32 = 2.0;
pub const DEFAULT_RADIUS: f32 = 10.0;
pub const DEFAULT_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShowCommand {
    ResetCamera { duration: f32 },
    ResetFormation { duration: f32 },
    FormSphere { radius: f32, duration: f32 },
    FormDoubleHelix { radius: f32, height: f32, duration: f32 },
    ResetAll { duration: f32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` does not take a `{key}` parameter")]
    UnknownParameter { command: String, key: String },
    #[error("expected key=value, got `{0}`")]
    MalformedParameter(String),
    #[error("invalid number `{value}` for `{key}`")]
    InvalidNumber { key: String, value: String },
}

impl ShowCommand {
    pub fn reset_camera() -> Self {
        ShowCommand::ResetCamera {
            duration: DEFAULT_DURATION,
        }
    }

    pub fn reset_formation() -> Self {
        ShowCommand::ResetFormation {
            duration: DEFAULT_DURATION,
        }
    }

    pub fn sphere() -> Self {
        ShowCommand::FormSphere {
            radius: DEFAULT_RADIUS,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn double_helix() -> Self {
        ShowCommand::FormDoubleHelix {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn reset_all() -> Self {
        ShowCommand::ResetAll {
            duration: DEFAULT_DURATION,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShowCommand::ResetCamera { .. } => "reset-camera",
            ShowCommand::ResetFormation { .. } => "reset-formation",
            ShowCommand::FormSphere { .. } => "sphere",
            ShowCommand::FormDoubleHelix { .. } => "helix",
            ShowCommand::ResetAll { .. } => "reset-all",
        }
    }

    pub fn duration(&self) -> f32 {
        match *self {
            ShowCommand::ResetCamera { duration }
            | ShowCommand::ResetFormation { duration }
            | ShowCommand::FormSphere { duration, .. }
            | ShowCommand::FormDoubleHelix { duration, .. }
            | ShowCommand::ResetAll { duration } => duration,
        }
    }

    // Overwrite one named numeric field, rejecting keys this command lacks
    fn set(&mut self, key: &str, value: f32) -> Result<(), CommandError> {
        let slot = match (self, key) {
            (ShowCommand::ResetCamera { duration }, "duration")
            | (ShowCommand::ResetFormation { duration }, "duration")
            | (ShowCommand::FormSphere { duration, .. }, "duration")
            | (ShowCommand::FormDoubleHelix { duration, .. }, "duration")
            | (ShowCommand::ResetAll { duration }, "duration") => duration,
            (ShowCommand::FormSphere { radius, .. }, "radius")
            | (ShowCommand::FormDoubleHelix { radius, .. }, "radius") => radius,
            (ShowCommand::FormDoubleHelix { height, .. }, "height") => height,
            (command, key) => {
                return Err(CommandError::UnknownParameter {
                    command: command.name().to_string(),
                    key: key.to_string(),
                })
            }
        };
        *slot = value;
        Ok(())
    }
}

impl FromStr for ShowCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        let mut command = match head.to_ascii_lowercase().as_str() {
            "reset-camera" => ShowCommand::reset_camera(),
            "reset-formation" => ShowCommand::reset_formation(),
            "sphere" => ShowCommand::sphere(),
            "helix" | "double-helix" => ShowCommand::double_helix(),
            "reset-all" => ShowCommand::reset_all(),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        for word in words {
            let (key, value) = word
                .split_once('=')
                .ok_or_else(|| CommandError::MalformedParameter(word.to_string()))?;
            let number: f32 = value.parse().map_err(|_| CommandError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            command.set(key, number)?;
        }

        Ok(command)
    }
}

impl fmt::Display for ShowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShowCommand::FormSphere { radius, duration } => {
                write!(f, "sphere radius={} duration={}", radius, duration)
            }
            ShowCommand::FormDoubleHelix {
                radius,
                height,
                duration,
            } => write!(
                f,
                "helix radius={} height={} duration={}",
                radius, height, duration
            ),
            other => write!(f, "{} duration={}", other.name(), other.duration()),
        }
    }
}

/// Parse a `;`-separated list of commands. Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ShowCommand>, CommandError> {
    script
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}
