use crate::encode::pack_pairs;
use crate::error::{ProjectNameError, SpeedError};
use crate::registers::{MAX_PROJECT_NAME_LEN, MAX_SPEED, PROJECT_NAME_SUFFIX};

/// Name of a project file stored on the controller
///
/// Only printable ASCII is accepted so that each character maps to exactly one byte.
/// A name with an odd number of characters is accepted, but its last character is
/// not transmitted because registers are filled two characters at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectName {
    value: String,
}

/// Project speed as a percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed {
    value: u16,
}

/// Status flags reported by the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RobotStatus {
    /// the controller reports an error
    pub error_present: bool,
    /// a project is currently running
    pub project_running: bool,
}

impl ProjectName {
    /// Validate a project name
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectNameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ProjectNameError::Empty);
        }
        if let Some((position, ch)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| !(' '..='~').contains(c))
        {
            return Err(ProjectNameError::NotPrintable { position, ch });
        }
        if value.len() > MAX_PROJECT_NAME_LEN {
            return Err(ProjectNameError::TooLong {
                len: value.len(),
                max: MAX_PROJECT_NAME_LEN,
            });
        }
        if value.len() % 2 != 0 {
            tracing::warn!(
                "project name '{value}' has an odd length, the last character will not be sent"
            );
        }
        Ok(Self { value })
    }

    /// The name as given
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Register payload for the project name holding registers
    pub fn to_registers(&self) -> Vec<u16> {
        let mut registers = pack_pairs(&self.value);
        registers.extend_from_slice(&PROJECT_NAME_SUFFIX);
        registers
    }
}

impl std::str::FromStr for ProjectName {
    type Err = ProjectNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl Speed {
    /// Validate a speed percentage
    pub fn new(value: u16) -> Result<Self, SpeedError> {
        if value > MAX_SPEED {
            return Err(SpeedError::OutOfRange(value));
        }
        Ok(Self { value })
    }

    /// Raw register value
    pub fn get(self) -> u16 {
        self.value
    }
}

impl std::str::FromStr for Speed {
    type Err = SpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.parse()?)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.value)
    }
}

impl std::fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error present: {} project running: {}",
            self.error_present, self.project_running
        )
    }
}
