use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::GridError;

/// The four moves an agent can intend to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "grid-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

    /// Unit step in the x-y coordinate system, `Up` increases y.
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
            Action::Up => (0, 1),
            Action::Down => (0, -1),
        }
    }

    /// The two orthogonal moves the agent may slip into instead.
    pub fn orthogonal(self) -> [Action; 2] {
        match self {
            Action::Left | Action::Right => [Action::Up, Action::Down],
            Action::Up | Action::Down => [Action::Left, Action::Right],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
        }
    }
}

impl Distribution<Action> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        match rng.gen_range(0..4) {
            0 => Action::Left,
            1 => Action::Right,
            2 => Action::Up,
            _ => Action::Down,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Action::Left),
            "right" => Ok(Action::Right),
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            other => Err(GridError::UnknownAction(other.to_owned())),
        }
    }
}
