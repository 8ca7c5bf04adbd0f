use std::default::Default;

use crate::Position;

/// Largest `size` a grid world accepts.
pub const MAX_GRID_SIZE: usize = 1024;

/// Holds configuration options of a grid world
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "grid-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GridConfiguration {
    /// The largest coordinate on both axes, the grid spans `0..=size`, at most `MAX_GRID_SIZE`
    pub size: usize,

    /// Spawn the agent on a random open cell instead of the origin
    pub dynamic_start: bool,

    /// Place the goal on a random open cell instead of `goal_location`
    pub dynamic_goal: bool,

    /// Goal used when `dynamic_goal` is off
    pub goal_location: Position,

    /// Wall cells, anything outside the grid is ignored
    pub walls: Vec<Position>,

    /// How many random draws a spawn gets before giving up
    pub max_spawn_attempts: usize,
}

impl Default for GridConfiguration {
    fn default() -> Self {
        GridConfiguration {
            size: 10,
            dynamic_start: false,
            dynamic_goal: false,
            goal_location: (10, 10),
            walls: default_walls(),
            max_spawn_attempts: 10_000,
        }
    }
}

/// Two crossing partitions with a doorway in every room.
pub fn default_walls() -> Vec<Position> {
    vec![
        (5, 0),
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 5),
        (5, 6),
        (5, 7),
        (5, 9),
        (5, 10),
        (0, 5),
        (2, 5),
        (3, 5),
        (4, 5),
        (6, 4),
        (7, 4),
        (9, 4),
        (10, 4),
    ]
}
