use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

pub use action::Action;
pub use configuration::{default_walls, GridConfiguration, MAX_GRID_SIZE};
pub use error::GridError;
pub use gridworld_environment::Environment;
pub use layout::{Cell, Layout};
pub use noise::{TransitionNoise, TRANSITION_PROBABILITIES};

mod action;
mod configuration;
mod error;
mod layout;
mod noise;
mod spawn;

/// A cell coordinate, `(x, y)`.
pub type Position = (i32, i32);

/// Stochastic grid world with walls and a single rewarding goal cell.
///
/// Every intended action is executed as intended with probability 0.8 and
/// slips into one of the two orthogonal moves otherwise. Moves into walls or
/// off the grid leave the agent where it is.
pub struct GridWorld<R = StdRng> {
    layout: Layout,
    noise: TransitionNoise,
    rewards: Vec<f64>,

    start: Position,
    goal: Position,
    position: Position,

    rng: R,
}

impl GridWorld<StdRng> {
    pub fn new(configuration: GridConfiguration) -> Result<Self, GridError> {
        GridWorld::with_rng(configuration, StdRng::from_entropy())
    }

    pub fn seeded(configuration: GridConfiguration, seed: u64) -> Result<Self, GridError> {
        GridWorld::with_rng(configuration, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridWorld<R> {
    /// Builds the world, drawing random spawns from `rng` which then drives
    /// the transition noise.
    pub fn with_rng(configuration: GridConfiguration, mut rng: R) -> Result<Self, GridError> {
        if configuration.size > MAX_GRID_SIZE {
            return Err(GridError::InvalidDimensions(configuration.size));
        }
        let size = configuration.size as i32;
        let layout = Layout::new(size, &configuration.walls);

        let start = if configuration.dynamic_start {
            spawn::spawn(&layout, &mut rng, configuration.max_spawn_attempts)?
        } else {
            (0, 0)
        };
        if layout.is_wall(start) {
            return Err(GridError::Wall(start.0, start.1));
        }

        let goal = if configuration.dynamic_goal {
            spawn::spawn(&layout, &mut rng, configuration.max_spawn_attempts)?
        } else {
            configuration.goal_location
        };
        let goal_index = layout
            .index(goal)
            .ok_or(GridError::OutOfBounds(goal.0, goal.1))?;
        if layout.is_wall(goal) {
            return Err(GridError::Wall(goal.0, goal.1));
        }

        let side = (size + 1) as usize;
        let mut rewards = vec![0.; side * side];
        rewards[goal_index] = 1.;

        debug!(
            "Built {0}x{0} grid world, start at {1:?}, goal at {2:?}",
            side, start, goal
        );

        Ok(GridWorld {
            layout,
            noise: TransitionNoise::new()?,
            rewards,
            start,
            goal,
            position: start,
            rng,
        })
    }

    pub fn grid(&self) -> &Layout {
        &self.layout
    }

    pub fn size(&self) -> i32 {
        self.layout.size()
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Where the agent spawned, and where `reset` puts it back.
    pub fn start_location(&self) -> Position {
        self.start
    }

    /// Location of the goal. Meant for evaluation, a policy should not peek.
    pub fn goal_location(&self) -> Position {
        self.goal
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.layout.cell((x, y))
    }

    /// Resolves an intended action into the one the environment executes.
    pub fn take_action(&mut self, intended: Action) -> Action {
        let executed = self.noise.sample(intended, &mut self.rng);

        debug!("Action executed: {}, resulted: {}", intended, executed);

        executed
    }

    pub fn valid_action(&self, x: i32, y: i32) -> bool {
        if !self.layout.contains((x, y)) {
            debug!("Invalid action, ({}, {}) is outside the grid", x, y);
            return false;
        }
        if self.layout.is_wall((x, y)) {
            debug!("Invalid action, ({}, {}) is a wall", x, y);
            return false;
        }

        true
    }

    /// Moves the agent by an already resolved action if the target cell is legal.
    pub fn execute(&mut self, executed: Action) -> Position {
        let (dx, dy) = executed.displacement();
        let (x, y) = (self.position.0 + dx, self.position.1 + dy);

        if self.valid_action(x, y) {
            self.position = (x, y);
        } else {
            debug!("Staying at {:?}", self.position);
        }

        self.position
    }

    /// Advances the world by one noisy step and returns the agent position.
    pub fn update_state(&mut self, intended: Action) -> Position {
        let executed = self.take_action(intended);

        self.execute(executed)
    }

    pub fn reward_at(&self, (x, y): Position) -> Result<f64, GridError> {
        self.layout
            .index((x, y))
            .map(|index| self.rewards[index])
            .ok_or(GridError::OutOfBounds(x, y))
    }

    pub fn is_goal(&self) -> bool {
        self.position == self.goal
    }

    /// Text picture of the grid with `y = size` on top.
    ///
    /// `#` marks walls, `*` the goal and `^` the agent, which is drawn at the
    /// start cell unless `agent` says otherwise.
    pub fn layout(&self, agent: Option<Position>) -> String {
        let agent = agent.unwrap_or(self.start);
        info!("Agent's current location: x {}, y {}", agent.0, agent.1);

        let size = self.layout.size();
        let mut picture = String::new();

        for y in (0..=size).rev() {
            let row: Vec<&str> = (0..=size)
                .map(|x| {
                    if (x, y) == agent {
                        "^"
                    } else if (x, y) == self.goal {
                        "*"
                    } else if self.layout.is_wall((x, y)) {
                        "#"
                    } else {
                        "."
                    }
                })
                .collect();

            picture.push_str(&row.join(" "));
            picture.push('\n');
        }

        picture
    }
}

impl<R: Rng> Environment for GridWorld<R> {
    type State = Position;
    type Action = Action;

    fn state(&self) -> Self::State {
        self.current_position()
    }

    fn step(&mut self, action: Self::Action) -> Self::State {
        self.update_state(action)
    }

    fn done(&self) -> bool {
        self.is_goal()
    }

    fn reset(&mut self) {
        self.position = self.start;
    }

    fn render(&self) -> String {
        self.layout(Some(self.position))
    }

    fn reward(&self) -> f64 {
        self.reward_at(self.position).unwrap_or_default()
    }
}

impl<R> fmt::Display for GridWorld<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.layout.size() + 1;

        write!(
            f,
            "{}x{} grid world, agent at ({}, {})",
            side, side, self.position.0, self.position.1
        )
    }
}
