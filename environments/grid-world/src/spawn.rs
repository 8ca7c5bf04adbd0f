use rand::Rng;

use crate::error::GridError;
use crate::layout::Layout;
use crate::Position;

/// Draws a uniform cell from `1..=size` on both axes, resampling walls.
pub(crate) fn spawn<R: Rng + ?Sized>(
    layout: &Layout,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Position, GridError> {
    let size = layout.size();

    if !layout.open_cells().any(|(x, y)| x >= 1 && y >= 1) {
        return Err(GridError::NoOpenCell);
    }

    for _ in 0..max_attempts {
        let candidate = (rng.gen_range(1..=size), rng.gen_range(1..=size));

        if !layout.is_wall(candidate) {
            return Ok(candidate);
        }
    }

    Err(GridError::SpawnExhausted(max_attempts))
}
