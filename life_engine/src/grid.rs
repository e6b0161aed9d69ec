// grid.rs - bounded boolean cell matrix and the Conway transition rule

use rand::Rng;

/// Cell matrix with a hard edge: out-of-bounds neighbors are dead, there is
/// no wraparound. Indexed by column `x` in [0, width) and row `y` in
/// [0, height).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    pub fn dead(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Grid with every cell independently alive with probability 0.5.
    pub fn random(width: usize, height: usize) -> Self {
        let mut rng = rand::rng();
        let mut grid = Self::dead(width, height);
        for cell in &mut grid.cells {
            *cell = rng.random_bool(0.5);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// State of the cell at (x, y); dead when out of bounds.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[y * self.width + x]
    }

    /// Bounds-checked single-cell write. Returns whether the write landed;
    /// out-of-range coordinates are a no-op.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.cells[y * self.width + x] = alive;
        true
    }

    /// Kill every cell in place. No reallocation.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Alive cells among the 8 Moore neighbors that lie within bounds.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height
                    && self.cells[ny as usize * self.width + nx as usize]
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Next generation as a fresh grid of identical dimensions; `self` is
    /// left untouched so the caller can swap the reference.
    pub fn step(&self) -> Grid {
        let mut next = Grid::dead(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[y * self.width + x];
                let neighbors = self.live_neighbors(x, y);

                let next_state = match (alive, neighbors) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };

                next.cells[y * self.width + x] = next_state;
            }
        }
        next
    }
}
