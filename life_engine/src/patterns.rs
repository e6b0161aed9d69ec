// patterns.rs - classic seed patterns stamped onto the grid

use crate::grid::Grid;

/// A named pattern as (dx, dy) cell offsets from its own top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (2, 1), (2, 0), (1, 2), (0, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    fn extent(&self) -> (u32, u32) {
        let mut max_x = 0;
        let mut max_y = 0;
        for &(dx, dy) in self.cells {
            max_x = max_x.max(dx);
            max_y = max_y.max(dy);
        }
        (max_x + 1, max_y + 1)
    }

    /// Clear the grid and write the pattern centered on it. Cells that fall
    /// outside a small grid are dropped, not an error.
    pub fn stamp_centered(&self, grid: &mut Grid) {
        grid.clear();
        let (pw, ph) = self.extent();
        let ox = (grid.width() as u32).saturating_sub(pw) / 2;
        let oy = (grid.height() as u32).saturating_sub(ph) / 2;
        for &(dx, dy) in self.cells {
            grid.set((ox + dx) as usize, (oy + dy) as usize, true);
        }
    }
}
