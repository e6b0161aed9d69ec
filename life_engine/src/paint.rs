// paint.rs - pointer-to-cell mapping and the drag-paint state machine

/// Pointer buttons the edit layer distinguishes. Primary paints live cells,
/// secondary erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Drag-paint state. The two active states are mutually exclusive: pressing
/// the other button switches, releasing a button only exits its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Drawing,
    Erasing,
}

impl PaintState {
    pub fn press(self, button: PointerButton) -> PaintState {
        match button {
            PointerButton::Primary => PaintState::Drawing,
            PointerButton::Secondary => PaintState::Erasing,
        }
    }

    pub fn release(self, button: PointerButton) -> PaintState {
        match (self, button) {
            (PaintState::Drawing, PointerButton::Primary) => PaintState::Idle,
            (PaintState::Erasing, PointerButton::Secondary) => PaintState::Idle,
            (state, _) => state,
        }
    }

    /// Value a move event writes at the hovered cell: alive while drawing,
    /// dead while erasing, nothing while idle.
    pub fn brush(self) -> Option<bool> {
        match self {
            PaintState::Idle => None,
            PaintState::Drawing => Some(true),
            PaintState::Erasing => Some(false),
        }
    }
}

/// Map canvas pixel coordinates to a cell coordinate by integer division.
/// The result is not guaranteed to be inside the grid; writes derived from
/// it must go through the grid's bounds-checked setter.
pub fn pixel_to_cell(px: u32, py: u32, cell_size: u32) -> (usize, usize) {
    debug_assert!(cell_size >= 1);
    ((px / cell_size) as usize, (py / cell_size) as usize)
}
