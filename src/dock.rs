/// Screen edge the floating menu docks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEdge {
    Left,
    Right,
}

/// Placement policy for the floating menu. The host always uses
/// [`DockPosition::default`]; the dock is not a user-facing option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockPosition {
    pub edge: DockEdge,
    /// 0.0 = top of the monitor, 1.0 = bottom. The menu is centered on
    /// this fraction.
    pub vertical_fraction: f32,
}

impl Default for DockPosition {
    fn default() -> Self {
        Self {
            edge: DockEdge::Right,
            vertical_fraction: 0.5,
        }
    }
}

/// Top-left corner for a window of `window` size docked on a monitor of
/// `monitor` size. The result is clamped so the window stays fully on
/// screen.
pub fn dock_anchor(dock: DockPosition, monitor: (f32, f32), window: (f32, f32)) -> (f32, f32) {
    let x = match dock.edge {
        DockEdge::Left => 0.0,
        DockEdge::Right => (monitor.0 - window.0).max(0.0),
    };
    let y = (monitor.1 * dock.vertical_fraction - window.1 / 2.0)
        .clamp(0.0, (monitor.1 - window.1).max(0.0));
    (x, y)
}
