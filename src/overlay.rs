use crate::dock::DockPosition;
use crate::surface::SurfaceController;

type ExitListener = Box<dyn FnOnce() + Send>;

/// The floating menu as the host sees it: attach/detach commands plus
/// the user-exit callback. Rendering and gesture handling live in the
/// shell; this type only carries lifecycle.
pub struct OverlayWidget {
    surface: Box<dyn SurfaceController>,
    dock: DockPosition,
    exit_listener: Option<ExitListener>,
    attached: bool,
}

impl OverlayWidget {
    pub fn create_for_surface(surface: Box<dyn SurfaceController>, dock: DockPosition) -> Self {
        Self {
            surface,
            dock,
            exit_listener: None,
            attached: false,
        }
    }

    /// Register the callback fired when the user asks the menu to exit.
    /// The listener is consumed on first use, so it can fire at most
    /// once per widget.
    pub fn set_exit_listener(&mut self, listener: ExitListener) {
        self.exit_listener = Some(listener);
    }

    pub fn add_to_surface(&mut self) {
        if !self.attached {
            self.surface.add_view(self.dock);
            self.attached = true;
        }
    }

    pub fn remove_from_surface(&mut self) {
        if self.attached {
            self.surface.remove_view();
            self.attached = false;
        }
    }

    /// Fire the exit listener. Later calls are no-ops.
    pub fn notify_exit_requested(&mut self) {
        if let Some(listener) = self.exit_listener.take() {
            listener();
        }
    }

    pub fn dock(&self) -> DockPosition {
        self.dock
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
