use eframe::egui;

use crate::dock::{dock_anchor, DockPosition};

/// Size of the menu viewport in logical points.
pub const MENU_WINDOW_SIZE: (f32, f32) = (260.0, 320.0);

/// Commands the host issues against the display surface. Both calls are
/// fire-and-forget; the adapter never blocks on the compositor and the
/// host does not wait for visual completion.
pub trait SurfaceController: Send {
    fn add_view(&mut self, dock: DockPosition);
    fn remove_view(&mut self);
}

/// Creates one [`SurfaceController`] per menu activation.
pub trait SurfaceFactory: Send + Sync {
    fn controller(&self) -> Box<dyn SurfaceController>;
}

/// Probe for the draw-over-other-surfaces capability.
pub trait OverlayPermission: Send + Sync {
    fn can_draw_overlays(&self) -> bool;
}

/// Desktop compositors do not gate always-on-top viewports, so the
/// production probe always grants.
pub struct GrantedPermission;

impl OverlayPermission for GrantedPermission {
    fn can_draw_overlays(&self) -> bool {
        true
    }
}

/// Seam over `egui::Context` so surface commands can be recorded in
/// tests without a real compositor.
pub trait ViewportCtx: Send + Sync {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
    fn monitor_size(&self) -> Option<(f32, f32)>;
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }

    fn monitor_size(&self) -> Option<(f32, f32)> {
        self.input(|i| i.viewport().monitor_size.map(|size| (size.x, size.y)))
    }
}

/// Surface adapter that shows and hides the menu viewport. Adding the
/// view positions the window at its dock anchor first; if the monitor
/// size is not known yet the window is shown where it is.
pub struct ViewportSurface<C: ViewportCtx> {
    ctx: C,
}

impl<C: ViewportCtx> ViewportSurface<C> {
    pub fn new(ctx: C) -> Self {
        Self { ctx }
    }
}

impl<C: ViewportCtx> SurfaceController for ViewportSurface<C> {
    fn add_view(&mut self, dock: DockPosition) {
        if let Some(monitor) = self.ctx.monitor_size() {
            let (x, y) = dock_anchor(dock, monitor, MENU_WINDOW_SIZE);
            self.ctx
                .send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
        }
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Minimized(false));
        self.ctx.request_repaint();
    }

    fn remove_view(&mut self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Visible(false));
    }
}

/// Hands each activation a viewport-backed controller for the shell's
/// egui context.
pub struct ViewportSurfaceFactory {
    ctx: egui::Context,
}

impl ViewportSurfaceFactory {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl SurfaceFactory for ViewportSurfaceFactory {
    fn controller(&self) -> Box<dyn SurfaceController> {
        Box::new(ViewportSurface::new(self.ctx.clone()))
    }
}
