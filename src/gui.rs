use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::host::HoverMenuHost;

/// eframe shell hosting the menu viewport. `update` runs on the
/// platform's event-dispatch thread and is the only place host state is
/// touched, so the host needs no locking.
pub struct HoverApp {
    host: HoverMenuHost,
    exit_flag: Arc<AtomicBool>,
    closing: bool,
}

impl HoverApp {
    pub fn new(host: HoverMenuHost, exit_flag: Arc<AtomicBool>) -> Self {
        Self {
            host,
            exit_flag,
            closing: false,
        }
    }
}

impl eframe::App for HoverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.host.process_events();

        if self.exit_flag.load(Ordering::SeqCst) && !self.closing {
            self.closing = true;
            tracing::debug!("termination requested; closing the menu viewport");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let mut exit_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("hoverdock");
            ui.separator();
            ui.label("Floating menu");
            ui.add_space(8.0);
            if ui.button("Exit").clicked() {
                exit_clicked = true;
            }
        });

        if exit_clicked {
            self.host.notify_user_exit();
            self.host.process_events();
        }

        // The host may receive signals while the viewport is hidden.
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.host.on_destroy();
    }
}
