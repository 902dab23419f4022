use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use eframe::egui;

use hoverdock::gui::HoverApp;
use hoverdock::host::{ExitFlag, HoverMenuHost, LifecycleObserver};
use hoverdock::logging;
use hoverdock::presence::{NoopAnnouncer, PresenceAnnouncer, StatusAnnouncer};
use hoverdock::settings::{default_settings_path, Settings};
use hoverdock::signal::StartSignal;
use hoverdock::surface::{GrantedPermission, ViewportSurfaceFactory, MENU_WINDOW_SIZE};

/// Observer the shell registers so lifecycle edges show up in the log.
struct LogObserver;

impl LifecycleObserver for LogObserver {
    fn overlay_launched(&mut self, signal: &StartSignal) {
        tracing::info!(action = ?signal.action, "menu launched");
    }

    fn exiting_by_user_request(&mut self) {
        tracing::info!("menu exiting by user request");
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(&default_settings_path())?;
    let _log_guard = logging::init(
        settings.debug_logging,
        settings.log_dir.as_deref().map(Path::new),
    );

    let exit_flag = Arc::new(AtomicBool::new(false));

    // The viewport starts hidden; the surface adapter shows it once the
    // start signal attaches the menu.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([MENU_WINDOW_SIZE.0, MENU_WINDOW_SIZE.1])
            .with_always_on_top()
            .with_decorations(false)
            .with_resizable(false)
            .with_visible(false),
        ..Default::default()
    };

    let flag = exit_flag.clone();
    let presence = settings.presence_announcement;
    eframe::run_native(
        "hoverdock",
        native_options,
        Box::new(move |cc| {
            let announcer: Box<dyn PresenceAnnouncer> = if presence {
                Box::new(StatusAnnouncer)
            } else {
                Box::new(NoopAnnouncer)
            };
            let (mut host, handle) = HoverMenuHost::new(
                Arc::new(ViewportSurfaceFactory::new(cc.egui_ctx.clone())),
                Arc::new(GrantedPermission),
                announcer,
                Box::new(ExitFlag::new(flag.clone())),
            );
            host.add_observer(Box::new(LogObserver));
            handle.deliver_start(Some(StartSignal::with_action("show")));
            Box::new(HoverApp::new(host, flag.clone()))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the menu shell: {err}"))?;

    Ok(())
}
