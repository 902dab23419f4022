use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::dock::DockPosition;
use crate::overlay::OverlayWidget;
use crate::presence::{Announcement, PresenceAnnouncer, STATUS_CHANNEL_ID, STATUS_NOTIFICATION_ID};
use crate::signal::{StartDirective, StartSignal};
use crate::surface::{OverlayPermission, SurfaceFactory};

/// Events delivered to the host's dispatch loop.
#[derive(Debug)]
pub enum HostEvent {
    Start(Option<StartSignal>),
    ExitRequested,
    Terminate,
}

/// Clonable delivery capability for [`HostEvent`]s. The platform shell
/// uses it to deliver start and termination signals; the menu's exit
/// listener uses it to report a user exit.
#[derive(Clone)]
pub struct HostHandle {
    tx: Sender<HostEvent>,
}

impl HostHandle {
    pub fn deliver_start(&self, signal: Option<StartSignal>) {
        let _ = self.tx.send(HostEvent::Start(signal));
    }

    pub fn deliver_terminate(&self) {
        let _ = self.tx.send(HostEvent::Terminate);
    }

    fn exit_requested(&self) {
        let _ = self.tx.send(HostEvent::ExitRequested);
    }
}

/// Lifecycle edges a surrounding application can observe without
/// touching the state machine itself.
pub trait LifecycleObserver: Send {
    /// The menu finished construction and is on the surface.
    fn overlay_launched(&mut self, _signal: &StartSignal) {}

    /// The user asked the menu to exit; termination follows immediately.
    fn exiting_by_user_request(&mut self) {}
}

/// Asks the platform to tear the hosting process down.
pub trait ProcessTerminator: Send {
    fn request_termination(&self);
}

/// Terminator backed by a shared flag the shell polls each frame.
pub struct ExitFlag(Arc<AtomicBool>);

impl ExitFlag {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self(flag)
    }
}

impl ProcessTerminator for ExitFlag {
    fn request_termination(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Long-lived background host owning at most one floating menu.
///
/// `overlay` doubles as the active flag: an attached menu and the
/// active state cannot drift apart. All methods run on the shell's
/// event-dispatch thread, so no locking is needed inside the host.
pub struct HoverMenuHost {
    surfaces: Arc<dyn SurfaceFactory>,
    permission: Arc<dyn OverlayPermission>,
    terminator: Box<dyn ProcessTerminator>,
    observers: Vec<Box<dyn LifecycleObserver>>,
    overlay: Option<OverlayWidget>,
    announcement: Option<Announcement>,
    events: Receiver<HostEvent>,
    handle: HostHandle,
}

impl HoverMenuHost {
    /// Construct the host and register the presence announcement. The
    /// announcer runs exactly once, here; later start signals never
    /// re-register.
    pub fn new(
        surfaces: Arc<dyn SurfaceFactory>,
        permission: Arc<dyn OverlayPermission>,
        mut announcer: Box<dyn PresenceAnnouncer>,
        terminator: Box<dyn ProcessTerminator>,
    ) -> (Self, HostHandle) {
        let announcement = announcer.register(STATUS_NOTIFICATION_ID, STATUS_CHANNEL_ID);
        if announcement.is_none() {
            tracing::debug!("no presence announcement; host runs best-effort");
        }
        let (tx, rx) = mpsc::channel();
        let handle = HostHandle { tx };
        let host = Self {
            surfaces,
            permission,
            terminator,
            observers: Vec::new(),
            overlay: None,
            announcement,
            events: rx,
            handle: handle.clone(),
        };
        (host, handle)
    }

    pub fn add_observer(&mut self, observer: Box<dyn LifecycleObserver>) {
        self.observers.push(observer);
    }

    pub fn is_active(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    /// Drain pending events on the dispatch thread.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                HostEvent::Start(signal) => {
                    let directive = self.on_start(signal);
                    tracing::trace!(?directive, "start signal handled");
                }
                HostEvent::ExitRequested => self.on_exit_requested(),
                HostEvent::Terminate => self.on_destroy(),
            }
        }
    }

    /// Activation entry point. A duplicate signal while the menu is
    /// attached is ignored; a refused activation terminates the host
    /// instead of returning an error to the signal's issuer.
    pub fn on_start(&mut self, signal: Option<StartSignal>) -> StartDirective {
        if !self.permission.can_draw_overlays() {
            tracing::error!("cannot display the menu without the draw-overlay capability");
            self.request_close();
            return StartDirective::NotSticky;
        }

        let Some(signal) = signal else {
            tracing::error!("received an empty start signal; not creating the menu");
            self.request_close();
            return StartDirective::NotSticky;
        };

        if self.overlay.is_none() {
            tracing::debug!(action = ?signal.action, "start signal received; showing the menu");
            self.attach_overlay(&signal);
        }

        StartDirective::Sticky
    }

    fn attach_overlay(&mut self, signal: &StartSignal) {
        let mut widget =
            OverlayWidget::create_for_surface(self.surfaces.controller(), DockPosition::default());
        let handle = self.handle.clone();
        widget.set_exit_listener(Box::new(move || handle.exit_requested()));
        widget.add_to_surface();
        self.overlay = Some(widget);
        for observer in &mut self.observers {
            observer.overlay_launched(signal);
        }
    }

    /// Forward a user exit gesture to the menu. The menu's own exit
    /// listener, not the shell, is what drives the exit transition.
    pub fn notify_user_exit(&mut self) {
        if let Some(widget) = self.overlay.as_mut() {
            widget.notify_exit_requested();
        }
    }

    fn on_exit_requested(&mut self) {
        tracing::debug!("menu exit requested; shutting down");
        if let Some(mut widget) = self.overlay.take() {
            widget.remove_from_surface();
        }
        for observer in &mut self.observers {
            observer.exiting_by_user_request();
        }
        self.request_close();
    }

    /// Platform teardown. Detaches the menu if one is attached; safe
    /// without a prior start.
    pub fn on_destroy(&mut self) {
        if let Some(mut widget) = self.overlay.take() {
            tracing::debug!("host terminating; removing the menu from the surface");
            widget.remove_from_surface();
        }
    }

    /// Ask the platform to stop the hosting process. Safe to call
    /// repeatedly and before any menu was ever created.
    pub fn request_close(&self) {
        self.terminator.request_termination();
    }
}
