use hoverdock::presence::{
    channel_exists, register_channel, NoopAnnouncer, PresenceAnnouncer, StatusAnnouncer,
    STATUS_CHANNEL_ID, STATUS_NOTIFICATION_ID,
};
use hoverdock::signal::StartSignal;

use mock_host::{fixture, sample_announcement, RecordingAnnouncer};

#[test]
fn announcer_runs_once_at_construction_with_stable_ids() {
    let mut fx = fixture();

    fx.host.on_start(Some(StartSignal::with_action("a")));
    fx.host.on_start(Some(StartSignal::with_action("b")));

    let calls = fx.announcer_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        (STATUS_NOTIFICATION_ID, STATUS_CHANNEL_ID.to_string())
    );
    assert_eq!(fx.host.announcement(), Some(&sample_announcement()));
}

#[test]
fn host_without_announcement_still_activates() {
    use std::sync::Arc;

    use hoverdock::host::{HoverMenuHost, ProcessTerminator};
    use mock_host::{FixedPermission, Journal, RecordingSurfaceFactory};

    struct SilentTerminator;
    impl ProcessTerminator for SilentTerminator {
        fn request_termination(&self) {}
    }

    let journal = Journal::default();
    let factory = Arc::new(RecordingSurfaceFactory::new(journal.clone()));
    let (announcer, _calls) = RecordingAnnouncer::new(None);
    let (mut host, _handle) = HoverMenuHost::new(
        factory.clone(),
        Arc::new(FixedPermission(true)),
        Box::new(announcer),
        Box::new(SilentTerminator),
    );

    host.on_start(Some(StartSignal::with_action("show")));

    assert!(host.announcement().is_none());
    assert!(host.is_active());
    assert_eq!(factory.created(), 1);
}

#[test]
fn registering_the_same_channel_twice_creates_it_once() {
    let id = "hoverdock.test.dup-channel";
    assert!(register_channel(id));
    assert!(!register_channel(id));
    assert!(channel_exists(id));
}

#[test]
fn status_announcer_is_idempotent_per_channel() {
    let channel = "hoverdock.test.status-channel";
    let mut announcer = StatusAnnouncer;

    let first = announcer.register(7, channel);
    let second = announcer.register(7, channel);

    assert!(first.is_some());
    assert_eq!(first, second);
    assert!(channel_exists(channel));
}

#[test]
fn noop_announcer_registers_nothing() {
    let channel = "hoverdock.test.noop-channel";
    let mut announcer = NoopAnnouncer;

    assert!(announcer.register(7, channel).is_none());
    assert!(!channel_exists(channel));
}
