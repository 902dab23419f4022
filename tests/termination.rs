use std::sync::atomic::Ordering;

use hoverdock::signal::StartSignal;

use mock_host::fixture;

#[test]
fn destroy_while_active_detaches_the_menu() {
    let mut fx = fixture();
    fx.host.on_start(Some(StartSignal::with_action("show")));

    fx.host.on_destroy();

    assert!(!fx.host.is_active());
    assert_eq!(fx.journal.count_of("remove_view"), 1);
    // Platform teardown fires no user-exit hook and requests no close.
    assert_eq!(fx.journal.count_of("exiting_hook"), 0);
    assert_eq!(fx.terminations.load(Ordering::SeqCst), 0);
}

#[test]
fn destroy_while_stopped_is_a_noop() {
    let mut fx = fixture();

    fx.host.on_destroy();
    fx.host.on_destroy();

    assert!(!fx.host.is_active());
    assert!(fx.journal.entries().is_empty());
}

#[test]
fn destroy_is_idempotent_after_activity() {
    let mut fx = fixture();
    fx.host.on_start(Some(StartSignal::with_action("show")));

    fx.host.on_destroy();
    fx.host.on_destroy();

    assert_eq!(fx.journal.count_of("remove_view"), 1);
}

#[test]
fn terminate_delivered_through_the_handle() {
    let mut fx = fixture();
    fx.host.on_start(Some(StartSignal::with_action("show")));

    fx.handle.deliver_terminate();
    fx.host.process_events();

    assert!(!fx.host.is_active());
    assert_eq!(fx.journal.count_of("remove_view"), 1);
}

#[test]
fn request_close_before_any_menu_is_safe() {
    let fx = fixture();

    fx.host.request_close();
    fx.host.request_close();

    assert!(!fx.host.is_active());
    assert_eq!(fx.factory.created(), 0);
    assert_eq!(fx.terminations.load(Ordering::SeqCst), 2);
}
