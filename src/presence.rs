use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::sync::Mutex;

/// Stable identifiers for the long-running-process indicator. The same
/// pair is used for the whole process lifetime so the platform treats
/// repeated registration as a refresh rather than a duplicate.
pub const STATUS_NOTIFICATION_ID: u32 = 1889;
pub const STATUS_CHANNEL_ID: &str = "hoverdock.status";

static CHANNELS: OnceCell<Mutex<HashSet<String>>> = OnceCell::new();

fn channels() -> &'static Mutex<HashSet<String>> {
    CHANNELS.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Register a presence channel with the platform. Returns `true` when
/// the channel was newly created; re-registering an existing id is
/// harmless and never an error.
pub fn register_channel(id: &str) -> bool {
    match channels().lock() {
        Ok(mut set) => set.insert(id.to_string()),
        Err(err) => {
            tracing::error!(?err, "failed to lock the presence channel registry");
            false
        }
    }
}

pub fn channel_exists(id: &str) -> bool {
    channels()
        .lock()
        .map(|set| set.contains(id))
        .unwrap_or(false)
}

/// Payload shown by the platform while the host runs in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub body: String,
    /// Ongoing announcements cannot be dismissed while the host lives.
    pub ongoing: bool,
}

/// Builds the persistent status indicator that protects the background
/// host from casual reclamation. Returning `None` means the host runs
/// best-effort and may be reclaimed at any time. Implementations
/// swallow their own failures; the host never retries registration.
pub trait PresenceAnnouncer: Send {
    fn register(&mut self, id: u32, channel: &str) -> Option<Announcement>;
}

/// Announcer for hosts that are fine being reclaimed at any time.
pub struct NoopAnnouncer;

impl PresenceAnnouncer for NoopAnnouncer {
    fn register(&mut self, _id: u32, _channel: &str) -> Option<Announcement> {
        None
    }
}

/// Default announcer: registers the channel and hands back an ongoing
/// low-priority payload.
pub struct StatusAnnouncer;

impl PresenceAnnouncer for StatusAnnouncer {
    fn register(&mut self, id: u32, channel: &str) -> Option<Announcement> {
        let created = register_channel(channel);
        tracing::debug!(id, channel, created, "presence announcement registered");
        Some(Announcement {
            title: "hoverdock".to_string(),
            body: "Floating menu is running".to_string(),
            ongoing: true,
        })
    }
}
