//! "Became empty" listeners.
//!
//! A deck owns an `EmptyListeners` list. Listeners run synchronously, in
//! registration order, right after a removal drains the deck. The deck decides
//! when a non-empty to empty transition happened; this module only stores and
//! invokes the callbacks.

use smallvec::SmallVec;

/// Handle returned when subscribing, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Callback type for empty notifications.
pub type EmptyCallback = Box<dyn FnMut() + Send + 'static>;

/// Ordered list of empty-notification callbacks.
///
/// Most decks have zero or one listener, so storage stays inline.
#[derive(Default)]
pub struct EmptyListeners {
    callbacks: SmallVec<[(ListenerId, EmptyCallback); 2]>,
    next_id: u32,
}

impl EmptyListeners {
    /// Create an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a callback, returns its ID.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Unsubscribe a callback. Returns `false` if the ID was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(lid, _)| *lid != id);
        self.callbacks.len() != before
    }

    /// Invoke every callback once, in subscription order.
    pub fn notify(&mut self) {
        if self.callbacks.is_empty() {
            return;
        }
        log::debug!("deck emptied, notifying {} listener(s)", self.callbacks.len());
        for (_, callback) in self.callbacks.iter_mut() {
            callback();
        }
    }

    /// Number of subscribed callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for EmptyListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<ListenerId> = self.callbacks.iter().map(|(id, _)| *id).collect();
        f.debug_struct("EmptyListeners").field("ids", &ids).finish()
    }
}
