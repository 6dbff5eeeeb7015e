use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default on-screen time of a banner: fade in, hold, fade out.
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_millis(2600);

/// A transient out-of-band notice shown next to the transcript.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl Banner {
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    /// Returns `true` once the banner has been visible for its whole TTL.
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}

/// Bounded queue of banners that drops expired entries on access.
#[derive(Debug)]
pub struct BannerQueue {
    items: VecDeque<Banner>,
    capacity: usize,
}

impl BannerQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Pushes a banner, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, banner: Banner) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(banner);
    }

    /// Returns the banners still on screen, oldest first.
    pub fn visible(&mut self) -> Vec<&Banner> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// Removes every banner, e.g. when the user dismisses them.
    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|b| !b.is_expired());
    }
}

impl Default for BannerQueue {
    fn default() -> Self {
        Self::new(4)
    }
}
