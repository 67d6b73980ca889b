use std::future::Future;
use tokio::time::{Duration, sleep};

/// Outcome of a content fetch: live rows, or the built-in fallback list after
/// the retries ran out. The substitution is tagged, never silent.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn items(&self) -> &T {
        match self {
            Self::Live(items) | Self::Fallback(items) => items,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Live(items) | Self::Fallback(items) => items,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Tag used in API responses
    pub fn source(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Fallback(_) => "fallback",
        }
    }
}

/// Fetch with bounded retry and linearly increasing delay between attempts
/// (base, 2*base, ...). After the last failure the fallback list is returned.
pub async fn load_with_retry<T, E, F, Fut>(
    attempts: u32,
    base_delay: Duration,
    fetch: F,
    fallback: impl FnOnce() -> Vec<T>,
) -> Fetched<Vec<T>>
where
    E: std::fmt::Display,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    for attempt in 1..=attempts.max(1) {
        match fetch().await {
            Ok(items) => return Fetched::Live(items),
            Err(e) => {
                tracing::warn!(attempt, %e, "content fetch failed");
                if attempt < attempts {
                    sleep(base_delay * attempt).await;
                }
            }
        }
    }

    tracing::warn!("serving fallback content after {} failed attempts", attempts);
    Fetched::Fallback(fallback())
}

/// Index state of an auto-advancing carousel. The hero carousel never pauses;
/// the partners carousel sets `paused` while the pointer hovers it.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    paused: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Timer tick: advance one position, wrapping at the end.
    /// A paused or empty carousel holds its index.
    pub fn advance(&mut self) -> usize {
        if !self.paused && !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.index
    }

    /// Manual back arrow, wrapping at the front
    pub fn retreat(&mut self) -> usize {
        if !self.paused && !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
        self.index
    }
}
