//! Observer: news outlets notified whenever a story is published.

use tracing::{debug, instrument};

pub trait Subscriber {
    fn name(&self) -> &str;
    /// React to a published story, returning the outlet's acknowledgement.
    fn update(&self, news: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsOutlet {
    name: String,
}

impl NewsOutlet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscriber for NewsOutlet {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, news: &str) -> String {
        format!("News received at {}: {news}", self.name)
    }
}

/// Handle returned by [`NewsPublisher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Subject: keeps subscribers in subscription order.
#[derive(Default)]
pub struct NewsPublisher {
    subscribers: Vec<(SubscriberId, Box<dyn Subscriber>)>,
    next_id: u64,
}

impl NewsPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        debug!(name = subscriber.name(), ?id, "subscribed");
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn notify(&self, news: &str) -> Vec<String> {
        self.subscribers
            .iter()
            .map(|(_, subscriber)| subscriber.update(news))
            .collect()
    }

    /// Announce the story and notify every subscriber.
    #[instrument(level = "debug", skip(self))]
    pub fn publish(&self, news: &str) -> Vec<String> {
        let mut lines = vec![format!("News published: {news}")];
        lines.extend(self.notify(news));
        lines
    }
}
