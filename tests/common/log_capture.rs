//! Thread-scoped capture of `tracing` events for assertions.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// Captures events emitted on the current thread until dropped.
///
/// Use with `#[tokio::test]` (current-thread runtime) so events from awaited
/// futures land on the capturing thread.
pub struct TestLogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    _guard: tracing::subscriber::DefaultGuard,
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl TestLogCapture {
    #[must_use]
    pub fn start() -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: Arc::clone(&events),
        });
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            events,
            _guard: guard,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of everything captured so far.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().clone()
    }

    pub fn assert_logged(&self, needle: &str) {
        let events = self.lock();
        assert!(
            events.iter().any(|e| e.message.contains(needle)),
            "Expected log containing '{needle}'. Logged: {:#?}",
            events.iter().map(|e| &e.message).collect::<Vec<_>>()
        );
    }

    pub fn assert_logged_at_level(&self, level: Level, needle: &str) {
        let events = self.lock();
        assert!(
            events
                .iter()
                .any(|e| e.level == level && e.message.contains(needle)),
            "Expected {level} log containing '{needle}'. Logged: {:#?}",
            events
                .iter()
                .map(|e| (e.level, &e.message))
                .collect::<Vec<_>>()
        );
    }

    pub fn assert_not_logged(&self, needle: &str) {
        let events = self.lock();
        assert!(
            !events.iter().any(|e| e.message.contains(needle)),
            "Did not expect a log containing '{needle}'"
        );
    }

    pub fn assert_field_logged(&self, name: &str, value: &str) {
        let events = self.lock();
        assert!(
            events
                .iter()
                .any(|e| e.field(name).is_some_and(|v| v.contains(value))),
            "Expected field {name}={value}. Logged fields: {:#?}",
            events.iter().map(|e| &e.fields).collect::<Vec<_>>()
        );
    }

    pub fn assert_no_errors(&self) {
        let events = self.lock();
        let errors: Vec<_> = events.iter().filter(|e| e.level == Level::ERROR).collect();
        assert!(errors.is_empty(), "Unexpected errors: {errors:#?}");
    }

    /// Number of captured events whose message contains `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.lock()
            .iter()
            .filter(|e| e.message.contains(needle))
            .count()
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        };
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(captured);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn push(&mut self, name: &str, value: String) {
        if name == "message" {
            self.message = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field.name(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field.name(), value.to_string());
    }
}
