//! Capture of `tracing` events emitted while a closure runs.
//!
//! # Examples
//!
//! ```
//! use outcome::{Fault, Outcome};
//! use outcome_test_helpers::capture_events;
//!
//! let (_, events) = capture_events(|| {
//!     Outcome::<i32>::failure(Fault::new("NotFound", "id=7")).chain(|x: i32| Outcome::success(x))
//! });
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].field("category"), Some("NotFound"));
//! ```

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};

/// Event recorded by [`capture_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Level the event was emitted at.
    pub level: Level,
    /// Rendered `message` field.
    pub message: String,
    /// Remaining fields as `(name, rendered value)`, in emission order.
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Rendered value of a named field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct Recorder(Arc<Mutex<Vec<CapturedEvent>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut text = FieldText::default();
        event.record(&mut text);
        self.0.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            message: text.message,
            fields: text.fields,
        });
    }
}

#[derive(Default)]
struct FieldText {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldText {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_owned(), value));
        }
    }
}

impl Visit for FieldText {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}

/// Runs `f` under a subscriber that records every event emitted on this
/// thread, returning `f`'s value and the events in emission order.
#[must_use]
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(Recorder(Arc::clone(&events)));
    let value = tracing::subscriber::with_default(subscriber, f);
    let captured = std::mem::take(&mut *events.lock());
    (value, captured)
}
