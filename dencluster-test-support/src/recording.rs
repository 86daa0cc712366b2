//! In-memory tracing subscriber layer for instrumentation assertions.
//!
//! Tests install a [`RecordingLayer`] with [`capture`] (or manually through
//! `tracing::subscriber::with_default`) and then inspect the closed spans and
//! emitted events it collected.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ::tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span,
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
};

/// Closed span captured by a [`RecordingLayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Fields recorded at creation and through `Span::record`.
    pub fields: HashMap<String, String>,
}

/// Event captured by a [`RecordingLayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Name of the innermost span the event was emitted in, if any.
    pub span: Option<String>,
    /// Structured fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the event message, if one was attached.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }

    /// Returns the rendered value of `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

#[derive(Default)]
struct Journal {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// Layer recording spans in close order and events in emission order.
///
/// Clones share the same journal, so a clone kept by the test observes
/// everything recorded by the installed copy.
#[derive(Clone, Default)]
pub struct RecordingLayer {
    journal: Arc<Mutex<Journal>>,
}

impl RecordingLayer {
    fn journal(&self) -> MutexGuard<'_, Journal> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns every closed span.
    ///
    /// # Examples
    /// ```
    /// use dencluster_test_support::recording::RecordingLayer;
    ///
    /// assert!(RecordingLayer::default().spans().is_empty());
    /// ```
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.journal().spans.clone()
    }

    /// Returns every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.journal().events.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.journal()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the events whose message equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
        self.journal()
            .events
            .iter()
            .filter(|event| event.message() == Some(message))
            .cloned()
            .collect()
    }
}

/// Runs `body` with a fresh [`RecordingLayer`] installed as the thread's
/// default subscriber and returns its result together with the layer.
///
/// # Examples
/// ```
/// use dencluster_test_support::recording::capture;
///
/// let ((), layer) = capture(|| tracing::info!(answer = 42, "hello"));
/// let events = layer.events_with_message("hello");
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].field("answer"), Some("42"));
/// ```
pub fn capture<T>(body: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let output = ::tracing::subscriber::with_default(subscriber, body);
    (output, layer)
}

struct OpenSpan {
    name: String,
    fields: HashMap<String, String>,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = HashMap::new();
        attrs.record(&mut Fields(&mut fields));
        span.extensions_mut().insert(OpenSpan {
            name: attrs.metadata().name().to_owned(),
            fields,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut Fields(&mut open.fields));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut Fields(&mut fields));
        let span = ctx
            .event_span(event)
            .map(|span| span.name().to_owned());
        self.journal().events.push(EventRecord {
            level: *event.metadata().level(),
            span,
            fields,
        });
    }

    fn on_close(&self, id: span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        self.journal().spans.push(SpanRecord {
            name: open.name,
            fields: open.fields,
        });
    }
}

struct Fields<'a>(&'a mut HashMap<String, String>);

impl Visit for Fields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}
