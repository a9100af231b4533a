use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Forwards `tracing` events to the browser console
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let line = format!("[{}] {}{}", metadata.target(), visitor.message, visitor.fields);

        match *metadata.level() {
            Level::ERROR => gloo::console::error!(line),
            Level::WARN => gloo::console::warn!(line),
            Level::INFO => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init();
}

/// Component-tagged logging for UI code
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        tracing::debug!(component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        tracing::info!(component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        tracing::warn!(component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        tracing::error!(component, "{}", message);
    }
}
