//! # Conversion Coordinator
//!
//! Fans a newly entered value out to the other two representations.
//!
//! The coordinator owns the byte-order toggle and one output sink per
//! representation. A UI layer (or any other collaborator) registers its
//! field-update hooks as sinks and feeds every edit through [`Converter::set_value`];
//! the coordinator never calls back into the field that produced the edit,
//! which is what breaks the feedback loop between linked fields.
//!
//! Not thread-safe: all calls are expected on the single thread driving the
//! edit events.

use std::collections::HashMap;

use tracing::trace;

use crate::codec;
use crate::repr::AddressKind;

/// Output hook for one linked display field. Implemented for any `FnMut`
/// closure taking the rendered string, so callers are free to register plain
/// functions.
pub trait ValueSink {
    fn accept(&mut self, rendered: &str);
}

impl<F: FnMut(&str)> ValueSink for F {
    fn accept(&mut self, rendered: &str) {
        self(rendered)
    }
}

/// Policy object coordinating the three linked representations.
pub struct Converter {
    reverse: bool,
    sinks: HashMap<AddressKind, Box<dyn ValueSink>>,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            reverse: false,
            sinks: HashMap::new(),
        }
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Sets the byte-order toggle. This does not re-dispatch anything: the
    /// caller re-issues [`set_value`](Self::set_value) with the current
    /// field content to refresh the other fields under the new order.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Registers the output sink for `kind`, replacing any previous one.
    /// Exactly one sink per representation is kept.
    pub fn register_sink(&mut self, kind: AddressKind, sink: Box<dyn ValueSink>) {
        self.sinks.insert(kind, sink);
    }

    /// Dispatches `text`, freshly entered as `source`, to the sinks of the
    /// other two representations.
    ///
    /// Empty input is a no-op. Conversions run in safe mode, so malformed
    /// intermediate input (a dotted-quad still missing octets, say) simply
    /// produces no dispatch for that target. Missing sinks are skipped;
    /// they are optional by contract.
    pub fn set_value(&mut self, text: &str, source: AddressKind) {
        if text.is_empty() {
            return;
        }
        for target in source.others() {
            let Ok(rendered) = codec::convert(text, source, target, self.reverse, true) else {
                continue;
            };
            if rendered.is_empty() {
                trace!(%source, %target, "no rendering for input, skipping");
                continue;
            }
            match self.sinks.get_mut(&target) {
                Some(sink) => {
                    trace!(%source, %target, %rendered, "dispatching");
                    sink.accept(&rendered);
                }
                None => trace!(%target, "no sink registered, skipping"),
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
