use std::cell::RefCell;
use crate::event::{EventHandler, SketchEvent};

/// Fans sketch notifications out to whoever redraws or mirrors the canvas.
///
/// Handlers are called in subscription order, synchronously, on the thread
/// that mutated the sketch.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// A bus nobody listens to yet
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Add a listener; it sees every event emitted from now on
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Deliver one notification to every listener
    pub fn emit(&self, event: SketchEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl EventHandler for Counter {
        fn handle_event(&mut self, _event: &SketchEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let count = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new();
        bus.subscribe(Box::new(Counter(count.clone())));
        bus.subscribe(Box::new(Counter(count.clone())));

        bus.emit(SketchEvent::DrawingChanged);

        assert_eq!(bus.handler_count(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
