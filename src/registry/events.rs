//! Toolbar notifications.

use crossbeam_channel::Sender;

/// State change reported to the presentation layer.
///
/// Listeners re-render in response; the event itself carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarEvent {
    SchemesChanged,
    SchemeSelectionChanged,
    RequirementSelectionChanged,
    Save,
    SearchChanged,
}

pub type Listener = Box<dyn FnMut(ToolbarEvent)>;

/// Synchronous fan-out to subscribed listeners, in registration order.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ToolbarEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: ToolbarEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "toolbar event");
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Listener that forwards events into a channel for hosts that poll once per frame.
///
/// A disconnected receiver is ignored.
pub fn channel_listener(sender: Sender<ToolbarEvent>) -> impl FnMut(ToolbarEvent) + 'static {
    move |event| {
        let _ = sender.send(event);
    }
}
