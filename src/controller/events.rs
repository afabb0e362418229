//! Outbound notifications and the subscriber registry.

use std::fmt;

use rustc_hash::FxHashMap;

/// Notifications the controller sends to its embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerEvent {
    /// The screen orientation changed.
    ScreenOrientationChanged,
    /// The platform asked for the compass to be calibrated.
    CompassNeedsCalibration,
    /// A manual gesture took over the camera.
    InteractionStart,
    /// A manual gesture released the camera.
    InteractionEnd,
    /// A drag started.
    RotateStart,
    /// A drag ended.
    RotateEnd,
    /// A pinch started.
    ZoomStart,
    /// A pinch ended.
    ZoomEnd,
}

impl ControllerEvent {
    /// Every notification, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::ScreenOrientationChanged,
        Self::CompassNeedsCalibration,
        Self::InteractionStart,
        Self::InteractionEnd,
        Self::RotateStart,
        Self::RotateEnd,
        Self::ZoomStart,
        Self::ZoomEnd,
    ];

    /// DOM-style event name, as used by browser embedders.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ScreenOrientationChanged => "orientationchange",
            Self::CompassNeedsCalibration => "compassneedscalibration",
            Self::InteractionStart => "userinteractionstart",
            Self::InteractionEnd => "userinteractionend",
            Self::RotateStart => "rotatestart",
            Self::RotateEnd => "rotateend",
            Self::ZoomStart => "zoomstart",
            Self::ZoomEnd => "zoomend",
        }
    }

    /// Look up a notification by its DOM-style name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

impl fmt::Display for ControllerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(ControllerEvent, &S)>;

/// Subscribers per notification, owned by the source `S` that emits them.
///
/// Listeners receive the event and a shared reference to the source.
/// Delivery is synchronous and in subscription order.
pub struct EventBus<S> {
    next_id: u64,
    listeners: FxHashMap<ControllerEvent, Vec<(SubscriptionId, Listener<S>)>>,
}

impl<S> EventBus<S> {
    /// Bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: FxHashMap::default(),
        }
    }

    /// Register `listener` for `event`.
    pub fn subscribe<F>(
        &mut self,
        event: ControllerEvent,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(ControllerEvent, &S) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(index) =
                listeners.iter().position(|(existing, _)| *existing == id)
            {
                drop(listeners.remove(index));
                return true;
            }
        }
        false
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: ControllerEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Deliver `event` to its listeners.
    pub fn dispatch(&mut self, event: ControllerEvent, source: &S) {
        if let Some(listeners) = self.listeners.get_mut(&event) {
            for (_, listener) in listeners.iter_mut() {
                listener(event, source);
            }
        }
    }
}

impl<S> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for EventBus<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: FxHashMap<ControllerEvent, usize> = self
            .listeners
            .iter()
            .map(|(event, listeners)| (*event, listeners.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn names_round_trip() {
        for event in ControllerEvent::ALL {
            assert_eq!(ControllerEvent::from_name(event.name()), Some(event));
        }
        assert_eq!(ControllerEvent::from_name("deviceorientation"), None);
    }

    #[test]
    fn dispatch_reaches_only_matching_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus: EventBus<&'static str> = EventBus::new();

        let log = Rc::clone(&seen);
        let _zoom = bus.subscribe(ControllerEvent::ZoomStart, move |event, source| {
            log.borrow_mut().push((event, *source));
        });
        let log = Rc::clone(&seen);
        let _rotate = bus.subscribe(ControllerEvent::RotateStart, move |event, source| {
            log.borrow_mut().push((event, *source));
        });

        bus.dispatch(ControllerEvent::ZoomStart, &"controller");
        bus.dispatch(ControllerEvent::ZoomEnd, &"controller");

        assert_eq!(
            *seen.borrow(),
            vec![(ControllerEvent::ZoomStart, "controller")]
        );
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let count = Rc::new(RefCell::new(0));
        let mut bus: EventBus<()> = EventBus::new();
        let counter = Rc::clone(&count);
        let id = bus.subscribe(ControllerEvent::RotateEnd, move |_, _| {
            *counter.borrow_mut() += 1;
        });
        assert_eq!(bus.listener_count(ControllerEvent::RotateEnd), 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.dispatch(ControllerEvent::RotateEnd, &());

        assert_eq!(*count.borrow(), 0);
        assert_eq!(bus.listener_count(ControllerEvent::RotateEnd), 0);
    }
}
