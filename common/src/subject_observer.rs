use std::rc::Rc;

/// Reacts to an event raised by a subject of type `S`, producing an output of type `O`.
pub trait Observer<S: ?Sized, E, O = ()> {
    fn update(&self, source: &S, event: E) -> O;
}

/// Ordered registry of observer handles, in registration order.
pub type SharedObservers<S, E, O = ()> = Vec<Rc<dyn Observer<S, E, O>>>;

pub trait Subject<E: Clone, O = ()> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E, O>>);
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E, O>>);
    /// Notifies every registered observer in registration order and returns their outputs in that order.
    fn notify_observers(&self, event: E) -> Vec<O>;
}
