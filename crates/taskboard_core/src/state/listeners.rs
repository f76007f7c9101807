//! Generic ordered listener registry.

/// Callback invoked with an owned snapshot of a store's items.
pub type Listener<T> = Box<dyn FnMut(Vec<T>) + Send + 'static>;

/// Ordered set of listeners shared by every state container.
///
/// Listeners are never removed once added.
pub struct ListenerRegistry<T> {
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Appends a listener; it runs after every listener added before it.
    pub fn add_listener(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Hands each listener its own copy of `items`, in registration order.
    pub fn notify(&mut self, items: &[T]) {
        for listener in &mut self.listeners {
            listener(items.to_vec());
        }
    }
}

impl<T: Clone> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
