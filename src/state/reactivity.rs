// ============================================================================
// REACTIVITY - Value with change subscribers
// ============================================================================

use std::cell::RefCell;

type Callback<T> = Box<dyn Fn(&T)>;

/// Shared value that notifies subscribers on every write.
///
/// Subscribers run while the value is borrowed: they may read it but must not
/// write back into the same state.
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Callback<T>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Set a new value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Update in place and notify
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        let value = self.value.borrow();
        for callback in self.subscribers.borrow().iter() {
            callback(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscribers_see_every_write() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe(move |v| seen.borrow_mut().push(*v));
        }

        state.set(1);
        state.update(|v| *v += 10);

        assert_eq!(state.get(), 11);
        assert_eq!(*seen.borrow(), vec![1, 11]);
    }

    #[test]
    fn every_subscriber_is_called() {
        let state = ReactiveState::new(String::new());
        let calls = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let calls = calls.clone();
            state.subscribe(move |_| calls.set(calls.get() + 1));
        }
        state.set("x".into());
        assert_eq!(calls.get(), 3);
    }
}
