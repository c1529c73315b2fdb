use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use crate::storage::LocalStorage;

/// A state transition. Reducing never fails.
pub trait Action<S> {
    fn reduce(self, state: &S) -> S;

    /// When true the stored copy is deleted rather than overwritten.
    fn clears_storage(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

struct Persistence {
    key: &'static str,
    storage: Arc<dyn LocalStorage>,
}

/// Reducer + subscription store.
///
/// `dispatch` reduces the action, persists the new state when the store has a
/// key, then notifies subscribers in subscription order. A failed write is
/// logged and the in-memory state is kept.
pub struct Store<S, A> {
    state: S,
    persistence: Option<Persistence>,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_id: u64,
    _action: std::marker::PhantomData<fn(A)>,
}

impl<S, A> Store<S, A>
where
    S: Serialize + DeserializeOwned + Default,
    A: Action<S>,
{
    /// In-memory only.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            persistence: None,
            listeners: Vec::new(),
            next_id: 0,
            _action: std::marker::PhantomData,
        }
    }

    /// Hydrates from `storage[key]` once. A missing key gives the default
    /// state; an unreadable or unparsable value is logged and also gives the
    /// default.
    pub fn persisted(key: &'static str, storage: Arc<dyn LocalStorage>) -> Self {
        let state = hydrate(key, storage.as_ref());
        Self {
            state,
            persistence: Some(Persistence { key, storage }),
            listeners: Vec::new(),
            next_id: 0,
            _action: std::marker::PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn dispatch(&mut self, action: A) {
        let clears = action.clears_storage();
        self.state = action.reduce(&self.state);

        if let Some(p) = &self.persistence {
            persist(p, &self.state, clears);
        }

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

fn hydrate<S>(key: &str, storage: &dyn LocalStorage) -> S
where
    S: DeserializeOwned + Default,
{
    match storage.get_item(key) {
        Ok(None) => S::default(),
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            error!(key, "Failed to load {} from local storage: {}", key, e);
            S::default()
        }),
        Err(e) => {
            error!(key, "Failed to load {} from local storage: {}", key, e);
            S::default()
        }
    }
}

fn persist<S: Serialize>(p: &Persistence, state: &S, clears: bool) {
    let result = if clears {
        p.storage.remove_item(p.key)
    } else {
        match serde_json::to_string(state) {
            Ok(json) => p.storage.set_item(p.key, &json),
            Err(e) => Err(e.into()),
        }
    };

    if let Err(e) = result {
        warn!(key = p.key, "Failed to save {} to local storage: {}", p.key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::BrokenStorage;
    use crate::storage::MemoryStorage;
    use serde::Deserialize;
    use std::sync::Mutex;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: i64,
    }

    enum CounterAction {
        Add(i64),
        Reset,
    }

    impl Action<Counter> for CounterAction {
        fn reduce(self, state: &Counter) -> Counter {
            match self {
                CounterAction::Add(n) => Counter {
                    value: state.value + n,
                },
                CounterAction::Reset => Counter::default(),
            }
        }

        fn clears_storage(&self) -> bool {
            matches!(self, CounterAction::Reset)
        }
    }

    type CounterStore = Store<Counter, CounterAction>;

    #[test]
    fn dispatch_persists_before_notifying() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CounterStore::persisted("counter", storage.clone());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let observed_storage = storage.clone();
        let sink = seen.clone();
        store.subscribe(move |state: &Counter| {
            let stored = observed_storage.get_item("counter").unwrap();
            sink.lock().unwrap().push((state.value, stored));
        });

        store.dispatch(CounterAction::Add(2));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 2);
        assert_eq!(seen[0].1.as_deref(), Some("{\"value\":2}"));
    }

    #[test]
    fn clearing_action_removes_the_key() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CounterStore::persisted("counter", storage.clone());

        store.dispatch(CounterAction::Add(5));
        store.dispatch(CounterAction::Reset);

        assert!(storage.get_item("counter").unwrap().is_none());
        assert_eq!(store.state(), &Counter::default());
    }

    #[test]
    fn hydrates_from_storage_once() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item("counter", "{\"value\":7}").unwrap();

        let store = CounterStore::persisted("counter", storage.clone());
        storage.set_item("counter", "{\"value\":100}").unwrap();

        assert_eq!(store.state().value, 7);
    }

    #[test]
    fn garbage_in_storage_hydrates_default() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item("counter", "invalid JSON").unwrap();

        let store = CounterStore::persisted("counter", storage);

        assert_eq!(store.state(), &Counter::default());
    }

    #[test]
    fn failing_storage_keeps_state_in_memory() {
        let mut store = CounterStore::persisted("counter", Arc::new(BrokenStorage));
        assert_eq!(store.state().value, 0);

        store.dispatch(CounterAction::Add(3));

        assert_eq!(store.state().value, 3);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = CounterStore::new(Counter::default());
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.dispatch(CounterAction::Add(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(CounterAction::Add(1));

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.state().value, 2);
    }
}
