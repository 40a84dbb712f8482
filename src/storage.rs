use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value persistence (browser local storage in production).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Full-page navigation, used when the session is revoked mid-flight.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Records redirects instead of performing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
