//! Periodic background save of the whole collection.
//!
//! The autosaver is the self-healing half of the persistence story: saves
//! after individual mutations may fail silently, so a timer re-issues a full
//! save on a fixed interval (only when the collection is non-empty).
//! Failures are logged to stderr and never retried before the next tick.

use crate::api::MemoApi;
use crate::store::StorageBackend;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

pub struct Autosaver {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Autosaver {
    /// Starts a background thread saving every `interval`. The thread exits
    /// when [`Autosaver::stop`] is called or the `Autosaver` is dropped.
    pub fn spawn<B>(api: Arc<Mutex<MemoApi<B>>>, interval: Duration) -> Self
    where
        B: StorageBackend + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            let Ok(mut api) = api.lock() else {
                break;
            };
            if !api.store().is_empty() {
                if let Err(e) = api.persist() {
                    eprintln!("Warning: autosave failed: {}", e);
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signals the thread and waits for it to finish its current tick.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        // Detach: the thread notices the flag on its next tick.
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::store::StorageBackend;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;

    /// MemoryBackend variant that counts writes, shared across clones.
    #[derive(Default)]
    struct CountingBackend {
        values: HashMap<String, String>,
        writes: Arc<AtomicUsize>,
    }

    impl StorageBackend for CountingBackend {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.values.insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    #[test]
    fn autosave_reissues_full_saves() {
        let writes = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend {
            values: HashMap::new(),
            writes: Arc::clone(&writes),
        };

        let api = Arc::new(Mutex::new(MemoApi::open(backend)));
        let after_seed = writes.load(Ordering::Relaxed);

        let saver = Autosaver::spawn(Arc::clone(&api), Duration::from_millis(20));
        thread::sleep(Duration::from_millis(120));
        saver.stop();

        assert!(writes.load(Ordering::Relaxed) > after_seed);
    }

    #[test]
    fn autosave_skips_empty_collection() {
        let writes = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend {
            values: HashMap::new(),
            writes: Arc::clone(&writes),
        };

        let api = Arc::new(Mutex::new(MemoApi::open(backend)));
        {
            let mut api = api.lock().unwrap();
            let id = api.store().memos()[0].id;
            api.delete(id).unwrap();
        }
        let after_delete = writes.load(Ordering::Relaxed);

        let saver = Autosaver::spawn(Arc::clone(&api), Duration::from_millis(20));
        thread::sleep(Duration::from_millis(120));
        saver.stop();

        assert_eq!(writes.load(Ordering::Relaxed), after_delete);
    }
}
