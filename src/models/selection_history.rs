use crate::types::{SelectionCount, SelectionHistoryMap, TickerSymbol};
use crate::Error;
use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Persistence backend for [`SelectionHistory`]. Stores the whole map as one flat record.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Result<SelectionHistoryMap, Error>;
    fn save(&self, history: &SelectionHistoryMap) -> Result<(), Error>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    fn load(&self) -> Result<SelectionHistoryMap, Error> {
        (**self).load()
    }

    fn save(&self, history: &SelectionHistoryMap) -> Result<(), Error> {
        (**self).save(history)
    }
}

/// Stores the history as a JSON object (`{"BONK": 3}`) in a single file.
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileHistoryStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<SelectionHistoryMap, Error> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Nothing recorded yet
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SelectionHistoryMap::new()),
            Err(err) => return Err(err.into()),
        };

        let history: SelectionHistoryMap = serde_json::from_str(&content)?;

        Ok(history)
    }

    fn save(&self, history: &SelectionHistoryMap) -> Result<(), Error> {
        let content = serde_json::to_string(history)?;
        fs::write(&self.path, content)?;

        Ok(())
    }
}

/// Keeps the persisted record in memory. Useful for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryHistoryStore {
    record: Mutex<Option<SelectionHistoryMap>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(history: SelectionHistoryMap) -> Self {
        MemoryHistoryStore {
            record: Mutex::new(Some(history)),
        }
    }

    /// The last saved record, if any.
    pub fn snapshot(&self) -> Option<SelectionHistoryMap> {
        self.record.lock().ok().and_then(|record| record.clone())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<SelectionHistoryMap, Error> {
        let record = self
            .record
            .lock()
            .map_err(|_| Error::Other("History record lock poisoned".to_string()))?;

        Ok(record.clone().unwrap_or_default())
    }

    fn save(&self, history: &SelectionHistoryMap) -> Result<(), Error> {
        let mut record = self
            .record
            .lock()
            .map_err(|_| Error::Other("History record lock poisoned".to_string()))?;
        *record = Some(history.clone());

        Ok(())
    }
}

/// Counts how often each ticker was picked. Consulted by the index ranker.
///
/// Counts only ever increase. Persistence is best-effort: load and save failures are logged
/// and otherwise ignored, so the history silently degrades to in-memory only.
pub struct SelectionHistory {
    counts: SelectionHistoryMap,
    store: Option<Box<dyn HistoryStore>>,
}

impl SelectionHistory {
    /// An empty, non-persistent history.
    pub fn in_memory() -> Self {
        SelectionHistory {
            counts: SelectionHistoryMap::new(),
            store: None,
        }
    }

    /// Load-on-start hook: hydrates the counts from `store` and keeps it for save-on-write.
    pub fn load(store: Box<dyn HistoryStore>) -> Self {
        let counts = match store.load() {
            Ok(counts) => {
                info!("Loaded selection history for {} tickers", counts.len());
                counts
            }
            Err(err) => {
                warn!("Ignoring unreadable selection history: {}", err);
                SelectionHistoryMap::new()
            }
        };

        SelectionHistory {
            counts,
            store: Some(store),
        }
    }

    /// Increments the count for `ticker` (exact, case-sensitive match) and persists the map.
    pub fn record(&mut self, ticker: &str) -> SelectionCount {
        let count = self.counts.entry(ticker.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.counts) {
                warn!("Failed to persist selection history: {}", err);
            }
        }

        count
    }

    pub fn count(&self, ticker: &str) -> SelectionCount {
        self.counts.get(ticker).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &SelectionHistoryMap {
        &self.counts
    }

    pub fn tickers(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.counts.keys()
    }
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn load(&self) -> Result<SelectionHistoryMap, Error> {
            Err(Error::Other("storage unavailable".to_string()))
        }

        fn save(&self, _history: &SelectionHistoryMap) -> Result<(), Error> {
            Err(Error::Other("storage unavailable".to_string()))
        }
    }

    #[test]
    fn test_record_increments_and_persists() {
        let store = Arc::new(MemoryHistoryStore::new());

        let mut history = SelectionHistory::load(Box::new(store.clone()));
        history.record("BONK");
        assert_eq!(history.record("BONK"), 2);

        assert_eq!(store.snapshot().unwrap().get("BONK"), Some(&2));
    }

    #[test]
    fn test_record_is_case_sensitive() {
        let mut history = SelectionHistory::in_memory();
        history.record("WIF");

        assert_eq!(history.count("WIF"), 1);
        assert_eq!(history.count("wif"), 0);
    }

    #[test]
    fn test_failing_store_is_non_fatal() {
        let mut history = SelectionHistory::load(Box::new(FailingStore));

        assert_eq!(history.record("BTC"), 1);
        assert_eq!(history.count("BTC"), 1);
    }

    #[test]
    fn test_load_hydrates_counts() {
        let mut seeded = SelectionHistoryMap::new();
        seeded.insert("JUP".to_string(), 4);

        let history = SelectionHistory::load(Box::new(MemoryHistoryStore::with_record(seeded)));
        assert_eq!(history.count("JUP"), 4);
    }
}
