use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::{NewRecord, Record, RecordId, RecordUpdate};
use crate::repository::{RecordDoesntExist, RecordsRepository, UpdateResult};

type RecordsMap = BTreeMap<RecordId, Record>;

#[derive(Debug)]
struct RepositoryState {
    records: RecordsMap,
    next_id: RecordId,
}

impl Default for RepositoryState {
    fn default() -> Self {
        RepositoryState {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory repository. Ids start at 1 and are never handed out twice,
/// even after the record holding one was deleted.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    state: Arc<Mutex<RepositoryState>>,
}

impl MemoryRepository {
    pub fn new() -> MemoryRepository {
        MemoryRepository::default()
    }

    // Every operation leaves the state consistent before anything can panic,
    // so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordsRepository for MemoryRepository {
    fn add_record(&self, record: NewRecord) -> RecordId {
        let mut state = self.lock();

        let record_id = state.next_id;
        state.next_id += 1;
        state.records.insert(record_id, Record::new(record_id, record));

        log::info!("Added record {}", record_id);
        record_id
    }

    fn get_records(&self) -> Vec<Record> {
        self.lock().records.values().cloned().collect()
    }

    fn get(&self, record_id: RecordId) -> Option<Record> {
        self.lock().records.get(&record_id).cloned()
    }

    fn find(&self, query: &str) -> Vec<Record> {
        self.lock()
            .records
            .values()
            .filter(|record| record.matches(query))
            .cloned()
            .collect()
    }

    fn update(&self, record_id: RecordId, update: RecordUpdate) -> UpdateResult<Record> {
        let mut state = self.lock();

        match state.records.get_mut(&record_id) {
            Some(record) => {
                record.apply(update);
                log::info!("Updated record {}", record_id);
                Ok(record.clone())
            }
            None => {
                log::warn!(
                    "Tried to update record that doesn't exist. record_id={}",
                    record_id
                );
                Err(RecordDoesntExist(record_id))
            }
        }
    }

    fn delete(&self, record_id: RecordId) -> bool {
        let removed = self.lock().records.remove(&record_id).is_some();
        if removed {
            log::info!("Deleted record {}", record_id);
        } else {
            log::warn!(
                "Tried to delete record that doesn't exist. record_id={}",
                record_id
            );
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::MemoryRepository;
    use crate::record::{NewRecord, RecordId, RecordUpdate};
    use crate::repository::{RecordDoesntExist, RecordsRepository};

    fn new_record(name: &str, surname: &str) -> NewRecord {
        NewRecord::new(name.to_string(), surname.to_string(), "123456789".to_string(), 25)
    }

    #[test]
    fn test_repository_add_record() {
        let repo = MemoryRepository::new();
        assert!(repo.get(1).is_none());

        let record_id = repo.add_record(new_record("John", "Doe"));
        assert_eq!(record_id, 1);

        let record = repo.get(1).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name(), "John");
        assert_eq!(record.surname(), "Doe");
        assert_eq!(record.phone(), "123456789");
        assert_eq!(record.age(), 25);
    }

    #[test]
    fn test_repository_get_records() {
        let repo = MemoryRepository::new();
        assert!(repo.get_records().is_empty());

        repo.add_record(new_record("John", "Doe"));
        repo.add_record(new_record("Homer", "Simpson"));

        let records = repo.get_records();
        assert_eq!(
            records.iter().map(|rec| rec.id).collect::<Vec<RecordId>>(),
            vec![1, 2]
        );
        assert_eq!(records[0], repo.get(1).unwrap());
    }

    #[test]
    fn test_repository_records_snapshot() {
        let repo = MemoryRepository::new();
        repo.add_record(new_record("John", "Doe"));

        let snapshot = repo.get_records();
        repo.delete(1);

        assert_eq!(snapshot.len(), 1);
        assert!(repo.get_records().is_empty());
    }

    #[test]
    fn test_repository_find() {
        let repo = MemoryRepository::new();
        assert!(repo.find("oe").is_empty());

        repo.add_record(new_record("John", "Doe"));
        repo.add_record(new_record("John", "Doe"));
        repo.add_record(new_record("Homer", "Simpson"));

        let found = repo.find("oe");
        assert_eq!(
            found.iter().map(|rec| rec.id).collect::<Vec<RecordId>>(),
            vec![1, 2]
        );

        assert_eq!(repo.find("").len(), 3);
        assert_eq!(repo.find("Hom")[0].id, 3);
        assert!(repo.find("doe").is_empty());
    }

    #[test]
    fn test_repository_update_record() {
        let repo = MemoryRepository::new();
        repo.add_record(new_record("John", "Doe"));

        let updated = repo
            .update(
                1,
                RecordUpdate::new(
                    "Homer".to_string(),
                    "Simpson".to_string(),
                    "987654321".to_string(),
                ),
            )
            .unwrap();

        let record = repo.get(1).unwrap();
        assert_eq!(updated, record);
        assert_eq!(record.id, 1);
        assert_eq!(record.name(), "Homer");
        assert_eq!(record.surname(), "Simpson");
        assert_eq!(record.phone(), "987654321");
        assert_eq!(record.age(), 25);
    }

    #[test]
    fn test_repository_update_missed_record() {
        let repo = MemoryRepository::new();
        repo.add_record(new_record("John", "Doe"));
        let before = repo.get_records();

        let result = repo.update(
            7,
            RecordUpdate::new("A".to_string(), "B".to_string(), "000000000".to_string()),
        );

        assert_eq!(result, Err(RecordDoesntExist(7)));
        assert_eq!(repo.get_records(), before);
    }

    #[test]
    fn test_repository_delete_record() {
        let repo = MemoryRepository::new();
        repo.add_record(new_record("John", "Doe"));

        assert!(repo.delete(1));
        assert!(repo.get(1).is_none());
        assert!(repo.get_records().is_empty());

        assert!(!repo.delete(1));
        assert!(repo.update(
            1,
            RecordUpdate::new("A".to_string(), "B".to_string(), "000000000".to_string())
        )
        .is_err());
    }

    #[test]
    fn test_repository_ids_not_reused() {
        let repo = MemoryRepository::new();
        repo.add_record(new_record("John", "Doe"));
        repo.add_record(new_record("Jane", "Doe"));

        assert!(repo.delete(2));
        assert!(repo.delete(1));

        assert_eq!(repo.add_record(new_record("Homer", "Simpson")), 3);
        assert_eq!(repo.get_records().len(), 1);
    }

    #[test]
    fn test_repository_clones_share_records() {
        let repo = MemoryRepository::new();
        let other = repo.clone();

        other.add_record(new_record("John", "Doe"));

        assert_eq!(repo.get(1).unwrap().name(), "John");
    }

    #[test]
    fn test_repository_concurrent_adds() {
        let repo = MemoryRepository::new();

        let ids: Vec<RecordId> = thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| {
                    let repo = repo.clone();
                    scope.spawn(move || {
                        (0..50)
                            .map(|_| repo.add_record(new_record("John", "Doe")))
                            .collect::<Vec<RecordId>>()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<RecordId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 400);
        assert_eq!(repo.get_records().len(), 400);
        assert_eq!(repo.add_record(new_record("Homer", "Simpson")), 401);
    }
}
