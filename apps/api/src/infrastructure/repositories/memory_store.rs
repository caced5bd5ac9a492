use tokio::sync::RwLock;

use crate::domain::agent::Agent;
use crate::domain::sprint::Sprint;
use crate::domain::task::Task;
use crate::domain::team::Team;
use crate::domain::team_member::TeamMember;
use crate::infrastructure::IdGenerator;

/// Anything the memory store can hold
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Process-lifetime array of records
///
/// Every lookup is a linear scan. Each mutation happens under one write-lock
/// acquisition, so a merge is never observed half-applied.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
    ids: IdGenerator,
}

impl<T: Record> MemoryStore<T> {
    /// Creates a store holding `seed`, generating ids after the seeded ones
    pub fn new(prefix: &'static str, seed: Vec<T>) -> Self {
        let ids = IdGenerator::seeded(prefix, seed.iter().map(|record| record.id()));
        Self {
            records: RwLock::new(seed),
            ids,
        }
    }

    /// Reserves the next identifier
    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    /// Clones every record
    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Clones every record passing `predicate`
    pub async fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Finds a record by id
    pub async fn find(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Replaces the record with the same id, or appends it
    pub async fn upsert(&self, record: T) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Runs `change` on the matching record in place
    ///
    /// Returns the record after the change together with whatever `change`
    /// returned, or `None` when no record has this id.
    pub async fn modify<R>(&self, id: &str, change: impl FnOnce(&mut T) -> R) -> Option<(T, R)> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|record| record.id() == id)?;
        let outcome = change(record);
        Some((record.clone(), outcome))
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Record for Agent {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Sprint {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Team {
    fn id(&self) -> &str {
        Team::id(self)
    }
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}
