use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::models::answer::Answer;
use crate::models::result::TestResult;
use crate::models::user::{StoredResult, User, UserProfile};

/// Transient in-memory store for registered users and their scored tests.
///
/// Holds nothing across restarts; ids are assigned monotonically per
/// process. Cloning shares the underlying maps.
#[derive(Clone, Default)]
pub struct MemStorage {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    users: HashMap<i32, User>,
    results: HashMap<i32, StoredResult>,
    next_user_id: i32,
    next_result_id: i32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&self, profile: UserProfile, photo_path: String) -> User {
        let mut inner = self.inner.lock().expect("storage mutex poisoned");
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            profile,
            photo_path,
        };
        inner.users.insert(user.id, user.clone());
        user
    }

    pub fn get_user(&self, id: i32) -> Option<User> {
        self.inner
            .lock()
            .expect("storage mutex poisoned")
            .users
            .get(&id)
            .cloned()
    }

    pub fn get_user_by_name(&self, name: &str) -> Option<User> {
        self.inner
            .lock()
            .expect("storage mutex poisoned")
            .users
            .values()
            .find(|u| u.profile.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn create_result(
        &self,
        user_id: i32,
        result: TestResult,
        answers: Vec<Answer>,
    ) -> StoredResult {
        let mut inner = self.inner.lock().expect("storage mutex poisoned");
        inner.next_result_id += 1;
        let stored = StoredResult {
            id: inner.next_result_id,
            user_id,
            result,
            answers,
            created_at: Utc::now(),
        };
        inner.results.insert(stored.id, stored.clone());
        stored
    }

    pub fn results_for_user(&self, user_id: i32) -> Vec<StoredResult> {
        let mut results: Vec<StoredResult> = self
            .inner
            .lock()
            .expect("storage mutex poisoned")
            .results
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        results.sort_by_key(|r| r.id);
        results
    }
}
