//! Tests for the generic CRUD service.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::*;
use crate::domain::{ErrorCode, User};
use rstest::{fixture, rstest};

#[derive(Default)]
struct StubUserRepository {
    rows: Mutex<BTreeMap<i32, User>>,
    failure: Mutex<Option<RepositoryError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl StubUserRepository {
    fn failing(error: RepositoryError) -> Self {
        let stub = Self::default();
        *stub.failure.lock().expect("failure lock") = Some(error);
        stub
    }

    fn record(&self, call: &'static str) -> Result<(), RepositoryError> {
        self.calls.lock().expect("calls lock").push(call);
        match self.failure.lock().expect("failure lock").clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl Repository<User> for StubUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.record("get_all")?;
        Ok(self.rows.lock().expect("rows lock").values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        self.record("get_by_id")?;
        Ok(self.rows.lock().expect("rows lock").get(&id).cloned())
    }

    async fn create(&self, mut entity: User) -> Result<User, RepositoryError> {
        self.record("create")?;
        let mut rows = self.rows.lock().expect("rows lock");
        let next = rows.keys().next_back().map_or(1, |last| last + 1);
        entity.base.id = next;
        rows.insert(next, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i32, mut entity: User) -> Result<Option<User>, RepositoryError> {
        self.record("update")?;
        let mut rows = self.rows.lock().expect("rows lock");
        let Some(slot) = rows.get_mut(&id) else {
            return Ok(None);
        };
        entity.base.id = id;
        *slot = entity.clone();
        Ok(Some(entity))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        self.record("delete")?;
        Ok(self.rows.lock().expect("rows lock").remove(&id).is_some())
    }
}

#[fixture]
fn repository() -> Arc<StubUserRepository> {
    Arc::new(StubUserRepository::default())
}

fn service_over(repository: &Arc<StubUserRepository>) -> GenericService<User> {
    let port: Arc<dyn Repository<User>> = repository.clone();
    GenericService::new(port)
}

#[rstest]
#[tokio::test]
async fn create_then_get_by_id_round_trips(repository: Arc<StubUserRepository>) {
    let service = service_over(&repository);

    let created = service
        .create(User::new("Ana", "Diaz", "adiaz"))
        .await
        .expect("create succeeds");
    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup succeeds");

    assert_eq!(fetched, Some(created));
    assert_eq!(repository.calls(), vec!["create", "get_by_id"]);
}

#[rstest]
#[tokio::test]
async fn update_of_absent_key_creates_nothing(repository: Arc<StubUserRepository>) {
    let service = service_over(&repository);

    let updated = service
        .update(41, User::new("Ana", "Diaz", "adiaz"))
        .await
        .expect("update succeeds");

    assert!(updated.is_none());
    assert!(service.get_all().await.expect("list succeeds").is_empty());
}

#[rstest]
#[tokio::test]
async fn delete_reports_whether_a_row_was_removed(repository: Arc<StubUserRepository>) {
    let service = service_over(&repository);
    let created = service
        .create(User::new("Ana", "Diaz", "adiaz"))
        .await
        .expect("create succeeds");

    assert!(service.delete(created.id()).await.expect("first delete"));
    assert!(!service.delete(created.id()).await.expect("second delete"));
}

#[rstest]
#[case(RepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("relation missing"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_codes(
    #[case] failure: RepositoryError,
    #[case] expected: ErrorCode,
) {
    let repository = Arc::new(StubUserRepository::failing(failure));
    let service = service_over(&repository);

    let error = service.get_all().await.expect_err("listing fails");

    assert_eq!(error.code(), expected);
    assert!(error.message().starts_with("user repository"));
}

#[tokio::test]
async fn unavailable_message_omits_driver_detail() {
    let repository = Arc::new(StubUserRepository::failing(RepositoryError::connection(
        "failed to get connection from pool: password authentication failed",
    )));
    let service = service_over(&repository);

    let error = service.get_by_id(1).await.expect_err("lookup fails");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(error.message(), "user repository unavailable");
}
