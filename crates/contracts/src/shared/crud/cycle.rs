//! Mutation/refresh cycle: one store mutation followed by the reload that
//! must observe it.
//!
//! The reload is issued only after the mutation has been awaited, so the
//! refreshed collection always reflects the mutation. There are no retries.

use super::messages;
use super::record::{CrudEntity, RecordId};
use super::store::RecordRepository;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<R> {
    Add(R),
    Update(RecordId, R),
    Delete { id: RecordId, label: String },
}

/// Result of [`run_mutation`].
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome<R> {
    /// The dialog (if any) may close.
    pub accepted: bool,
    pub message: String,
    /// Freshly loaded collection, when a reload ran and succeeded.
    pub records: Option<Vec<R>>,
    /// Load error of the follow-up reload.
    pub reload_error: Option<String>,
}

impl<R> CycleOutcome<R> {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
            records: None,
            reload_error: None,
        }
    }

    pub fn accepted(
        message: impl Into<String>,
        records: Option<Vec<R>>,
        reload_error: Option<String>,
    ) -> Self {
        Self {
            accepted: true,
            message: message.into(),
            records,
            reload_error,
        }
    }
}

/// Loads the collection, mapping any failure to the generic load message.
pub async fn load_records<R, S>(store: &S) -> Result<Vec<R>, String>
where
    R: CrudEntity,
    S: RecordRepository<R> + ?Sized,
{
    store.list().await.map_err(|err| {
        log::error!("{} list failed: {}", R::ENDPOINT, err);
        messages::load_failed::<R>(&err)
    })
}

/// Fetches a fresh collection and picks the record to edit by id.
pub async fn lookup_for_edit<R, S>(store: &S, id: RecordId) -> Result<R, String>
where
    R: CrudEntity,
    S: RecordRepository<R> + ?Sized,
{
    let records = store.list().await.map_err(|err| {
        log::error!("{} lookup of {} failed: {}", R::ENDPOINT, id, err);
        messages::lookup_error::<R>()
    })?;
    records
        .into_iter()
        .find(|r| r.id() == Some(id))
        .ok_or_else(messages::not_found::<R>)
}

async fn reload<R, S>(store: &S) -> (Option<Vec<R>>, Option<String>)
where
    R: CrudEntity,
    S: RecordRepository<R> + ?Sized,
{
    match load_records(store).await {
        Ok(records) => (Some(records), None),
        Err(err) => (None, Some(err)),
    }
}

/// Runs one mutation against the store.
///
/// Add and update are gated on the response's `success` flag: a rejection
/// keeps the dialog open and skips the reload. Delete is not gated: any
/// parsed response is shown and followed by a reload.
pub async fn run_mutation<R, S>(store: &S, mutation: Mutation<R>) -> CycleOutcome<R>
where
    R: CrudEntity,
    S: RecordRepository<R> + ?Sized,
{
    match mutation {
        Mutation::Add(record) => {
            let identifier = record.identifier().to_string();
            match store.add(record).await {
                Ok(resp) if resp.success => {
                    log::info!("{} add accepted: {}", R::ENDPOINT, identifier);
                    let message = resp
                        .message
                        .unwrap_or_else(|| messages::added::<R>(&identifier));
                    let (records, reload_error) = reload(store).await;
                    CycleOutcome::accepted(message, records, reload_error)
                }
                Ok(resp) => {
                    CycleOutcome::rejected(resp.message.unwrap_or_else(messages::add_rejected::<R>))
                }
                Err(err) => {
                    log::error!("{} add failed: {}", R::ENDPOINT, err);
                    CycleOutcome::rejected(messages::add_error::<R>())
                }
            }
        }
        Mutation::Update(id, record) => {
            let identifier = record.identifier().to_string();
            match store.update(id, record).await {
                Ok(resp) if resp.success => {
                    log::info!("{} update accepted: {}", R::ENDPOINT, id);
                    let message = resp
                        .message
                        .unwrap_or_else(|| messages::updated::<R>(&identifier));
                    let (records, reload_error) = reload(store).await;
                    CycleOutcome::accepted(message, records, reload_error)
                }
                Ok(resp) => CycleOutcome::rejected(
                    resp.message.unwrap_or_else(messages::update_rejected::<R>),
                ),
                Err(err) => {
                    log::error!("{} update of {} failed: {}", R::ENDPOINT, id, err);
                    CycleOutcome::rejected(messages::update_error::<R>())
                }
            }
        }
        Mutation::Delete { id, label } => match store.delete(id).await {
            Ok(resp) => {
                log::info!("{} delete of {} ({}) answered", R::ENDPOINT, id, label);
                let message = resp.message.unwrap_or_else(messages::delete_done::<R>);
                let (records, reload_error) = reload(store).await;
                CycleOutcome::accepted(message, records, reload_error)
            }
            Err(err) => {
                log::error!("{} delete of {} failed: {}", R::ENDPOINT, id, err);
                CycleOutcome::rejected(messages::delete_error::<R>())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_guest_request::aggregate::GuestRequest;
    use crate::domain::a003_maintenance_ticket::aggregate::MaintenanceTicket;
    use crate::shared::crud::{
        ActionResponse, DeleteResponse, LocalRecordStore, MemorySlot, StoreError,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Remote-like double: answers with canned responses and records calls.
    struct ScriptedStore {
        records: Vec<GuestRequest>,
        add_response: Result<ActionResponse, StoreError>,
        delete_response: DeleteResponse,
        fail_list: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedStore {
        fn new(add_response: Result<ActionResponse, StoreError>) -> Self {
            Self {
                records: vec![GuestRequest {
                    id: Some(RecordId(1)),
                    request_id: "GS-001".to_string(),
                    status: "Assigned".to_string(),
                    ..GuestRequest::default()
                }],
                add_response,
                delete_response: DeleteResponse::new("Request deleted successfully."),
                fail_list: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl RecordRepository<GuestRequest> for ScriptedStore {
        async fn list(&self) -> Result<Vec<GuestRequest>, StoreError> {
            self.calls.lock().unwrap().push("list");
            if self.fail_list {
                return Err(StoreError::Transport("HTTP 500".to_string()));
            }
            Ok(self.records.clone())
        }

        async fn add(&self, _record: GuestRequest) -> Result<ActionResponse, StoreError> {
            self.calls.lock().unwrap().push("add");
            self.add_response.clone()
        }

        async fn update(
            &self,
            _id: RecordId,
            _record: GuestRequest,
        ) -> Result<ActionResponse, StoreError> {
            self.calls.lock().unwrap().push("update");
            self.add_response.clone()
        }

        async fn delete(&self, _id: RecordId) -> Result<DeleteResponse, StoreError> {
            self.calls.lock().unwrap().push("delete");
            Ok(self.delete_response.clone())
        }
    }

    fn new_request(request_id: &str) -> GuestRequest {
        GuestRequest {
            request_id: request_id.to_string(),
            guest_room: "210".to_string(),
            request: "Late checkout".to_string(),
            assigned_staff: "K. Fernando".to_string(),
            status: "Assigned".to_string(),
            ..GuestRequest::default()
        }
    }

    #[tokio::test]
    async fn test_accepted_add_reloads_after_mutation() {
        let store = ScriptedStore::new(Ok(ActionResponse::accepted("Request added successfully!")));
        let outcome = run_mutation(&store, Mutation::Add(new_request("GS-002"))).await;

        assert!(outcome.accepted);
        assert_eq!(outcome.message, "Request added successfully!");
        assert!(outcome.records.is_some());
        assert_eq!(store.calls(), vec!["add", "list"]);
    }

    #[tokio::test]
    async fn test_rejected_add_shows_server_message_and_skips_reload() {
        let store = ScriptedStore::new(Ok(ActionResponse::rejected(
            "Request ID already exists: GS-001",
        )));
        let outcome = run_mutation(&store, Mutation::Add(new_request("GS-001"))).await;

        assert!(!outcome.accepted);
        assert_eq!(outcome.message, "Request ID already exists: GS-001");
        assert!(outcome.records.is_none());
        assert_eq!(store.calls(), vec!["add"]);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_template() {
        let store = ScriptedStore::new(Ok(ActionResponse {
            success: false,
            message: None,
        }));
        let outcome = run_mutation(&store, Mutation::Update(RecordId(1), new_request("GS-001"))).await;
        assert_eq!(outcome.message, "Failed to update request.");
    }

    #[tokio::test]
    async fn test_transport_error_is_generic_and_not_reloaded() {
        let store = ScriptedStore::new(Err(StoreError::Transport("offline".to_string())));
        let outcome = run_mutation(&store, Mutation::Add(new_request("GS-003"))).await;

        assert!(!outcome.accepted);
        assert_eq!(outcome.message, "Error adding request.");
        assert_eq!(store.calls(), vec!["add"]);
    }

    #[tokio::test]
    async fn test_delete_reloads_even_when_server_reports_failure() {
        let mut store = ScriptedStore::new(Ok(ActionResponse::accepted("unused")));
        store.delete_response = DeleteResponse::new("Request not found.");
        let outcome = run_mutation(
            &store,
            Mutation::Delete {
                id: RecordId(99),
                label: "GS-099".to_string(),
            },
        )
        .await;

        assert!(outcome.accepted);
        assert_eq!(outcome.message, "Request not found.");
        assert_eq!(store.calls(), vec!["delete", "list"]);
    }

    #[tokio::test]
    async fn test_reload_failure_is_reported_separately() {
        let mut store = ScriptedStore::new(Ok(ActionResponse::accepted("ok")));
        store.fail_list = true;
        let outcome = run_mutation(&store, Mutation::Add(new_request("GS-004"))).await;

        assert!(outcome.accepted);
        assert!(outcome.records.is_none());
        assert_eq!(
            outcome.reload_error.as_deref(),
            Some("Error loading requests: HTTP 500")
        );
    }

    #[tokio::test]
    async fn test_lookup_for_edit_matches_id() {
        let store = ScriptedStore::new(Ok(ActionResponse::accepted("ok")));
        let found = lookup_for_edit(&store, RecordId(1)).await.unwrap();
        assert_eq!(found.request_id, "GS-001");

        let missing = lookup_for_edit(&store, RecordId(2)).await;
        assert_eq!(missing.unwrap_err(), "Request not found.");
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip_on_local_store() {
        let store = LocalRecordStore::<MaintenanceTicket, _>::new(MemorySlot::new());
        let ticket = MaintenanceTicket {
            ticket: "MT-2026-020".to_string(),
            location: "Room 301".to_string(),
            issue: "Broken blind".to_string(),
            assigned_to: "R. Silva".to_string(),
            status: "Open".to_string(),
            ..MaintenanceTicket::default()
        };

        let outcome = run_mutation(&store, Mutation::Add(ticket.clone())).await;
        assert!(outcome.accepted);
        let records = outcome.records.unwrap();
        let stored = records
            .iter()
            .find(|t| t.ticket == "MT-2026-020")
            .expect("added ticket is listed");
        assert_eq!(stored.location, ticket.location);
        assert_eq!(stored.issue, ticket.issue);
        assert_eq!(stored.assigned_to, ticket.assigned_to);
        assert_eq!(stored.status, ticket.status);

        let id = stored.id.unwrap();
        let outcome = run_mutation(
            &store,
            Mutation::Delete {
                id,
                label: stored.ticket.clone(),
            },
        )
        .await;
        assert!(outcome.records.unwrap().iter().all(|t| t.id != Some(id)));
    }
}
