//! Tests for the participant service.
//!
//! Exercises save, update, partial update, pagination and deletion against an
//! in-memory repository fake.

use async_trait::async_trait;
use parking_lot::RwLock;
use participant_registry_application::{
    ApplicationError, ApplicationResult, ParticipanteDto, ParticipanteRepositoryPort,
    ParticipanteService, ParticipanteStore,
};
use participant_registry_common::pagination::PageRequest;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct FakeRepository {
    rows: RwLock<HashMap<i64, ParticipanteDto>>,
    seq: AtomicI64,
}

#[async_trait]
impl ParticipanteRepositoryPort for FakeRepository {
    async fn insert(&self, dto: &ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        let id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = dto.clone();
        stored.id = Some(id);
        self.rows.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn replace(&self, dto: &ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        let id = dto
            .id
            .ok_or_else(|| ApplicationError::InvalidInput("missing id".to_string()))?;
        let mut rows = self.rows.write();
        if !rows.contains_key(&id) {
            return Err(ApplicationError::NotFound(format!("Participante {id}")));
        }
        rows.insert(id, dto.clone());
        Ok(dto.clone())
    }

    async fn get_by_id(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self, request: &PageRequest) -> ApplicationResult<(Vec<ParticipanteDto>, u64)> {
        let mut rows: Vec<_> = self.rows.read().values().cloned().collect();
        rows.sort_by_key(|p| p.id);
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn remove(&self, id: i64) -> ApplicationResult<()> {
        self.rows.write().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ParticipanteStore for FakeRepository {
    async fn exists_by_id(&self, id: i64) -> ApplicationResult<bool> {
        Ok(self.rows.read().contains_key(&id))
    }
}

fn service() -> (ParticipanteService<FakeRepository>, Arc<FakeRepository>) {
    let repo = Arc::new(FakeRepository::default());
    (ParticipanteService::new(Arc::clone(&repo)), repo)
}

fn alice() -> ParticipanteDto {
    ParticipanteDto {
        id: None,
        nome: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
        telefone: None,
        inscrito_em: None,
    }
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let (service, _) = service();

    let first = service.save(alice()).await.unwrap();
    let second = service.save(alice()).await.unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(first.nome.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let (service, _) = service();
    let saved = service.save(alice()).await.unwrap();

    let replacement = ParticipanteDto {
        id: saved.id,
        nome: Some("Bob".to_string()),
        ..Default::default()
    };

    let updated = service.update(replacement).await.unwrap();
    assert_eq!(updated.nome.as_deref(), Some("Bob"));
    // Full replace drops fields absent from the payload
    assert_eq!(updated.email, None);
}

#[tokio::test]
async fn test_update_missing_participant_is_not_found() {
    let (service, _) = service();

    let result = service
        .update(ParticipanteDto {
            id: Some(99),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn test_partial_update_merges_present_fields_only() {
    let (service, _) = service();
    let saved = service.save(alice()).await.unwrap();

    let patch = ParticipanteDto {
        id: saved.id,
        nome: Some("Bob".to_string()),
        ..Default::default()
    };

    let patched = service.partial_update(patch).await.unwrap().unwrap();
    assert_eq!(patched.nome.as_deref(), Some("Bob"));
    assert_eq!(patched.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_partial_update_absent_participant_yields_none() {
    let (service, _) = service();

    let patch = ParticipanteDto {
        id: Some(99),
        nome: Some("Bob".to_string()),
        ..Default::default()
    };

    assert!(service.partial_update(patch).await.unwrap().is_none());
}

#[tokio::test]
async fn test_partial_update_without_id_is_invalid() {
    let (service, _) = service();

    let result = service.partial_update(ParticipanteDto::default()).await;
    assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
}

#[tokio::test]
async fn test_find_all_pages_and_total() {
    let (service, _) = service();
    for _ in 0..5 {
        service.save(alice()).await.unwrap();
    }

    let page = service.find_all(&PageRequest::new(0, 2)).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_next());

    let last = service.find_all(&PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_next());
    assert!(last.has_prev());
}

#[tokio::test]
async fn test_find_one_present_and_absent() {
    let (service, _) = service();
    let saved = service.save(alice()).await.unwrap();

    let found = service.find_one(saved.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(saved));

    assert!(service.find_one(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (service, repo) = service();
    let saved = service.save(alice()).await.unwrap();
    let id = saved.id.unwrap();

    service.delete(id).await.unwrap();
    assert!(!repo.exists_by_id(id).await.unwrap());

    // Deleting again still succeeds
    service.delete(id).await.unwrap();
}
