//! Application state and dependency injection.
//!
//! Handlers receive two collaborators through [`AppState`]: the participant
//! service for business-level operations and the participant store for the
//! existence precondition checks. Both are type-erased so tests can swap in
//! their own implementations.

use crate::config::ApiConfig;
use async_trait::async_trait;
use parking_lot::RwLock;
use participant_registry_application::{
    ApplicationError, ApplicationResult, ParticipanteDto, ParticipanteRepositoryPort,
    ParticipanteService, ParticipanteStore,
};
use participant_registry_common::pagination::{Page, PageRequest, SortDirection};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Participant service (type-erased)
    pub participante_service: Arc<dyn ParticipanteServiceTrait>,

    /// Participant store for existence checks (type-erased)
    pub participante_store: Arc<dyn ParticipanteStore>,
}

impl AppState {
    /// Create application state backed by the in-memory repository.
    pub fn new(config: ApiConfig) -> Self {
        let repository = Arc::new(InMemoryParticipanteRepository::new());
        let service = Arc::new(ParticipanteService::new(Arc::clone(&repository)));

        Self {
            config: Arc::new(config),
            participante_service: service,
            participante_store: repository,
        }
    }

    /// Create application state with custom collaborators.
    pub fn with_collaborators<S, T>(config: ApiConfig, service: S, store: T) -> Self
    where
        S: ParticipanteServiceTrait + 'static,
        T: ParticipanteStore + 'static,
    {
        Self {
            config: Arc::new(config),
            participante_service: Arc::new(service),
            participante_store: Arc::new(store),
        }
    }
}

/// Type-erased participant service trait
#[async_trait]
pub trait ParticipanteServiceTrait: Send + Sync {
    async fn save(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto>;

    async fn update(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto>;

    async fn partial_update(
        &self,
        dto: ParticipanteDto,
    ) -> ApplicationResult<Option<ParticipanteDto>>;

    async fn find_all(&self, request: &PageRequest) -> ApplicationResult<Page<ParticipanteDto>>;

    async fn find_one(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>>;

    async fn delete(&self, id: i64) -> ApplicationResult<()>;
}

#[async_trait]
impl<R> ParticipanteServiceTrait for ParticipanteService<R>
where
    R: ParticipanteRepositoryPort + 'static,
{
    async fn save(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        ParticipanteService::save(self, dto).await
    }

    async fn update(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        ParticipanteService::update(self, dto).await
    }

    async fn partial_update(
        &self,
        dto: ParticipanteDto,
    ) -> ApplicationResult<Option<ParticipanteDto>> {
        ParticipanteService::partial_update(self, dto).await
    }

    async fn find_all(&self, request: &PageRequest) -> ApplicationResult<Page<ParticipanteDto>> {
        ParticipanteService::find_all(self, request).await
    }

    async fn find_one(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>> {
        ParticipanteService::find_one(self, id).await
    }

    async fn delete(&self, id: i64) -> ApplicationResult<()> {
        ParticipanteService::delete(self, id).await
    }
}

// ============================================================================
// IN-MEMORY IMPLEMENTATION (default wiring, development and tests)
// ============================================================================

/// In-memory participant repository
pub struct InMemoryParticipanteRepository {
    rows: RwLock<HashMap<i64, ParticipanteDto>>,
    seq: AtomicI64,
}

impl InMemoryParticipanteRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            seq: AtomicI64::new(0),
        }
    }
}

impl Default for InMemoryParticipanteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipanteRepositoryPort for InMemoryParticipanteRepository {
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
            .ok_or_else(|| ApplicationError::InvalidInput("missing participant id".to_string()))?;

        let mut rows = self.rows.write();
        if !rows.contains_key(&id) {
            return Err(ApplicationError::NotFound(format!(
                "Participante not found: {id}"
            )));
        }
        rows.insert(id, dto.clone());
        Ok(dto.clone())
    }

    async fn get_by_id(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn list(&self, request: &PageRequest) -> ApplicationResult<(Vec<ParticipanteDto>, u64)> {
        let mut rows: Vec<_> = self.rows.read().values().cloned().collect();

        match request.sort.as_ref() {
            Some(sort) if sort.field == "nome" => {
                rows.sort_by(|a, b| a.nome.cmp(&b.nome).then(a.id.cmp(&b.id)));
                if sort.direction == SortDirection::Desc {
                    rows.reverse();
                }
            }
            Some(sort) if sort.direction == SortDirection::Desc => {
                rows.sort_by(|a, b| b.id.cmp(&a.id));
            }
            _ => rows.sort_by_key(|p| p.id),
        }

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
impl ParticipanteStore for InMemoryParticipanteRepository {
    async fn exists_by_id(&self, id: i64) -> ApplicationResult<bool> {
        Ok(self.rows.read().contains_key(&id))
    }
}
