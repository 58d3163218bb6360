//! Participant service.
//!
//! Business-level operations over the repository port: save, update, partial
//! update, paginated listing, lookup and deletion.

use crate::dto::ParticipanteDto;
use crate::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use participant_registry_common::pagination::{Page, PageRequest};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Repository port for participants (implemented by the persistence layer).
#[async_trait]
pub trait ParticipanteRepositoryPort: Send + Sync {
    /// Persist a new participant, assigning its identifier.
    async fn insert(&self, dto: &ParticipanteDto) -> ApplicationResult<ParticipanteDto>;

    /// Replace the stored participant identified by `dto.id`.
    async fn replace(&self, dto: &ParticipanteDto) -> ApplicationResult<ParticipanteDto>;

    /// Fetch a participant by identifier.
    async fn get_by_id(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>>;

    /// List one page of participants plus the total count.
    async fn list(&self, request: &PageRequest) -> ApplicationResult<(Vec<ParticipanteDto>, u64)>;

    /// Remove a participant. Removing an absent identifier is not an error.
    async fn remove(&self, id: i64) -> ApplicationResult<()>;
}

/// Existence queries on the participant store.
#[async_trait]
pub trait ParticipanteStore: Send + Sync {
    /// Whether a participant with `id` exists.
    async fn exists_by_id(&self, id: i64) -> ApplicationResult<bool>;
}

/// Participant service implementation.
pub struct ParticipanteService<R>
where
    R: ParticipanteRepositoryPort,
{
    repository: Arc<R>,
}

impl<R> ParticipanteService<R>
where
    R: ParticipanteRepositoryPort,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Save a new participant.
    #[instrument(skip(self, dto))]
    pub async fn save(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        debug!("Request to save Participante");
        self.repository.insert(&dto).await
    }

    /// Fully replace an existing participant.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, dto: ParticipanteDto) -> ApplicationResult<ParticipanteDto> {
        debug!(id = ?dto.id, "Request to update Participante");
        self.repository.replace(&dto).await
    }

    /// Apply the non-absent fields of `dto` onto the stored participant.
    ///
    /// Returns `None` when no participant with `dto.id` exists.
    #[instrument(skip(self, dto))]
    pub async fn partial_update(
        &self,
        dto: ParticipanteDto,
    ) -> ApplicationResult<Option<ParticipanteDto>> {
        debug!(id = ?dto.id, "Request to partially update Participante");

        let id = dto
            .id
            .ok_or_else(|| ApplicationError::InvalidInput("missing participant id".to_string()))?;

        let Some(mut current) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };

        current.merge_from(&dto);
        let updated = self.repository.replace(&current).await?;
        Ok(Some(updated))
    }

    /// Get one page of participants.
    #[instrument(skip(self, request))]
    pub async fn find_all(&self, request: &PageRequest) -> ApplicationResult<Page<ParticipanteDto>> {
        debug!(page = request.page, size = request.size, "Request to get a page of Participantes");
        let (items, total) = self.repository.list(request).await?;
        Ok(Page::from_request(items, request, total))
    }

    /// Get one participant by identifier.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> ApplicationResult<Option<ParticipanteDto>> {
        debug!(id, "Request to get Participante");
        self.repository.get_by_id(id).await
    }

    /// Delete a participant. Idempotent from the caller's perspective.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        debug!(id, "Request to delete Participante");
        self.repository.remove(id).await
    }
}
