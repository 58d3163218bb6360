//! Participant endpoints.
//!
//! CRUD resource for the Participante entity: create, full update,
//! merge-patch, paginated list, lookup and delete.

use crate::{
    error::{ApiError, ApiResult},
    extractors::{PageQuery, ValidatedJson},
    headers,
    responses::{Created, NoContent},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use participant_registry_application::ParticipanteDto;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

const ENTITY_NAME: &str = "participante";

/// Resource path as seen by clients (the router nests under `/api`).
const BASE_PATH: &str = "/api/participantes";

/// Participant wire representation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantePayload {
    /// Identifier; absent on creation input
    pub id: Option<i64>,

    /// Participant name
    #[validate(length(min = 1, max = 200))]
    pub nome: Option<String>,

    /// Contact e-mail
    #[validate(email)]
    pub email: Option<String>,

    /// Contact phone
    #[validate(length(max = 40))]
    pub telefone: Option<String>,

    /// Registration timestamp
    pub inscrito_em: Option<DateTime<Utc>>,
}

impl From<ParticipantePayload> for ParticipanteDto {
    fn from(payload: ParticipantePayload) -> Self {
        Self {
            id: payload.id,
            nome: payload.nome,
            email: payload.email,
            telefone: payload.telefone,
            inscrito_em: payload.inscrito_em,
        }
    }
}

impl From<ParticipanteDto> for ParticipantePayload {
    fn from(dto: ParticipanteDto) -> Self {
        Self {
            id: dto.id,
            nome: dto.nome,
            email: dto.email,
            telefone: dto.telefone,
            inscrito_em: dto.inscrito_em,
        }
    }
}

/// Participant routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/participantes",
            get(list_participantes).post(create_participante),
        )
        .route(
            "/participantes/:id",
            get(get_participante)
                .put(update_participante)
                .patch(partial_update_participante)
                .delete(delete_participante),
        )
}

/// Create participant
///
/// Creates a new participant. The payload must not carry an id.
#[utoipa::path(
    post,
    path = "/participantes",
    tag = "participantes",
    request_body = ParticipantePayload,
    responses(
        (status = 201, description = "Participant created", body = ParticipantePayload),
        (status = 400, description = "Payload already has an id (idexists)"),
    )
)]
async fn create_participante(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ParticipantePayload>,
) -> ApiResult<Created<ParticipantePayload>> {
    debug!(?payload, "REST request to save Participante");

    if payload.id.is_some() {
        return Err(ApiError::bad_request_alert(
            ENTITY_NAME,
            "idexists",
            "A new participante cannot already have an ID",
        ));
    }

    let result = state.participante_service.save(payload.into()).await?;
    let id = result
        .id
        .ok_or_else(|| ApiError::Internal("saved participante has no id".to_string()))?;

    Ok(Created {
        location: format!("{BASE_PATH}/{id}"),
        headers: headers::creation_alert(
            &state.config.application_name,
            ENTITY_NAME,
            &id.to_string(),
        ),
        body: result.into(),
    })
}

/// Update participant
///
/// Fully replaces an existing participant.
#[utoipa::path(
    put,
    path = "/participantes/{id}",
    tag = "participantes",
    params(("id" = i64, Path, description = "Participant ID")),
    request_body = ParticipantePayload,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantePayload),
        (status = 400, description = "Invalid id (idnull, idinvalid, idnotfound)"),
    )
)]
async fn update_participante(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ParticipantePayload>,
) -> ApiResult<(HeaderMap, Json<ParticipantePayload>)> {
    debug!(id, ?payload, "REST request to update Participante");

    check_update_preconditions(&state, id, &payload).await?;

    let result = state.participante_service.update(payload.into()).await?;
    let headers =
        headers::update_alert(&state.config.application_name, ENTITY_NAME, &id.to_string());

    Ok((headers, Json(result.into())))
}

/// Partially update participant
///
/// Applies only the non-absent fields of the payload onto the stored
/// participant. Accepts `application/json` and `application/merge-patch+json`
/// equivalently.
#[utoipa::path(
    patch,
    path = "/participantes/{id}",
    tag = "participantes",
    params(("id" = i64, Path, description = "Participant ID")),
    request_body = ParticipantePayload,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantePayload),
        (status = 400, description = "Invalid id (idnull, idinvalid, idnotfound)"),
        (status = 404, description = "Participant vanished before the merge"),
    )
)]
async fn partial_update_participante(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ParticipantePayload>,
) -> ApiResult<(HeaderMap, Json<ParticipantePayload>)> {
    debug!(id, ?payload, "REST request to partial update Participante");

    check_update_preconditions(&state, id, &payload).await?;

    let result = state
        .participante_service
        .partial_update(payload.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    let headers =
        headers::update_alert(&state.config.application_name, ENTITY_NAME, &id.to_string());

    Ok((headers, Json(result.into())))
}

/// List participants
///
/// Returns one page of participants; pagination metadata travels in the
/// `X-Total-Count` and `Link` headers.
#[utoipa::path(
    get,
    path = "/participantes",
    tag = "participantes",
    params(
        ("page" = Option<u32>, Query, description = "Page index (0-indexed)"),
        ("size" = Option<u32>, Query, description = "Items per page"),
        ("sort" = Option<String>, Query, description = "Sort order, `field` or `field,asc|desc`"),
    ),
    responses(
        (status = 200, description = "One page of participants", body = [ParticipantePayload])
    )
)]
async fn list_participantes(
    State(state): State<AppState>,
    PageQuery(request): PageQuery,
) -> ApiResult<(HeaderMap, Json<Vec<ParticipantePayload>>)> {
    debug!("REST request to get a page of Participantes");

    let page = state.participante_service.find_all(&request).await?;
    let headers = headers::pagination_headers(BASE_PATH, &request, page.total);
    let items: Vec<ParticipantePayload> = page.items.into_iter().map(Into::into).collect();

    Ok((headers, Json(items)))
}

/// Get participant by ID
#[utoipa::path(
    get,
    path = "/participantes/{id}",
    tag = "participantes",
    params(("id" = i64, Path, description = "Participant ID")),
    responses(
        (status = 200, description = "Participant", body = ParticipantePayload),
        (status = 404, description = "Participant not found"),
    )
)]
async fn get_participante(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ParticipantePayload>> {
    debug!(id, "REST request to get Participante");

    let dto = state
        .participante_service
        .find_one(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(dto.into()))
}

/// Delete participant
///
/// Always replies 204, whether or not the participant existed.
#[utoipa::path(
    delete,
    path = "/participantes/{id}",
    tag = "participantes",
    params(("id" = i64, Path, description = "Participant ID")),
    responses(
        (status = 204, description = "Participant deleted"),
    )
)]
async fn delete_participante(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<NoContent> {
    debug!(id, "REST request to delete Participante");

    state.participante_service.delete(id).await?;

    Ok(NoContent(headers::deletion_alert(
        &state.config.application_name,
        ENTITY_NAME,
        &id.to_string(),
    )))
}

/// Shared precondition checks for PUT and PATCH: the payload id must be
/// present, match the path id, and refer to an existing participant.
async fn check_update_preconditions(
    state: &AppState,
    id: i64,
    payload: &ParticipantePayload,
) -> ApiResult<()> {
    let payload_id = payload
        .id
        .ok_or_else(|| ApiError::bad_request_alert(ENTITY_NAME, "idnull", "Invalid id"))?;

    if payload_id != id {
        return Err(ApiError::bad_request_alert(
            ENTITY_NAME,
            "idinvalid",
            "Invalid ID",
        ));
    }

    if !state.participante_store.exists_by_id(id).await? {
        return Err(ApiError::bad_request_alert(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    Ok(())
}
