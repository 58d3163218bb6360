//! Alert and pagination header builders.
//!
//! Mutation responses carry `x-{app}-alert` / `x-{app}-params` headers so a
//! generic client can render a toast for the entity that was just created,
//! updated or deleted. List responses carry `X-Total-Count` plus an RFC 5988
//! `Link` header with `first`/`prev`/`next`/`last` relations.

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue};
use participant_registry_common::pagination::PageRequest;

const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Headers announcing a created entity.
pub fn creation_alert(app: &str, entity: &str, id: &str) -> HeaderMap {
    entity_alert(app, entity, "created", id)
}

/// Headers announcing an updated entity.
pub fn update_alert(app: &str, entity: &str, id: &str) -> HeaderMap {
    entity_alert(app, entity, "updated", id)
}

/// Headers announcing a deleted entity.
pub fn deletion_alert(app: &str, entity: &str, id: &str) -> HeaderMap {
    entity_alert(app, entity, "deleted", id)
}

fn entity_alert(app: &str, entity: &str, action: &str, id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        &format!("x-{app}-alert"),
        &format!("{app}.{entity}.{action}"),
    );
    insert(&mut headers, &format!("x-{app}-params"), id);
    headers
}

/// Pagination headers for a list response.
///
/// `base_path` is the host-relative resource path the link relations point
/// back at; the caller's `size` and `sort` are repeated in every link.
pub fn pagination_headers(base_path: &str, request: &PageRequest, total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Ok(value) = HeaderValue::from_str(&total.to_string()) {
        headers.insert(TOTAL_COUNT_HEADER, value);
    }

    let total_pages = if request.size == 0 {
        0
    } else {
        ((total as f64) / f64::from(request.size)).ceil() as u32
    };
    let last_page = total_pages.saturating_sub(1);

    let mut links = Vec::new();
    if request.page + 1 < total_pages {
        links.push(page_link(base_path, request, request.page + 1, "next"));
    }
    if request.page > 0 {
        links.push(page_link(base_path, request, request.page - 1, "prev"));
    }
    links.push(page_link(base_path, request, last_page, "last"));
    links.push(page_link(base_path, request, 0, "first"));

    if let Ok(value) = HeaderValue::from_str(&links.join(", ")) {
        headers.insert(LINK, value);
    }

    headers
}

fn page_link(base_path: &str, request: &PageRequest, page: u32, rel: &str) -> String {
    let mut url = format!("{base_path}?page={page}&size={}", request.size);
    if let Some(ref sort) = request.sort {
        url.push_str(&format!("&sort={sort}"));
    }
    format!("<{url}>; rel=\"{rel}\"")
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        headers.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use participant_registry_common::pagination::SortOrder;

    #[test]
    fn test_creation_alert_headers() {
        let headers = creation_alert("registryApp", "participante", "42");

        assert_eq!(
            headers.get("x-registryapp-alert").unwrap(),
            "registryApp.participante.created"
        );
        assert_eq!(headers.get("x-registryapp-params").unwrap(), "42");
    }

    #[test]
    fn test_deletion_alert_headers() {
        let headers = deletion_alert("registryApp", "participante", "7");

        assert_eq!(
            headers.get("x-registryapp-alert").unwrap(),
            "registryApp.participante.deleted"
        );
        assert_eq!(headers.get("x-registryapp-params").unwrap(), "7");
    }

    #[test]
    fn test_pagination_headers_middle_page() {
        let request = PageRequest::new(1, 2);
        let headers = pagination_headers("/api/participantes", &request, 5);

        assert_eq!(headers.get("x-total-count").unwrap(), "5");

        let link = headers.get(LINK).unwrap().to_str().unwrap();
        assert!(link.contains("</api/participantes?page=2&size=2>; rel=\"next\""));
        assert!(link.contains("</api/participantes?page=0&size=2>; rel=\"prev\""));
        assert!(link.contains("</api/participantes?page=2&size=2>; rel=\"last\""));
        assert!(link.contains("</api/participantes?page=0&size=2>; rel=\"first\""));
    }

    #[test]
    fn test_pagination_headers_first_page_has_no_prev() {
        let request = PageRequest::new(0, 20);
        let headers = pagination_headers("/api/participantes", &request, 5);

        let link = headers.get(LINK).unwrap().to_str().unwrap();
        assert!(!link.contains("rel=\"prev\""));
        assert!(!link.contains("rel=\"next\""));
        assert!(link.contains("rel=\"last\""));
    }

    #[test]
    fn test_pagination_headers_repeat_sort() {
        let request = PageRequest::new(0, 2).with_sort(SortOrder::desc("nome"));
        let headers = pagination_headers("/api/participantes", &request, 5);

        let link = headers.get(LINK).unwrap().to_str().unwrap();
        assert!(link.contains("sort=nome,desc"));
    }
}
