//! Data transfer objects for the participant registry.

use chrono::{DateTime, Utc};

/// Participant data transfer object.
///
/// Every entity field is optional so the same record serves full payloads and
/// merge-patch payloads: partial update applies only the non-`None` fields
/// onto the stored record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticipanteDto {
    /// Identifier, absent on creation input
    pub id: Option<i64>,
    /// Participant name
    pub nome: Option<String>,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub telefone: Option<String>,
    /// Registration timestamp
    pub inscrito_em: Option<DateTime<Utc>>,
}

impl ParticipanteDto {
    /// Apply the non-absent entity fields of `patch` onto `self`.
    ///
    /// The identifier is never merged.
    pub fn merge_from(&mut self, patch: &ParticipanteDto) {
        if let Some(ref nome) = patch.nome {
            self.nome = Some(nome.clone());
        }
        if let Some(ref email) = patch.email {
            self.email = Some(email.clone());
        }
        if let Some(ref telefone) = patch.telefone {
            self.telefone = Some(telefone.clone());
        }
        if let Some(inscrito_em) = patch.inscrito_em {
            self.inscrito_em = Some(inscrito_em);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_applies_only_present_fields() {
        let mut stored = ParticipanteDto {
            id: Some(42),
            nome: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            telefone: Some("555-0100".to_string()),
            inscrito_em: None,
        };

        let patch = ParticipanteDto {
            id: Some(42),
            nome: Some("Bob".to_string()),
            ..Default::default()
        };

        stored.merge_from(&patch);

        assert_eq!(stored.nome.as_deref(), Some("Bob"));
        assert_eq!(stored.email.as_deref(), Some("alice@example.com"));
        assert_eq!(stored.telefone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_merge_never_touches_id() {
        let mut stored = ParticipanteDto {
            id: Some(1),
            ..Default::default()
        };

        let patch = ParticipanteDto {
            id: Some(7),
            nome: Some("Bob".to_string()),
            ..Default::default()
        };

        stored.merge_from(&patch);

        assert_eq!(stored.id, Some(1));
        assert_eq!(stored.nome.as_deref(), Some("Bob"));
    }
}
