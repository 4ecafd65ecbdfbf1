//! Session participants.

use crate::domain::foundation::{ParticipantId, ValidationError};

/// A person taking part in one session.
///
/// Identity is the token, not the name: two participants may share a
/// display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
}

impl Participant {
    /// Creates a participant with a fresh token.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank after trimming
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        Ok(Self {
            id: ParticipantId::new(),
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
