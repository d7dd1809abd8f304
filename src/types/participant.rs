//! Participant and roster types
//!
//! The settlement engine operates over a fixed, closed roster of named
//! participants known at configuration time. Identity is exact name
//! equality, and roster order is significant: it is the tie-break that
//! makes settlement output deterministic.

use crate::types::SettlementError;

/// Participant identifier
///
/// Participants are identified by exact name equality within a roster.
pub type ParticipantName = String;

/// Fixed, ordered roster of participants
///
/// The roster is validated on construction and immutable afterwards.
/// It defines both membership (who may pay or share expenses) and the
/// iteration order used when partitioning creditors and debtors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<ParticipantName>,
}

impl Roster {
    /// Create a roster from an ordered list of names
    ///
    /// # Arguments
    ///
    /// * `members` - Participant names in their configured order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - Any name is blank after trimming
    /// - The same name appears more than once
    pub fn new(members: Vec<ParticipantName>) -> Result<Self, SettlementError> {
        if members.is_empty() {
            return Err(SettlementError::EmptyRoster);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(members.len());
        for (position, name) in members.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SettlementError::BlankParticipant { position });
            }
            if seen.contains(&name.as_str()) {
                return Err(SettlementError::duplicate_participant(name));
            }
            seen.push(name.as_str());
        }

        Ok(Roster { members })
    }

    /// Check whether a name belongs to the roster
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    /// Iterate members in roster order
    pub fn iter(&self) -> impl Iterator<Item = &ParticipantName> {
        self.members.iter()
    }

    /// Members as a slice, in roster order
    pub fn members(&self) -> &[ParticipantName] {
        &self.members
    }

    /// Number of roster members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty (never true for a constructed roster)
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
