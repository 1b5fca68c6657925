//! Mail packages and the run-owned id sequence.

use ant_core::{MailId, MailType};

// ── MailPackage ───────────────────────────────────────────────────────────────

/// A package in flight: minted by a conveyor, held by at most one robot,
/// consumed on delivery to a matching storage.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailPackage {
    pub id: MailId,
    pub mail_type: MailType,
    pub message: Option<String>,
}

impl MailPackage {
    pub fn new(id: MailId, mail_type: MailType) -> Self {
        Self {
            id,
            mail_type,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// ── MailSequence ──────────────────────────────────────────────────────────────

/// Monotonic mail-id generator, one per simulation run.
///
/// Owned by the controller and threaded into `PackageConveyor::emit`, so
/// every minted package gets a unique id without any shared global counter.
#[derive(Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailSequence {
    next: u64,
}

impl MailSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.  Ids start at 0 and never repeat within a run.
    #[inline]
    pub fn next_id(&mut self) -> MailId {
        let id = MailId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been minted so far.
    #[inline]
    pub fn minted(&self) -> u64 {
        self.next
    }
}
