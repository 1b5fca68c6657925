//! Package storages — the type-matched sinks of mail.

use rustc_hash::FxHashSet;

use ant_core::{MailType, Point, StorageId};

/// A storage fixture accepting a fixed set of mail types.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageStorage {
    pub id: StorageId,
    pub location: Point,
    accepted: FxHashSet<MailType>,
}

impl PackageStorage {
    pub fn new(
        id: StorageId,
        location: Point,
        accepted: impl IntoIterator<Item = MailType>,
    ) -> Self {
        Self {
            id,
            location,
            accepted: accepted.into_iter().collect(),
        }
    }

    #[inline]
    pub fn accepts(&self, mail_type: &MailType) -> bool {
        self.accepted.contains(mail_type)
    }

    pub fn accepted_types(&self) -> impl Iterator<Item = &MailType> {
        self.accepted.iter()
    }

    /// `true` if a robot at `robot_location` can drop into this storage
    /// (one orthogonal step away).
    #[inline]
    pub fn is_reachable_from(&self, robot_location: Point) -> bool {
        self.location.is_adjacent(robot_location)
    }
}
