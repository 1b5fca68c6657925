//! The robot — the only mobile entity.

use ant_core::{Point, RobotId};

use crate::{EntityError, EntityResult, MailPackage};

/// A mobile robot.  Created once at construction, never destroyed; mutated
/// every tick by the controller.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub id: RobotId,
    pub location: Point,
    carrying: Option<MailPackage>,
}

impl Robot {
    pub fn new(id: RobotId, location: Point) -> Self {
        Self {
            id,
            location,
            carrying: None,
        }
    }

    /// The package currently held, if any.
    #[inline]
    pub fn carrying(&self) -> Option<&MailPackage> {
        self.carrying.as_ref()
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carrying.is_some()
    }

    /// Accept a package from a conveyor.
    ///
    /// At most one package is held at a time; a second take without an
    /// intervening give is a contract violation (the controller's state
    /// machine guards against it, so hitting this is a logic defect).
    pub fn take(&mut self, package: MailPackage) -> EntityResult<()> {
        if self.carrying.is_some() {
            return Err(EntityError::AlreadyCarrying(self.id));
        }
        self.carrying = Some(package);
        Ok(())
    }

    /// Hand the held package over to a storage.
    ///
    /// Fails if the robot is empty-handed — same contract as [`take`](Self::take).
    pub fn give(&mut self) -> EntityResult<MailPackage> {
        self.carrying.take().ok_or(EntityError::NotCarrying(self.id))
    }

    /// Teleport one step: the controller has already validated the target.
    #[inline]
    pub fn step_to(&mut self, target: Point) {
        self.location = target;
    }
}
