//! Error types for ant-entity.

use thiserror::Error;

use ant_core::{ConveyorId, RobotId};

#[derive(Debug, Error)]
pub enum EntityError {
    /// A robot already holding a package attempted a pickup.
    #[error("robot {0} is already carrying a package")]
    AlreadyCarrying(RobotId),

    /// An empty-handed robot attempted a delivery.
    #[error("robot {0} is not carrying a package")]
    NotCarrying(RobotId),

    /// A conveyor's emission-weight vector does not pair with its mail types.
    #[error("conveyor {id}: {weights} emission weights for {types} mail types")]
    WeightArityMismatch {
        id: ConveyorId,
        types: usize,
        weights: usize,
    },

    /// A conveyor was configured with no producible mail types.
    #[error("conveyor {0} produces no mail types")]
    NoMailTypes(ConveyorId),

    /// Emission weights unusable for sampling (all zero, or negative).
    #[error("conveyor {0}: emission weights do not form a distribution")]
    BadWeights(ConveyorId),
}

pub type EntityResult<T> = Result<T, EntityError>;
