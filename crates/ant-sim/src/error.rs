//! Error types for ant-sim.

use thiserror::Error;

use ant_core::{CoreError, MailType};
use ant_entity::EntityError;
use ant_grid::GridError;
use ant_pheromone::PheromoneError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    /// An entity could not be placed on the grid at construction.
    #[error("placement failed: {0}")]
    Placement(#[from] GridError),

    /// The mail types conveyors can produce differ from those storages
    /// accept — some types would be unroutable.  Fatal at construction.
    #[error("mail-type mismatch: conveyors produce {produced:?}, storages accept {accepted:?}")]
    MailTypeMismatch {
        produced: Vec<MailType>,
        accepted: Vec<MailType>,
    },

    /// A carried package's type has no pheromone field.  Construction seeds
    /// a field per producible type, so this is a logic defect.
    #[error("no pheromone field for mail type {0:?}")]
    UnknownMailType(MailType),

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Pheromone(#[from] PheromoneError),
}

pub type SimResult<T> = Result<T, SimError>;
