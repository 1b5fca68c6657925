//! Package conveyors — the sources of mail.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;

use ant_core::{ConveyorId, MailType, Point, SimRng};

use crate::{EntityError, EntityResult, MailPackage, MailSequence};

/// A conveyor fixture that mints packages on demand.
///
/// Stateless between emissions apart from the run-owned [`MailSequence`]
/// threaded in by the caller.  When `out_point` is set, robots must stand
/// exactly on it to pick up; otherwise any orthogonally adjacent tile works.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageConveyor {
    pub id: ConveyorId,
    pub location: Point,
    mail_types: Vec<MailType>,
    emission_weights: Option<Vec<f64>>,
    pub out_point: Option<Point>,
}

impl PackageConveyor {
    /// A conveyor emitting `mail_types` uniformly, pickable from any
    /// adjacent tile.
    pub fn new(
        id: ConveyorId,
        location: Point,
        mail_types: impl IntoIterator<Item = MailType>,
    ) -> Self {
        Self {
            id,
            location,
            mail_types: mail_types.into_iter().collect(),
            emission_weights: None,
            out_point: None,
        }
    }

    /// Weight the emission distribution; must pair 1:1 with `mail_types`
    /// (checked by [`validate`](Self::validate)).
    pub fn with_weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.emission_weights = Some(weights.into_iter().collect());
        self
    }

    /// Restrict pickup to a single explicit tile.
    pub fn with_out_point(mut self, out_point: Point) -> Self {
        self.out_point = Some(out_point);
        self
    }

    #[inline]
    pub fn mail_types(&self) -> &[MailType] {
        &self.mail_types
    }

    /// Construction-time checks: at least one type, weight arity matches.
    pub fn validate(&self) -> EntityResult<()> {
        if self.mail_types.is_empty() {
            return Err(EntityError::NoMailTypes(self.id));
        }
        if let Some(weights) = &self.emission_weights {
            if weights.len() != self.mail_types.len() {
                return Err(EntityError::WeightArityMismatch {
                    id: self.id,
                    types: self.mail_types.len(),
                    weights: weights.len(),
                });
            }
        }
        Ok(())
    }

    /// Mint a fresh package whose type is sampled from the emission
    /// distribution (uniform over this conveyor's types when unweighted).
    pub fn emit(&self, seq: &mut MailSequence, rng: &mut SimRng) -> EntityResult<MailPackage> {
        let mail_type = match &self.emission_weights {
            Some(weights) => {
                let dist =
                    WeightedIndex::new(weights).map_err(|_| EntityError::BadWeights(self.id))?;
                self.mail_types[dist.sample(rng.inner())].clone()
            }
            None => {
                let i = rng.gen_range(0..self.mail_types.len());
                self.mail_types[i].clone()
            }
        };
        Ok(MailPackage::new(seq.next_id(), mail_type))
    }

    /// `true` if a robot at `robot_location` can take from this conveyor:
    /// standing exactly on the out-point when one is defined, orthogonally
    /// adjacent otherwise.
    pub fn is_pickable_from(&self, robot_location: Point) -> bool {
        match self.out_point {
            Some(out) => robot_location == out,
            None => self.location.is_adjacent(robot_location),
        }
    }
}
