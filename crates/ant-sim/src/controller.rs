//! The `Controller` struct and its tick loop.

use rustc_hash::FxHashMap;

use ant_core::{Direction, MailType, Point, RobotId, SimConfig, SimRng, Tick};
use ant_entity::{MailSequence, PackageConveyor, PackageStorage, Robot};
use ant_grid::{Grid, TileKind};
use ant_pheromone::{PheromoneField, PheromoneResult};

use crate::{ActionKind, ActionRecord, SimError, SimObserver, SimResult};

// ── Controller ────────────────────────────────────────────────────────────────

/// The simulation controller.
///
/// Owns the grid, all entities, one pheromone field per mail type plus the
/// shared exploration field, and the run's single RNG.  Nothing outside the
/// controller mutates any of this once the run starts.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct Controller {
    /// Global configuration (seed, delivery target, decay coefficient).
    pub config: SimConfig,

    /// The occupancy grid.  Mutated as robots move.
    pub grid: Grid,

    /// Robots in processing order (`RobotId` == index).
    pub robots: Vec<Robot>,

    /// Conveyors in pickup-scan order.
    pub conveyors: Vec<PackageConveyor>,

    /// Storages in delivery-scan order.
    pub storages: Vec<PackageStorage>,

    /// One pheromone field per producible mail type.
    pub(crate) fields: FxHashMap<MailType, PheromoneField>,

    /// The shared field consulted by empty-handed robots.
    pub(crate) explore_field: PheromoneField,

    /// Per-robot direction history since the last pickup/delivery, indexed
    /// by `RobotId`.  Consumed by back-propagation, then cleared.
    pub(crate) travel: Vec<Vec<Direction>>,

    /// Monotonic mail-id generator for this run.
    pub(crate) mail_seq: MailSequence,

    /// The run's single shared RNG — all sampling goes through it so a
    /// fixed seed reproduces the whole action log.
    pub(crate) rng: SimRng,

    pub(crate) tick: Tick,
    pub(crate) delivered: u64,
}

impl Controller {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run tick by tick until `config.target_deliveries` packages have been
    /// delivered.  There is no other termination condition.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.delivered < self.config.target_deliveries {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick, self.delivered);
        Ok(())
    }

    /// Process exactly one tick (every robot acts once, in id order).
    ///
    /// Useful for tests and incremental stepping; `run` is a loop over this.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        let mut actions = 0usize;
        for i in 0..self.robots.len() {
            self.act_robot(i, observer)?;
            actions += 1;
        }

        observer.on_tick_end(now, actions);
        self.tick.advance();
        Ok(())
    }

    /// The current tick (the next one to be processed).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Packages delivered so far.
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Packages minted so far (delivered + in flight).
    #[inline]
    pub fn minted(&self) -> u64 {
        self.mail_seq.minted()
    }

    /// The pheromone field for `mail_type`, if that type is known.
    pub fn field(&self, mail_type: &MailType) -> Option<&PheromoneField> {
        self.fields.get(mail_type)
    }

    /// The shared exploration field used by empty-handed robots.
    pub fn exploration_field(&self) -> &PheromoneField {
        &self.explore_field
    }

    /// The recorded travel history of `robot` since its last task.
    pub fn travel_history(&self, robot: RobotId) -> &[Direction] {
        &self.travel[robot.index()]
    }

    // ── Per-robot state machine ───────────────────────────────────────────

    /// Run one robot's deliver/take/move decision for this tick.
    fn act_robot<O: SimObserver>(&mut self, i: usize, observer: &mut O) -> SimResult<()> {
        if self.robots[i].is_carrying() {
            if let Some(s) = self.find_delivery(i) {
                return self.deliver(i, s, observer);
            }
        } else if let Some(c) = self.find_pickup(i) {
            return self.take(i, c, observer);
        }
        self.move_robot(i, observer)
    }

    /// Index of a storage the robot can deliver to right now: accepted type
    /// AND exactly one orthogonal step away.  All storages are scanned.
    fn find_delivery(&self, i: usize) -> Option<usize> {
        let robot = &self.robots[i];
        let mail_type = &robot.carrying()?.mail_type;
        self.storages
            .iter()
            .position(|s| s.accepts(mail_type) && s.is_reachable_from(robot.location))
    }

    /// Index of a conveyor the robot can take from right now.  All conveyors
    /// are scanned; one with an out-point matches only when the robot stands
    /// exactly on it.
    fn find_pickup(&self, i: usize) -> Option<usize> {
        let robot = &self.robots[i];
        self.conveyors
            .iter()
            .position(|c| c.is_pickable_from(robot.location))
    }

    /// Hand the carried package to storage `s` and reward the traveled path.
    fn deliver<O: SimObserver>(&mut self, i: usize, s: usize, observer: &mut O) -> SimResult<()> {
        let mail = self.robots[i].give()?;
        let robot = &self.robots[i];

        observer.on_action(&ActionRecord {
            tick: self.tick,
            kind: ActionKind::Give,
            robot: robot.id,
            source: robot.location,
            target: self.storages[s].location,
            description: format!(
                "put mail type {} with index {}",
                mail.mail_type, mail.id.0
            ),
        });

        self.delivered += 1;
        observer.on_delivery(self.tick, self.delivered);

        // Evaporate the delivered type's field, then deposit path credit
        // into it.  Decay-before-deposit keeps fresh trails strongest.
        let end = self.robots[i].location;
        let field = self
            .fields
            .get_mut(&mail.mail_type)
            .ok_or_else(|| SimError::UnknownMailType(mail.mail_type.clone()))?;
        field.decay(self.config.decay_coefficient);
        travel_descent(&self.travel[i], end, field)?;
        self.travel[i].clear();
        Ok(())
    }

    /// Take a freshly minted package from conveyor `c` and reward the path
    /// that found it (into the shared exploration field).
    fn take<O: SimObserver>(&mut self, i: usize, c: usize, observer: &mut O) -> SimResult<()> {
        let conveyor = &self.conveyors[c];
        let mail = conveyor.emit(&mut self.mail_seq, &mut self.rng)?;

        observer.on_action(&ActionRecord {
            tick: self.tick,
            kind: ActionKind::Take,
            robot: self.robots[i].id,
            source: self.robots[i].location,
            target: conveyor.location,
            description: format!(
                "take mail type {} with index {}",
                mail.mail_type, mail.id.0
            ),
        });

        self.robots[i].take(mail)?;

        let end = self.robots[i].location;
        self.explore_field.decay(self.config.decay_coefficient);
        travel_descent(&self.travel[i], end, &mut self.explore_field)?;
        self.travel[i].clear();
        Ok(())
    }

    /// Sample directions until one is movable (or Holding), then move.
    fn move_robot<O: SimObserver>(&mut self, i: usize, observer: &mut O) -> SimResult<()> {
        let source = self.robots[i].location;

        // Split borrows: the field map and grid are read, the RNG advances.
        let carried = self.robots[i]
            .carrying()
            .map(|m| (m.mail_type.clone(), m.id.0));
        let field = match &carried {
            Some((ty, _)) => self
                .fields
                .get(ty)
                .ok_or_else(|| SimError::UnknownMailType(ty.clone()))?,
            None => &self.explore_field,
        };

        let mut excluded: Vec<Direction> = Vec::new();
        let direction = loop {
            let candidate = field.choose_move(source, &excluded, &mut self.rng)?;
            if candidate.is_holding() || self.grid.is_passable(source + candidate.delta()) {
                break candidate;
            }
            // Blocked by a dynamic occupant or fixture: rule it out and
            // resample.  choose_move errors out if nothing stays eligible.
            excluded.push(candidate);
        };

        let target = source + direction.delta();
        observer.on_action(&ActionRecord {
            tick: self.tick,
            kind: ActionKind::Move,
            robot: self.robots[i].id,
            source,
            target,
            description: match &carried {
                Some((ty, id)) => format!("move mail type {ty} with index {id}"),
                None => "move without mail".to_owned(),
            },
        });

        self.grid.clear(source);
        self.robots[i].step_to(target);
        self.grid.place(target, TileKind::Robot)?;
        self.travel[i].push(direction);
        Ok(())
    }
}

// ── Back-propagation ──────────────────────────────────────────────────────────

/// Deposit uniform path credit along a completed journey.
///
/// Walks `travel` in reverse from `end`, subtracting each step to
/// reconstruct the path backward, and at every visited tile reinforces the
/// direction that was taken *forward* from it by `1 / L`, where `L` counts
/// the non-Holding steps — so the deposits over one completed task sum to
/// exactly 1.0 regardless of path length.  Holding entries change neither
/// the location nor the credit.
///
/// An empty (or all-Holding) history is a no-op.
pub(crate) fn travel_descent(
    travel: &[Direction],
    end: Point,
    field: &mut PheromoneField,
) -> PheromoneResult<()> {
    let steps = travel.iter().filter(|d| !d.is_holding()).count();
    if steps == 0 {
        return Ok(());
    }
    let credit = 1.0 / steps as f64;

    let mut location = end;
    for &direction in travel.iter().rev() {
        if direction.is_holding() {
            continue;
        }
        location -= direction.delta();
        // The move into `direction` succeeded when it was made, so the
        // trail is present by construction; an absent trail here is a
        // logic defect surfaced by the field.
        field.reinforce(location, direction, credit)?;
    }
    Ok(())
}
