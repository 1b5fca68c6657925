//! Fluent builder for constructing a [`Controller`].

use rustc_hash::{FxHashMap, FxHashSet};

use ant_core::{MailType, Point, RobotId, SimConfig, SimRng, Tick};
use ant_entity::{MailSequence, PackageConveyor, PackageStorage, Robot};
use ant_grid::{Grid, TileKind};
use ant_pheromone::PheromoneField;

use crate::{Controller, SimError, SimResult};

/// Fluent builder for [`Controller`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, delivery target, decay coefficient
/// - [`Grid`] — static geometry only (`Empty`/`Barricade`); the builder
///   places every fixture and robot tile itself
/// - at least one robot, conveyor, and storage
///
/// # Construction-time validation
///
/// `build()` fails (never silently proceeds) if:
/// - the config is invalid (decay coefficient outside `(0, 1)`),
/// - any conveyor has no types or a mismatched weight vector,
/// - any entity lands on a non-empty tile,
/// - the union of producible mail types differs from the union of
///   acceptable ones (unroutable mail).
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = ControllerBuilder::new(SimConfig::new(42, 10), grid)
///     .robot_at(Point::new(0, 0))
///     .conveyor(PackageConveyor::new(ConveyorId(0), Point::new(1, 0), [MailType::from("X")]))
///     .storage(PackageStorage::new(StorageId(0), Point::new(2, 0), [MailType::from("X")]))
///     .build()?;
/// controller.run(&mut NoopObserver)?;
/// ```
pub struct ControllerBuilder {
    config: SimConfig,
    grid: Grid,
    robot_starts: Vec<Point>,
    conveyors: Vec<PackageConveyor>,
    storages: Vec<PackageStorage>,
}

impl ControllerBuilder {
    /// Create a builder over a static grid (walls only).
    pub fn new(config: SimConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            robot_starts: Vec::new(),
            conveyors: Vec::new(),
            storages: Vec::new(),
        }
    }

    /// Add a robot starting at `point`.  Robots get sequential ids in
    /// insertion order; that order is also the per-tick processing order.
    pub fn robot_at(mut self, point: Point) -> Self {
        self.robot_starts.push(point);
        self
    }

    /// Add a conveyor.  Insertion order is scan order for pickup checks.
    pub fn conveyor(mut self, conveyor: PackageConveyor) -> Self {
        self.conveyors.push(conveyor);
        self
    }

    /// Add a storage.  Insertion order is scan order for delivery checks.
    pub fn storage(mut self, storage: PackageStorage) -> Self {
        self.storages.push(storage);
        self
    }

    /// Validate inputs, place every entity on the grid, seed the pheromone
    /// fields, and return a ready-to-run [`Controller`].
    pub fn build(self) -> SimResult<Controller> {
        self.config.validate()?;
        for conveyor in &self.conveyors {
            conveyor.validate()?;
        }

        // ── Place fixtures, then robots ───────────────────────────────────
        let mut grid = self.grid;
        for conveyor in &self.conveyors {
            grid.place(conveyor.location, TileKind::Conveyor)?;
        }
        for storage in &self.storages {
            grid.place(storage.location, TileKind::Storage)?;
        }
        let robots: Vec<Robot> = self
            .robot_starts
            .iter()
            .enumerate()
            .map(|(i, &p)| Robot::new(RobotId(i as u32), p))
            .collect();
        for robot in &robots {
            grid.place(robot.location, TileKind::Robot)?;
        }

        // ── Mail-type closure check ───────────────────────────────────────
        //
        // Computed once from configuration, not accumulated through entity
        // construction side effects.
        let produced: FxHashSet<MailType> = self
            .conveyors
            .iter()
            .flat_map(|c| c.mail_types().iter().cloned())
            .collect();
        let accepted: FxHashSet<MailType> = self
            .storages
            .iter()
            .flat_map(|s| s.accepted_types().cloned())
            .collect();
        if produced != accepted {
            let mut produced: Vec<MailType> = produced.into_iter().collect();
            let mut accepted: Vec<MailType> = accepted.into_iter().collect();
            produced.sort();
            accepted.sort();
            return Err(SimError::MailTypeMismatch { produced, accepted });
        }

        // ── Seed pheromone fields from the fully-populated grid ───────────
        //
        // One field per mail type plus the shared exploration field used by
        // empty-handed robots.  Seeding happens after placement because the
        // topology must see fixtures as blocked (robots still count as open).
        let fields: FxHashMap<MailType, PheromoneField> = produced
            .iter()
            .map(|ty| (ty.clone(), PheromoneField::seed(&grid)))
            .collect();
        let explore_field = PheromoneField::seed(&grid);

        let travel = vec![Vec::new(); robots.len()];
        let rng = SimRng::new(self.config.seed);

        Ok(Controller {
            config: self.config,
            grid,
            robots,
            conveyors: self.conveyors,
            storages: self.storages,
            fields,
            explore_field,
            travel,
            mail_seq: MailSequence::new(),
            rng,
            tick: Tick::ZERO,
            delivered: 0,
        })
    }
}
