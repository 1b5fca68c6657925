//! smallgrid — smallest runnable scenario for the antsort simulation.
//!
//! A 12×8 walled warehouse with two conveyors, two storages, and four
//! robots routing packages by pheromone trails alone.  Swap the outline and
//! entity lists for a scenario loader to run real floor plans.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ant_core::{ConveyorId, MailType, Point, SimConfig, StorageId, Tick};
use ant_entity::{PackageConveyor, PackageStorage};
use ant_grid::GridBuilder;
use ant_output::{CsvWriter, SimOutputObserver};
use ant_sim::{ActionRecord, ControllerBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TARGET_DELIVERIES: u64 = 200;
const PROGRESS_EVERY: u64 = 50;

// ── Observer wrapper: CSV sink + progress + row counting ─────────────────────

struct DemoObserver<W: ant_output::OutputWriter> {
    inner: SimOutputObserver<W>,
    rows: usize,
}

impl<W: ant_output::OutputWriter> DemoObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, rows: 0 }
    }
}

impl<W: ant_output::OutputWriter> SimObserver for DemoObserver<W> {
    fn on_action(&mut self, record: &ActionRecord) {
        self.rows += 1;
        self.inner.on_action(record);
    }

    fn on_delivery(&mut self, tick: Tick, delivered: u64) {
        if delivered % PROGRESS_EVERY == 0 {
            println!("  {delivered} delivered by {tick}");
        }
        self.inner.on_delivery(tick, delivered);
    }

    fn on_sim_end(&mut self, final_tick: Tick, delivered: u64) {
        self.inner.on_sim_end(final_tick, delivered);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallgrid — antsort warehouse simulation ===");
    println!("Target: {TARGET_DELIVERIES} deliveries  |  Seed: {SEED}");
    println!();

    // 1. Rasterize the warehouse outline: a 12×8 room with an interior
    //    divider wall leaving a gap to route around.
    let outline = [
        Point::new(0, 0),
        Point::new(11, 0),
        Point::new(11, 7),
        Point::new(0, 7),
    ];
    let divider = ant_grid::rasterize::Obstacle::Polyline(vec![
        Point::new(5, 1),
        Point::new(5, 4),
    ]);
    let grid = GridBuilder::from_walls(&outline, &[divider])?;
    println!(
        "Warehouse: {}×{} tiles, {} barricades",
        grid.width(),
        grid.height(),
        grid.count_kind(ant_grid::TileKind::Barricade)
    );

    // 2. Entities: conveyors on the left wall, storages on the right, so
    //    every delivery has to clear the divider.
    let conveyors = vec![
        PackageConveyor::new(ConveyorId(0), Point::new(1, 2), [MailType::from("A")]),
        PackageConveyor::new(
            ConveyorId(1),
            Point::new(1, 5),
            [MailType::from("A"), MailType::from("B")],
        )
        .with_weights([0.25, 0.75]),
    ];
    let storages = vec![
        PackageStorage::new(StorageId(0), Point::new(10, 2), [MailType::from("A")]),
        PackageStorage::new(
            StorageId(1),
            Point::new(10, 5),
            [MailType::from("A"), MailType::from("B")],
        ),
    ];
    let robot_starts = [
        Point::new(2, 2),
        Point::new(2, 5),
        Point::new(8, 2),
        Point::new(8, 5),
    ];

    // 3. Build the controller (places entities, checks the mail-type
    //    closure, seeds one pheromone field per type).
    let config = SimConfig::new(SEED, TARGET_DELIVERIES);
    let mut builder = ControllerBuilder::new(config, grid);
    for start in robot_starts {
        builder = builder.robot_at(start);
    }
    for conveyor in conveyors {
        builder = builder.conveyor(conveyor);
    }
    for storage in storages {
        builder = builder.storage(storage);
    }
    let mut controller = builder.build()?;
    println!(
        "Entities: {} robots, {} conveyors, {} storages",
        controller.robots.len(),
        controller.conveyors.len(),
        controller.storages.len()
    );
    println!();

    // 4. Set up output.
    std::fs::create_dir_all("output/smallgrid")?;
    let writer = CsvWriter::new(Path::new("output/smallgrid"))?;
    let mut obs = DemoObserver::new(SimOutputObserver::new(writer));

    // 5. Run to the delivery target.
    let t0 = Instant::now();
    controller.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks       : {}", controller.tick().0);
    println!("  delivered   : {}", controller.delivered());
    println!("  minted      : {}", controller.minted());
    println!("  actions.csv : {} rows", obs.rows);
    println!();

    // 7. Final robot positions table.
    println!("{:<8} {:<10} {:<10}", "Robot", "Position", "Carrying");
    println!("{}", "-".repeat(30));
    for robot in &controller.robots {
        println!(
            "{:<8} {:<10} {:<10}",
            robot.id.0,
            robot.location.to_string(),
            robot
                .carrying()
                .map(|m| m.mail_type.to_string())
                .unwrap_or_else(|| "-".to_owned()),
        );
    }

    Ok(())
}
