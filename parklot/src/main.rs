//! parklot — find the nearest free parking spot in a generated lot.

use std::io::{self, Write};

use parkgrid_core::{Lot, Spot};

use parklot_lib::input::read_origin;
use parklot_lib::pather::find_nearest_spot;
use parklot_lib::render::MapView;

/// Side length of the generated lot.
const LOT_SIZE: i32 = 10;
/// Probability that a spot is occupied.
const OCCUPANCY: f64 = 0.65;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = rand::rng();
    let lot = Lot::generate(LOT_SIZE, OCCUPANCY, &mut rng)?;
    log::debug!(
        "generated {0}x{0} lot with {1} free spots",
        lot.size(),
        lot.count(Spot::Free)
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let view = MapView::new();

    view.draw(&mut out, &lot, None, None)?;

    let origin = read_origin(io::stdin().lock(), &mut out, LOT_SIZE)?;
    let result = find_nearest_spot(&lot, origin);

    match result {
        Some(node) => {
            log::debug!("found spot {} at distance {}", node.pos, node.cost);
            writeln!(
                out,
                "Nearest available parking spot: ({}, {}), Distance: {}",
                node.pos.y + 1,
                node.pos.x + 1,
                node.cost
            )?;
            view.legend(&mut out)?;
        }
        None => writeln!(out, "No available parking spots found.")?,
    }

    writeln!(out, "\nVisualized parking lot map:")?;
    view.draw(&mut out, &lot, Some(origin), result.map(|n| n.pos))?;

    Ok(())
}
