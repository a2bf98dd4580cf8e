use anyhow::{Context, Result};
use geomeasure::{Point, Unit};
use serde::Serialize;

/// Two points for the pairwise subcommands.
pub struct Pair {
    pub a: Point,
    pub b: Point,
}

#[derive(Serialize)]
struct DistanceOutput {
    distance: f64,
    units: Unit,
}

#[derive(Serialize)]
struct BearingOutput {
    bearing: f64,
}

pub fn distance(pair: Pair, unit: Unit, json: bool) -> Result<()> {
    let distance =
        geomeasure::distance(pair.a, pair.b, unit).context("Failed to compute distance")?;

    if json {
        let output = DistanceOutput {
            distance,
            units: unit,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{} {}", distance, unit);
    }
    Ok(())
}

pub fn bearing(pair: Pair, json: bool) -> Result<()> {
    let bearing = geomeasure::bearing(pair.a, pair.b).context("Failed to compute bearing")?;

    if json {
        println!("{}", serde_json::to_string(&BearingOutput { bearing })?);
    } else {
        println!("{}", bearing);
    }
    Ok(())
}

pub fn destination(origin: Point, distance: f64, bearing: f64, unit: Unit, json: bool) -> Result<()> {
    let point = geomeasure::destination(origin, distance, bearing, unit)
        .context("Failed to compute destination")?;
    print_point(point, json)
}

pub fn midpoint(pair: Pair, json: bool) -> Result<()> {
    let point = geomeasure::midpoint(pair.a, pair.b).context("Failed to compute midpoint")?;
    print_point(point, json)
}

fn print_point(point: Point, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        println!("{} {}", point.lat, point.lng);
    }
    Ok(())
}
