use anyhow::{bail, Context, Result};
use geomeasure::{geojson::points_from_geojson, NearestMatch, Point, Unit};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Serialize)]
struct NearestOutput {
    point: Point,
    index: usize,
    distance: f64,
    units: Unit,
}

pub fn run(
    input: &Path,
    reference: Point,
    lat_col: &str,
    lon_col: &str,
    unit: Unit,
    json: bool,
) -> Result<()> {
    let candidates = load_candidates(input, lat_col, lon_col)?;
    let found = find(reference, &candidates, unit)?;

    if json {
        let output = NearestOutput {
            point: found.point,
            index: found.index,
            distance: found.distance,
            units: unit,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "{} {} (#{}, {} {})",
            found.point.lat, found.point.lng, found.index, found.distance, unit
        );
    }
    Ok(())
}

fn find(reference: Point, candidates: &[Point], unit: Unit) -> Result<NearestMatch> {
    geomeasure::nearest(reference, candidates, unit).context("Failed to search candidates")
}

/// Read candidate points from a CSV or GeoJSON file, chosen by extension.
pub fn load_candidates(input: &Path, lat_col: &str, lon_col: &str) -> Result<Vec<Point>> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => read_csv(input, lat_col, lon_col),
        "geojson" | "json" => read_geojson(input),
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

fn read_csv(input: &Path, lat_col: &str, lon_col: &str) -> Result<Vec<Point>> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let lat: f64 = record
            .get(lat_idx)
            .context("Missing latitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude on row {}", row + 1))?;
        let lon: f64 = record
            .get(lon_idx)
            .context("Missing longitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude on row {}", row + 1))?;
        points.push(Point::new(lat, lon));
    }
    Ok(points)
}

fn read_geojson(input: &Path) -> Result<Vec<Point>> {
    let file = File::open(input).context("Failed to open input file")?;
    let geojson: geojson::GeoJson =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse GeoJSON")?;
    points_from_geojson(&geojson).context("Failed to read points from GeoJSON")
}
