use anyhow::{Context, Result};
use geomeasure::{Point, Unit};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const PAIR_COLUMNS: [&str; 4] = ["lat_a", "lon_a", "lat_b", "lon_b"];

pub fn run(input: &Path, output: Option<PathBuf>, unit: Unit) -> Result<()> {
    let output_path = match output {
        Some(path) => path,
        None => default_output_path(input)?,
    };

    let rows = process_csv(input, &output_path, unit)?;

    println!(
        "Measured {} rows, output written to: {}",
        rows,
        output_path.display()
    );
    Ok(())
}

fn default_output_path(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("Invalid input path: {}", input.display()))?
        .to_string_lossy();
    Ok(input.with_file_name(format!("{}_measured.csv", stem)))
}

/// Append `distance` and `bearing` columns to every row; returns the row count.
fn process_csv(input: &Path, output: &Path, unit: Unit) -> Result<u64> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let mut indices = [0usize; 4];
    for (slot, column) in indices.iter_mut().zip(PAIR_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .with_context(|| format!("Column '{}' not found in CSV", column))?;
    }

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let output_file = File::create(output).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("distance");
    new_headers.push("bearing");
    writer.write_record(&new_headers)?;

    for (row, record) in records.iter().enumerate() {
        let mut values = [0.0f64; 4];
        for ((value, &idx), column) in values.iter_mut().zip(&indices).zip(PAIR_COLUMNS) {
            *value = record
                .get(idx)
                .with_context(|| format!("Missing {} on row {}", column, row + 1))?
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} on row {}", column, row + 1))?;
        }
        let a = Point::new(values[0], values[1]);
        let b = Point::new(values[2], values[3]);

        let distance = geomeasure::distance(a, b, unit)
            .with_context(|| format!("Failed to measure row {}", row + 1))?
            .to_string();
        let bearing = geomeasure::bearing(a, b)
            .with_context(|| format!("Failed to measure row {}", row + 1))?
            .to_string();

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&distance);
        new_record.push(&bearing);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok(total)
}
