//! Basic example demonstrating geomeasure library usage.
//!
//! Run with: cargo run --example basic

use geomeasure::{bearing, destination, distance, midpoint, nearest, MeasureError, Point, Unit};

fn main() -> Result<(), MeasureError> {
    let peaks = [
        ("Mount Fuji, Japan", Point::new(35.3606, 138.7274)),
        ("Mount Everest, Nepal", Point::new(27.9881, 86.9250)),
        ("Denali, Alaska", Point::new(63.0695, -151.0074)),
    ];
    let (origin_name, origin) = peaks[0];

    println!("Measurements from {}:", origin_name);
    println!("{:-<60}", "");

    for (name, peak) in &peaks[1..] {
        let km = distance(origin, *peak, Unit::Kilometers)?;
        let miles = distance(origin, *peak, Unit::Miles)?;
        let initial = bearing(origin, *peak)?;
        let mid = midpoint(origin, *peak)?;
        println!(
            "{}: {:.1} km ({:.1} mi), bearing {:.1}°, midpoint ({:.4}, {:.4})",
            name, km, miles, initial, mid.lat, mid.lng
        );
    }

    // Walk 500 km due east
    let east = destination(origin, 500.0, 90.0, Unit::Kilometers)?;
    println!("\n500 km east of {}: ({:.4}, {:.4})", origin_name, east.lat, east.lng);

    let candidates: Vec<Point> = peaks[1..].iter().map(|(_, p)| *p).collect();
    let closest = nearest(origin, &candidates, Unit::Kilometers)?;
    println!(
        "Closest peak: {} at {:.1} km",
        peaks[closest.index + 1].0,
        closest.distance
    );

    // Unknown units are rejected, never defaulted
    match "lightyears".parse::<Unit>() {
        Ok(unit) => println!("Parsed unit: {}", unit),
        Err(e) => println!("\n{}", e),
    }

    Ok(())
}
