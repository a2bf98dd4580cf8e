use anyhow::Result;
use geomeasure::Unit;

pub fn run() -> Result<()> {
    println!("{:<14} {:>8}", "UNIT", "KIND");
    println!("{}", "-".repeat(23));
    for unit in Unit::ALL {
        let kind = if unit.is_angular() { "angle" } else { "length" };
        println!("{:<14} {:>8}", unit.name(), kind);
    }
    Ok(())
}
