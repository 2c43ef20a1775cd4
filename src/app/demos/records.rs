use crate::app::demos::{sample_order, sample_users};
use crate::domain::model::{Point, Range, User};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::io::Write;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let point = Point::new(3.0, 4.0)?;
    let same = Point::new(3.0, 4.0)?;
    writeln!(out, "{}", point)?;
    writeln!(
        out,
        "distance to origin: {:.2}",
        point.distance_to(&Point::origin())
    )?;
    writeln!(out, "equal to {}: {}", same, point == same)?;

    let unique: HashSet<Point> = [point, same, Point::origin()].into_iter().collect();
    writeln!(out, "distinct points: {}", unique.len())?;

    let range = Range::new(1, 10)?;
    writeln!(out, "{}", range)?;
    writeln!(out, "contains 5: {}", range.contains(5))?;
    writeln!(out, "contains 15: {}", range.contains(15))?;
    writeln!(out, "length: {}", range.length())?;
    if let Err(e) = Range::new(10, 1) {
        writeln!(out, "rejected: {}", e)?;
    }

    for user in sample_users()?.iter().take(2) {
        writeln!(out, "{} adult={}", user, user.is_adult())?;
    }
    if let Err(e) = User::new(9, "Eve", "eve-at-example.com", 30) {
        writeln!(out, "rejected: {}", e)?;
    }

    let order = sample_order()?;
    writeln!(out, "{}", order)?;
    for item in order.items() {
        writeln!(out, "  {} subtotal={:.2}", item, item.subtotal())?;
    }
    Ok(())
}
