use crate::domain::model::Point;
use crate::domain::shapes::Shape;
use crate::domain::value::{describe_value, Value};
use crate::utils::error::Result;
use std::io::Write;

fn quadrant(point: &Point) -> &'static str {
    match (point.x(), point.y()) {
        (x, y) if x == 0.0 && y == 0.0 => "origin",
        (x, _) if x == 0.0 => "on the y axis",
        (_, y) if y == 0.0 => "on the x axis",
        (x, y) if x > 0.0 && y > 0.0 => "quadrant I",
        (x, y) if x < 0.0 && y > 0.0 => "quadrant II",
        (x, y) if x < 0.0 && y < 0.0 => "quadrant III",
        _ => "quadrant IV",
    }
}

/// Widest extent of a shape, pulled out by destructuring each variant.
fn span(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle(c) => 2.0 * c.radius(),
        Shape::Rectangle(r) => r.width().hypot(r.height()),
        Shape::Triangle(t) => {
            let (a, b, c) = t.sides();
            a.max(b).max(c)
        }
    }
}

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let values = [
        Value::from(42i64),
        Value::from(-7i64),
        Value::from(9.87654),
        Value::from("pattern matching"),
        Value::from("   "),
        Value::from(false),
        Value::from(Point::origin()),
        Value::from(Point::new(2.0, -1.5)?),
        Value::from(None::<i64>),
    ];
    for value in &values {
        writeln!(out, "{}", describe_value(value))?;
    }

    let points = [
        Point::new(1.0, 1.0)?,
        Point::new(-2.0, 3.0)?,
        Point::new(-1.0, -1.0)?,
        Point::new(4.0, -2.0)?,
        Point::new(0.0, 5.0)?,
        Point::origin(),
    ];
    for point in &points {
        writeln!(out, "{} is {}", point, quadrant(point))?;
    }

    for shape in [Shape::circle(1.5)?, Shape::rectangle(3.0, 4.0)?, Shape::triangle(2.0, 3.0, 4.0)?] {
        if let Shape::Rectangle(r) = shape {
            writeln!(out, "rectangle of {} by {}", r.width(), r.height())?;
        }
        writeln!(out, "{} spans {:.2}", shape.name(), span(&shape))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        assert_eq!(quadrant(&Point::new(1.0, 1.0).unwrap()), "quadrant I");
        assert_eq!(quadrant(&Point::new(-1.0, 1.0).unwrap()), "quadrant II");
        assert_eq!(quadrant(&Point::new(-1.0, -1.0).unwrap()), "quadrant III");
        assert_eq!(quadrant(&Point::new(1.0, -1.0).unwrap()), "quadrant IV");
        assert_eq!(quadrant(&Point::new(0.0, -1.0).unwrap()), "on the y axis");
        assert_eq!(quadrant(&Point::new(3.0, 0.0).unwrap()), "on the x axis");
        assert_eq!(quadrant(&Point::origin()), "origin");
    }

    #[test]
    fn test_patterns_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "integer 42");
        assert_eq!(lines[1], "negative integer -7");
        assert_eq!(lines[2], "decimal 9.88");
        assert_eq!(lines[3], "text \"pattern matching\" (16 chars)");
        assert_eq!(lines[8], "nothing");
        assert!(text.contains("Point[x=-2, y=3] is quadrant II"));
        assert!(text.contains("rectangle of 3 by 4\nrectangle spans 5.00"));
        assert!(text.contains("circle spans 3.00"));
        assert!(text.contains("triangle spans 4.00"));
    }
}
