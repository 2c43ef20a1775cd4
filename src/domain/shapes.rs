use crate::domain::model::hash_f64;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::validate_positive;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

pub const LARGE_CIRCLE_RADIUS: f64 = 10.0;
pub const LARGE_AREA: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        validate_positive("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        validate_positive("width", width)?;
        validate_positive("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Triangle given by its three side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        validate_positive("a", a)?;
        validate_positive("b", b)?;
        validate_positive("c", c)?;
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(ShowcaseError::invalid(
                "sides",
                format!(
                    "sides {}, {}, {} violate the triangle inequality",
                    a, b, c
                ),
            ));
        }
        Ok(Self { a, b, c })
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    fn heron_area(&self) -> f64 {
        let s = (self.a + self.b + self.c) / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }
}

/// The closed set of shapes. Adding a variant breaks every `match` below
/// until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Shape {
    pub fn circle(radius: f64) -> Result<Self> {
        Circle::new(radius).map(Shape::Circle)
    }

    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Rectangle::new(width, height).map(Shape::Rectangle)
    }

    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self> {
        Triangle::new(a, b, c).map(Shape::Triangle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Triangle(_) => "triangle",
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => PI * c.radius * c.radius,
            Shape::Rectangle(r) => r.width * r.height,
            Shape::Triangle(t) => t.heron_area(),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(c) => 2.0 * PI * c.radius,
            Shape::Rectangle(r) => 2.0 * (r.width + r.height),
            Shape::Triangle(t) => t.a + t.b + t.c,
        }
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Shape::Circle(c) => hash_f64(c.radius, state),
            Shape::Rectangle(r) => {
                hash_f64(r.width, state);
                hash_f64(r.height, state);
            }
            Shape::Triangle(t) => {
                hash_f64(t.a, state);
                hash_f64(t.b, state);
                hash_f64(t.c, state);
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "Circle[radius={}]", c.radius),
            Shape::Rectangle(r) => write!(f, "Rectangle[width={}, height={}]", r.width, r.height),
            Shape::Triangle(t) => write!(f, "Triangle[a={}, b={}, c={}]", t.a, t.b, t.c),
        }
    }
}

pub fn describe_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle(c) => format!(
            "Circle with radius {:.2} and area {:.2}",
            c.radius,
            shape.area()
        ),
        Shape::Rectangle(r) => format!(
            "Rectangle {:.2} x {:.2} with area {:.2}",
            r.width,
            r.height,
            shape.area()
        ),
        Shape::Triangle(t) => format!(
            "Triangle with sides {:.2}, {:.2}, {:.2} and area {:.2}",
            t.a,
            t.b,
            t.c,
            shape.area()
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeSize {
    LargeCircle,
    Large,
    Square,
    Small,
}

impl fmt::Display for ShapeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapeSize::LargeCircle => "large circle",
            ShapeSize::Large => "large shape",
            ShapeSize::Square => "square",
            ShapeSize::Small => "small shape",
        };
        f.write_str(label)
    }
}

/// Size class of a shape. Arms are checked top to bottom:
///
/// 1. circle with radius above [`LARGE_CIRCLE_RADIUS`]
/// 2. any shape with area above [`LARGE_AREA`]
/// 3. rectangle with equal sides
/// 4. everything else
pub fn classify_shape(shape: &Shape) -> ShapeSize {
    match shape {
        Shape::Circle(c) if c.radius > LARGE_CIRCLE_RADIUS => ShapeSize::LargeCircle,
        s if s.area() > LARGE_AREA => ShapeSize::Large,
        Shape::Rectangle(r) if r.is_square() => ShapeSize::Square,
        Shape::Circle(_) | Shape::Rectangle(_) | Shape::Triangle(_) => ShapeSize::Small,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        let circle = Shape::circle(5.0).unwrap();
        assert!((circle.area() - PI * 25.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", circle.area()), "78.54");
    }

    #[test]
    fn test_rectangle_and_triangle_area() {
        assert_eq!(Shape::rectangle(4.0, 6.0).unwrap().area(), 24.0);
        assert!((Shape::triangle(3.0, 4.0, 5.0).unwrap().area() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Shape::circle(0.0).is_err());
        assert!(Shape::circle(-2.0).is_err());
        assert!(Shape::rectangle(1.0, 0.0).is_err());
        assert!(Shape::triangle(1.0, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(Shape::rectangle(2.0, 3.0).unwrap().perimeter(), 10.0);
        assert_eq!(Shape::triangle(3.0, 4.0, 5.0).unwrap().perimeter(), 12.0);
    }

    #[test]
    fn test_classify_priority() {
        // radius 11 is both a large circle and a large area; the circle arm wins
        assert_eq!(
            classify_shape(&Shape::circle(11.0).unwrap()),
            ShapeSize::LargeCircle
        );
        assert_eq!(
            classify_shape(&Shape::circle(6.0).unwrap()),
            ShapeSize::Large
        );
        // a large square is large before it is a square
        assert_eq!(
            classify_shape(&Shape::rectangle(20.0, 20.0).unwrap()),
            ShapeSize::Large
        );
        assert_eq!(
            classify_shape(&Shape::rectangle(3.0, 3.0).unwrap()),
            ShapeSize::Square
        );
        assert_eq!(
            classify_shape(&Shape::triangle(3.0, 4.0, 5.0).unwrap()),
            ShapeSize::Small
        );
    }

    #[test]
    fn test_describe_shape() {
        assert_eq!(
            describe_shape(&Shape::circle(5.0).unwrap()),
            "Circle with radius 5.00 and area 78.54"
        );
        assert_eq!(
            describe_shape(&Shape::rectangle(4.0, 6.0).unwrap()),
            "Rectangle 4.00 x 6.00 with area 24.00"
        );
        assert_eq!(
            describe_shape(&Shape::triangle(3.0, 4.0, 5.0).unwrap()),
            "Triangle with sides 3.00, 4.00, 5.00 and area 6.00"
        );
    }
}
