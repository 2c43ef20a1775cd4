use chrono::NaiveDate;
use lang_showcase::domain::model::{LineItem, Order, Point, User};
use lang_showcase::domain::payment::PaymentResult;
use lang_showcase::domain::pricing::{discount_rate, price_order, Customer};
use lang_showcase::domain::shapes::{classify_shape, describe_shape, Shape, ShapeSize};
use lang_showcase::domain::value::{describe_value, Value};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn order_totalling(amount: f64) -> Order {
    Order::new(
        "ORD-T",
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        vec![LineItem::new("ITEM", 1, amount).unwrap()],
    )
    .unwrap()
}

#[test]
fn test_circle_area_example() {
    let circle = Shape::circle(5.0).unwrap();
    assert!((circle.area() - PI * 25.0).abs() < 1e-12);
    assert!(describe_shape(&circle).contains("78.54"));
}

#[test]
fn test_every_shape_has_a_result() {
    let shapes = [
        Shape::circle(1.0).unwrap(),
        Shape::rectangle(2.0, 5.0).unwrap(),
        Shape::triangle(2.0, 2.0, 3.0).unwrap(),
    ];
    for shape in &shapes {
        assert!(shape.area() > 0.0, "{} has no area", shape);
        assert!(shape.perimeter() > 0.0);
        assert!(describe_shape(shape).to_lowercase().starts_with(shape.name()));
        assert_eq!(classify_shape(shape), ShapeSize::Small);
    }
}

#[test]
fn test_classification_priority_order() {
    let cases = [
        (Shape::circle(10.5).unwrap(), ShapeSize::LargeCircle),
        (Shape::circle(10.0).unwrap(), ShapeSize::Large),
        (Shape::rectangle(10.0, 10.0).unwrap(), ShapeSize::Square),
        (Shape::rectangle(10.0, 10.5).unwrap(), ShapeSize::Large),
        (Shape::triangle(20.0, 20.0, 20.0).unwrap(), ShapeSize::Large),
        (Shape::rectangle(1.0, 2.0).unwrap(), ShapeSize::Small),
    ];
    for (shape, expected) in cases {
        assert_eq!(classify_shape(&shape), expected, "{}", shape);
    }
}

#[test]
fn test_payment_examples() {
    let success = PaymentResult::success("TX-12345", 99.99).unwrap().describe();
    for needle in ["successful", "TX-12345", "99.99"] {
        assert!(success.contains(needle), "{} missing {}", success, needle);
    }

    let failure = PaymentResult::failure("ERR-001", "Insufficient funds")
        .unwrap()
        .describe();
    for needle in ["failed", "ERR-001", "Insufficient funds"] {
        assert!(failure.contains(needle), "{} missing {}", failure, needle);
    }

    let pending = PaymentResult::pending("REF-1", 5).unwrap();
    assert!(pending.describe().contains("pending"));
    assert!(!pending.is_terminal());
}

#[test]
fn test_payment_equality() {
    assert_eq!(
        PaymentResult::success("TX-1", 10.0).unwrap(),
        PaymentResult::success("TX-1", 10.0).unwrap()
    );
    assert_ne!(
        PaymentResult::success("TX-1", 10.0).unwrap(),
        PaymentResult::success("TX-1", 10.5).unwrap()
    );
}

#[test]
fn test_payment_hash_follows_equality() {
    let a = PaymentResult::success("TX-1", 0.0).unwrap();
    let b = PaymentResult::success("TX-1", -0.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a, a.clone());

    let failure = PaymentResult::failure("ERR-1", "Declined").unwrap();
    assert_eq!(hash_of(&failure), hash_of(&PaymentResult::failure("ERR-1", "Declined").unwrap()));
    assert_ne!(failure, PaymentResult::failure("ERR-1", "Expired").unwrap());

    let pending = PaymentResult::pending("REF-1", 5).unwrap();
    assert_ne!(pending, PaymentResult::pending("REF-1", 6).unwrap());

    let distinct: HashSet<PaymentResult> = [a, b, failure, pending.clone(), pending]
        .into_iter()
        .collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn test_shape_hash_follows_equality() {
    let a = Shape::circle(2.5).unwrap();
    let b = Shape::circle(2.5).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, Shape::circle(2.6).unwrap());

    let wide = Shape::rectangle(2.0, 3.0).unwrap();
    assert_eq!(hash_of(&wide), hash_of(&Shape::rectangle(2.0, 3.0).unwrap()));
    assert_ne!(wide, Shape::rectangle(3.0, 2.0).unwrap());

    let triangle = Shape::triangle(3.0, 4.0, 5.0).unwrap();
    assert_eq!(hash_of(&triangle), hash_of(&Shape::triangle(3.0, 4.0, 5.0).unwrap()));
    assert_ne!(triangle, Shape::triangle(3.0, 5.0, 4.0).unwrap());

    let shapes: HashSet<Shape> = [a, b, wide, triangle].into_iter().collect();
    assert_eq!(shapes.len(), 3);
}

#[test]
fn test_discount_priority_order() {
    let user = User::new(5, "Sam", "sam@example.com", 40).unwrap();
    let small = order_totalling(40.0);
    let large = order_totalling(250.0);

    assert_eq!(discount_rate(&Customer::Vip(user.clone()), &small), 0.20);
    assert_eq!(discount_rate(&Customer::member(user.clone(), 5).unwrap(), &small), 0.15);
    assert_eq!(discount_rate(&Customer::member(user.clone(), 4).unwrap(), &large), 0.10);
    assert_eq!(discount_rate(&Customer::Guest, &large), 0.05);
    assert_eq!(discount_rate(&Customer::Guest, &small), 0.0);

    let quote = price_order(&Customer::Guest, &large);
    assert_eq!(quote.to_string(), "subtotal $250.00, discount $12.50, total $237.50");
}

#[test]
fn test_value_descriptions() {
    assert_eq!(describe_value(&Value::Int(0)), "integer 0");
    assert_eq!(describe_value(&Value::Decimal(-0.5)), "decimal -0.50");
    assert_eq!(describe_value(&Value::Text("rust".into())), "text \"rust\" (4 chars)");
    assert_eq!(describe_value(&Value::Flag(false)), "flag off");
    assert_eq!(
        describe_value(&Value::Coordinates(Point::new(0.0, 0.0).unwrap())),
        "point at the origin"
    );
    assert_eq!(describe_value(&Value::Nothing), "nothing");
}
