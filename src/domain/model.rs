//! Immutable value objects.
//!
//! Every type here is built through a `new` factory that validates all fields
//! before the value exists. Fields are private and exposed through getters, so
//! a value that has been constructed always satisfies its invariants.

use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{
    validate_email, validate_finite, validate_non_empty_string, validate_range,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maps `-0.0` to `0.0` so that equal floats hash to the same bits.
pub(crate) fn canonical(value: f64) -> f64 {
    value + 0.0
}

pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    canonical(value).to_bits().hash(state);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        validate_finite("x", x)?;
        validate_finite("y", y)?;
        Ok(Self {
            x: canonical(x),
            y: canonical(y),
        })
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// NaN is rejected at construction, so equality is reflexive.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point[x={}, y={}]", self.x, self.y)
    }
}

/// Closed integer interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(ShowcaseError::invalid(
                "start",
                format!("start ({}) must not be greater than end ({})", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Distance between the bounds. Unsigned, since `i64::MIN..=i64::MAX`
    /// spans more than `i64::MAX`.
    pub fn length(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[start={}, end={}]", self.start, self.end)
    }
}

pub const MAX_AGE: u32 = 150;
pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    id: u64,
    name: String,
    email: String,
    age: u32,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, age: u32) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        validate_non_empty_string("name", &name)?;
        validate_email("email", &email)?;
        validate_range("age", age, 0, MAX_AGE)?;
        Ok(Self {
            id,
            name,
            email,
            age,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User[id={}, name={}, email={}, age={}]",
            self.id, self.name, self.email, self.age
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    sku: String,
    quantity: u32,
    unit_price: f64,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: u32, unit_price: f64) -> Result<Self> {
        let sku = sku.into();
        validate_non_empty_string("sku", &sku)?;
        if quantity == 0 {
            return Err(ShowcaseError::invalid("quantity", "Value must be at least 1"));
        }
        validate_finite("unit_price", unit_price)?;
        if unit_price < 0.0 {
            return Err(ShowcaseError::invalid(
                "unit_price",
                format!("Value must not be negative, got {}", unit_price),
            ));
        }
        Ok(Self {
            sku,
            quantity,
            unit_price: canonical(unit_price),
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

impl Eq for LineItem {}

impl Hash for LineItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sku.hash(state);
        self.quantity.hash(state);
        hash_f64(self.unit_price, state);
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineItem[sku={}, quantity={}, unit_price={:.2}]",
            self.sku, self.quantity, self.unit_price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Order {
    id: String,
    placed_on: NaiveDate,
    items: Vec<LineItem>,
}

impl Order {
    pub fn new(id: impl Into<String>, placed_on: NaiveDate, items: Vec<LineItem>) -> Result<Self> {
        let id = id.into();
        validate_non_empty_string("id", &id)?;
        if items.is_empty() {
            return Err(ShowcaseError::invalid(
                "items",
                "An order needs at least one line item",
            ));
        }
        Ok(Self {
            id,
            placed_on,
            items,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn placed_on(&self) -> NaiveDate {
        self.placed_on
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total units across all lines, widened so large quantities cannot overflow.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order[id={}, placed_on={}, items={}, total={:.2}]",
            self.id,
            self.placed_on,
            self.items.len(),
            self.total()
        )
    }
}
