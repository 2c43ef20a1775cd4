use crate::domain::model::{Order, User};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use serde::Serialize;
use std::fmt;

pub const VIP_RATE: f64 = 0.20;
pub const LOYAL_MEMBER_RATE: f64 = 0.15;
pub const MEMBER_RATE: f64 = 0.10;
pub const LARGE_GUEST_ORDER_RATE: f64 = 0.05;

pub const LOYAL_MEMBER_YEARS: u32 = 5;
pub const LARGE_GUEST_ORDER: f64 = 100.0;

pub const MAX_MEMBERSHIP_YEARS: u32 = 100;

/// A user's membership and how long they have held it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Membership {
    user: User,
    years: u32,
}

impl Membership {
    pub fn new(user: User, years: u32) -> Result<Self> {
        validate_range("years", years, 0, MAX_MEMBERSHIP_YEARS)?;
        Ok(Self { user, years })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn years(&self) -> u32 {
        self.years
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum Customer {
    Guest,
    Member(Membership),
    Vip(User),
}

impl Customer {
    pub fn member(user: User, years: u32) -> Result<Self> {
        Membership::new(user, years).map(Customer::Member)
    }

    pub fn label(&self) -> String {
        match self {
            Customer::Guest => "guest".to_string(),
            Customer::Member(m) => format!("member {} ({}y)", m.user.name(), m.years),
            Customer::Vip(user) => format!("vip {}", user.name()),
        }
    }
}

/// Discount rate for an order. Arms are checked top to bottom:
///
/// 1. VIP: 20%
/// 2. member for at least [`LOYAL_MEMBER_YEARS`]: 15%
/// 3. any other member: 10%
/// 4. guest whose order totals at least [`LARGE_GUEST_ORDER`]: 5%
/// 5. any other guest: nothing
pub fn discount_rate(customer: &Customer, order: &Order) -> f64 {
    match customer {
        Customer::Vip(_) => VIP_RATE,
        Customer::Member(m) if m.years >= LOYAL_MEMBER_YEARS => LOYAL_MEMBER_RATE,
        Customer::Member(_) => MEMBER_RATE,
        Customer::Guest if order.total() >= LARGE_GUEST_ORDER => LARGE_GUEST_ORDER_RATE,
        Customer::Guest => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subtotal ${:.2}, discount ${:.2}, total ${:.2}",
            self.subtotal, self.discount, self.total
        )
    }
}

pub fn price_order(customer: &Customer, order: &Order) -> Quote {
    let subtotal = order.total();
    let discount = subtotal * discount_rate(customer, order);
    Quote {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}
