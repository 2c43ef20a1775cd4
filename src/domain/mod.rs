// Domain layer: value objects, closed variant sets and the coffee maker ports.
// Depends only on std, serde and chrono.

pub mod model;
pub mod payment;
pub mod ports;
pub mod pricing;
pub mod shapes;
pub mod value;
