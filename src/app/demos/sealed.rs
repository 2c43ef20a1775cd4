use crate::app::demos::{sample_order, sample_users};
use crate::domain::payment::PaymentResult;
use crate::domain::pricing::{price_order, Customer};
use crate::domain::shapes::{classify_shape, describe_shape, Shape};
use crate::utils::error::Result;
use std::io::Write;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let shapes = [
        Shape::circle(5.0)?,
        Shape::rectangle(4.0, 6.0)?,
        Shape::triangle(3.0, 4.0, 5.0)?,
        Shape::circle(12.0)?,
        Shape::rectangle(3.0, 3.0)?,
    ];
    for shape in &shapes {
        writeln!(out, "{} -> {}", describe_shape(shape), classify_shape(shape))?;
    }
    let total_area: f64 = shapes.iter().map(Shape::area).sum();
    writeln!(out, "total area: {:.2}", total_area)?;

    let payments = [
        PaymentResult::success("TX-12345", 99.99)?,
        PaymentResult::failure("ERR-001", "Insufficient funds")?,
        PaymentResult::pending("REF-7", 30)?,
    ];
    for payment in &payments {
        writeln!(
            out,
            "{} [terminal={}]",
            payment.describe(),
            payment.is_terminal()
        )?;
    }

    let order = sample_order()?;
    let users = sample_users()?;
    let customers = [
        Customer::Guest,
        Customer::member(users[0].clone(), 2)?,
        Customer::member(users[2].clone(), 7)?,
        Customer::Vip(users[0].clone()),
    ];
    for customer in &customers {
        writeln!(out, "{}: {}", customer.label(), price_order(customer, &order))?;
    }
    Ok(())
}
