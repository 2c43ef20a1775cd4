//! Console demonstrations.
//!
//! Each demo writes deterministic lines to the sink it is given. Money and
//! area values are printed with two decimals.

pub mod coffee;
pub mod inference;
pub mod patterns;
pub mod records;
pub mod sealed;
pub mod text_blocks;

use crate::core::wiring::WiringStyle;
use crate::domain::model::{LineItem, Order, User};
use crate::utils::error::{Result, ShowcaseError};
use chrono::NaiveDate;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DemoKind {
    Records,
    Sealed,
    Patterns,
    Inference,
    TextBlocks,
    Coffee,
}

impl DemoKind {
    pub const ALL: [DemoKind; 6] = [
        DemoKind::Records,
        DemoKind::Sealed,
        DemoKind::Patterns,
        DemoKind::Inference,
        DemoKind::TextBlocks,
        DemoKind::Coffee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Records => "records",
            DemoKind::Sealed => "sealed",
            DemoKind::Patterns => "patterns",
            DemoKind::Inference => "inference",
            DemoKind::TextBlocks => "text-blocks",
            DemoKind::Coffee => "coffee",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings shared by all demos. Only the coffee demo reads the wiring.
#[derive(Debug, Clone, Default)]
pub struct DemoContext {
    pub wiring: WiringStyle,
    pub wiring_file: Option<PathBuf>,
}

pub fn run<W: Write>(kind: DemoKind, ctx: &DemoContext, out: &mut W) -> Result<()> {
    tracing::info!("running {} demo", kind);
    match kind {
        DemoKind::Records => records::run(out),
        DemoKind::Sealed => sealed::run(out),
        DemoKind::Patterns => patterns::run(out),
        DemoKind::Inference => inference::run(out),
        DemoKind::TextBlocks => text_blocks::run(out),
        DemoKind::Coffee => coffee::run(ctx, out),
    }
}

/// Runs every demo in [`DemoKind::ALL`] order, each under a `== name ==` header.
pub fn run_all<W: Write>(ctx: &DemoContext, out: &mut W) -> Result<()> {
    for (i, kind) in DemoKind::ALL.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "== {} ==", kind)?;
        run(*kind, ctx, out)?;
    }
    Ok(())
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ShowcaseError::invalid("placed_on", format!("{}-{}-{} is not a date", year, month, day))
    })
}

pub(crate) fn sample_users() -> Result<Vec<User>> {
    Ok(vec![
        User::new(1, "Ada", "ada@example.com", 36)?,
        User::new(2, "Linus", "linus@example.org", 17)?,
        User::new(3, "Grace", "grace@example.net", 85)?,
        User::new(4, "Tim", "tim@example.com", 12)?,
    ])
}

pub(crate) fn sample_order() -> Result<Order> {
    Order::new(
        "ORD-1001",
        date(2024, 3, 1)?,
        vec![
            LineItem::new("BEANS-250G", 2, 12.5)?,
            LineItem::new("FILTER-100", 1, 4.99)?,
            LineItem::new("MUG", 3, 8.0)?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_writes_every_header() {
        let mut out = Vec::new();
        run_all(&DemoContext::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for kind in DemoKind::ALL {
            assert!(text.contains(&format!("== {} ==", kind)), "missing {}", kind);
        }
    }

    #[test]
    fn test_sample_order_total() {
        let order = sample_order().unwrap();
        assert_eq!(format!("{:.2}", order.total()), "53.99");
    }
}
