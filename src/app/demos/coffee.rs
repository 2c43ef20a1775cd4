use crate::app::demos::DemoContext;
use crate::core::wiring;
use crate::utils::error::Result;
use std::io::Write;

pub fn run<W: Write>(ctx: &DemoContext, out: &mut W) -> Result<()> {
    let maker = wiring::build(ctx.wiring, ctx.wiring_file.as_deref())?;
    writeln!(
        out,
        "wiring: {} (heater={}, pump={}, cups={})",
        ctx.wiring,
        maker.heater().name(),
        maker.pump().name(),
        maker.cups()
    )?;
    write!(out, "{}", maker.brew()?)?;
    Ok(())
}
