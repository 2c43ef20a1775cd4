use std::fmt;

/// Lines written by the coffee maker and its parts while brewing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub trait Heater: Send + Sync {
    fn on(&self);
    fn off(&self);
    fn is_hot(&self) -> bool;
    fn name(&self) -> &str;
}

pub trait Pump: Send + Sync {
    fn pump(&self, transcript: &mut Transcript);
    fn name(&self) -> &str;
}
