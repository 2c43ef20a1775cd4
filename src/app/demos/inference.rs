use crate::app::demos::sample_users;
use crate::domain::model::User;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

fn names(group: &[&User]) -> String {
    group.iter().map(|u| u.name()).collect::<Vec<_>>().join(", ")
}

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog and the cat";

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    // element types below come from usage, not annotations
    let mut frequencies = BTreeMap::new();
    for word in SENTENCE.split_whitespace() {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    let listed = frequencies
        .iter()
        .map(|(word, count)| format!("{}={}", word, count))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "word frequencies: {}", listed)?;

    let squares: Vec<_> = (1..=5).map(|n| n * n).collect();
    writeln!(out, "squares: {:?}", squares)?;
    writeln!(out, "sum of squares: {}", squares.iter().sum::<i32>())?;

    let users = sample_users()?;
    let (adults, minors): (Vec<_>, Vec<_>) = users.iter().partition(|u| u.is_adult());
    writeln!(out, "adults: {}", names(&adults))?;
    writeln!(out, "minors: {}", names(&minors))?;

    let total_age: u32 = users.iter().map(|u| u.age()).sum();
    let average = f64::from(total_age) / users.len() as f64;
    writeln!(out, "average age: {:.2}", average)?;

    let longest = users.iter().max_by_key(|u| u.name().len()).map(|u| u.name());
    writeln!(out, "longest name: {}", longest.unwrap_or("-"))?;
    Ok(())
}
