//! The `fizzbot solve` command.

use anyhow::{Context, Result};

use fizzbot_core::model::Rule;
use fizzbot_core::solver::solve_trimmed;

pub fn execute(numbers: String, rules: String) -> Result<()> {
    let numbers = parse_numbers(&numbers)?;
    let rules = parse_rules(&rules)?;
    println!("{}", solve_trimmed(&numbers, &rules));
    Ok(())
}

fn parse_numbers(s: &str) -> Result<Vec<i64>> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| {
            n.parse::<i64>()
                .with_context(|| format!("invalid number: {n:?}"))
        })
        .collect()
}

fn parse_rules(s: &str) -> Result<Vec<Rule>> {
    s.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| {
            let (divisor, text) = r
                .split_once('=')
                .with_context(|| format!("rule {r:?} is not of the form divisor=text"))?;
            let divisor: i64 = divisor
                .trim()
                .parse()
                .with_context(|| format!("invalid divisor in rule {r:?}"))?;
            Rule::new(divisor, text).with_context(|| format!("rule {r:?} has a zero divisor"))
        })
        .collect()
}
