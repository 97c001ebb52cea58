//! Rule solver.
//!
//! Maps each number to the concatenated text of every rule that divides it,
//! or to its decimal form when no rule applies.

use crate::model::{trim_wire, Rule};

/// Solve a numeric challenge.
///
/// Rule text is concatenated in the order the rules are listed. Every token,
/// including the last, is followed by a single space; use [`solve_trimmed`]
/// for the form that is submitted.
pub fn solve(numbers: &[i64], rules: &[Rule]) -> String {
    let mut out = String::new();

    for &number in numbers {
        let start = out.len();
        for rule in rules.iter().filter(|r| r.applies_to(number)) {
            out.push_str(&rule.response);
        }
        if out.len() == start {
            out.push_str(&number.to_string());
        }
        out.push(' ');
    }

    out
}

/// [`solve`] without the trailing space.
pub fn solve_trimmed(numbers: &[i64], rules: &[Rule]) -> String {
    trim_wire(&solve(numbers, rules)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fizzbuzz() -> Vec<Rule> {
        vec![
            Rule::new(3, "Fizz").unwrap(),
            Rule::new(5, "Buzz").unwrap(),
        ]
    }

    #[test]
    fn no_rule_applies() {
        assert_eq!(solve(&[7], &fizzbuzz()), "7 ");
        assert_eq!(solve(&[-7], &fizzbuzz()), "-7 ");
    }

    #[test]
    fn single_rule_applies() {
        let rules = vec![Rule::new(4, "Beep").unwrap()];
        assert_eq!(solve(&[8], &rules), "Beep ");
    }

    #[test]
    fn multiple_rules_keep_listed_order() {
        assert_eq!(solve(&[15], &fizzbuzz()), "FizzBuzz ");

        let reversed = vec![
            Rule::new(5, "Buzz").unwrap(),
            Rule::new(3, "Fizz").unwrap(),
        ];
        assert_eq!(solve(&[15], &reversed), "BuzzFizz ");
    }

    #[test]
    fn duplicate_divisors_both_contribute() {
        let rules = vec![
            Rule::new(2, "Ping").unwrap(),
            Rule::new(2, "Pong").unwrap(),
        ];
        assert_eq!(solve(&[4, 3], &rules), "PingPong 3 ");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(solve(&[], &fizzbuzz()), "");
        assert_eq!(solve(&[], &[]), "");
        assert_eq!(solve(&[3, 5], &[]), "3 5 ");
    }

    #[test]
    fn classic_sequence() {
        let answer = solve_trimmed(&[1, 2, 3, 4, 5, 15], &fizzbuzz());
        assert_eq!(answer, "1 2 Fizz 4 Buzz FizzBuzz");
    }

    #[test]
    fn empty_replacement_text_falls_back_to_number() {
        let rules = vec![Rule::new(2, "").unwrap()];
        assert_eq!(solve(&[2, 3], &rules), "2 3 ");
    }
}
