//! Pass/fail bookkeeping for a grading session

use serde::{Deserialize, Serialize};

use super::types::CheckOutcome;

/// Collected outcomes of one grading run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gradebook {
    pub title: String,
    pub reward_word: String,
    pub outcomes: Vec<CheckOutcome>,
    #[serde(skip)]
    quiet: bool,
    #[serde(skip)]
    practice: bool,
}

impl Gradebook {
    pub fn new(title: impl Into<String>, reward_word: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            reward_word: reward_word.into(),
            outcomes: Vec::new(),
            quiet: false,
            practice: false,
        }
    }

    /// Record outcomes without printing them.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Grade normally but award no letters.
    pub fn practice(mut self) -> Self {
        self.practice = true;
        self
    }

    /// Record an outcome, printing its pass/fail line.
    pub fn record(&mut self, outcome: CheckOutcome) {
        let outcome = if self.practice { outcome.without_letters() } else { outcome };
        if !self.quiet {
            println!("{}", format_line(&outcome));
        }
        self.outcomes.push(outcome);
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Every letter earned so far, in recording order.
    pub fn letters(&self) -> Vec<char> {
        self.outcomes.iter().flat_map(|o| o.letters.iter().copied()).collect()
    }

    pub fn summary(&self) -> String {
        let letters: String = self.letters().into_iter().collect();
        format!(
            "{}: {}/{} exercises passed, letters earned: {}",
            self.title,
            self.passed(),
            self.total(),
            if letters.is_empty() { "-".to_string() } else { letters }
        )
    }

    pub fn print_summary(&self) {
        println!();
        println!("{}", self.summary());
    }
}

fn format_line(outcome: &CheckOutcome) -> String {
    if outcome.passed {
        let letters: String = outcome.letters.iter().collect();
        format!(
            "✅ {}: {} (letters: {})",
            outcome.exercise.name(),
            outcome.detail,
            letters
        )
    } else {
        format!("❌ {}: {}", outcome.exercise.name(), outcome.detail)
    }
}
