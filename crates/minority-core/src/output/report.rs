//! Text Report
//!
//! Formats win tallies the way the console summary prints them.

use minority_events::{ScenarioReport, WinRecord};

use crate::config::ScenarioConfig;
use crate::trial::WinTally;

/// Line printed when a scenario produced no winners at all
pub const NO_WINNERS_LINE: &str = "  No winners (all ties - expected)";

/// Width of the `=` rule around section headings
const RULE_WIDTH: usize = 70;

/// Format a count with comma thousands separators
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `  Name: 12,345 wins (1.2%)`
pub fn format_win_line(name: &str, wins: u64, trials: u64) -> String {
    let pct = if trials == 0 {
        0.0
    } else {
        wins as f64 * 100.0 / trials as f64
    };
    format!("  {}: {} wins ({:.1}%)", name, format_count(wins), pct)
}

pub fn section_heading(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{}\n{}\n{}", rule, title, rule)
}

/// Heading, notes and one line per winner for a finished scenario
pub fn render_scenario(index: usize, scenario: &ScenarioConfig, tally: &WinTally) -> String {
    let mut lines = vec![format!("{}. {}:", index, scenario.title)];
    lines.extend(scenario.notes.iter().map(|note| format!("   {}", note)));

    if tally.is_empty() {
        lines.push(NO_WINNERS_LINE.to_string());
    } else {
        lines.extend(
            tally
                .most_common()
                .into_iter()
                .map(|(name, wins)| format_win_line(name, wins, tally.trials)),
        );
    }
    lines.join("\n")
}

/// Convert a tally into its serializable record
pub fn scenario_report(scenario: &ScenarioConfig, tally: &WinTally) -> ScenarioReport {
    ScenarioReport {
        scenario: scenario.name.clone(),
        title: scenario.title.clone(),
        regime: scenario.regime,
        trials: tally.trials,
        ties: tally.ties,
        wins: tally
            .most_common()
            .into_iter()
            .map(|(name, wins)| WinRecord {
                name: name.to_string(),
                wins,
                win_rate: tally.win_rate(name),
            })
            .collect(),
    }
}
