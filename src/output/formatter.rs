use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::history::SavedAppraisal;
use crate::scoring::{Appraisal, CurvePoint, Impact};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render a score with one decimal place ("9.0", "6.1")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

fn impact_label(impact: Impact) -> &'static str {
    match impact {
        Impact::Positive => "positive",
        Impact::Negative => "negative",
        Impact::Neutral => "neutral",
    }
}

/// Format an appraisal with its full multiplier breakdown (multi-line)
pub fn format_appraisal_detail(appraisal: &Appraisal, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(appraisal.multipliers.len() + 3);

    let header = format!(
        "{}, age {}",
        appraisal.input.category, appraisal.input.age
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    lines.push(format!("  Base score:  {}", format_score(appraisal.base_score)));

    for record in &appraisal.multipliers {
        let line = format!(
            "  {:<22} raw {:>5}  x{:.3}  ({})",
            record.name,
            format_score(record.raw_score),
            record.value,
            impact_label(record.impact)
        );
        if use_colors {
            match record.impact {
                Impact::Positive => lines.push(line.green().to_string()),
                Impact::Negative => lines.push(line.red().to_string()),
                Impact::Neutral => lines.push(line.dimmed().to_string()),
            }
        } else {
            lines.push(line);
        }
    }

    let final_line = format!("  Final score: {}", format_score(appraisal.final_score));
    if use_colors {
        lines.push(final_line.bold().to_string());
    } else {
        lines.push(final_line);
    }

    lines.join("\n")
}

/// Format saved appraisals as a table: id, date, category, age, scores.
/// Assumes the slice is already ordered (the store lists newest-first).
pub fn format_history_table(records: &[&SavedAppraisal], use_colors: bool) -> String {
    if records.is_empty() {
        return "No saved appraisals.".to_string();
    }

    records
        .iter()
        .map(|record| {
            let a = &record.appraisal;
            let id_str = format!("#{:<4}", record.id);
            let date = a.timestamp.format("%Y-%m-%d %H:%M");
            // Pad before coloring so escape codes don't skew the columns.
            let category = format!("{:<9}", a.input.category);
            let scores = format!(
                "{} -> {}",
                format_score(a.base_score),
                format_score(a.final_score)
            );
            if use_colors {
                format!(
                    "{} {}  {} age {:<3} {}",
                    id_str.dimmed(),
                    date,
                    category.cyan(),
                    a.input.age,
                    scores.bold()
                )
            } else {
                format!(
                    "{} {}  {} age {:<3} {}",
                    id_str, date, category, a.input.age, scores
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Width of the bar column: fill what the terminal allows past the fixed
/// "age  score  " prefix, within sane bounds. Pipes get a fixed width.
fn bar_width() -> usize {
    const PREFIX: usize = 14;
    const DEFAULT: usize = 40;
    match get_terminal_width() {
        Some(w) if w > PREFIX + 10 => (w - PREFIX).min(60),
        Some(_) => 10,
        None => DEFAULT,
    }
}

/// Format a sampled curve as one row per age with an inline bar scaled to
/// the 0-10 score range
pub fn format_curve_table(points: &[CurvePoint], use_colors: bool) -> String {
    let width = bar_width();
    points
        .iter()
        .map(|point| format_curve_row(point, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_curve_row(point: &CurvePoint, bar_width: usize, use_colors: bool) -> String {
    let filled = ((point.score / 10.0) * bar_width as f64).round() as usize;
    let bar: String = "#".repeat(filled.min(bar_width));
    let score_str = format!("{:>4}", format_score(point.score));
    if use_colors {
        format!("{:>3}  {}  {}", point.age, score_str.bold(), bar.cyan())
    } else {
        format!("{:>3}  {}  {}", point.age, score_str, bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryState;
    use crate::scoring::{appraise, sample_curve, Category, Input};

    fn sample_appraisal() -> Appraisal {
        let mut input = Input::new(Category::Sprint, 30);
        input.injuries = Some(10.0);
        appraise(&input)
    }

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(9.0), "9.0");
        assert_eq!(format_score(6.125), "6.1");
        assert_eq!(format_score(10.0), "10.0");
    }

    #[test]
    fn test_format_appraisal_detail_plain() {
        let result = format_appraisal_detail(&sample_appraisal(), false);
        assert!(result.contains("SPRINT, age 30"));
        assert!(result.contains("Base score:  6.0"));
        assert!(result.contains("Injury History"));
        assert!(result.contains("x0.606"));
        assert!(result.contains("(negative)"));
        assert!(result.contains("Final score:"));
    }

    #[test]
    fn test_format_appraisal_detail_lists_all_rules() {
        let result = format_appraisal_detail(&sample_appraisal(), false);
        for name in ["Explosiveness", "Injury History", "Composure"] {
            assert!(result.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_format_history_table_empty() {
        let records: Vec<&SavedAppraisal> = vec![];
        assert_eq!(
            format_history_table(&records, false),
            "No saved appraisals."
        );
    }

    #[test]
    fn test_format_history_table_row() {
        let mut state = HistoryState::new();
        state.add(sample_appraisal());
        let ordered = state.ordered();
        let result = format_history_table(&ordered, false);
        assert!(result.starts_with("#1"));
        assert!(result.contains("SPRINT"));
        assert!(result.contains("age 30"));
        assert!(result.contains("6.0 ->"));
    }

    #[test]
    fn test_format_curve_row_scales_bar() {
        let full = format_curve_row(
            &CurvePoint {
                age: 24,
                score: 10.0,
            },
            20,
            false,
        );
        assert!(full.contains(&"#".repeat(20)));

        let half = format_curve_row(
            &CurvePoint {
                age: 50,
                score: 5.0,
            },
            20,
            false,
        );
        assert!(half.contains(&"#".repeat(10)));
        assert!(!half.contains(&"#".repeat(11)));
    }

    #[test]
    fn test_format_curve_table_one_row_per_point() {
        let points = sample_curve(Category::Endurance);
        let result = format_curve_table(&points, false);
        assert_eq!(result.lines().count(), 43);
        assert!(result.lines().next().unwrap().trim_start().starts_with("18"));
    }
}
