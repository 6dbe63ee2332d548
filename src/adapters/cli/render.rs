//! Plain-text rendering for terminal output.

use crate::domain::{KeyMetric, Summary};

/// Label, count and share columns, one line per label.
pub fn summary_table(title: &str, summary: &Summary) -> String {
    let width = summary
        .labels()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut out = format!("{}\n", title);
    for entry in summary {
        let share = summary.share(&entry.label).unwrap_or(0.0) * 100.0;
        out.push_str(&format!(
            "  {:<width$}  {:>6}  {:>5.1}%\n",
            entry.label,
            entry.value,
            share,
            width = width
        ));
    }
    out.push_str(&format!(
        "  {:<width$}  {:>6}\n",
        "Total",
        summary.total(),
        width = width
    ));
    out
}

pub fn key_metrics(metrics: &[KeyMetric]) -> String {
    let width = metrics.iter().map(|m| m.label.len()).max().unwrap_or(0);
    metrics
        .iter()
        .map(|m| format!("{:<width$}  {}\n", m.label, m.value, width = width))
        .collect()
}
