use prettytable::{Cell, Row, Table};

use crate::solver::engine::{PassStats, SolveStats};

pub fn render_stats_table(stats: &SolveStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Pass"),
        Cell::new("Runs"),
        Cell::new("Claims"),
        Cell::new("Time / Run (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&&'static str, &PassStats)> = stats.pass_stats.iter().collect();
    sorted_stats.sort_by_key(|entry| entry.1.time_spent_micros);

    for (name, pass_stats) in sorted_stats {
        let avg_time = if pass_stats.runs > 0 {
            pass_stats.time_spent_micros as f64 / pass_stats.runs as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&pass_stats.runs.to_string()),
            Cell::new(&pass_stats.claims.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                pass_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
