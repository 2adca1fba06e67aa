use ratatui::{
    prelude::*,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::core::system_monitor::SampleLog;

/// Line chart of CPU busy-percent over the sampling window
pub fn cpu_usage_chart<'a>(
    title: &str,
    points: &'a [(f64, f64)],
    log: &SampleLog,
) -> Chart<'a> {
    let span_secs = points.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
    let peak = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);

    // Start, middle and end wall-clock times along the x axis
    let x_labels: Vec<String> = match (log.first(), log.last()) {
        (Some(first), Some(last)) => {
            let middle = first.timestamp + (last.timestamp - first.timestamp) / 2;
            [first.timestamp, middle, last.timestamp]
                .iter()
                .map(|t| t.format("%H:%M:%S").to_string())
                .collect()
        }
        _ => Vec::new(),
    };

    let dataset = Dataset::default()
        .name("CPU %")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(usage_color(peak)))
        .data(points);

    Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, span_secs])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("CPU Usage (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"]),
        )
}

/// Color for a CPU busy-percent, taken from the peak of the series
pub fn usage_color(percent: f64) -> Color {
    match percent {
        v if v < 50.0 => Color::Cyan,
        v if v < 75.0 => Color::LightYellow,
        v if v < 90.0 => Color::LightRed,
        _ => Color::Red,
    }
}
