//! Pot panel widget - virtual knobs, mapped readouts, and the indicator LED

use horn_dsp::control::{PotFrame, RAW_MAX, RAW_MIN};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::state::EffectSnapshot;

const POT_LABELS: [&str; 4] = ["base", "width", "q", "lfo"];

/// Render the pot rows, the mapped-value readouts, and the status line.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &EffectSnapshot,
    pots: &PotFrame,
    selected: usize,
) {
    let block = Block::default().title(" horn ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let params = snapshot.params;
    let readouts = [
        format!("{:.0} Hz", params.base_hz),
        format!("{:.0} Hz", params.width_hz),
        format!("{:.2}", params.q),
        format!("{:.1} Hz", params.lfo_rate_hz),
    ];

    for (i, (&label, readout)) in POT_LABELS.iter().zip(&readouts).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Min(10),
                Constraint::Length(12),
            ])
            .split(rows[i]);

        let style = if i == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        frame.render_widget(
            Paragraph::new(format!("[{}] {}", i + 1, label)).style(style),
            cols[0],
        );

        let ratio = ((pots[i] - RAW_MIN) / (RAW_MAX - RAW_MIN)).clamp(0.0, 1.0) as f64;
        frame.render_widget(
            Gauge::default().gauge_style(style).ratio(ratio).label(""),
            cols[1],
        );

        frame.render_widget(Paragraph::new(readout.as_str()).style(style), cols[2]);
    }

    let led = if snapshot.indicator {
        Span::styled(" ● MOD  ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ BYP  ", Style::default().fg(Color::DarkGray))
    };
    let band = Span::styled(
        format!(
            "band {:.0} Hz – {:.0} Hz",
            params.base_hz,
            params.lowpass_hz()
        ),
        Style::default().fg(Color::Cyan),
    );
    frame.render_widget(Paragraph::new(Line::from(vec![led, band])), rows[4]);
}
