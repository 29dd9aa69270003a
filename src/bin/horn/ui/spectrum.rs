//! Spectrum pane for the filtered output
//!
//! A Hann-windowed FFT of the scope window, folded into log-spaced display
//! bins so the two filter edges are visible at any cutoff.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Displayed frequency bins, log-spaced from `MIN_HZ` to Nyquist.
const DISPLAY_BINS: usize = 40;
const MIN_HZ: f32 = 30.0;
const FLOOR_DB: f64 = -90.0;

pub struct SpectrumView {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// FFT-bin edges of each display bin; `edges[i]..edges[i+1]` is averaged.
    edges: Vec<usize>,
    /// Current display data: (display bin index, magnitude dB)
    points: Vec<(f64, f64)>,
    nyquist_hz: f32,
}

impl SpectrumView {
    pub fn new(fft_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(fft_len);

        // Hann window keeps the band edges from smearing across the display
        let window: Vec<f32> = (0..fft_len)
            .map(|i| {
                let t = i as f32 / (fft_len - 1).max(1) as f32;
                0.5 * (1.0 - (std::f32::consts::TAU * t).cos())
            })
            .collect();

        let nyquist_hz = sample_rate / 2.0;
        let half = fft_len / 2;
        let ratio = nyquist_hz / MIN_HZ;
        let mut edges = Vec::with_capacity(DISPLAY_BINS + 1);
        for i in 0..=DISPLAY_BINS {
            let hz = MIN_HZ * ratio.powf(i as f32 / DISPLAY_BINS as f32);
            let bin = (hz * fft_len as f32 / sample_rate).round() as usize;
            let bin = bin.clamp(1, half.saturating_sub(1));
            // Edges must not run backwards at the crowded low end
            let floor = edges.last().copied().unwrap_or(1);
            edges.push(bin.max(floor));
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); fft_len],
            edges,
            points: (0..DISPLAY_BINS).map(|i| (i as f64, FLOOR_DB)).collect(),
            nyquist_hz,
        }
    }

    /// Recompute the display bins from a new scope window.
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for (slot, (&sample, &w)) in self
            .scratch
            .iter_mut()
            .zip(samples.iter().zip(self.window.iter()))
        {
            slot.re = sample * w;
            slot.im = 0.0;
        }

        self.fft.process(&mut self.scratch);

        for i in 0..DISPLAY_BINS {
            let start = self.edges[i];
            let end = self.edges[i + 1].max(start + 1);

            let mut power = 0.0f64;
            for bin in &self.scratch[start..end] {
                power += (bin.re * bin.re + bin.im * bin.im) as f64;
            }
            power /= (end - start) as f64;

            let db = 10.0 * power.max(1e-12).log10();
            self.points[i] = (i as f64, db.max(FLOOR_DB));
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&self.points);

        let khz = format!("{:.0}k", self.nyquist_hz / 1000.0);
        let chart = Chart::new(vec![dataset])
            .block(Block::default().title(" Spectrum ").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .bounds([0.0, (DISPLAY_BINS - 1) as f64])
                    .labels(["30", "1k", khz.as_str()])
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([FLOOR_DB, 10.0])
                    .labels(["-90", "-40", "+10"])
                    .style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_widget(chart, area);
    }
}
