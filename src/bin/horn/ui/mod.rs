//! TUI module for horn
//!
//! Real-time view of the filter band, the modulation indicator, and the
//! filtered output signal, with keyboard-driven virtual pots.

pub mod state;

mod panel;
mod spectrum;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use horn_dsp::control::{PotFrame, POT_COUNT, RAW_MAX, RAW_MIN};

use panel::render_panel;
use spectrum::SpectrumView;
use state::{ControlMessage, EffectSnapshot};
use waveform::render_waveform;

/// Audio visualization buffer size (also the FFT length).
const VIS_BUFFER_SIZE: usize = 1024;

/// Knob travel per keypress.
const POT_STEP: f32 = (RAW_MAX - RAW_MIN) / 40.0;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for scope samples
    audio_rx: Consumer<f32>,
    /// Ring buffer receiver for effect telemetry
    snapshot_rx: Consumer<EffectSnapshot>,
    /// Ring buffer sender for knob moves and the switch
    control_tx: Producer<ControlMessage>,
    /// Latest telemetry received
    snapshot: EffectSnapshot,
    /// Local shadow of the pot positions, nudged by keypresses
    pots: PotFrame,
    /// Which pot the arrow keys act on
    selected: usize,
    /// Rolling window of scope samples
    audio_buffer: Vec<f32>,
    spectrum: SpectrumView,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        audio_rx: Consumer<f32>,
        snapshot_rx: Consumer<EffectSnapshot>,
        control_tx: Producer<ControlMessage>,
        initial: EffectSnapshot,
        sample_rate: f32,
    ) -> Self {
        Self {
            audio_rx,
            snapshot_rx,
            control_tx,
            pots: initial.pots,
            snapshot: initial,
            selected: 0,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumView::new(VIS_BUFFER_SIZE, sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_snapshots();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input at ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain the scope ring, keeping the newest window.
    fn poll_audio(&mut self) {
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }
        let len = self.audio_buffer.len();
        if len > VIS_BUFFER_SIZE {
            self.audio_buffer.drain(0..len - VIS_BUFFER_SIZE);
        }
    }

    /// Keep only the latest telemetry.
    fn poll_snapshots(&mut self) {
        while let Ok(snapshot) = self.snapshot_rx.pop() {
            self.snapshot = snapshot;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.selected = (c as usize - '1' as usize).min(POT_COUNT - 1);
            }
            KeyCode::Up | KeyCode::Right => self.nudge(POT_STEP),
            KeyCode::Down | KeyCode::Left => self.nudge(-POT_STEP),
            KeyCode::Char(' ') => {
                let engaged = !self.snapshot.indicator;
                let _ = self.control_tx.push(ControlMessage::SetSwitch(engaged));
            }
            _ => {}
        }
    }

    /// Move the selected pot and tell the audio thread.
    fn nudge(&mut self, delta: f32) {
        let raw = (self.pots[self.selected] + delta).clamp(RAW_MIN, RAW_MAX);
        self.pots[self.selected] = raw;
        let _ = self.control_tx.push(ControlMessage::SetPot(self.selected, raw));
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Pots + band readout
                Constraint::Length(8), // Scope
                Constraint::Min(8),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_panel(frame, chunks[0], &self.snapshot, &self.pots, self.selected);
        render_waveform(frame, chunks[1], &self.audio_buffer);
        self.spectrum.render(frame, chunks[2]);

        let help = ratatui::widgets::Paragraph::new(
            " [1-4] Select pot  [↑/↓] Adjust  [Space] Engage/Bypass  [Q] Quit",
        )
        .style(ratatui::style::Style::default().fg(ratatui::style::Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
