use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use junbi_config::Config;
use junbi_core::{PhaseSet, ProgressTimer};
use junbi_fonts::{FONT_HEIGHT, build_percent_art};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::{Gauge, Paragraph},
};

use crate::theme::ColorTheme;

mod theme;

/// How long to wait for input between frames (~30 fps).
const POLL_TIMEOUT: Duration = Duration::from_millis(33);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let app = App::new(&config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The splash application: owns the start instant, the progress timer,
/// and the phase table for one splash instance.
#[derive(Debug)]
pub struct App {
    /// Is the splash still on screen?
    running: bool,
    /// Mount time; elapsed time is measured from here.
    start: Instant,
    /// Progress source driven once per frame.
    timer: ProgressTimer,
    /// Validated phase table for the status label.
    phases: PhaseSet,
    /// Current color theme.
    theme: ColorTheme,
    /// Brand line shown above the readout.
    brand: String,
    /// Tagline shown below the progress bar.
    tagline: String,
    /// Whether to show the key-binding help line.
    show_help: bool,
}

impl App {
    /// Build the splash from loaded configuration.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        Ok(Self {
            running: false,
            start: Instant::now(),
            timer: ProgressTimer::new(config.timer.policy(), config.timer.settle_ms),
            phases: config.phase_set()?,
            theme: ColorTheme::from_name(&config.ui.theme),
            brand: config.ui.brand.clone(),
            tagline: config.ui.tagline.clone(),
            show_help: config.ui.show_help,
        })
    }

    /// Run the splash loop until the timer completes or the user dismisses it.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.start = Instant::now();
        while self.running {
            let elapsed_ms = self.start.elapsed().as_millis() as u64;
            self.timer.advance(elapsed_ms);
            terminal.draw(|frame| self.render(frame))?;
            if self.timer.is_completed() {
                // The final 100% frame has been drawn; hand the terminal back.
                self.running = false;
            } else {
                self.handle_crossterm_events()?;
            }
        }
        Ok(())
    }

    /// Renders the splash screen.
    fn render(&mut self, frame: &mut Frame) {
        let value = self.timer.value();
        let label = self.phases.label_for(value).to_string();
        let color = self.theme.color();
        let area = frame.area();

        // Create vertical layout for centering
        let chunks = Layout::vertical([
            Constraint::Fill(1),                    // Top padding
            Constraint::Length(1),                  // Brand line
            Constraint::Length(2),                  // Spacing
            Constraint::Length(FONT_HEIGHT as u16), // Big percent readout
            Constraint::Length(2),                  // Spacing
            Constraint::Length(1),                  // Progress bar
            Constraint::Length(1),                  // Spacing
            Constraint::Length(1),                  // Phase label
            Constraint::Fill(1),                    // Bottom padding
            Constraint::Length(1),                  // Tagline
            Constraint::Length(1),                  // Help text
        ])
        .split(area);

        // Render brand line
        let brand = Paragraph::new(self.brand.as_str())
            .style(Style::new().fg(color).bold())
            .alignment(Alignment::Center);
        frame.render_widget(brand, chunks[1]);

        // Render big percent readout
        let percent_text: Vec<Line> = build_percent_art(value.round() as u8)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect();
        let percent_widget = Paragraph::new(percent_text).alignment(Alignment::Center);
        frame.render_widget(percent_widget, chunks[3]);

        // Center the bar at a bounded width
        let bar_width = area.width.saturating_sub(10).clamp(10, 48);
        let bar_chunks = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(bar_width),
            Constraint::Fill(1),
        ])
        .split(chunks[5]);

        let gauge = Gauge::default()
            .ratio((value / 100.0).clamp(0.0, 1.0))
            .gauge_style(Style::new().fg(color))
            .label(format!("{}%", value.round() as u8));
        frame.render_widget(gauge, bar_chunks[1]);

        // Render current phase label
        let phase = Paragraph::new(label)
            .style(Style::new().fg(color).italic())
            .alignment(Alignment::Center);
        frame.render_widget(phase, chunks[7]);

        // Render tagline
        let tagline = Paragraph::new(self.tagline.as_str())
            .style(Style::new().dark_gray())
            .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[9]);

        // Render help text
        if self.show_help {
            let help = Line::from(vec![
                "q".bold().fg(color),
                " dismiss  ".dark_gray(),
                "c".bold().fg(color),
                " cycle color".dark_gray(),
            ])
            .centered();
            frame.render_widget(help, chunks[10]);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the progress animation keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.dismiss(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Dismiss the splash early. Cancels the timer first so a frame
    /// drawn during teardown cannot mutate progress state.
    fn dismiss(&mut self) {
        self.timer.cancel();
        self.running = false;
    }
}
