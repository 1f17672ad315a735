//! Interactive Panel
//!
//! Ratatui front end over [`AnchorPanel`]. Two inputs, the anchor depth text
//! field and the tubing size selector; every keystroke that changes either one
//! triggers a full recomputation.
//!
//! Keys: Tab switches focus, digits/Backspace edit the depth, arrows cycle the
//! tubing size, Esc or q quits.

use std::io;

use anchor_core::constants::PhysicalConstants;
use anchor_core::errors::CalcError;
use anchor_core::form::{parse_field, FormView};
use anchor_core::panel::AnchorPanel;
use anchor_core::tubing::TubingSize;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};
use ratatui::{DefaultTerminal, Frame};

/// Run the panel until the user quits, restoring the terminal afterwards.
pub fn run(constants: PhysicalConstants) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let outcome = PanelApp::new(constants).run(&mut terminal);
    ratatui::restore();
    outcome
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Depth,
    Diameter,
}

struct PanelApp {
    panel: AnchorPanel,
    depth_text: String,
    /// Depth text that does not parse; the panel keeps its last good input
    parse_error: Option<CalcError>,
    focus: Focus,
    exit: bool,
}

impl PanelApp {
    fn new(constants: PhysicalConstants) -> Self {
        let panel = AnchorPanel::new(constants);
        let depth_text = panel.input().anchor_depth_m.to_string();
        PanelApp {
            panel,
            depth_text,
            parse_error: None,
            focus: Focus::Depth,
            exit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Depth => Focus::Diameter,
                    Focus::Diameter => Focus::Depth,
                };
            }
            code => match self.focus {
                Focus::Depth => self.edit_depth(code),
                Focus::Diameter => self.cycle_tubing(code),
            },
        }
    }

    fn edit_depth(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => self.depth_text.push(c),
            KeyCode::Backspace => {
                self.depth_text.pop();
            }
            _ => return,
        }

        match parse_field("anchor_depth_m", &self.depth_text) {
            Ok(depth_m) => {
                self.parse_error = None;
                self.panel.set_anchor_depth_m(depth_m);
            }
            Err(e) => self.parse_error = Some(e),
        }
    }

    fn cycle_tubing(&mut self, code: KeyCode) {
        let current = self.panel.selected_tubing().unwrap_or_default();
        let size = match code {
            KeyCode::Right | KeyCode::Down => current.next(),
            KeyCode::Left | KeyCode::Up => current.previous(),
            _ => return,
        };
        self.panel.select_tubing(size);
    }

    fn draw(&self, frame: &mut Frame) {
        let [title_area, input_area, results_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new("Tension-Ancla: anchor setting tension and stretch".bold()),
            title_area,
        );

        frame.render_widget(self.inputs(), input_area);

        let view = FormView::render(self.panel.input(), self.panel.constants(), self.panel.result());
        let rows: Vec<Row> = view
            .rows()
            .into_iter()
            .map(|(label, value)| Row::new(vec![label.to_string(), value]))
            .collect();
        let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(12)])
            .block(Block::bordered().title("Results"));
        frame.render_widget(table, results_area);

        frame.render_widget(self.status(&view), status_area);

        frame.render_widget(
            Paragraph::new("Tab: switch field   0-9 . Backspace: edit depth   ←/→: tubing size   Esc/q: quit")
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn inputs(&self) -> Paragraph<'_> {
        let focused = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let style_for = |focus: Focus| {
            if self.focus == focus {
                focused
            } else {
                Style::default()
            }
        };

        let tubing = match self.panel.selected_tubing() {
            Some(size) => size.display_name().to_string(),
            None => format!("{} (custom)", self.panel.input().outer_diameter_in),
        };
        let options = TubingSize::ALL
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(" / ");

        Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Anchor depth (m):    "),
                Span::styled(format!("[{}]", self.depth_text), style_for(Focus::Depth)),
            ]),
            Line::from(vec![
                Span::raw("Outer diameter (in): "),
                Span::styled(format!("< {} >", tubing), style_for(Focus::Diameter)),
                Span::raw(format!("   options: {}", options)).dark_gray(),
            ]),
        ])
        .block(Block::bordered().title("Inputs"))
    }

    fn status(&self, view: &FormView) -> Paragraph<'_> {
        let error = self.parse_error.as_ref().or(self.panel.error());
        let line = match (error, &view.results) {
            (Some(e), _) if e.is_invalid_depth() => {
                Line::from(format!("Invalid anchor depth: {}", e)).red()
            }
            (Some(e), _) => Line::from(e.to_string()).red(),
            (None, Some(results)) => match results.advisory {
                Some(ref advisory) => Line::from(advisory.clone()).yellow(),
                None => Line::from(results.summary.clone()).green().bold(),
            },
            (None, None) => Line::from(""),
        };
        Paragraph::new(line).block(Block::bordered())
    }
}
