//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Widget, Wrap},
    Frame,
};

use super::app::{CalculatorApp, Dialog, Tab};
use super::keypad::KeypadWidget;
use super::theme::Palette;
use crate::config::PathProvider;

/// Renders the calculator UI to the frame
pub fn render<P: PathProvider>(app: &CalculatorApp<P>, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen regions of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Tab bar
    pub tabs: Rect,
    /// Display field
    pub display: Rect,
    /// Keypad or history list
    pub body: Rect,
    /// Pending operation and theme
    pub status: Rect,
    /// Shortcut help
    pub sidebar: Rect,
}

/// Splits the terminal area into the main window regions
#[must_use]
pub fn layout(area: Rect) -> AppLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(24), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(3), // Display
            Constraint::Min(7),    // Keypad / history
            Constraint::Length(1), // Status
        ])
        .split(columns[0]);

    AppLayout {
        tabs: rows[0],
        display: rows[1],
        body: rows[2],
        status: rows[3],
        sidebar: columns[1],
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a, P: PathProvider> {
    app: &'a CalculatorApp<P>,
    palette: Palette,
}

impl<'a, P: PathProvider> CalculatorUI<'a, P> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp<P>) -> Self {
        Self {
            app,
            palette: Palette::for_theme(app.theme()),
        }
    }

    fn block(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Tabs::new([Tab::Calculator.title(), Tab::History.title()])
            .select(self.app.tab().index())
            .style(Style::default().fg(p.muted))
            .highlight_style(
                Style::default()
                    .fg(p.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .block(self.block(""))
            .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.calculator().display(),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(self.block(" Display "))
        .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let history = self.app.calculator().history();

        let items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(Span::styled(
                "No calculations yet",
                Style::default().fg(p.muted).add_modifier(Modifier::ITALIC),
            ))]
        } else {
            history
                .iter_rev()
                .map(|entry| ListItem::new(Span::styled(entry, Style::default().fg(p.text))))
                .collect()
        };

        List::new(items)
            .block(self.block(" History (newest first, Ctrl+L clears) "))
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let line = Line::from(vec![
            Span::styled(
                self.app.status_line(),
                Style::default().fg(p.operator),
            ),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", self.app.theme().name()),
                Style::default().fg(p.muted),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>7}", key), Style::default().fg(p.operator)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(p.muted)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(self.block(" Help "))
            .render(area, buf);
    }

    fn render_dialog(&self, dialog: &Dialog, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (title, body, color) = match dialog {
            Dialog::Error(e) => (" Error ", e.to_string(), p.danger),
            Dialog::About => (" About ", about_text(), p.border),
        };

        let height = body.lines().count() as u16 + 4;
        let popup = centered_rect(area, 44, height);
        Clear.render(popup, buf);

        let mut lines: Vec<Line> = body.lines().map(Line::from).collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key",
            Style::default().fg(p.muted).add_modifier(Modifier::ITALIC),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(p.text).bg(p.background))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .render(popup, buf);
    }
}

impl<P: PathProvider> Widget for CalculatorUI<'_, P> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .title(WINDOW_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.text))
            .style(Style::default().bg(p.background))
            .render(area, buf);

        let regions = layout(area);
        self.render_tabs(regions.tabs, buf);
        self.render_display(regions.display, buf);
        match self.app.tab() {
            Tab::Calculator => {
                KeypadWidget::new(self.app.keypad(), p).render(regions.body, buf);
            }
            Tab::History => self.render_history(regions.body, buf),
        }
        self.render_status(regions.status, buf);
        self.render_sidebar(regions.sidebar, buf);

        if let Some(dialog) = self.app.dialog() {
            self.render_dialog(dialog, area, buf);
        }
    }
}

/// Returns a `width` x `height` rectangle centred in `area`, clamped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn about_text() -> String {
    format!(
        "Deskcalc v{}\n\nKeypad calculator with a running total.\n\n\
         • + - × ÷ % on decimals\n• Calculation history\n• Light and dark themes",
        env!("CARGO_PKG_VERSION")
    )
}

/// Title of the main window
pub const WINDOW_TITLE: &str = " Deskcalc ";

const SIDEBAR_WIDTH: u16 = 22;

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/%", "Operators"),
    ("Enter", "Equals"),
    ("Esc", "Clear"),
    ("Bksp", "Backspace"),
    ("Tab", "History"),
    ("Ctrl+L", "Clear hist."),
    ("t", "Theme"),
    ("?", "About"),
    ("q", "Quit"),
];
