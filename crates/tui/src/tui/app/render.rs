use std::cmp::min;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Item;
use crate::tui::constants::APP_VERSION;
use crate::tui::helpers::{
    accent_title, build_help_lines, centered_rect, inset_rect, BG_ACCENT, BG_BASE, BG_PANEL,
};

use super::{App, InputMode, Pane};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_body(f, chunks[1]);
        self.draw_footer(f, chunks[2]);

        match self.input_mode {
            InputMode::Add | InputMode::Command => self.draw_input_overlay(f, size),
            InputMode::Help => self.draw_help_overlay(f, size),
            InputMode::ConfirmDelete => self.draw_confirm_overlay(f, size),
            InputMode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let left_line = Line::from(vec![
            Span::styled(
                format!(" ticked v{} ☑ ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "— {} to do, {} done",
                self.pending.len(),
                self.completed.len()
            )),
        ]);
        f.render_widget(
            Paragraph::new(left_line).style(Style::default().bg(BG_BASE)),
            cols[0],
        );

        let right_line = Line::from(vec![Span::styled(
            "in-memory only — gone when you quit ",
            Style::default().fg(Color::DarkGray),
        )]);
        let right_para = Paragraph::new(right_line)
            .alignment(ratatui::layout::Alignment::Right)
            .style(Style::default().bg(BG_BASE));
        f.render_widget(right_para, cols[1]);
    }

    fn draw_body(&mut self, f: &mut Frame<'_>, area: Rect) {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_pane(f, panes[0], Pane::Pending);
        self.draw_pane(f, panes[1], Pane::Completed);
    }

    fn draw_pane(&mut self, f: &mut Frame<'_>, area: Rect, pane: Pane) {
        let (title, items, empty_hint) = match pane {
            Pane::Pending => (
                format!("📝 To do — {}", self.pending.len()),
                &self.pending,
                "Nothing to do ✨ — press 'a' to add an item.",
            ),
            Pane::Completed => (
                format!("✅ Done — {}", self.completed.len()),
                &self.completed,
                "No wins yet — toggle an item with Space.",
            ),
        };

        let is_active = self.pane == pane;
        let border_style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&title))
            .border_style(border_style)
            .style(Style::default().bg(BG_PANEL));

        if items.is_empty() {
            let inner = block.inner(area);
            f.render_widget(Clear, area);
            f.render_widget(block, area);

            if inner.width == 0 || inner.height == 0 {
                return;
            }
            let hint = Paragraph::new(Line::from(vec![Span::styled(
                empty_hint,
                Style::default().fg(Color::Gray),
            )]))
            .wrap(Wrap { trim: true })
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().bg(BG_PANEL));
            f.render_widget(hint, centered_rect(inner.width.min(60), 1, inner));
            return;
        }

        let rows: Vec<ListItem> = items.iter().map(item_row).collect();
        let list = List::new(rows)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .bg(BG_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let state = match pane {
            Pane::Pending => &mut self.pending_state,
            Pane::Completed => &mut self.completed_state,
        };
        f.render_stateful_widget(list, area, state);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            Line::from(vec![Span::raw("Ready")])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let help = match self.input_mode {
            InputMode::Normal => {
                "nav: tab panes | j/k move | a add ✚ | space toggle ✅ | x delete 🗑️ | / command ⌨️ | h help ❔ | q quit"
            }
            InputMode::Add => "Enter to add ✍️ • Esc to cancel",
            InputMode::Command => "Up/Down navigate • Tab/Right complete • Enter select/run • Esc cancel",
            InputMode::Help => "Enter/Esc to close ❔",
            InputMode::ConfirmDelete => "←/→ choose • Space toggle • Enter confirm • Esc cancel",
        };
        let help_line = Line::from(vec![Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }

    fn draw_input_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(10), 70);
        let base_height: u16 = 5;
        let extra_height = match self.input_mode {
            InputMode::Command => self.suggestions.len().min(6) as u16,
            _ => 0,
        };
        let popup_area = centered_rect(width, base_height + extra_height, area);
        f.render_widget(Clear, popup_area);
        let title = match self.input_mode {
            InputMode::Add => "➕ Add Item",
            InputMode::Command => "⌨️ Command",
            _ => "Input",
        };
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(popup_area);

        f.render_widget(Clear, inner[0]);
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(title))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        f.render_widget(input_block.clone(), inner[0]);
        let input_area = input_block.inner(inner[0]);
        let paragraph = Paragraph::new(self.input.as_str())
            .style(Style::default().bg(BG_PANEL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, input_area);
        if input_area.width > 0 {
            let col = (self.input.cursor_col() as u16).min(input_area.width.saturating_sub(1));
            f.set_cursor(input_area.x + col, input_area.y);
        }

        if self.input_mode == InputMode::Command {
            let mut lines: Vec<Line> = Vec::new();
            lines.push(Line::from(vec![Span::styled(
                "Suggestions",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )]));
            for (i, s) in self.suggestions.iter().enumerate() {
                let style = if i == self.suggestion_index {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(s.fill.as_str(), style.add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(s.label.as_str(), Style::default().fg(Color::DarkGray)),
                ]));
            }
            f.render_widget(Clear, inner[1]);
            let suggestion_block = Block::default().style(Style::default().bg(BG_PANEL));
            f.render_widget(suggestion_block.clone(), inner[1]);
            let suggestion_inner = suggestion_block.inner(inner[1]);
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .style(Style::default().bg(BG_PANEL)),
                suggestion_inner,
            );
        }
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 70);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("⌨️ Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(format!("{combo:<16}"), Style::default().fg(Color::Cyan)),
                    Span::raw("  "),
                    Span::raw(desc),
                ])
            })
            .collect();

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let content = inset_rect(inner, 1);
        f.render_widget(Clear, inner);
        f.render_widget(
            Paragraph::new(help_lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(BG_PANEL)),
            content,
        );
    }

    fn draw_confirm_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width.saturating_sub(20), 60).max(40);
        let height = 8u16;
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("🗑 Confirm Deletion"))
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let item_title = self
            .selected_item()
            .map(|item| item.title.as_str())
            .unwrap_or("selected item");

        let mut lines = Vec::new();
        lines.push(Line::from(vec![Span::styled(
            "This action cannot be undone.",
            Style::default().fg(Color::Red),
        )]));
        lines.push(Line::from(vec![Span::styled(
            format!("Delete '{}'?", item_title),
            Style::default().fg(Color::White),
        )]));
        lines.push(Line::default());

        let yes_style = if self.confirm_choice == super::ConfirmChoice::Yes {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };
        let no_style = if self.confirm_choice == super::ConfirmChoice::No {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled("  Yes  ", yes_style),
            Span::raw("    "),
            Span::styled("  No  ", no_style),
        ]));

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::default().bg(BG_PANEL)),
            inset_rect(inner, 1),
        );
    }
}

fn item_row(item: &Item) -> ListItem<'static> {
    let checkbox = if item.done { "[x] " } else { "[ ] " };
    let title_style = if item.done {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("#{:<4}", item.id), Style::default().fg(Color::DarkGray)),
        Span::raw(checkbox),
        Span::styled(item.title.clone(), title_style),
    ]))
}
