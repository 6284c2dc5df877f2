//! Frame rendering for the interactive tree.

use crate::tui::app::{App, Focus, LoadState, Theme};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

struct Palette {
    background: Color,
    foreground: Color,
    accent: Color,
    muted: Color,
    highlight: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            highlight: Color::DarkGray,
        },
        Theme::Light => Palette {
            background: Color::White,
            foreground: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            highlight: Color::Gray,
        },
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme());
    f.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.foreground)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    render_header(f, chunks[0], app, &colors);

    if app.status_visible() {
        render_status(f, chunks[1], app, &colors);
    } else {
        render_tree(f, chunks[1], app, &colors);
    }

    let help = " ↑/↓:Navigate  Enter:Expand  ←:Collapse  r:Reload  t:Theme  q:Quit";
    f.render_widget(Paragraph::new(help).style(Style::default().fg(colors.muted)), chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let mut title = format!(" git-seer: {}", app.repo_label());
    if let Some(tree) = app.tree() {
        title.push_str(&format!(" | {} files | {} directories", tree.file_count(), tree.dir_count()));
        if let Some(id) = app.selected().filter(|id| *id != tree.root()) {
            title.push_str(&format!(" | {}", tree.path_of(id)));
        }
    }
    let header = Paragraph::new(title)
        .style(Style::default().fg(colors.accent).bold())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let style = match app.state() {
        LoadState::Failed(_) => Style::default().fg(Color::Red).bold(),
        _ => Style::default().fg(colors.accent),
    };
    let status = Paragraph::new(app.status_text())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .wrap(Wrap { trim: false });
    f.render_widget(status, area);
}

fn render_tree(f: &mut Frame, area: Rect, app: &App, colors: &Palette) {
    let Some(tree) = app.tree() else {
        return;
    };
    let border = match app.focus() {
        Focus::Tree => Style::default().fg(colors.accent),
        Focus::Status => Style::default().fg(colors.muted),
    };

    let items: Vec<ListItem> = app
        .visible_rows()
        .iter()
        .map(|row| {
            let node = tree.node(row.id);
            let style = if node.implicit {
                Style::default().fg(colors.muted).italic()
            } else if node.is_dir() {
                Style::default().fg(colors.accent)
            } else {
                Style::default().fg(colors.foreground)
            };
            ListItem::new(Line::from(Span::styled(app.row_label(row), style)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(" Files "))
        .highlight_style(Style::default().bg(colors.highlight).bold())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}
