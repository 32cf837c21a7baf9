use crate::ui::app::{App, FocusPane, Phase};
use crate::ui::input::help_text;
use crate::ui::panels::profile_card;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme.theme();

    // Paint the whole screen so the light palette does not inherit the terminal bg
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Main layout: Header + Search + Status + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Status
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, theme, main_chunks[0]);
    render_search(frame, app, theme, main_chunks[1]);
    render_status(frame, app, theme, main_chunks[2]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[3]);

    render_profile(frame, app, theme, body_chunks[0]);
    render_repositories(frame, app, theme, body_chunks[1]);

    let footer = Paragraph::new(help_text(app.focus)).style(Style::default().fg(theme.fg_dim));
    frame.render_widget(footer, main_chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Octoscope ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("GitHub profile explorer", Style::default().fg(theme.fg_dim)),
    ]));
    frame.render_widget(title, chunks[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(app.theme.icon(), Style::default().fg(theme.secondary)),
        Span::styled(" Ctrl+T ", Style::default().fg(theme.fg_dim)),
    ]))
    .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(toggle, chunks[1]);
}

fn render_search(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let focused = app.focus == FocusPane::Search;
    let border_color = if focused { theme.accent } else { theme.border };

    let mut spans = vec![Span::styled(app.input.clone(), Style::default().fg(theme.fg))];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    if app.input.is_empty() && !focused {
        spans = vec![Span::styled(
            "Enter a GitHub username",
            Style::default().fg(theme.fg_dim),
        )];
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Username ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);
}

fn render_status(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = match &app.phase {
        Phase::Loading => Line::from(vec![
            Span::styled(
                format!(" {} ", SPINNER[app.tick % SPINNER.len()]),
                Style::default().fg(theme.success),
            ),
            Span::styled("Loading…", Style::default().fg(theme.fg_dim)),
        ]),
        Phase::Error(message) => Line::from(Span::styled(
            format!(" ✗ {message}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Phase::Idle | Phase::Success => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_profile(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = panel_block(" Profile ", theme);
    let visible = app.profile_reveal.is_some_and(|r| r.is_visible());

    match &app.profile {
        Some(profile) if visible => {
            let paragraph = Paragraph::new(profile_card(profile, theme))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
        _ => frame.render_widget(block, area),
    }
}

fn render_repositories(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let border_color = if app.focus == FocusPane::Results && app.phase == Phase::Success {
        theme.accent
    } else {
        theme.border
    };
    let block = panel_block(" Repositories ", theme).border_style(Style::default().fg(border_color));
    let visible = app.repos_reveal.is_some_and(|r| r.is_visible());

    // Scrolling is measured against this area, so a resize re-clamps it
    app.repo_viewport = Some(block.inner(area));

    if app.phase == Phase::Success && visible {
        app.repo_scroll = app.repo_scroll.min(app.max_repo_scroll());
        let paragraph = app
            .repositories_paragraph()
            .block(block)
            .scroll((app.repo_scroll, 0));
        frame.render_widget(paragraph, area);
    } else {
        frame.render_widget(block, area);
    }
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border))
}
