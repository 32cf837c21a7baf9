//! # Panels
//!
//! Pure functions that turn a profile and a repository list into styled
//! [`Text`]. The frame layout in [`crate::ui::render`] places them; the
//! one-shot mode flattens them with [`plain_text`]. Every call renders from
//! scratch.

use crate::github::{distinct_languages, Profile, RepoView, Repository};
use crate::ui::languages::language_color;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::time::{Duration, Instant};

pub const NO_BIO: &str = "No bio available";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_REPOSITORIES: &str = "No repositories found";
pub const NO_MATCHING_REPOSITORIES: &str = "No repositories match the current filter";
pub const REPOSITORIES_HEADER: &str = "Recent Repositories";
pub const ALL_LANGUAGES: &str = "All Languages";

pub const PROFILE_REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const REPOSITORIES_REVEAL_DELAY: Duration = Duration::from_millis(200);
pub const EMPTY_REPOSITORIES_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// When a freshly inserted panel becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    at: Instant,
}

impl Reveal {
    pub fn after(delay: Duration) -> Self {
        Self {
            at: Instant::now() + delay,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now >= self.at
    }
}

/// The profile card: name, login, bio, avatar link and the three counts.
pub fn profile_card(profile: &Profile, theme: &Theme) -> Text<'static> {
    let bio = match profile.bio.as_deref() {
        Some(bio) if !bio.is_empty() => Span::styled(bio.to_string(), Style::default().fg(theme.fg)),
        _ => Span::styled(
            NO_BIO,
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let stat = |value: u64, label: &'static str| -> Vec<Span<'static>> {
        vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {label}"), Style::default().fg(theme.fg_dim)),
        ]
    };

    let mut stats = stat(profile.public_repos, "Repositories");
    stats.push(Span::raw("   "));
    stats.extend(stat(profile.followers, "Followers"));
    stats.push(Span::raw("   "));
    stats.extend(stat(profile.following, "Following"));

    Text::from(vec![
        Line::from(Span::styled(
            profile.display_name().to_string(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}", profile.login),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(bio),
        Line::from(""),
        Line::from(stats),
        Line::from(""),
        Line::from(vec![
            Span::styled("Avatar: ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                profile.avatar_url.clone(),
                Style::default()
                    .fg(theme.fg_dim)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ])
}

/// The repositories panel for the fetched sequence under `view`.
///
/// An empty fetch renders only the placeholder; the filter/sort controls are
/// shown only when there is something to filter.
pub fn repositories_panel(repos: &[Repository], view: &RepoView, theme: &Theme) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        REPOSITORIES_HEADER,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));

    if repos.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_REPOSITORIES,
            Style::default().fg(theme.fg_dim),
        )));
        return Text::from(lines);
    }

    lines.extend(controls(repos, view, theme));
    lines.push(Line::from(""));

    let projected = view.project(repos);
    if projected.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_MATCHING_REPOSITORIES,
            Style::default().fg(theme.fg_dim),
        )));
        return Text::from(lines);
    }

    for repo in &projected {
        lines.extend(repository_card(repo, theme));
        lines.push(Line::from(""));
    }
    Text::from(lines)
}

fn controls(repos: &[Repository], view: &RepoView, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.fg_dim);
    let value = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let language = view.language.as_deref().unwrap_or(ALL_LANGUAGES).to_string();
    let available = distinct_languages(repos).len();

    vec![
        Line::from(vec![
            Span::styled("Language: ", label),
            Span::styled(format!("[{language}]"), value),
            Span::styled(format!("  {available} available · l/L"), label),
        ]),
        Line::from(vec![
            Span::styled("Sort by:  ", label),
            Span::styled(format!("[{}]", view.sort.label()), value),
            Span::styled("  s/S", label),
        ]),
    ]
}

fn repository_card(repo: &Repository, theme: &Theme) -> Vec<Line<'static>> {
    let description = match repo.description.as_deref() {
        Some(d) if !d.is_empty() => Span::styled(d.to_string(), Style::default().fg(theme.fg)),
        _ => Span::styled(
            NO_DESCRIPTION,
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let mut stats = vec![
        Span::styled("★ ", Style::default().fg(theme.secondary)),
        Span::styled(repo.stargazers_count.to_string(), Style::default().fg(theme.fg)),
        Span::raw("   "),
        Span::styled("⑂ ", Style::default().fg(theme.fg_dim)),
        Span::styled(repo.forks_count.to_string(), Style::default().fg(theme.fg)),
    ];
    if let Some(language) = repo.language.as_deref() {
        stats.push(Span::raw("   "));
        stats.push(Span::styled("●", Style::default().fg(language_color(language))));
        stats.push(Span::styled(format!(" {language}"), Style::default().fg(theme.fg)));
    }

    vec![
        Line::from(Span::styled(
            repo.name.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            repo.html_url.clone(),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(description),
        Line::from(stats),
    ]
}

/// Flatten rendered text, one output line per [`Line`], styles dropped.
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
