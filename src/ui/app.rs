use crate::github::{
    distinct_languages, FetchResult, Profile, RepoView, Repository, SearchResult, SortKey,
};
use crate::ui::panels::{
    repositories_panel, Reveal, EMPTY_REPOSITORIES_REVEAL_DELAY, PROFILE_REVEAL_DELAY,
    REPOSITORIES_REVEAL_DELAY,
};
use crate::ui::theme::ThemeController;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

/// Where the current search stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    /// Holds the sentence shown in the error banner.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Search,
    Results,
}

/// A search the caller should run, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub username: String,
}

/// The finished result of a [`SearchRequest`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub seq: u64,
    pub result: FetchResult<SearchResult>,
}

pub struct App {
    pub phase: Phase,
    pub input: String,
    pub focus: FocusPane,
    pub theme: ThemeController,
    pub profile: Option<Profile>,
    /// The fetched sequence, exactly as the API ordered it.
    pub repositories: Vec<Repository>,
    pub view: RepoView,
    pub repo_scroll: u16,
    /// Inner area of the repositories panel at the last draw.
    pub repo_viewport: Option<Rect>,
    pub profile_reveal: Option<Reveal>,
    pub repos_reveal: Option<Reveal>,
    pub tick: usize,
    pub should_quit: bool,
    latest_seq: u64,
}

impl App {
    pub fn new(theme: ThemeController) -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            focus: FocusPane::Search,
            theme,
            profile: None,
            repositories: Vec::new(),
            view: RepoView::default(),
            repo_scroll: 0,
            repo_viewport: None,
            profile_reveal: None,
            repos_reveal: None,
            tick: 0,
            should_quit: false,
            latest_seq: 0,
        }
    }

    /// Start a search for the trimmed input.
    ///
    /// Blank input changes nothing and returns `None`. Otherwise both panels
    /// and any error are cleared, the phase becomes `Loading`, and the request
    /// to execute is returned. A search already in flight is not cancelled;
    /// its outcome will simply be ignored by [`App::apply_outcome`].
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let username = self.input.trim();
        if username.is_empty() {
            return None;
        }
        let username = username.to_string();

        self.clear_results();
        self.phase = Phase::Loading;
        self.latest_seq += 1;

        tracing::info!(seq = self.latest_seq, %username, "search started");
        Some(SearchRequest {
            seq: self.latest_seq,
            username,
        })
    }

    /// Record a finished search. Returns `false` if it was superseded.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding stale search outcome"
            );
            return false;
        }

        match outcome.result {
            Ok(SearchResult {
                profile,
                repositories,
            }) => {
                let repos_delay = if repositories.is_empty() {
                    EMPTY_REPOSITORIES_REVEAL_DELAY
                } else {
                    REPOSITORIES_REVEAL_DELAY
                };
                self.profile = Some(profile);
                self.repositories = repositories;
                self.view = RepoView::default();
                self.repo_scroll = 0;
                self.profile_reveal = Some(Reveal::after(PROFILE_REVEAL_DELAY));
                self.repos_reveal = Some(Reveal::after(repos_delay));
                self.phase = Phase::Success;
                self.focus = FocusPane::Results;
            }
            Err(err) => {
                tracing::error!(
                    seq = outcome.seq,
                    status = ?err.status(),
                    "Error fetching data: {err}"
                );
                self.clear_results();
                self.phase = Phase::Error(err.user_message());
            }
        }
        true
    }

    fn clear_results(&mut self) {
        self.profile = None;
        self.repositories.clear();
        self.view = RepoView::default();
        self.repo_scroll = 0;
        self.profile_reveal = None;
        self.repos_reveal = None;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Sequence number of the most recently issued search.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Languages offered by the filter control.
    pub fn languages(&self) -> Vec<String> {
        distinct_languages(&self.repositories)
    }

    /// The repositories as currently filtered and sorted.
    pub fn visible_repositories(&self) -> Vec<Repository> {
        self.view.project(&self.repositories)
    }

    fn has_controls(&self) -> bool {
        self.phase == Phase::Success && !self.repositories.is_empty()
    }

    /// Step the language filter through All → each language → All.
    pub fn cycle_language(&mut self, forward: bool) {
        if !self.has_controls() {
            return;
        }
        // Slot 0 is "All Languages"
        let mut options: Vec<Option<String>> = vec![None];
        options.extend(self.languages().into_iter().map(Some));

        let current = options
            .iter()
            .position(|o| *o == self.view.language)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        self.view = RepoView::new(options.swap_remove(next), self.view.sort);
        self.repo_scroll = 0;
    }

    pub fn cycle_sort(&mut self, forward: bool) {
        if !self.has_controls() {
            return;
        }
        let sort: SortKey = if forward {
            self.view.sort.next()
        } else {
            self.view.sort.previous()
        };
        self.view = RepoView::new(self.view.language.clone(), sort);
        self.repo_scroll = 0;
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Search => FocusPane::Results,
            FocusPane::Results => FocusPane::Search,
        };
    }

    /// The repositories panel wrapped the way it is drawn, without its border.
    pub fn repositories_paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(repositories_panel(
            &self.repositories,
            &self.view,
            self.theme.theme(),
        ))
        .wrap(Wrap { trim: false })
    }

    /// Largest scroll offset, in wrapped rows, that still shows the last row
    /// at the bottom of the panel.
    pub fn max_repo_scroll(&self) -> u16 {
        let rows = match self.repo_viewport {
            Some(area) if area.width > 0 => self
                .repositories_paragraph()
                .line_count(area.width)
                .saturating_sub(usize::from(area.height)),
            // Not drawn yet: fall back to one row per line
            _ => repositories_panel(&self.repositories, &self.view, self.theme.theme())
                .lines
                .len()
                .saturating_sub(1),
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn scroll_repos_down(&mut self) {
        if self.repo_scroll < self.max_repo_scroll() {
            self.repo_scroll += 1;
        }
    }

    pub fn scroll_repos_up(&mut self) {
        self.repo_scroll = self.repo_scroll.saturating_sub(1);
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
