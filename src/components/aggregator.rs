//! Razor: mock crawl results plus a query box that prepends a fake
//! "scanning" entry. No network access happens.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use super::{Component, ComponentContext, TextInput, is_enter, key_press, left_click};
use crate::ui::{UiFrame, rect_contains};

const SCAN_LABEL: &str = "[Scan]";
const PREDICTIVE_LABEL: &str = "[ Start Predictive Scan ]";
const QUERY_PLACEHOLDER: &str = "Enter concept or domain...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStatus {
    Indexed,
    Crawling,
    Scanning,
    Pending,
}

impl CrawlStatus {
    pub fn label(self) -> &'static str {
        match self {
            CrawlStatus::Indexed => "indexed",
            CrawlStatus::Crawling => "crawling",
            CrawlStatus::Scanning => "scanning",
            CrawlStatus::Pending => "pending",
        }
    }

    fn color(self) -> Color {
        match self {
            CrawlStatus::Indexed => crate::theme::success(),
            CrawlStatus::Crawling => crate::theme::info(),
            CrawlStatus::Scanning => crate::theme::warning(),
            CrawlStatus::Pending => crate::theme::idle(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    pub domain: String,
    pub status: CrawlStatus,
    pub links: u32,
    pub tlds: u32,
}

impl CrawlResult {
    fn new(domain: &str, status: CrawlStatus, links: u32, tlds: u32) -> Self {
        Self {
            domain: domain.to_string(),
            status,
            links,
            tlds,
        }
    }
}

#[derive(Debug)]
pub struct AggregatorPanel {
    query: TextInput,
    results: Vec<CrawlResult>,
    scan_button: Rect,
    predictive_button: Rect,
}

impl Default for AggregatorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregatorPanel {
    pub fn new() -> Self {
        Self {
            query: TextInput::new().with_placeholder(QUERY_PLACEHOLDER),
            results: vec![
                CrawlResult::new("wikipedia.org", CrawlStatus::Indexed, 1247, 5),
                CrawlResult::new("github.com", CrawlStatus::Crawling, 892, 3),
                CrawlResult::new("stackoverflow.com", CrawlStatus::Indexed, 2103, 7),
                CrawlResult::new("medium.com", CrawlStatus::Pending, 0, 4),
            ],
            scan_button: Rect::ZERO,
            predictive_button: Rect::ZERO,
        }
    }

    pub fn results(&self) -> &[CrawlResult] {
        &self.results
    }

    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = TextInput::with_value(query).with_placeholder(QUERY_PLACEHOLDER);
    }

    /// Prepend a scanning entry for the current query. Blank queries are
    /// ignored; a bare name gets `.com` appended.
    pub fn start_scan(&mut self) -> bool {
        let trimmed = self.query.value().trim();
        if trimmed.is_empty() {
            return false;
        }
        let domain = if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{trimmed}.com")
        };
        tracing::info!(%domain, "queued scan");
        self.results
            .insert(0, CrawlResult::new(&domain, CrawlStatus::Scanning, 0, 0));
        self.query.clear();
        true
    }

    fn predictive_scan(&self) {
        tracing::info!(results = self.results.len(), "predictive scan requested");
    }
}

impl Component for AggregatorPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let heading = Line::from(vec![
            Span::styled(
                "Razor Aggregator",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} domains", self.results.len()),
                Style::default().fg(crate::theme::accent_alt()),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading), Rect { height: 1, ..area });
        if area.height < 2 {
            self.scan_button = Rect::ZERO;
            self.predictive_button = Rect::ZERO;
            return;
        }

        // Query row: input on the left, scan button on the right.
        let query_y = area.y + 1;
        let scan_width = SCAN_LABEL.chars().count() as u16;
        let input_width = area.width.saturating_sub(scan_width + 1);
        let input_area = Rect::new(area.x, query_y, input_width, 1);
        frame.fill(
            input_area,
            " ",
            Style::default().bg(crate::theme::surface_bg()),
        );
        self.query.render(
            frame,
            input_area,
            Style::default().bg(crate::theme::surface_bg()),
            ctx.focused(),
        );
        self.scan_button = Rect::new(area.right().saturating_sub(scan_width), query_y, scan_width, 1);
        frame.set_string(
            self.scan_button.x,
            query_y,
            SCAN_LABEL,
            Style::default()
                .bg(crate::theme::header_active_bg())
                .fg(crate::theme::header_fg()),
        );

        let footer_y = area.bottom().saturating_sub(1);
        let table_top = area.y.saturating_add(3);
        let table_height = footer_y.saturating_sub(table_top);
        if table_height > 0 {
            let header = Row::new(["Domain", "Status", "Links", "TLDs"])
                .style(Style::default().add_modifier(Modifier::BOLD));
            let rows = self.results.iter().map(|r| {
                Row::new(vec![
                    Cell::from(r.domain.clone()),
                    Cell::from(Span::styled(
                        r.status.label(),
                        Style::default().fg(r.status.color()),
                    )),
                    Cell::from(r.links.to_string()),
                    Cell::from(r.tlds.to_string()),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Min(12),
                    Constraint::Length(9),
                    Constraint::Length(6),
                    Constraint::Length(5),
                ],
            )
            .header(header);
            frame.render_widget(table, Rect::new(area.x, table_top, area.width, table_height));
        }

        if footer_y > query_y {
            let width = PREDICTIVE_LABEL.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            self.predictive_button = Rect::new(x, footer_y, width.min(area.width), 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    PREDICTIVE_LABEL,
                    Style::default()
                        .bg(crate::theme::accent_alt())
                        .fg(crate::theme::header_fg()),
                )),
                self.predictive_button,
            );
        } else {
            self.predictive_button = Rect::ZERO;
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        if let Some((column, row)) = left_click(event) {
            if rect_contains(self.scan_button, column, row) {
                self.start_scan();
                return true;
            }
            if rect_contains(self.predictive_button, column, row) {
                self.predictive_scan();
                return true;
            }
            return false;
        }
        let Some(key) = key_press(event) else {
            return false;
        };
        if is_enter(key) {
            self.start_scan();
            return true;
        }
        if key.code == KeyCode::Esc {
            return false;
        }
        self.query.handle_key(key)
    }
}
