use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;
use crate::session::SessionStatus;

/// Renders the one-line HUD under the play area and returns the play area.
///
/// The right-hand status message is one of exactly four values, picked by
/// [`SessionStatus::message`].
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    status: SessionStatus,
    theme: &Theme,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let [score_area, status_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(hud_area);

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {}  Length: {}",
            state.score,
            state.snake.len()
        )))
        .alignment(Alignment::Left)
        .style(Style::default().fg(theme.hud_score)),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(status.message()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud_status)),
        status_area,
    );

    play_area
}
