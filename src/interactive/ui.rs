use colored::Color as TermColor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::NavigatorApp;
use super::layout::app_layout;
use crate::access::role_display_name;
use crate::auth::Authenticator;
use crate::constants::APP_TITLE;
use crate::formatting::theme::helpers::role_color;
use crate::formatting::theme::{theme_color, SemanticColor};
use crate::formatting::{capability_summary, truncate};
use crate::models::Role;
use crate::storage::KeyValueStore;

/// Theme colors are defined for `colored`; map them onto ratatui's palette.
fn tui_color(semantic: SemanticColor) -> Color {
    match theme_color(semantic) {
        TermColor::Black => Color::Black,
        TermColor::Red => Color::Red,
        TermColor::Green => Color::Green,
        TermColor::Yellow => Color::Yellow,
        TermColor::Blue => Color::Blue,
        TermColor::Magenta => Color::Magenta,
        TermColor::Cyan => Color::Cyan,
        TermColor::White => Color::Gray,
        TermColor::BrightBlack => Color::DarkGray,
        TermColor::BrightRed => Color::LightRed,
        TermColor::BrightGreen => Color::LightGreen,
        TermColor::BrightYellow => Color::LightYellow,
        TermColor::BrightBlue => Color::LightBlue,
        TermColor::BrightMagenta => Color::LightMagenta,
        TermColor::BrightCyan => Color::LightCyan,
        TermColor::BrightWhite => Color::White,
        TermColor::TrueColor { r, g, b } => Color::Rgb(r, g, b),
    }
}

fn role_style(role: Role) -> Style {
    Style::default()
        .fg(tui_color(role_color(role)))
        .add_modifier(Modifier::BOLD)
}

fn heading() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn draw<S: KeyValueStore, A: Authenticator>(frame: &mut Frame, app: &NavigatorApp<'_, S, A>) {
    let layout = app_layout(frame.size());

    draw_header(frame, layout.header, app);
    draw_sidebar(frame, layout.sidebar, app);
    if layout.page.width > 0 {
        draw_page(frame, layout.page, app);
    }
    draw_footer(frame, layout.footer);
}

fn draw_header<S: KeyValueStore, A: Authenticator>(
    frame: &mut Frame,
    area: Rect,
    app: &NavigatorApp<'_, S, A>,
) {
    let width = area.width as usize;

    let left = vec![
        Span::styled(format!(" {} ", APP_TITLE), heading()),
        Span::styled("  Main / ", Style::default().fg(Color::Gray)),
        Span::styled(app.active.title(), heading()),
    ];

    let right = match app.user() {
        Some(user) => vec![
            Span::styled(truncate(&user.name, width / 4), Style::default().fg(Color::White)),
            Span::raw(" "),
            Span::styled(format!("[{}]", user.role.label()), role_style(user.role)),
            Span::raw(" "),
        ],
        None => vec![Span::styled(
            "signed out ",
            Style::default().fg(tui_color(SemanticColor::Muted)),
        )],
    };

    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(tui_color(SemanticColor::Border))),
        )
        .style(Style::default().bg(tui_color(SemanticColor::Header)));
    frame.render_widget(header, area);
}

fn draw_sidebar<S: KeyValueStore, A: Authenticator>(
    frame: &mut Frame,
    area: Rect,
    app: &NavigatorApp<'_, S, A>,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .title(" Lead Hub ")
        .border_style(Style::default().fg(tui_color(SemanticColor::Border)))
        .style(Style::default().bg(tui_color(SemanticColor::Header)));

    let section = |label: &'static str| {
        ListItem::new(Line::from(Span::styled(label, Style::default().fg(Color::Gray))))
    };

    let main_len = app.main_len();
    let mut lines: Vec<ListItem> = vec![section(" Main")];

    for (i, item) in app.items().iter().enumerate() {
        if i == main_len {
            lines.push(ListItem::new(Line::raw("")));
            lines.push(section(" Settings"));
        }

        let marker = if item.route == app.active { "►" } else { " " };
        let style = if i == app.selected_index {
            Style::default()
                .bg(tui_color(SemanticColor::Selection))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if item.route == app.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let text = format!(" {} {}", marker, item.label);
        lines.push(ListItem::new(Line::from(Span::styled(text, style))));
    }

    frame.render_widget(List::new(lines).block(block), area);
}

fn draw_page<S: KeyValueStore, A: Authenticator>(
    frame: &mut Frame,
    area: Rect,
    app: &NavigatorApp<'_, S, A>,
) {
    let block = Block::default()
        .borders(Borders::NONE)
        .title(format!(" {} ", app.active.title()));

    let mut lines = vec![
        Line::from(Span::styled(app.active.title(), heading())),
        Line::from(Span::styled(app.active.description(), Style::default().fg(Color::Gray))),
        Line::raw(""),
    ];

    if let Some(user) = app.user() {
        lines.push(Line::from(vec![
            Span::raw("Welcome back, "),
            Span::styled(role_display_name(user).to_string(), role_style(user.role)),
            Span::raw("!"),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", user.email, user.role),
            Style::default().fg(tui_color(SemanticColor::Muted)),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Capabilities: ", Style::default().fg(Color::Gray)),
        Span::raw(capability_summary(&app.capabilities())),
    ]));

    if let Some(notice) = &app.notice {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(tui_color(SemanticColor::Redirect)),
        )));
    }

    let page = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(page, inner_margin(area));
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let hints = Line::from(vec![
        Span::styled(" j/k", key),
        Span::raw(" move  "),
        Span::styled("enter", key),
        Span::raw(" open  "),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);
    let footer = Paragraph::new(hints).style(Style::default().fg(tui_color(SemanticColor::Muted)));
    frame.render_widget(footer, area);
}

fn inner_margin(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_colors_come_from_theme() {
        assert_eq!(tui_color(SemanticColor::Header), Color::Rgb(21, 45, 96));
        assert_eq!(tui_color(SemanticColor::Selection), Color::Rgb(44, 78, 150));
        assert_eq!(role_style(Role::Admin).fg, Some(Color::Magenta));
        assert_eq!(role_style(Role::SalesAssociate).fg, Some(Color::Green));
    }
}
