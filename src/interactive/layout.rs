use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 26;

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub page: Rect,
    pub footer: Rect,
}

/// Header on top, sidebar and page side by side, key hints at the bottom.
/// Narrow terminals (< 60 cols) get a sidebar only.
pub fn app_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let (sidebar, page) = if rows[1].width < 60 {
        (rows[1], Rect::default())
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(rows[1]);
        (columns[0], columns[1])
    };

    AppLayout {
        header: rows[0],
        sidebar,
        page,
        footer: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_splits_sidebar_and_page() {
        let layout = app_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.page.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn narrow_terminal_hides_page() {
        let layout = app_layout(Rect::new(0, 0, 50, 30));
        assert_eq!(layout.sidebar.width, 50);
        assert_eq!(layout.page, Rect::default());
    }
}
