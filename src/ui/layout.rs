use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub progress: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    /// Lesson screens get a progress bar between the action list and the footer.
    pub fn new(area: Rect, with_progress: bool) -> Self {
        let progress_height = if with_progress { 3 } else { 0 };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(progress_height),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            progress: with_progress.then_some(vertical[2]),
            footer: vertical[3],
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width || !has_hint {
            current = candidate;
        } else {
            out.push(current);
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    const MIN_WIDTH: u16 = 40;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let target_w = requested_w.max(MIN_WIDTH).min(area.width);
    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);

    Rect::new(left, area.y, target_w, area.height)
}
