//! Window placement on the terminal screen

use ratatui::layout::Rect;

/// Fixed primary window size, in cells
pub const WINDOW_WIDTH: u16 = 48;
pub const WINDOW_HEIGHT: u16 = 12;

/// Space between the reminder text and the reminder window border
pub const ALERT_PADDING_X: u16 = 2;
pub const ALERT_PADDING_Y: u16 = 1;

/// Center a `width` x `height` box on `screen`, shrinking it to fit
pub fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width / 2).saturating_sub(width / 2),
        screen.y + (screen.height / 2).saturating_sub(height / 2),
        width,
        height,
    )
}

/// Area of the primary window, which never grows with the terminal
pub fn window_area(screen: Rect) -> Rect {
    centered(screen, WINDOW_WIDTH, WINDOW_HEIGHT)
}

/// Area of the reminder window, sized to its message
pub fn alert_area(screen: Rect, message: &str) -> Rect {
    let text_width = message.chars().count().min(u16::MAX as usize) as u16;
    let frame_x = 2 + 2 * ALERT_PADDING_X;
    let frame_y = 2 + 2 * ALERT_PADDING_Y;

    let width = text_width.saturating_add(frame_x).min(screen.width);
    let inner_width = width.saturating_sub(frame_x).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);

    centered(screen, width, lines.saturating_add(frame_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_its_size_on_large_screens() {
        let area = window_area(Rect::new(0, 0, 200, 60));
        assert_eq!(area, Rect::new(76, 24, WINDOW_WIDTH, WINDOW_HEIGHT));
    }

    #[test]
    fn window_shrinks_on_small_screens() {
        let area = window_area(Rect::new(0, 0, 30, 8));
        assert_eq!(area, Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn alert_is_sized_to_its_message_and_centered() {
        let area = alert_area(Rect::new(0, 0, 100, 40), "rest");
        assert_eq!(area.width, 4 + 6);
        assert_eq!(area.height, 1 + 4);
        assert_eq!(area.x, 50 - 5);
        assert_eq!(area.y, 20 - 2);
    }

    #[test]
    fn long_alert_wraps_inside_the_screen() {
        let screen = Rect::new(0, 0, 26, 20);
        let area = alert_area(screen, &"x".repeat(40));
        assert_eq!(area.width, 26);
        // 20 text columns per line
        assert_eq!(area.height, 2 + 4);
        assert!(area.right() <= screen.right());
        assert!(area.bottom() <= screen.bottom());
    }

    #[test]
    fn centering_respects_screen_offset() {
        let area = centered(Rect::new(10, 5, 20, 10), 10, 4);
        assert_eq!(area, Rect::new(15, 8, 10, 4));
    }
}
