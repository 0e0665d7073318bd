mod tab_bar;

pub use tab_bar::render_tab_bar;

use ratatui::layout::Rect;

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 100, 100);
        assert_eq!(rect, area);

        let rect = centered_rect(area, 10, 4);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
