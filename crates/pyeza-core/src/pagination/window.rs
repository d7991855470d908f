//! Page-number windowing.
//!
//! Shows `first | … | window around current | … | last`, bounded to at most
//! nine buttons however many pages exist.

use super::display::PageButton;

/// Up to this many pages every page gets a button.
pub const MAX_UNWINDOWED_PAGES: u64 = 7;
/// Pages shown on each side of the current page.
pub const WINDOW_RADIUS: u64 = 2;
/// Smallest window once clamping at either end has shrunk it.
pub const MIN_WINDOW_PAGES: u64 = 2 * WINDOW_RADIUS + 1;

/// Build the page buttons for `current` of `total` pages.
///
/// `url_for` produces the link for a page number. `current` is not clamped;
/// an out-of-range value simply leaves no button active.
pub fn page_buttons(current: u64, total: u64, url_for: impl Fn(u64) -> String) -> Vec<PageButton> {
    let numbered = |number: u64| PageButton::Numbered {
        number,
        active: number == current,
        url: url_for(number),
    };

    if total == 0 {
        return Vec::new();
    }

    if total <= MAX_UNWINDOWED_PAGES {
        return (1..=total).map(&numbered).collect();
    }

    let (window_start, window_end) = window_bounds(current, total);
    let mut pages = Vec::with_capacity(9);

    if window_start > 1 {
        pages.push(numbered(1));
        if window_start > 2 {
            pages.push(PageButton::Ellipsis);
        }
    }

    pages.extend((window_start..=window_end).map(&numbered));

    if window_end < total {
        if window_end < total - 1 {
            pages.push(PageButton::Ellipsis);
        }
        pages.push(numbered(total));
    }

    pages
}

/// Inclusive window `[start, end]` around `current`, widened to
/// [`MIN_WINDOW_PAGES`] when it touches either end.
fn window_bounds(current: u64, total: u64) -> (u64, u64) {
    let mut start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let mut end = current.saturating_add(WINDOW_RADIUS).min(total);

    if end < start.saturating_add(MIN_WINDOW_PAGES - 1) {
        if start == 1 {
            end = MIN_WINDOW_PAGES.min(total);
        } else if end == total {
            start = total.saturating_sub(MIN_WINDOW_PAGES - 1).max(1);
        }
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(current: u64, total: u64) -> Vec<Option<u64>> {
        page_buttons(current, total, |n| n.to_string())
            .iter()
            .map(PageButton::number)
            .collect()
    }

    #[test]
    fn test_small_total_shows_every_page() {
        assert_eq!(layout(2, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(layout(7, 7).len(), 7);
    }

    #[test]
    fn test_middle_window() {
        assert_eq!(
            layout(10, 20),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn test_window_widens_at_start() {
        assert_eq!(
            layout(1, 20),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
        assert_eq!(
            layout(2, 20),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
    }

    #[test]
    fn test_window_widens_at_end() {
        assert_eq!(
            layout(20, 20),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn test_adjacent_first_page_has_no_ellipsis() {
        // window 2..=6 touches page 1 directly
        assert_eq!(
            layout(4, 20),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                None,
                Some(20)
            ]
        );
        // window 15..=19 touches page 20 directly
        assert_eq!(
            layout(17, 20),
            vec![
                Some(1),
                None,
                Some(15),
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(
            layout(4, 8),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                None,
                Some(8)
            ]
        );
    }

    #[test]
    fn test_zero_total_is_empty() {
        assert!(layout(1, 0).is_empty());
    }

    #[test]
    fn test_huge_current_does_not_overflow() {
        let buttons = page_buttons(u64::MAX - 1, 20, |n| n.to_string());
        assert!(buttons.iter().all(|b| !b.is_active()));
        assert_eq!(
            buttons.iter().map(PageButton::number).collect::<Vec<_>>(),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn test_out_of_range_current_has_no_active_button() {
        let buttons = page_buttons(30, 20, |n| n.to_string());
        assert!(buttons.iter().all(|b| !b.is_active()));
        assert!(buttons.len() <= 9);
    }
}
