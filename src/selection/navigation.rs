//! Cursor and sliding-window navigation
//!
//! The controller never stores the list it navigates. Every operation takes the current
//! length, since filtering can change it between calls. Moving past either end of the
//! list wraps to the opposite end.
//!
//! State invariants, for a list of length `len`:
//! - `len == 0`: `window_start == 0 && cursor_index == 0`
//! - otherwise `cursor_index < min(max_window, len - window_start)` and
//!   `window_start + cursor_index < len`

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub window_start: usize,
    pub cursor_index: usize,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavigationState,
    max_window: usize,
}

impl NavigationController {
    /// `max_window` is clamped to at least one row
    pub fn new(max_window: usize) -> Self {
        Self {
            state: NavigationState::default(),
            max_window: max_window.max(1),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    pub fn window_start(&self) -> usize {
        self.state.window_start
    }

    /// Cursor position relative to the top of the window
    pub fn cursor_index(&self) -> usize {
        self.state.cursor_index
    }

    /// Cursor position within the whole list. Meaningless for an empty list.
    pub fn global_index(&self) -> usize {
        self.state.window_start + self.state.cursor_index
    }

    pub fn reset(&mut self) {
        self.state = NavigationState::default();
    }

    /// Indices of the rows currently inside the window
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.state.window_start.min(len);
        let end = (start + self.max_window).min(len);
        start..end
    }

    pub fn visible_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.normalize(len);

        if self.global_index() == len - 1 {
            self.reset();
        } else if self.state.cursor_index == self.max_window - 1
            && self.state.window_start + self.max_window < len
        {
            self.state.window_start += 1;
        } else {
            self.state.cursor_index += 1;
        }
        log::trace!("move_down -> {:?}", self.state);
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.normalize(len);

        if self.state.window_start == 0 && self.state.cursor_index == 0 {
            let window_start = len.saturating_sub(self.max_window);
            self.state = NavigationState {
                window_start,
                cursor_index: (self.max_window - 1).min(len - 1 - window_start),
            };
        } else if self.state.cursor_index == 0 {
            self.state.window_start -= 1;
        } else {
            self.state.cursor_index -= 1;
        }
        log::trace!("move_up -> {:?}", self.state);
    }

    /// Moves the cursor to a visible row, e.g. under the pointer.
    /// Returns false when `local` is outside the window.
    pub fn hover(&mut self, local: usize, len: usize) -> bool {
        self.normalize(len);
        if local >= self.visible_range(len).len() {
            return false;
        }
        self.state.cursor_index = local;
        true
    }

    /// Restores the invariants if `len` no longer covers the current position
    fn normalize(&mut self, len: usize) {
        let in_range = len > 0
            && self.global_index() < len
            && self.state.cursor_index < self.max_window;
        if !in_range && self.state != NavigationState::default() {
            log::debug!(
                "Navigation state {:?} out of range for length {}, resetting",
                self.state,
                len
            );
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(window_start: usize, cursor_index: usize) -> NavigationState {
        NavigationState {
            window_start,
            cursor_index,
        }
    }

    fn assert_invariants(nav: &NavigationController, len: usize) {
        let state = nav.state();
        if len == 0 {
            assert_eq!(state, NavigationState::default());
            return;
        }
        let visible = nav.visible_range(len).len();
        assert!(state.cursor_index < visible.min(nav.max_window()));
        assert!(nav.global_index() < len);
        assert_eq!(visible, nav.max_window().min(len - state.window_start));
    }

    #[test]
    fn walks_window_of_five_over_eight_items() {
        let mut nav = NavigationController::new(5);
        for _ in 0..4 {
            nav.move_down(8);
        }
        assert_eq!(nav.state(), at(0, 4));
        assert_eq!(nav.global_index(), 4);

        nav.move_down(8);
        assert_eq!(nav.state(), at(1, 4));
        assert_eq!(nav.global_index(), 5);

        nav.move_down(8);
        nav.move_down(8);
        assert_eq!(nav.state(), at(3, 4));
        assert_eq!(nav.global_index(), 7);

        nav.move_down(8);
        assert_eq!(nav.state(), at(0, 0));
    }

    #[rstest]
    #[case(5, 8)]
    #[case(5, 3)]
    #[case(5, 5)]
    #[case(1, 4)]
    #[case(3, 1)]
    fn move_up_from_top_wraps_to_last(#[case] max_window: usize, #[case] len: usize) {
        let mut nav = NavigationController::new(max_window);
        nav.move_up(len);
        assert_eq!(nav.global_index(), len - 1);
        assert_invariants(&nav, len);
    }

    #[rstest]
    #[case(5, 8)]
    #[case(5, 2)]
    #[case(2, 9)]
    fn move_down_from_last_wraps_to_top(#[case] max_window: usize, #[case] len: usize) {
        let mut nav = NavigationController::new(max_window);
        nav.move_up(len);
        assert_eq!(nav.global_index(), len - 1);

        nav.move_down(len);
        assert_eq!(nav.state(), at(0, 0));
    }

    #[test]
    fn moving_up_at_window_top_slides_window() {
        let mut nav = NavigationController::new(5);
        nav.move_up(8);
        assert_eq!(nav.state(), at(3, 4));
        for _ in 0..4 {
            nav.move_up(8);
        }
        assert_eq!(nav.state(), at(3, 0));

        nav.move_up(8);
        assert_eq!(nav.state(), at(2, 0));
        assert_eq!(nav.global_index(), 2);
    }

    #[test]
    fn single_item_stays_put() {
        let mut nav = NavigationController::new(5);
        nav.move_down(1);
        assert_eq!(nav.state(), at(0, 0));
        nav.move_up(1);
        assert_eq!(nav.state(), at(0, 0));
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut nav = NavigationController::new(5);
        nav.move_down(0);
        nav.move_up(0);
        assert_eq!(nav.state(), at(0, 0));
        assert!(nav.visible_range(0).is_empty());
        assert!(!nav.hover(0, 0));
    }

    #[test]
    fn short_lists_never_slide() {
        let mut nav = NavigationController::new(5);
        for _ in 0..20 {
            nav.move_down(3);
            assert_eq!(nav.window_start(), 0);
        }
        for _ in 0..20 {
            nav.move_up(3);
            assert_eq!(nav.window_start(), 0);
        }
    }

    #[rstest]
    #[case(5, 8)]
    #[case(5, 5)]
    #[case(4, 13)]
    #[case(1, 3)]
    fn invariants_hold_for_every_step(#[case] max_window: usize, #[case] len: usize) {
        let mut nav = NavigationController::new(max_window);
        for step in 0..(len * 3) {
            if step % 3 == 2 {
                nav.move_up(len);
            } else {
                nav.move_down(len);
            }
            assert_invariants(&nav, len);
        }
        for _ in 0..(len * 2) {
            nav.move_up(len);
            assert_invariants(&nav, len);
        }
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut nav = NavigationController::new(5);
        nav.move_up(8);
        nav.reset();
        assert_eq!(nav.state(), at(0, 0));
    }

    #[test]
    fn shrunken_list_is_normalized_before_moving() {
        let mut nav = NavigationController::new(5);
        nav.move_up(20);
        assert_eq!(nav.global_index(), 19);

        nav.move_down(3);
        assert_eq!(nav.state(), at(0, 1));
        assert_invariants(&nav, 3);
    }

    #[test]
    fn hover_targets_visible_rows_only() {
        let mut nav = NavigationController::new(5);
        assert!(nav.hover(3, 8));
        assert_eq!(nav.global_index(), 3);

        assert!(!nav.hover(5, 8));
        assert!(!nav.hover(2, 2));
        assert_eq!(nav.cursor_index(), 0);
    }

    #[test]
    fn visible_window_slices_items() {
        let items: Vec<u32> = (0..8).collect();
        let mut nav = NavigationController::new(5);
        nav.move_up(items.len());
        assert_eq!(nav.visible_window(&items), &[3, 4, 5, 6, 7]);
    }
}
