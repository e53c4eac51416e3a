/// Vertical scroll offset (px) past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Returns whether anything changed, so callers can skip notifying.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Any navigation closes the mobile panel, whatever it was before.
    pub fn on_route_change(&mut self) -> bool {
        self.close_menu()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "bg-white/90 shadow-sm backdrop-blur-md"
        } else {
            "bg-transparent"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_each_time() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn route_change_always_closes() {
        let mut open = NavState { menu_open: true, ..Default::default() };
        assert!(open.on_route_change());
        assert!(!open.menu_open);

        let mut closed = NavState::default();
        assert!(!closed.on_route_change());
        assert!(!closed.menu_open);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut nav = NavState::default();

        assert!(!nav.on_scroll(0.0));
        assert!(!nav.on_scroll(10.0));
        assert!(!nav.scrolled);

        assert!(nav.on_scroll(10.5));
        assert!(nav.scrolled);
        assert!(!nav.on_scroll(400.0));

        assert!(nav.on_scroll(3.0));
        assert!(!nav.scrolled);
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let mut nav = NavState { menu_open: true, scrolled: false };
        nav.on_scroll(50.0);
        assert!(nav.menu_open);
        assert_eq!(nav.header_class(), "bg-white/90 shadow-sm backdrop-blur-md");
    }
}
