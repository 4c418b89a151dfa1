//! Sidebar open/closed state, mirrored by the `open` class on `#sidebar`.

pub const OPEN_CLASS: &str = "open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    pub fn from_open(open: bool) -> Self {
        if open { SidebarState::Open } else { SidebarState::Closed }
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    /// Tap outside the panel on a narrow viewport closes it; wide viewports
    /// leave it as is.
    pub fn after_outside_click(self, viewport_width: i32, breakpoint: i32) -> Self {
        if viewport_width <= breakpoint && self.is_open() {
            SidebarState::Closed
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_state() {
        for s in [SidebarState::Open, SidebarState::Closed] {
            assert_eq!(s.toggled().toggled(), s);
            assert_ne!(s.toggled(), s);
        }
    }

    #[test]
    fn outside_click_only_closes_on_mobile() {
        assert_eq!(
            SidebarState::Open.after_outside_click(768, 768),
            SidebarState::Closed
        );
        assert_eq!(
            SidebarState::Open.after_outside_click(769, 768),
            SidebarState::Open
        );
        assert_eq!(
            SidebarState::Closed.after_outside_click(320, 768),
            SidebarState::Closed
        );
    }
}
