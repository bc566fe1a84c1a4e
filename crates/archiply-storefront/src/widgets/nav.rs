/// Mobile navigation menu; a single `active` toggle on the nav links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut nav = MobileNav::new();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(!nav.toggle());
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());
    }
}
