/// Open/closed state of the full-screen mobile navigation.
///
/// Every transition reports whether it changed anything, so a second `open`
/// is a no-op rather than a second scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    /// Following a navigation target always leaves the overlay closed.
    pub fn navigate(&mut self) -> bool {
        self.close()
    }

    fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut overlay = Overlay::default();
        overlay.toggle();
        assert!(overlay.is_open());
        overlay.toggle();
        assert!(!overlay.is_open());
    }

    #[test]
    fn toggle_always_changes_state() {
        let mut overlay = Overlay::default();
        assert!(overlay.toggle());
        assert!(overlay.is_open());
        assert!(overlay.toggle());
        assert!(!overlay.is_open());

        overlay.open();
        assert!(overlay.toggle());
        assert!(!overlay.is_open());
    }

    #[test]
    fn open_twice_is_idempotent() {
        let mut overlay = Overlay::default();
        assert!(overlay.open());
        assert!(!overlay.open());
        assert!(overlay.is_open());
    }

    #[test]
    fn navigation_closes() {
        let mut overlay = Overlay::default();
        overlay.open();
        assert!(overlay.navigate());
        assert!(!overlay.is_open());
        assert!(!overlay.navigate());
    }
}
