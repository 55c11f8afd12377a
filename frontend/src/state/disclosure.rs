/// Accordion state where at most one of `len` panels is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    len: usize,
    open: Option<usize>,
}

impl Disclosure {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes `index` if it is the open panel, otherwise opens it and closes
    /// whichever panel was open. Returns `false` for out-of-range indices.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let disclosure = Disclosure::new(5);
        assert_eq!(disclosure.open_index(), None);
        assert!((0..5).all(|i| !disclosure.is_open(i)));
    }

    #[test]
    fn selecting_open_panel_twice_closes_it() {
        let mut disclosure = Disclosure::new(5);
        disclosure.select(2);
        assert!(disclosure.is_open(2));
        disclosure.select(2);
        assert_eq!(disclosure.open_index(), None);
    }

    #[test]
    fn selecting_another_panel_switches() {
        let mut disclosure = Disclosure::new(5);
        disclosure.select(0);
        disclosure.select(3);
        assert_eq!(disclosure.open_index(), Some(3));
        assert_eq!((0..5).filter(|i| disclosure.is_open(*i)).count(), 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut disclosure = Disclosure::new(2);
        disclosure.select(1);
        assert!(!disclosure.select(2));
        assert_eq!(disclosure.open_index(), Some(1));
    }

    #[test]
    fn rapid_toggles_are_last_write_wins() {
        let mut disclosure = Disclosure::new(3);
        for index in [0, 1, 1, 2, 0, 0, 2] {
            disclosure.select(index);
        }
        assert_eq!(disclosure.open_index(), Some(2));
    }
}
