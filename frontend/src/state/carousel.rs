use std::num::NonZeroUsize;

/// Active slide bookkeeping for a rotating list of `len` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    active: usize,
}

impl Carousel {
    /// Returns `None` for an empty list.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { len, active: 0 })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Moves to the next slide, wrapping from the last one to the first.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    /// Jumps to `index`. Out-of-range indices are ignored and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len.get() {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.advance();
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn active_index_is_tick_count_mod_len() {
        let mut carousel = Carousel::new(4).unwrap();
        for m in 1..=11 {
            carousel.advance();
            assert_eq!(carousel.active(), m % 4);
        }
    }

    #[test]
    fn next_tick_after_select_starts_from_selection() {
        let mut carousel = Carousel::new(3).unwrap();
        assert!(carousel.select(2));
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.advance(), 0);

        assert!(carousel.select(1));
        assert_eq!(carousel.advance(), 2);
    }

    #[test]
    fn out_of_range_select_is_a_no_op() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.advance();
        assert!(!carousel.select(3));
        assert!(!carousel.select(usize::MAX));
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn single_item_never_moves() {
        let mut carousel = Carousel::new(1).unwrap();
        for _ in 0..5 {
            assert_eq!(carousel.advance(), 0);
        }
        assert_eq!(carousel.len(), 1);
    }
}
