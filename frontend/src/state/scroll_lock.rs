use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::error::DomError;

const LOCKED: &str = "hidden";

/// Where the page-level `overflow` value lives. `None` means unset.
pub trait PageStyle {
    fn overflow(&self) -> Result<Option<String>, DomError>;
    fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError>;
}

struct LockState<S> {
    style: S,
    holders: usize,
    saved: Option<Option<String>>,
}

/// Reference-counted page scroll lock.
///
/// The first guard records the current `overflow` and hides it; dropping the
/// last guard writes the recorded value back.
pub struct ScrollLock<S: PageStyle> {
    inner: Rc<RefCell<LockState<S>>>,
}

impl<S: PageStyle> Clone for ScrollLock<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: PageStyle> ScrollLock<S> {
    pub fn new(style: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LockState {
                style,
                holders: 0,
                saved: None,
            })),
        }
    }

    pub fn acquire(&self) -> Result<ScrollLockGuard<S>, DomError> {
        let first = !self.is_locked();
        let mut state = self.inner.borrow_mut();
        if first {
            let prior = state.style.overflow()?;
            state.style.set_overflow(Some(LOCKED))?;
            state.saved = Some(prior);
        }
        state.holders += 1;
        Ok(ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        })
    }

    pub fn holders(&self) -> usize {
        self.inner.borrow().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard<S: PageStyle> {
    inner: Rc<RefCell<LockState<S>>>,
}

impl<S: PageStyle> Drop for ScrollLockGuard<S> {
    fn drop(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders > 0 {
            return;
        }
        if let Some(prior) = state.saved.take() {
            if let Err(err) = state.style.set_overflow(prior.as_deref()) {
                warn!("Failed to restore page scrolling: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeStyle {
        overflow: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl FakeStyle {
        fn with(value: &str) -> Self {
            let style = Self::default();
            *style.overflow.borrow_mut() = Some(value.to_string());
            style
        }

        fn current(&self) -> Option<String> {
            self.overflow.borrow().clone()
        }
    }

    impl PageStyle for FakeStyle {
        fn overflow(&self) -> Result<Option<String>, DomError> {
            if self.broken {
                return Err(DomError::NoBody);
            }
            Ok(self.current())
        }

        fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError> {
            if self.broken {
                return Err(DomError::NoBody);
            }
            *self.overflow.borrow_mut() = value.map(str::to_string);
            Ok(())
        }
    }

    #[test]
    fn restores_prior_value_not_a_default() {
        let style = FakeStyle::with("scroll");
        let lock = ScrollLock::new(style.clone());

        let guard = lock.acquire().unwrap();
        assert_eq!(style.current().as_deref(), Some("hidden"));
        drop(guard);

        assert_eq!(style.current().as_deref(), Some("scroll"));
    }

    #[test]
    fn unset_property_is_removed_again() {
        let style = FakeStyle::default();
        let lock = ScrollLock::new(style.clone());
        drop(lock.acquire().unwrap());
        assert_eq!(style.current(), None);
    }

    #[test]
    fn nested_guards_hold_one_lock() {
        let style = FakeStyle::with("auto");
        let lock = ScrollLock::new(style.clone());

        let outer = lock.acquire().unwrap();
        let inner = lock.acquire().unwrap();
        assert_eq!(lock.holders(), 2);

        drop(outer);
        assert!(lock.is_locked());
        assert_eq!(style.current().as_deref(), Some("hidden"));

        drop(inner);
        assert!(!lock.is_locked());
        assert_eq!(style.current().as_deref(), Some("auto"));
    }

    #[test]
    fn relock_captures_fresh_prior_value() {
        let style = FakeStyle::with("auto");
        let lock = ScrollLock::new(style.clone());
        drop(lock.acquire().unwrap());

        *style.overflow.borrow_mut() = Some("clip".to_string());
        drop(lock.acquire().unwrap());
        assert_eq!(style.current().as_deref(), Some("clip"));
    }

    #[test]
    fn failed_acquire_leaves_no_holder() {
        let style = FakeStyle {
            broken: true,
            ..FakeStyle::default()
        };
        let lock = ScrollLock::new(style);
        assert_eq!(lock.acquire().err(), Some(DomError::NoBody));
        assert_eq!(lock.holders(), 0);
    }
}
