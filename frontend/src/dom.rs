use log::debug;
use web_sys::{Document, HtmlElement, Window};

use crate::error::DomError;
use crate::state::scroll_lock::{PageStyle, ScrollLock, ScrollLockGuard};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// The `overflow` style of `document.body`.
pub struct BodyStyle;

impl PageStyle for BodyStyle {
    fn overflow(&self) -> Result<Option<String>, DomError> {
        let value = body()?.style().get_property_value("overflow")?;
        Ok((!value.is_empty()).then_some(value))
    }

    fn set_overflow(&self, value: Option<&str>) -> Result<(), DomError> {
        let style = body()?.style();
        match value {
            Some(value) => style.set_property("overflow", value)?,
            None => {
                style.remove_property("overflow")?;
            }
        }
        Ok(())
    }
}

thread_local! {
    static PAGE_LOCK: ScrollLock<BodyStyle> = ScrollLock::new(BodyStyle);
}

/// Stops the page from scrolling until the returned guard (and every other
/// live guard) is dropped.
pub fn lock_page_scroll() -> Result<ScrollLockGuard<BodyStyle>, DomError> {
    PAGE_LOCK.with(|lock| {
        let guard = lock.acquire()?;
        debug!("Page scroll locked ({} holders)", lock.holders());
        Ok(guard)
    })
}

/// Brings the element with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::NoElement(id.to_string()))?
        .scroll_into_view();
    Ok(())
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn page_lock_restores_body_overflow() {
        BodyStyle.set_overflow(Some("scroll")).unwrap();

        let first = lock_page_scroll().unwrap();
        let second = lock_page_scroll().unwrap();
        assert_eq!(BodyStyle.overflow().unwrap().as_deref(), Some("hidden"));

        drop(first);
        assert_eq!(BodyStyle.overflow().unwrap().as_deref(), Some("hidden"));
        drop(second);
        assert_eq!(BodyStyle.overflow().unwrap().as_deref(), Some("scroll"));

        BodyStyle.set_overflow(None).unwrap();
        assert_eq!(BodyStyle.overflow().unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn scrolling_to_missing_section_reports_id() {
        assert_eq!(
            scroll_to_section("no-such-section"),
            Err(DomError::NoElement("no-such-section".to_string()))
        );
    }
}
