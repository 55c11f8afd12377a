//! Hooks that bind the presentation state machines to the browser.
//!
//! Every timer and observer created here is owned by the effect that created
//! it and released in that effect's destructor, so no callback outlives the
//! component it updates.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::{use_update, use_window_scroll};

use crate::dom;
use crate::error::DomError;
use crate::state::carousel::Carousel;
use crate::state::disclosure::Disclosure;
use crate::state::motion;
use crate::state::overlay::Overlay;
use crate::state::revealer::{RevealStage, Revealer, Tick};
use crate::state::visibility::{GateEvent, GateMode, Threshold, VisibilityGate};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealerHandle {
    pub text: String,
    /// Set once, `settle_ms` after the last character appeared.
    pub complete: bool,
}

/// Types `text` out one character every `tick_ms`.
#[hook]
pub fn use_text_revealer(text: AttrValue, tick_ms: u32, settle_ms: u32) -> RevealerHandle {
    let revealer = use_mut_ref(|| Revealer::new(text.as_str()));
    let shown = use_state(String::new);
    let stage = use_state(|| RevealStage::Typing);
    let deps = (text, *stage);

    {
        let revealer = revealer.clone();
        let shown = shown.clone();
        let stage = stage.clone();
        use_effect_with_deps(
            move |(text, current): &(AttrValue, RevealStage)| {
                let current = *current;
                let mut interval = None;
                let mut timeout = None;

                let restarted = revealer.borrow().text() != text.as_str();
                if restarted {
                    *revealer.borrow_mut() = Revealer::new(text.as_str());
                    shown.set(String::new());
                }

                match current {
                    _ if restarted && current != RevealStage::Typing => {
                        stage.set(RevealStage::Typing);
                    }
                    RevealStage::Typing if revealer.borrow().is_exhausted() => {
                        stage.set(RevealStage::Settling);
                    }
                    RevealStage::Typing => {
                        debug!("Starting typing demo ({} chars)", revealer.borrow().len());
                        interval = Some(Interval::new(tick_ms, move || {
                            let tick = revealer.borrow_mut().tick();
                            if tick == Tick::Idle {
                                return;
                            }
                            shown.set(revealer.borrow().revealed().to_string());
                            let next = current.after_tick(tick);
                            if next != current {
                                debug!(
                                    "Typing demo revealed all {} chars",
                                    revealer.borrow().revealed_count()
                                );
                                stage.set(next);
                            }
                        }));
                    }
                    RevealStage::Settling => {
                        timeout = Some(Timeout::new(settle_ms, move || {
                            stage.set(current.after_settle());
                        }));
                    }
                    RevealStage::Done => {}
                }

                move || {
                    drop(interval);
                    drop(timeout);
                }
            },
            deps,
        );
    }

    RevealerHandle {
        text: (*shown).clone(),
        complete: *stage == RevealStage::Done,
    }
}

#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub active: usize,
    pub select: Callback<usize>,
}

/// Rotates through `len` slides every `interval_ms`.
///
/// Selecting a slide restarts the rotation timer, so the next automatic step
/// comes a full interval later and moves on from the selected slide.
#[hook]
pub fn use_carousel(len: usize, interval_ms: u32) -> CarouselHandle {
    let carousel = use_mut_ref(|| Carousel::new(len));
    let active = use_state(|| 0usize);
    let restarts = use_state(|| 0u32);

    {
        let carousel = carousel.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |(len, _): &(usize, u32)| {
                let current_len = carousel.borrow().as_ref().map(Carousel::len);
                if current_len != Some(*len) {
                    *carousel.borrow_mut() = Carousel::new(*len);
                    active.set(0);
                }

                let interval = Interval::new(interval_ms, move || {
                    let next = carousel.borrow_mut().as_mut().map(Carousel::advance);
                    if let Some(next) = next {
                        active.set(next);
                    }
                });
                move || drop(interval)
            },
            (len, *restarts),
        );
    }

    let select = {
        let carousel = carousel.clone();
        let active = active.clone();
        let restarts = restarts.clone();
        Callback::from(move |index: usize| {
            let selected = carousel
                .borrow_mut()
                .as_mut()
                .and_then(|carousel| carousel.select(index).then(|| carousel.active()));
            if let Some(selected) = selected {
                active.set(selected);
                restarts.set((*restarts).wrapping_add(1));
            } else {
                debug!("Ignoring selection of slide {}", index);
            }
        })
    };

    CarouselHandle {
        active: *active,
        select,
    }
}

impl Reducible for Disclosure {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = *self;
        if next.select(index) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DisclosureHandle {
    pub open: Option<usize>,
    pub select: Callback<usize>,
}

#[hook]
pub fn use_disclosure(len: usize) -> DisclosureHandle {
    let state = use_reducer(move || Disclosure::new(len));
    let dispatcher = state.dispatcher();

    DisclosureHandle {
        open: state.open_index(),
        select: Callback::from(move |index| dispatcher.dispatch(index)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    Toggle,
    Close,
    Navigate,
}

impl Reducible for Overlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: OverlayAction) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            OverlayAction::Toggle => next.toggle(),
            OverlayAction::Close => next.close(),
            OverlayAction::Navigate => next.navigate(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Holds the page scroll lock for as long as `active` is true.
#[hook]
pub fn use_scroll_lock(active: bool) {
    use_effect_with_deps(
        move |active: &bool| {
            let guard = if *active {
                match dom::lock_page_scroll() {
                    Ok(guard) => Some(guard),
                    Err(err) => {
                        warn!("Could not lock page scroll: {}", err);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(guard)
        },
        active,
    );
}

struct Observation {
    observer: IntersectionObserver,
    gate: Rc<RefCell<VisibilityGate>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.gate.borrow_mut().stop();
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    threshold: Threshold,
    mode: GateMode,
    visible: UseStateHandle<bool>,
) -> Result<Observation, DomError> {
    let gate = Rc::new(RefCell::new(VisibilityGate::new(mode)));
    let callback_gate = Rc::clone(&gate);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            let Some(entry) = latest else {
                return;
            };
            let mut gate = callback_gate.borrow_mut();
            match gate.observe(entry.is_intersecting()) {
                GateEvent::Entered | GateEvent::Left => visible.set(gate.is_visible()),
                GateEvent::Unchanged => {}
            }
            if !gate.is_observing() {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.get()));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Observation {
        observer,
        gate,
        _callback: callback,
    })
}

/// Whether the element behind `node` has scrolled into view.
///
/// Without `IntersectionObserver` support the region is shown straight away.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: Threshold, mode: GateMode) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = node.cast::<Element>().and_then(|element| {
                    match observe(&element, threshold, mode, visible.clone()) {
                        Ok(observation) => Some(observation),
                        Err(err) => {
                            warn!("Visibility tracking unavailable: {}", err);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(observation)
            },
            node,
        );
    }

    *visible
}

/// Fraction of the region behind `node` that has scrolled through the
/// viewport, from its top entering at the bottom to its bottom leaving at
/// the top.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    // Subscribing is enough: every scroll re-renders and re-measures.
    let _ = use_window_scroll();
    let remeasure = use_update();
    use_effect_with_deps(
        move |_| {
            remeasure();
            || ()
        },
        (),
    );

    node.cast::<Element>()
        .and_then(|element| {
            let rect = element.get_bounding_client_rect();
            let viewport = dom::window().ok()?.inner_height().ok()?.as_f64()?;
            Some(motion::scroll_progress(rect.top(), rect.height(), viewport))
        })
        .unwrap_or(0.0)
}

#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_reducer_reuses_state_on_rejected_index() {
        let state = Rc::new(Disclosure::new(2));
        let next = Rc::clone(&state).reduce(5);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = next.reduce(1);
        assert_eq!(opened.open_index(), Some(1));
    }

    #[test]
    fn overlay_reducer_skips_redundant_close() {
        let closed = Rc::new(Overlay::default());
        let same = Rc::clone(&closed).reduce(OverlayAction::Close);
        assert!(Rc::ptr_eq(&closed, &same));

        let open = same.reduce(OverlayAction::Toggle);
        assert!(open.is_open());
        let navigated = open.reduce(OverlayAction::Navigate);
        assert!(!navigated.is_open());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::Renderer;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    thread_local! {
        static COMPLETIONS: Cell<usize> = Cell::new(0);
        static SELECT: RefCell<Option<Callback<usize>>> = RefCell::new(None);
        static ROTATOR_RENDERS: Cell<usize> = Cell::new(0);
    }

    fn mount_point() -> Element {
        let root = dom::document().unwrap().create_element("div").unwrap();
        dom::body().unwrap().append_child(&root).unwrap();
        root
    }

    fn text(root: &Element) -> String {
        root.text_content().unwrap_or_default()
    }

    #[function_component]
    fn TypingDemo() -> Html {
        let handle = use_text_revealer(AttrValue::from("AI"), 40, 100);
        use_effect_with_deps(
            |complete: &bool| {
                if *complete {
                    COMPLETIONS.with(|count| count.set(count.get() + 1));
                }
                || ()
            },
            handle.complete,
        );
        html! { {format!("{}|{}", handle.text, handle.complete)} }
    }

    #[function_component]
    fn Rotator() -> Html {
        let carousel = use_carousel(3, 200);
        SELECT.with(|select| *select.borrow_mut() = Some(carousel.select.clone()));
        ROTATOR_RENDERS.with(|renders| renders.set(renders.get() + 1));
        html! { {carousel.active} }
    }

    #[function_component]
    fn MenuOpen() -> Html {
        use_scroll_lock(true);
        html! {}
    }

    fn select(index: usize) {
        SELECT.with(|select| select.borrow().as_ref().unwrap().emit(index));
    }

    #[wasm_bindgen_test]
    async fn typing_completes_once_after_settle_delay() {
        let root = mount_point();
        let app = Renderer::<TypingDemo>::with_root(root.clone()).render();

        TimeoutFuture::new(60).await;
        assert_eq!(text(&root), "A|false");

        TimeoutFuture::new(50).await;
        assert_eq!(text(&root), "AI|false");

        TimeoutFuture::new(150).await;
        assert_eq!(text(&root), "AI|true");

        TimeoutFuture::new(200).await;
        assert_eq!(text(&root), "AI|true");
        assert_eq!(COMPLETIONS.with(Cell::get), 1);

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn selection_restarts_rotation() {
        let root = mount_point();
        let app = Renderer::<Rotator>::with_root(root.clone()).render();

        TimeoutFuture::new(300).await;
        assert_eq!(text(&root), "1");

        select(2);
        TimeoutFuture::new(150).await;
        // The old schedule would have advanced at 400 ms.
        assert_eq!(text(&root), "2");

        TimeoutFuture::new(100).await;
        assert_eq!(text(&root), "0");

        select(7);
        TimeoutFuture::new(20).await;
        assert_eq!(text(&root), "0");

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmounted_carousel_stops_rendering() {
        let root = mount_point();
        let app = Renderer::<Rotator>::with_root(root.clone()).render();
        TimeoutFuture::new(250).await;

        app.destroy();
        TimeoutFuture::new(10).await;
        let renders = ROTATOR_RENDERS.with(Cell::get);
        TimeoutFuture::new(500).await;
        assert_eq!(ROTATOR_RENDERS.with(Cell::get), renders);
        assert_eq!(text(&root), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn scroll_lock_released_on_unmount() {
        let body = dom::body().unwrap();
        body.style().set_property("overflow", "auto").unwrap();

        let root = mount_point();
        let app = Renderer::<MenuOpen>::with_root(root.clone()).render();
        TimeoutFuture::new(20).await;
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

        app.destroy();
        TimeoutFuture::new(20).await;
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "auto");

        body.style().remove_property("overflow").unwrap();
        root.remove();
    }
}
