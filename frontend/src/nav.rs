//! Links to sections of the home page.
//!
//! Section links stay inside the router. On the home page they scroll to the
//! section directly; from any other page they push `Route::Home` carrying the
//! section as history state, and the home page scrolls to it once mounted.

use log::{debug, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Features,
    Pricing,
    Faq,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Features, Anchor::Pricing, Anchor::Faq];

    /// The `id` attribute of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::Pricing => "pricing",
            Anchor::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Features => "Features",
            Anchor::Pricing => "Pricing",
            Anchor::Faq => "FAQ",
        }
    }

    /// Accepts a URL fragment with or without the leading `#`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }

    pub fn href(self) -> String {
        format!("/#{}", self.id())
    }
}

/// History state left by a section link followed from another page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAnchor(pub Anchor);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    /// Already on the home page.
    Scroll(Anchor),
    /// Route to the home page first.
    Navigate(Anchor),
}

pub fn plan_jump(current: Option<&Route>, anchor: Anchor) -> Jump {
    match current {
        Some(Route::Home) => Jump::Scroll(anchor),
        _ => Jump::Navigate(anchor),
    }
}

fn scroll_to(anchor: Anchor) {
    if let Err(err) = dom::scroll_to_section(anchor.id()) {
        warn!("Could not scroll to #{}: {}", anchor.id(), err);
    }
}

#[hook]
pub fn use_anchor_jump() -> Callback<Anchor> {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    Callback::from(move |anchor: Anchor| match plan_jump(route.as_ref(), anchor) {
        Jump::Scroll(anchor) => scroll_to(anchor),
        Jump::Navigate(anchor) => match &navigator {
            Some(navigator) => {
                debug!("Navigating home to #{}", anchor.id());
                navigator.push_with_state(&Route::Home, PendingAnchor(anchor));
            }
            None => warn!("No router available for #{}", anchor.id()),
        },
    })
}

/// Scrolls to the section the visitor asked for on arrival, or to the top
/// when there is none. A pending section comes from history state or,
/// on a fresh page load, from the URL fragment.
#[hook]
pub fn use_arrival_scroll() {
    let target = use_location().and_then(|location| {
        location
            .state::<PendingAnchor>()
            .map(|pending| pending.0)
            .or_else(|| Anchor::from_hash(location.hash()))
    });

    use_effect_with_deps(
        move |target: &Option<Anchor>| {
            match target {
                Some(anchor) => scroll_to(*anchor),
                None => dom::scroll_to_top(),
            }
            || ()
        },
        target,
    );
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub anchor: Anchor,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the jump, e.g. to close the mobile overlay.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let jump = use_anchor_jump();
    let anchor = props.anchor;
    let onclick = {
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            jump.emit(anchor);
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    html! {
        <a href={anchor.href()} class={props.class.clone()} {onclick}>
            {anchor.label()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumps_in_place_on_home() {
        assert_eq!(
            plan_jump(Some(&Route::Home), Anchor::Pricing),
            Jump::Scroll(Anchor::Pricing)
        );
    }

    #[test]
    fn routes_home_from_other_pages() {
        for route in [Route::About, Route::NotFound] {
            assert_eq!(
                plan_jump(Some(&route), Anchor::Faq),
                Jump::Navigate(Anchor::Faq)
            );
        }
        assert_eq!(plan_jump(None, Anchor::Features), Jump::Navigate(Anchor::Features));
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(Anchor::from_hash("#pricing"), Some(Anchor::Pricing));
        assert_eq!(Anchor::from_hash("faq"), Some(Anchor::Faq));
        assert_eq!(Anchor::from_hash(""), None);
        assert_eq!(Anchor::from_hash("#contact"), None);
    }

    #[test]
    fn href_points_at_home_fragment() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_hash(&anchor.href()[1..]), Some(anchor));
        }
        assert_eq!(Anchor::Features.href(), "/#features");
    }
}
