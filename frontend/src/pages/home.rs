use yew::prelude::*;

use crate::nav::use_arrival_scroll;
use crate::pages::sections::{
    cta::CtaSection, faq::Faq, features::KeyFeatures, hero::Hero, how_it_works::HowItWorks,
    live_demo::LiveDemo, pricing::PricingPlans, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_arrival_scroll();

    html! {
        <div class="home">
            <Hero />
            <KeyFeatures />
            <HowItWorks />
            <LiveDemo />
            <Testimonials />
            <PricingPlans />
            <Faq />
            <CtaSection />
        </div>
    }
}
