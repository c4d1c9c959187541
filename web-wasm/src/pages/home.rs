//! ランディングページ

use crate::components::{
    final_cta::FinalCta, footer::Footer, hero::Hero, how_it_works::HowItWorks,
    navigation::Navigation, pricing::Pricing, problem::Problem, trust_signals::TrustSignals,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <Navigation />
            <Hero />
            <Problem />
            <HowItWorks />
            <TrustSignals />
            <Pricing />
            <FinalCta />
            <Footer />
        </div>
    }
}
