use yew::prelude::*;

use super::features::Features;
use super::hero::Hero;
use super::testimonials::Testimonials;

/// The landing page: hero first, then social proof, then the benefit grid.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="min-h-screen">
            <Hero />
            <Testimonials />
            <Features />
        </div>
    }
}
