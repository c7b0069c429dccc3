use yew::prelude::*;

use crate::api_client::content::{fetch_page_content, page_id_from_location, PageContent};
use crate::common::error::ContentWarning;
use crate::common::loading::Loading;
use crate::content::{
    DEFAULT_CTA_PRIMARY, DEFAULT_CTA_SECONDARY, DEFAULT_HERO_SUBTITLE, DEFAULT_HERO_TITLE,
};
use crate::hooks::FetchState;

/// Document the hero falls back to when its fetch fails. Carries the
/// "default" id so the page-id line still renders.
fn fallback_content() -> PageContent {
    PageContent {
        id: "default".to_string(),
        title: Some(DEFAULT_HERO_TITLE.to_string()),
        subtitle: Some(DEFAULT_HERO_SUBTITLE.to_string()),
        ..PageContent::default()
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let state = use_state(|| FetchState::<PageContent>::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // A missing query parameter selects the "default" document;
                // the hero always fetches.
                let page_id =
                    page_id_from_location().unwrap_or_else(|| "default".to_string());
                match fetch_page_content(&page_id).await {
                    Ok(content) => state.set(FetchState::Success(content)),
                    Err(e) => {
                        log::error!("Error fetching hero content: {}", e);
                        state.set(FetchState::Error(e));
                    }
                }
            });
            || ()
        });
    }

    if state.is_loading() {
        return html! {
            <section class="relative min-h-[90vh] flex items-center justify-center">
                <Loading text={"Loading content...".to_string()} />
            </section>
        };
    }

    let error = state.error().cloned();
    let content = match state.data() {
        Some(content) => content.clone(),
        None => fallback_content(),
    };

    let title = content
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string());
    let subtitle = content
        .subtitle
        .clone()
        .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string());
    let cta_primary = content
        .cta_primary
        .clone()
        .unwrap_or_else(|| DEFAULT_CTA_PRIMARY.to_string());
    let cta_secondary = content
        .cta_secondary
        .clone()
        .unwrap_or_else(|| DEFAULT_CTA_SECONDARY.to_string());
    let hero_image = content
        .hero_image_url
        .clone()
        .unwrap_or_else(|| "assets/hero-image.jpg".to_string());

    let logos = content.company_logos.clone().unwrap_or_default();
    let logo1 = logos
        .logo1
        .unwrap_or_else(|| "assets/company-logo-1.jpg".to_string());
    let logo2 = logos
        .logo2
        .unwrap_or_else(|| "assets/company-logo-2.jpg".to_string());
    let logo3 = logos
        .logo3
        .unwrap_or_else(|| "assets/company-logo-3.jpg".to_string());
    let logo4 = logos
        .logo4
        .unwrap_or_else(|| "assets/company-logo-4.jpg".to_string());

    html! {
        <section class="relative min-h-[90vh] flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-background via-secondary/30 to-background"></div>

            <div class="container mx-auto px-4 md:px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 text-center lg:text-left">
                        <div class="inline-block">
                            <span class="px-4 py-2 rounded-full bg-primary/10 text-primary text-sm font-medium">
                                {"Smart. Sustainable. Simple."}
                            </span>
                        </div>

                        <div class="flex items-center gap-4 justify-center lg:justify-start">
                            <div class="flex -space-x-3">
                                <img src="assets/avatar-1.jpg" alt="Happy customer"
                                    class="w-12 h-12 rounded-full border-2 border-background object-cover" />
                                <img src="assets/avatar-2.jpg" alt="Happy customer"
                                    class="w-12 h-12 rounded-full border-2 border-background object-cover" />
                                <img src="assets/avatar-3.jpg" alt="Happy customer"
                                    class="w-12 h-12 rounded-full border-2 border-background object-cover" />
                                <img src="assets/avatar-4.jpg" alt="Happy customer"
                                    class="w-12 h-12 rounded-full border-2 border-background object-cover" />
                            </div>
                            <div class="text-left">
                                <div class="font-bold text-lg text-foreground">{"10,000+"}</div>
                                <div class="text-sm text-muted-foreground">{"Happy Users"}</div>
                            </div>
                            <div class="h-12 w-px bg-border"></div>
                            <div class="text-left">
                                <div class="font-bold text-lg text-foreground">{"50,000+"}</div>
                                <div class="text-sm text-muted-foreground">{"Pencils Saved"}</div>
                            </div>
                        </div>

                        {if let Some(err) = &error {
                            html! { <ContentWarning message={err.clone()} /> }
                        } else {
                            html! {}
                        }}

                        <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                            <span class="bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                                {&title}
                            </span>
                        </h1>

                        <p class="text-xl text-muted-foreground max-w-xl mx-auto lg:mx-0">
                            {&subtitle}
                        </p>

                        {if let Some(description) = &content.description {
                            html! {
                                <p class="text-lg text-muted-foreground max-w-xl mx-auto lg:mx-0 italic">
                                    {description}
                                </p>
                            }
                        } else {
                            html! {}
                        }}

                        {if !content.id.is_empty() {
                            html! {
                                <div class="text-sm text-muted-foreground">
                                    {"Page ID: "}
                                    <span class="font-mono">{&content.id}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <button class="btn btn-primary text-lg h-14 px-8 shadow-md hover:shadow-lg transition-all">
                                {&cta_primary}
                                {" →"}
                            </button>
                            <button class="btn btn-outline text-lg h-14 px-8">
                                {&cta_secondary}
                            </button>
                        </div>

                        <div class="pt-8">
                            <p class="text-sm text-muted-foreground mb-4">{"Trusted by leading companies"}</p>
                            <div class="flex items-center gap-8 justify-center lg:justify-start flex-wrap opacity-60 grayscale hover:grayscale-0 hover:opacity-100 transition-all duration-300">
                                <img src={logo1} alt="Tech company" class="h-8 object-contain" />
                                <img src={logo2} alt="Education company" class="h-8 object-contain" />
                                <img src={logo3} alt="Design studio" class="h-8 object-contain" />
                                <img src={logo4} alt="Creative agency" class="h-8 object-contain" />
                            </div>
                        </div>
                    </div>

                    <div class="relative">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl">
                            <img src={hero_image} alt="Product in use" class="w-full h-auto" />
                        </div>
                        <div class="absolute -bottom-4 -right-4 w-32 h-32 bg-primary/20 rounded-full blur-3xl"></div>
                        <div class="absolute -top-4 -left-4 w-32 h-32 bg-accent/20 rounded-full blur-3xl"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
