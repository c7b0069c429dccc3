use yew::prelude::*;

use crate::api_client::content::{fetch_page_content, page_id_from_location, PageContent};
use crate::content::{default_features, icon_glyph, Feature, DEFAULT_FEATURES_HEADLINE};

/// Collapse a fetched document onto the section's defaults. A present,
/// non-empty feature list replaces the grid wholesale; the headline is
/// overridden independently.
fn features_override(content: PageContent) -> (String, Vec<Feature>) {
    let headline = content
        .features_headline
        .unwrap_or_else(|| DEFAULT_FEATURES_HEADLINE.to_string());
    let features = content
        .features
        .filter(|list| !list.is_empty())
        .unwrap_or_else(default_features);
    (headline, features)
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <article class="card bg-base-100 border-none shadow-sm hover:shadow-md transition-all duration-300 hover:-translate-y-1">
            <div class="card-body p-6 space-y-4">
                <div class="w-14 h-14 rounded-xl bg-primary/10 flex items-center justify-center text-2xl">
                    {icon_glyph(&props.feature.icon)}
                </div>
                <h3 class="text-xl font-semibold">{&props.feature.title}</h3>
                <p class="text-muted-foreground">{&props.feature.description}</p>
            </div>
        </article>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let headline = use_state(|| DEFAULT_FEATURES_HEADLINE.to_string());
    let features = use_state(default_features);

    {
        let headline = headline.clone();
        let features = features.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Without a page id there is nothing to override.
                let Some(page_id) = page_id_from_location() else {
                    return;
                };
                match fetch_page_content(&page_id).await {
                    Ok(content) => {
                        let (new_headline, new_features) = features_override(content);
                        headline.set(new_headline);
                        features.set(new_features);
                    }
                    Err(e) => log::warn!("Error fetching feature content: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <section class="py-24 bg-secondary/50">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">{(*headline).clone()}</h2>
                    <p class="text-xl text-muted-foreground">
                        {"The smart solution for pencil lovers, artists, students, and anyone who values sustainability."}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for features.iter().map(|feature| html! {
                        <FeatureCard feature={feature.clone()} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_keeps_defaults() {
        let (headline, features) = features_override(PageContent::default());
        assert_eq!(headline, DEFAULT_FEATURES_HEADLINE);
        assert_eq!(features, default_features());
    }

    #[test]
    fn test_headline_overrides_independently() {
        let content = PageContent {
            features_headline: Some("Why Schools Love It".to_string()),
            ..PageContent::default()
        };
        let (headline, features) = features_override(content);
        assert_eq!(headline, "Why Schools Love It");
        assert_eq!(features, default_features());
    }

    #[test]
    fn test_feature_list_replaces_defaults() {
        let replacement = vec![Feature {
            icon: "Recycle".to_string(),
            title: "Less Waste".to_string(),
            description: "Every stub gets used.".to_string(),
        }];
        let content = PageContent {
            features: Some(replacement.clone()),
            ..PageContent::default()
        };
        let (_, features) = features_override(content);
        assert_eq!(features, replacement);
    }

    #[test]
    fn test_empty_feature_list_keeps_defaults() {
        let content = PageContent {
            features: Some(Vec::new()),
            ..PageContent::default()
        };
        let (_, features) = features_override(content);
        assert_eq!(features, default_features());
    }
}
