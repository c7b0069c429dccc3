use yew::prelude::*;

use crate::api_client::content::{
    fetch_page_content_same_origin, page_id_from_location, PageContent, TestimonialPatch,
};
use crate::content::{
    default_testimonials, initials_from_name, Testimonial, DEFAULT_TESTIMONIALS_HEADLINE,
};

/// Merge a fetched document over the default testimonial list.
///
/// A non-empty `allTestimonials` replaces the list wholesale. Otherwise the
/// two named patch slots update the first and second defaults in place and
/// every later entry stays untouched.
fn resolve_testimonials(content: &PageContent) -> Vec<Testimonial> {
    if let Some(all) = &content.all_testimonials {
        if !all.is_empty() {
            return all.clone();
        }
    }

    let mut testimonials = default_testimonials();
    if let Some(patch) = &content.testimonial1 {
        apply_patch(&mut testimonials[0], patch);
    }
    if let Some(patch) = &content.testimonial2 {
        apply_patch(&mut testimonials[1], patch);
    }
    testimonials
}

fn apply_patch(slot: &mut Testimonial, patch: &TestimonialPatch) {
    if let Some(name) = &patch.name {
        slot.name = name.clone();
        // Patches carry no explicit initials; recompute from the name.
        slot.initials = initials_from_name(name);
    }
    if let Some(role) = &patch.role {
        slot.role = role.clone();
    }
    if let Some(avatar_url) = &patch.avatar_url {
        slot.avatar_url = Some(avatar_url.clone());
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let avatar = testimonial
        .profile_picture_url
        .clone()
        .or_else(|| testimonial.avatar_url.clone());

    html! {
        <div class="card bg-base-100 border-none shadow-sm hover:shadow-md transition-all duration-300">
            <div class="card-body p-6 space-y-4">
                <div class="flex gap-1 text-primary">
                    { for (0..testimonial.rating).map(|_| html! { <span>{"★"}</span> }) }
                </div>

                <p class="text-muted-foreground leading-relaxed">
                    {format!("\"{}\"", testimonial.content)}
                </p>

                <div class="flex items-center gap-3 pt-4 border-t">
                    <div class="h-10 w-10 rounded-full bg-primary/10 flex items-center justify-center overflow-hidden">
                        {match &avatar {
                            Some(url) => html! {
                                <img src={url.clone()} alt={testimonial.name.clone()}
                                    class="h-10 w-10 object-cover" />
                            },
                            None => html! {
                                <span class="text-primary font-semibold">{&testimonial.initials}</span>
                            },
                        }}
                    </div>
                    <div>
                        <div class="font-semibold text-sm">{&testimonial.name}</div>
                        <div class="text-xs text-muted-foreground">{&testimonial.role}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let headline = use_state(|| DEFAULT_TESTIMONIALS_HEADLINE.to_string());
    let testimonials = use_state(default_testimonials);

    {
        let headline = headline.clone();
        let testimonials = testimonials.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Without a page id there is nothing to override.
                let Some(page_id) = page_id_from_location() else {
                    return;
                };
                match fetch_page_content_same_origin(&page_id).await {
                    Ok(content) => {
                        if let Some(new_headline) = &content.testimonials_headline {
                            headline.set(new_headline.clone());
                        }
                        testimonials.set(resolve_testimonials(&content));
                    }
                    Err(e) => log::warn!("Error fetching testimonial content: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <section class="py-24 bg-background">
            <div class="container mx-auto px-4 md:px-6">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">{(*headline).clone()}</h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-7xl mx-auto">
                    { for testimonials.iter().map(|testimonial| html! {
                        <TestimonialCard testimonial={testimonial.clone()} />
                    })}
                </div>

                <div class="text-center mt-12">
                    <div class="inline-flex items-center gap-2 text-sm text-muted-foreground">
                        <span class="text-primary">{"★★★★★"}</span>
                        <span class="font-semibold text-foreground">{"4.9/5"}</span>
                        <span>{"from over 2,000 reviews"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_document_keeps_defaults() {
        let resolved = resolve_testimonials(&PageContent::default());
        assert_eq!(resolved, default_testimonials());
    }

    #[test]
    fn test_full_list_replaces_defaults_exactly() {
        let replacement = vec![Testimonial {
            name: "Robert Chen".to_string(),
            role: "Tech Entrepreneur".to_string(),
            content: "A brilliant little gadget.".to_string(),
            rating: 4,
            initials: "RC".to_string(),
            avatar_url: None,
            profile_picture_url: Some("https://example.com/robert.jpg".to_string()),
        }];
        let content = PageContent {
            all_testimonials: Some(replacement.clone()),
            // Patch slots must be ignored when a full list is present.
            testimonial1: Some(TestimonialPatch {
                name: Some("Ignored Person".to_string()),
                ..TestimonialPatch::default()
            }),
            ..PageContent::default()
        };

        assert_eq!(resolve_testimonials(&content), replacement);
    }

    #[test]
    fn test_empty_full_list_falls_through_to_patches() {
        let content = PageContent {
            all_testimonials: Some(Vec::new()),
            testimonial1: Some(TestimonialPatch {
                name: Some("Ada Lovelace".to_string()),
                ..TestimonialPatch::default()
            }),
            ..PageContent::default()
        };

        let resolved = resolve_testimonials(&content);
        assert_eq!(resolved[0].name, "Ada Lovelace");
    }

    #[test]
    fn test_patch_recomputes_initials_from_name() {
        let content = PageContent {
            testimonial1: Some(TestimonialPatch {
                name: Some("Ada Lovelace".to_string()),
                role: Some("Mathematician".to_string()),
                avatar_url: None,
            }),
            ..PageContent::default()
        };

        let resolved = resolve_testimonials(&content);
        assert_eq!(resolved[0].name, "Ada Lovelace");
        assert_eq!(resolved[0].initials, "AL");
        assert_eq!(resolved[0].role, "Mathematician");
        // Content and rating are not patchable; the defaults survive.
        assert_eq!(resolved[0].content, default_testimonials()[0].content);
    }

    #[test]
    fn test_patches_leave_later_entries_untouched() {
        let content = PageContent {
            testimonial1: Some(TestimonialPatch {
                name: Some("Alex Johnson".to_string()),
                ..TestimonialPatch::default()
            }),
            testimonial2: Some(TestimonialPatch {
                role: Some("Creative Director".to_string()),
                avatar_url: Some("https://example.com/maria.jpg".to_string()),
                ..TestimonialPatch::default()
            }),
            ..PageContent::default()
        };

        let resolved = resolve_testimonials(&content);
        let defaults = default_testimonials();

        assert_eq!(resolved[0].name, "Alex Johnson");
        assert_eq!(resolved[0].initials, "AJ");
        // Slot 2 patched the role only; the name and initials stay.
        assert_eq!(resolved[1].name, defaults[1].name);
        assert_eq!(resolved[1].initials, defaults[1].initials);
        assert_eq!(resolved[1].role, "Creative Director");
        assert_eq!(
            resolved[1].avatar_url.as_deref(),
            Some("https://example.com/maria.jpg")
        );
        assert_eq!(resolved[2..], defaults[2..]);
    }
}
