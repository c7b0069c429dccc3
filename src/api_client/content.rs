use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api_client;
use crate::content::{Feature, Testimonial};

/// Remote override document for a landing page, keyed by page identifier.
///
/// Every field is optional on the wire; absent fields keep the compiled-in
/// defaults of whichever section reads the document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    #[serde(default)]
    pub id: String,
    pub product_name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub cta_primary: Option<String>,
    pub cta_secondary: Option<String>,
    pub hero_image_url: Option<String>,
    pub company_logos: Option<CompanyLogos>,
    pub features_headline: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub testimonials_headline: Option<String>,
    pub all_testimonials: Option<Vec<Testimonial>>,
    pub testimonial1: Option<TestimonialPatch>,
    pub testimonial2: Option<TestimonialPatch>,
}

/// Company logo slots for the hero's social-proof strip.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompanyLogos {
    pub logo1: Option<String>,
    pub logo2: Option<String>,
    pub logo3: Option<String>,
    pub logo4: Option<String>,
}

/// Partial update for a single default testimonial slot. Patches never
/// carry explicit initials; those are recomputed from the name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
}

/// Read the page identifier from the current URL's `id` query parameter.
/// An empty value counts as absent.
pub fn page_id_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("id").filter(|id| !id.is_empty())
}

/// Fetch a content document through the configured API origin.
pub async fn fetch_page_content(page_id: &str) -> Result<PageContent, String> {
    log::trace!("Fetching page content for id: {}", page_id);
    let result: Result<PageContent, String> =
        api_client::get(&format!("/content/{}", page_id)).await;
    match &result {
        Ok(content) => log::info!("Fetched page content: {}", content.id),
        Err(e) => log::error!("Failed to fetch page content for {}: {}", page_id, e),
    }
    result
}

/// Same-origin variant used by the testimonials section. The relative URL
/// works behind whatever host serves the bundle, bypassing the configured
/// API origin.
pub async fn fetch_page_content_same_origin(page_id: &str) -> Result<PageContent, String> {
    let url = format!("/api/content/{}", page_id);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_leaves_absent_fields_none() {
        let json = r#"{
            "id": "123456",
            "title": "Welcome to Your Custom Landing Page",
            "subtitle": "This content is loaded dynamically",
            "description": "You can customize this content for any ID you want!",
            "testimonial1": {
                "name": "Alex Johnson",
                "role": "Professional Designer",
                "avatarUrl": "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex"
            },
            "companyLogos": {
                "logo1": "https://logo.clearbit.com/google.com",
                "logo2": "https://logo.clearbit.com/microsoft.com"
            }
        }"#;

        let content: PageContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.id, "123456");
        assert_eq!(
            content.title.as_deref(),
            Some("Welcome to Your Custom Landing Page")
        );
        assert!(content.cta_primary.is_none());
        assert!(content.hero_image_url.is_none());
        assert!(content.features.is_none());
        assert!(content.all_testimonials.is_none());
        assert!(content.testimonial2.is_none());

        let patch = content.testimonial1.unwrap();
        assert_eq!(patch.name.as_deref(), Some("Alex Johnson"));
        assert_eq!(patch.role.as_deref(), Some("Professional Designer"));
        assert!(patch.avatar_url.is_some());

        let logos = content.company_logos.unwrap();
        assert!(logos.logo1.is_some());
        assert!(logos.logo3.is_none());
    }

    #[test]
    fn test_full_testimonial_list_parses() {
        let json = r#"{
            "id": "promo-2024",
            "testimonialsHeadline": "What Our Customers Say",
            "allTestimonials": [
                {
                    "name": "Robert Chen",
                    "role": "Tech Entrepreneur",
                    "content": "A brilliant little gadget.",
                    "rating": 5,
                    "initials": "RC",
                    "profile_picture_url": "https://example.com/robert.jpg"
                }
            ]
        }"#;

        let content: PageContent = serde_json::from_str(json).unwrap();
        let all = content.all_testimonials.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Robert Chen");
        assert_eq!(all[0].rating, 5);
        assert_eq!(
            all[0].profile_picture_url.as_deref(),
            Some("https://example.com/robert.jpg")
        );
        assert!(all[0].avatar_url.is_none());
    }

    #[test]
    fn test_missing_id_defaults_to_empty() {
        let content: PageContent = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(content.id, "");
        assert_eq!(content.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_feature_list_parses() {
        let json = r#"{
            "id": "education",
            "featuresHeadline": "Why Schools Love It",
            "features": [
                {"icon": "Recycle", "title": "Less Waste", "description": "Every stub gets used."},
                {"icon": "Banana", "title": "Odd One", "description": "Unknown icon name."}
            ]
        }"#;

        let content: PageContent = serde_json::from_str(json).unwrap();
        assert_eq!(
            content.features_headline.as_deref(),
            Some("Why Schools Love It")
        );
        let features = content.features.unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1].icon, "Banana");
    }
}
