use serde::{Deserialize, Serialize};

/// A product feature card. `icon` is a symbolic name resolved through
/// [`icon_glyph`] at render time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A customer testimonial.
///
/// `profile_picture_url` is the snake_case field emitted by the upstream
/// enrichment pipeline; `avatarUrl` is the hand-authored slot. Both are
/// accepted and the pipeline one wins at render time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub initials: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, rename = "profile_picture_url")]
    pub profile_picture_url: Option<String>,
}

pub const DEFAULT_HERO_TITLE: &str = "Every Pencil Deserves a Second Life";
pub const DEFAULT_HERO_SUBTITLE: &str = "LambdaPen extends your short pencils, giving you \
    perfect grip and control. Write more, waste less, create endlessly.";
pub const DEFAULT_CTA_PRIMARY: &str = "Get Your LambdaPen";
pub const DEFAULT_CTA_SECONDARY: &str = "Learn More";
pub const DEFAULT_FEATURES_HEADLINE: &str = "Why Choose LambdaPen?";
pub const DEFAULT_TESTIMONIALS_HEADLINE: &str = "Testimonials";

/// Resolve a symbolic icon name to its display glyph. Unknown names fall
/// back to the sparkle so a bad document can never break rendering.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Recycle" => "♻️",
        "Grip" => "✊",
        "Wrench" => "🔧",
        "Sparkles" => "✨",
        _ => "✨",
    }
}

/// Derive display initials from a full name: first letter of each word,
/// uppercased, at most two characters.
pub fn initials_from_name(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// The benefit grid shown until (and unless) a document overrides it.
pub fn default_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "Recycle".to_string(),
            title: "Eco-Friendly".to_string(),
            description: "Reduce waste by extending the life of your pencils. Each LambdaPen \
                saves dozens of pencils from the trash."
                .to_string(),
        },
        Feature {
            icon: "Grip".to_string(),
            title: "Perfect Grip".to_string(),
            description: "Ergonomic design provides comfortable writing experience, even with \
                the shortest pencils."
                .to_string(),
        },
        Feature {
            icon: "Wrench".to_string(),
            title: "Universal Fit".to_string(),
            description: "Works with all standard pencils. Simple twist mechanism locks your \
                pencil securely in place."
                .to_string(),
        },
        Feature {
            icon: "Sparkles".to_string(),
            title: "Premium Quality".to_string(),
            description: "Crafted from durable aluminum with a smooth finish. Built to last \
                for years of daily use."
                .to_string(),
        },
    ]
}

/// The six reviews shown until (and unless) a document overrides them.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Mitchell".to_string(),
            role: "Artist & Illustrator".to_string(),
            content: "As an artist, I go through pencils quickly. LambdaPen has been a \
                game-changer - I can use every pencil down to the last inch. It's saved me \
                money and reduced waste significantly."
                .to_string(),
            rating: 5,
            initials: "SM".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
        Testimonial {
            name: "James Chen".to_string(),
            role: "Architecture Student".to_string(),
            content: "The grip is perfect for long sketching sessions. I used to throw away \
                perfectly good pencils just because they got too short. Not anymore! This is \
                brilliant engineering."
                .to_string(),
            rating: 5,
            initials: "JC".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
        Testimonial {
            name: "Emily Rodriguez".to_string(),
            role: "Elementary School Teacher".to_string(),
            content: "I bought these for my entire classroom. The kids love them, and we're \
                teaching sustainability in a practical way. Parents are asking where to get \
                them!"
                .to_string(),
            rating: 5,
            initials: "ER".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
        Testimonial {
            name: "Michael Thompson".to_string(),
            role: "Graphic Designer".to_string(),
            content: "Quality craftsmanship and it actually works as advertised. The aluminum \
                feels premium and the twist-lock mechanism is smooth. Worth every penny."
                .to_string(),
            rating: 5,
            initials: "MT".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
        Testimonial {
            name: "Lisa Park".to_string(),
            role: "Writer & Poet".to_string(),
            content: "I'm old-fashioned and love writing with pencils. LambdaPen lets me hold \
                onto my favorites longer. Simple, elegant solution to a real problem."
                .to_string(),
            rating: 5,
            initials: "LP".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
        Testimonial {
            name: "David Kumar".to_string(),
            role: "Engineering Student".to_string(),
            content: "Perfect for technical drawing. The balance is excellent even with short \
                pencils. My drafting work has never been more precise."
                .to_string(),
            rating: 5,
            initials: "DK".to_string(),
            avatar_url: None,
            profile_picture_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_two_word_name() {
        assert_eq!(initials_from_name("Ada Lovelace"), "AL");
    }

    #[test]
    fn test_initials_uppercase_and_truncate() {
        assert_eq!(initials_from_name("mary jane watson"), "MJ");
        assert_eq!(initials_from_name("Cher"), "C");
        assert_eq!(initials_from_name(""), "");
    }

    #[test]
    fn test_initials_ignore_extra_whitespace() {
        assert_eq!(initials_from_name("  Jean   Valjean  "), "JV");
    }

    #[test]
    fn test_icon_glyph_known_names() {
        assert_eq!(icon_glyph("Recycle"), "♻️");
        assert_eq!(icon_glyph("Grip"), "✊");
        assert_eq!(icon_glyph("Wrench"), "🔧");
        assert_eq!(icon_glyph("Sparkles"), "✨");
    }

    #[test]
    fn test_icon_glyph_unknown_name_falls_back() {
        assert_eq!(icon_glyph("Banana"), "✨");
        assert_eq!(icon_glyph(""), "✨");
    }

    #[test]
    fn test_default_content_invariants() {
        let features = default_features();
        assert_eq!(features.len(), 4);

        let testimonials = default_testimonials();
        assert_eq!(testimonials.len(), 6);
        for testimonial in &testimonials {
            assert!((1..=5).contains(&testimonial.rating));
            assert_eq!(testimonial.initials, initials_from_name(&testimonial.name));
        }
    }
}
