use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub features: Section<Feature>,
    pub steps: Section<Step>,
    pub demo: DemoContent,
    pub testimonials: Section<Testimonial>,
    pub plans: Section<Plan>,
    pub faqs: Section<FaqEntry>,
    pub cta: CtaContent,
    pub about: AboutContent,
    pub footer: FooterContent,
}

/// A titled list of cards.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Section<T> {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub items: Vec<T>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            items: Vec::new(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HeroContent {
    pub headline: String,
    pub tag: String,
    pub product: String,
    pub pitch: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub posts: Vec<SocialPost>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialPost {
    pub name: String,
    pub handle: String,
    pub body: String,
    pub footer: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DemoContent {
    pub title: String,
    pub file_name: String,
    pub preview_title: String,
    pub text: String,
    pub cta: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gray,
    Teal,
    Purple,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Gray => "accent-gray",
            Accent::Teal => "accent-teal",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    pub accent: Accent,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CtaContent {
    pub title: String,
    pub body: String,
    pub button: String,
    pub note: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    pub paragraphs: Vec<String>,
    pub values: Vec<Feature>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FooterContent {
    pub tagline: String,
    pub copyright: String,
}

pub fn parse(json: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(json)?;
    if content.testimonials.items.is_empty() {
        return Err(ContentError::NoTestimonials);
    }
    Ok(content)
}

/// The copy bundled into the binary.
pub fn load() -> Result<SiteContent, ContentError> {
    parse(SITE_JSON)
}

#[hook]
pub fn use_site_content() -> Rc<SiteContent> {
    use_context::<Rc<SiteContent>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = load().unwrap();
        assert_eq!(content.features.items.len(), 3);
        assert_eq!(content.steps.items.len(), 4);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.plans.items.len(), 3);
        assert_eq!(content.faqs.items.len(), 5);
        assert!(!content.demo.text.is_empty());
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        let content = load().unwrap();
        let popular: Vec<_> = content
            .plans
            .items
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name.as_str())
            .collect();
        assert_eq!(popular, ["Pro"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("{ not json"), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn rejects_empty_testimonials() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["testimonials"]["items"] = serde_json::json!([]);
        let json = value.to_string();
        assert!(matches!(parse(&json), Err(ContentError::NoTestimonials)));
    }

    #[test]
    fn initials_from_name() {
        let testimonial = Testimonial {
            name: "Priya Sharma".into(),
            role: "Content Creator".into(),
            quote: String::new(),
        };
        assert_eq!(testimonial.initials(), "PS");
    }
}
