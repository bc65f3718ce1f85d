//! Static copy for the landing page.

use serde::Deserialize;
use thiserror::Error;

use crate::components::icons::IconKind;

const TESTIMONIALS_JSON: &str = include_str!("../assets/testimonials.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed testimonial data: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct HowItWorksStep {
    pub step: u32,
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
    pub avatar_url: String,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "How It Works", href: "#how-it-works" },
    NavLink { name: "Testimonials", href: "#testimonials" },
    NavLink { name: "FAQ", href: "#faq" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::VinScan,
        title: "Instant VIN Scanner",
        description: "Eliminate manual data entry. Scan a vehicle's VIN with your phone to instantly pull up its year, make, model, and trim.",
    },
    Feature {
        icon: IconKind::AiPricing,
        title: "AI-Powered Pricing",
        description: "Our smart algorithm analyzes the vehicle, selected services, and your business costs to recommend a profitable price every time.",
    },
    Feature {
        icon: IconKind::Quote,
        title: "Professional PDF Quotes",
        description: "Generate and send sleek, professional PDF quotes to your clients in seconds, complete with your branding and service details.",
    },
];

pub const HOW_IT_WORKS: &[HowItWorksStep] = &[
    HowItWorksStep {
        step: 1,
        icon: IconKind::VinScan,
        title: "Scan the VIN",
        description: "Use your device's camera to scan the vehicle's VIN barcode or enter it manually.",
    },
    HowItWorksStep {
        step: 2,
        icon: IconKind::AiPricing,
        title: "Select Services",
        description: "Choose from your pre-defined services and packages for the specific vehicle.",
    },
    HowItWorksStep {
        step: 3,
        icon: IconKind::Quote,
        title: "Generate Quote",
        description: "Our AI generates an accurate, profitable quote instantly. Review and send it to your customer.",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is Slick Solutions suitable for mobile detailers?",
        answer: "Absolutely! Slick Solutions is a web-based application, meaning you can access it from any device with an internet connection, including your smartphone or tablet. It's perfect for generating quotes on the go.",
    },
    FaqEntry {
        question: "Can I customize the services and pricing?",
        answer: "Yes, you have full control. You can create, edit, and price your own list of services and packages. The AI uses your custom pricing as a baseline to generate its recommendations, ensuring quotes are tailored to your business.",
    },
    FaqEntry {
        question: "What happens after the 14-day free trial?",
        answer: "After your free trial ends, you'll be prompted to choose a subscription plan that fits your needs. All the data and settings you configured during the trial will be saved and ready for you.",
    },
    FaqEntry {
        question: "How does the AI pricing work?",
        answer: "Our AI analyzes multiple data points, including the vehicle's make, model, age, trim level, the services you've selected, and your base pricing. It then compares this to market data to suggest a price that is both competitive and profitable for you.",
    },
    FaqEntry {
        question: "Do I need to install any software?",
        answer: "No installation is needed. Slick Solutions is a fully cloud-based SaaS application. Just sign up, log in through your web browser, and you're ready to start creating quotes.",
    },
];

pub fn parse_testimonials(raw: &str) -> Result<Vec<Testimonial>, ContentError> {
    Ok(serde_json::from_str(raw)?)
}

/// The bundled testimonial list, in display order.
pub fn testimonials() -> Result<Vec<Testimonial>, ContentError> {
    parse_testimonials(TESTIMONIALS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_testimonials_parse_in_order() {
        let items = testimonials().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].author, "Carlos Rodriguez");
        assert_eq!(items[2].company, "Thompson's Touch");
        assert!(items.iter().all(|t| t.avatar_url.starts_with("https://")));
    }

    #[test]
    fn camel_case_avatar_field_is_required() {
        let raw = r#"[{"quote":"q","author":"a","company":"c","avatar_url":"x"}]"#;
        assert!(matches!(
            parse_testimonials(raw),
            Err(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(parse_testimonials("[]").unwrap().is_empty());
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
        assert_eq!(HOW_IT_WORKS.iter().map(|s| s.step).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
