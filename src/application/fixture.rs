//! Canned generation result.
//!
//! Served verbatim in fixture mode and used to derive the demo store
//! records, so the service is fully explorable without a model key.

use crate::domain::entities::{
    AiAnalysis, AiResponse, Currency, Faq, GeneratedOffer, LandingPageContent, OfferType,
    ReadinessLevel,
};

/// Builds the canned [`AiResponse`] for a demo productivity creator.
pub fn sample_response() -> AiResponse {
    AiResponse {
        analysis: AiAnalysis {
            creator_niche: "Productivity Systems for Neurodivergent Students & Professionals"
                .to_string(),
            audience_pain_points: vec![
                "Overwhelmed by complex tools".to_string(),
                "Difficulty maintaining consistency".to_string(),
                "Need for flexible, distraction-free structure".to_string(),
            ],
            monetization_readiness: ReadinessLevel::High,
        },
        generated_offers: vec![
            GeneratedOffer {
                offer_type: OfferType::DigitalProduct,
                title: "The 'Focus-First' Student Dashboard".to_string(),
                description: "A plug-and-play Notion template designed specifically for students \
                              with ADHD to track assignments without overwhelm."
                    .to_string(),
                target_audience: "University students struggling with organization".to_string(),
                suggested_price: 29.0,
                currency: Currency::Usd,
                reasoning: "Low-friction entry point that solves an immediate, painful problem \
                            (missing assignments) for your core audience."
                    .to_string(),
            },
            GeneratedOffer {
                offer_type: OfferType::Subscription,
                title: "The 'Life OS' Template Club".to_string(),
                description: "Monthly drops of new productivity modules (finance, meal prep, \
                              goal setting) plus a live monthly 'Reset & Plan' workshop."
                    .to_string(),
                target_audience: "Professionals wanting continuous system improvement".to_string(),
                suggested_price: 19.0,
                currency: Currency::Usd,
                reasoning: "Directly addresses your goal of recurring revenue by turning one-off \
                            template buyers into community members."
                    .to_string(),
            },
            GeneratedOffer {
                offer_type: OfferType::Service,
                title: "1-on-1 Workspace Audit".to_string(),
                description: "A 45-minute video call to review their current setup and provide a \
                              custom action plan for simplification."
                    .to_string(),
                target_audience: "Founders/Freelancers with messy workspaces".to_string(),
                suggested_price: 149.0,
                currency: Currency::Usd,
                reasoning: "High-ticket option to capture authority and serve the 'done-with-you' \
                            segment of your audience."
                    .to_string(),
            },
        ],
        selected_best_offer_index: 1,
        best_offer_landing_page: LandingPageContent {
            headline: "Stop Building Systems. Start Getting Things Done.".to_string(),
            subheadline: "Join the Life OS Template Club—your monthly productivity upgrade for a \
                          clearer mind and a cleaner workspace."
                .to_string(),
            value_bullets: vec![
                "New 'ADHD-Proof' Notion module dropped every month".to_string(),
                "Live 'Monthly Reset' calls to plan your month with Sarah".to_string(),
                "Access to a private community of focused professionals".to_string(),
                "Cancel anytime—keep the templates forever".to_string(),
            ],
            call_to_action: "Join the Club for $19/mo".to_string(),
            faqs: vec![
                Faq {
                    question: "Do I need to be a Notion expert using this?".to_string(),
                    answer: "Not at all. Every template is designed to be 'break-proof' and comes \
                             with a 5-minute setup video."
                        .to_string(),
                },
                Faq {
                    question: "What if I fall behind on the monthly updates?".to_string(),
                    answer: "There's no falling behind. Use what you need, ignore what you don't. \
                             All past modules are in your library."
                        .to_string(),
                },
                Faq {
                    question: "Can I use the templates on the free Notion plan?".to_string(),
                    answer: "Yes! All templates are 100% compatible with the free Personal plan."
                        .to_string(),
                },
            ],
            features: None,
        },
    }
}
