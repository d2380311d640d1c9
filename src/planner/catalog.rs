//! Fixed content catalogs

/// Landing pages every generated link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Quiz,
    LongevityDrugs,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Quiz => "/quiz",
            Destination::LongevityDrugs => "/longevity-drugs",
        }
    }

    pub fn url(self, brand_url: &str) -> String {
        format!("{}{}", brand_url, self.path())
    }

    /// Even days send traffic to the quiz, odd days to the LOY-002 hub
    pub fn for_day(index: usize) -> Self {
        if index % 2 == 0 {
            Destination::Quiz
        } else {
            Destination::LongevityDrugs
        }
    }
}

pub const HOOK_CTA: &str = "Take the free 60-second quiz";

/// (angle, hook) pairs, one per day of the week in order
pub const HOOK_ANGLES: [(&str, &str); 7] = [
    (
        "Emotional",
        "More good days together start with better tracking.",
    ),
    (
        "Clinical",
        "Early changes are easier to catch than late-stage decline.",
    ),
    (
        "LOY-002",
        "Build a baseline now so future treatment decisions are smarter.",
    ),
    (
        "Practical",
        "Track appetite, mobility, sleep, and stool in one place.",
    ),
    ("Trust", "Bring cleaner trend data to your next vet visit."),
    (
        "Breed-Specific",
        "Senior large breeds age differently. Track what matters early.",
    ),
    (
        "Urgency",
        "A small trend today can prevent a bigger issue next month.",
    ),
];

pub const FACEBOOK_GROUP_PROMPT: &str = "Senior dog owners: what changes have you noticed first as your dog aged? \
     Tracking daily signals helps spot patterns earlier. Free tool: ";

pub struct AdVariantTemplate {
    pub name: &'static str,
    pub audience: &'static str,
    pub creative_direction: &'static str,
    pub primary_text: &'static str,
    pub headline: &'static str,
    pub cta_label: &'static str,
    pub destination: Destination,
}

pub const AD_VARIANTS: [AdVariantTemplate; 5] = [
    AdVariantTemplate {
        name: "emotional_variant_a",
        audience: "Senior dog owners 35-65 US",
        creative_direction:
            "Owner + senior dog bond moment, warm home light, high contrast headline",
        primary_text: "You are not late. Tracking today can protect more good days ahead.",
        headline: "More good days together",
        cta_label: "Take Quiz",
        destination: Destination::Quiz,
    },
    AdVariantTemplate {
        name: "evidence_variant_b",
        audience: "Senior dog owners interested in longevity research",
        creative_direction: "Simple chart motif + calm clinical palette, no fear tactics",
        primary_text: "Daily baseline tracking helps you catch subtle changes earlier.",
        headline: "Early signals matter",
        cta_label: "Check Readiness",
        destination: Destination::Quiz,
    },
    AdVariantTemplate {
        name: "loy002_variant_c",
        audience: "Owners searching LOY-002 updates",
        creative_direction:
            "Clean productless informational card with LOY-002 timeline framing",
        primary_text: "LOY-002 timelines may move fast. Build your dog's baseline before approval windows shift.",
        headline: "Plan before it is urgent",
        cta_label: "View LOY-002 Hub",
        destination: Destination::LongevityDrugs,
    },
    AdVariantTemplate {
        name: "vet_ready_variant_d",
        audience: "Owners who value practical vet prep",
        creative_direction: "Checklist-style visual: appetite, mobility, sleep, stool",
        primary_text: "Bring trend data to your next vet visit instead of trying to remember details.",
        headline: "Walk into appointments prepared",
        cta_label: "Start Tracking",
        destination: Destination::Quiz,
    },
    AdVariantTemplate {
        name: "breed_variant_e",
        audience: "Large-breed senior owners",
        creative_direction: "Senior golden/lab outdoors, bold text overlay, soft teal accent",
        primary_text: "Large breeds often show decline differently. Start your baseline now.",
        headline: "Large breeds need earlier signals",
        cta_label: "Get Score",
        destination: Destination::Quiz,
    },
];
