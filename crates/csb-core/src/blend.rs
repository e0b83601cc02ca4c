//! Narratives for a pair of wheel themes.
//!
//! Blend mode produces a short rule-based interpretation; reflect mode shows
//! both descriptions next to a fixed set of open questions whose answers are
//! stored per pair.

use std::fmt::Write as _;

use crate::catalog::Theme;
use crate::catalog::ThemeKey;
use crate::guides;
use crate::guides::ThemeTraits;
use crate::state::REFLECTION_QUESTION_COUNT;

pub const REFLECTION_QUESTIONS: [&str; REFLECTION_QUESTION_COUNT] = [
    "When have you seen these two themes working well together?",
    "Where do they pull in different directions for you?",
    "What does this combination make easy that others find hard?",
    "What is one small experiment to use this pairing more deliberately this week?",
];

const MIXED_DOMAINS: &str = "Different domains often create a broad, balanced blend, as long as you stay intentional about what leads.";
const SAME_DOMAIN: &str = "Same-domain blends can feel powerful and consistent, especially under pressure, but can become intense if overused.";

/// One theme's contribution to a blend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendSide {
    pub key: ThemeKey,
    pub display_name: String,
    pub brings: String,
    pub drivers: Vec<&'static str>,
}

impl BlendSide {
    pub fn new(key: ThemeKey) -> Self {
        Self::from_parts(key.theme(), guides::traits(key))
    }

    /// Builds a side from a theme and optional trait data. Without traits the
    /// blurb stands in for what the theme brings.
    pub fn from_parts(theme: &Theme, traits: Option<ThemeTraits>) -> Self {
        let (brings, drivers) = match traits {
            Some(traits) => (
                traits.brings.to_string(),
                traits.drivers.iter().take(2).copied().collect(),
            ),
            None => (blurb_phrase(theme.blurb), Vec::new()),
        };
        Self {
            key: theme.key,
            display_name: crate::catalog::with_trademark(theme.name),
            brings,
            drivers,
        }
    }

    fn driver_phrase(&self) -> String {
        match self.drivers.as_slice() {
            [] => self.brings.clone(),
            [only] => (*only).to_string(),
            [first, second, ..] => format!("{first} and {second}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendNarrative {
    pub title: String,
    pub headline: String,
    pub drivers: String,
    pub effect: String,
    pub domains: String,
    pub complement: &'static str,
    pub questions: [String; 2],
}

impl BlendNarrative {
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.headline);
        let _ = writeln!(out, "{}", self.drivers);
        let _ = writeln!(out, "{}", self.effect);
        let _ = writeln!(out, "{}", self.domains);
        let _ = writeln!(out, "{}", self.complement);
        let _ = writeln!(out);
        for question in &self.questions {
            let _ = writeln!(out, "- {question}");
        }
        out
    }
}

pub fn blend(a: ThemeKey, b: ThemeKey) -> BlendNarrative {
    blend_sides(&BlendSide::new(a), &BlendSide::new(b))
}

pub fn blend_sides(a: &BlendSide, b: &BlendSide) -> BlendNarrative {
    let (domain_a, domain_b) = (a.key.domain(), b.key.domain());
    BlendNarrative {
        title: format!("{} + {}", a.display_name, b.display_name),
        headline: format!(
            "{} and {} working together.",
            a.display_name, b.display_name
        ),
        drivers: format!(
            "This blend works by combining {} with {}.",
            a.driver_phrase(),
            b.driver_phrase()
        ),
        effect: format!(
            "In practice it brings {} alongside {}.",
            a.brings, b.brings
        ),
        domains: format!("Domains: {} + {}", domain_a.label(), domain_b.label()),
        complement: if domain_a == domain_b {
            SAME_DOMAIN
        } else {
            MIXED_DOMAINS
        },
        questions: [
            format!(
                "Where does {} help your {} land well?",
                a.display_name, b.display_name
            ),
            format!(
                "When might {} and {} pull against each other?",
                a.display_name, b.display_name
            ),
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectView {
    pub title: String,
    pub left: (String, &'static str),
    pub right: (String, &'static str),
    pub questions: &'static [&'static str; REFLECTION_QUESTION_COUNT],
}

pub fn reflect(a: ThemeKey, b: ThemeKey) -> ReflectView {
    ReflectView {
        title: format!("{} + {}", a.trademarked_name(), b.trademarked_name()),
        left: (a.trademarked_name(), a.theme().blurb),
        right: (b.trademarked_name(), b.theme().blurb),
        questions: &REFLECTION_QUESTIONS,
    }
}

// "You carry a drive." -> "you carry a drive"
fn blurb_phrase(blurb: &str) -> String {
    let trimmed = blurb.trim().trim_end_matches('.');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blend_names_both_themes_and_their_drivers() {
        let narrative = blend(ThemeKey::Achiever, ThemeKey::Activator);
        assert_eq!(narrative.title, "Achiever® + Activator®");
        assert!(narrative.headline.contains("Achiever®"));
        assert!(narrative.headline.contains("Activator®"));
        assert_eq!(
            narrative.drivers,
            "This blend works by combining stamina and a need to produce with urgency and a bias for action."
        );
        assert_eq!(
            narrative.effect,
            "In practice it brings steady momentum and a finished result alongside a fast start."
        );
        assert_eq!(narrative.complement, MIXED_DOMAINS);
        assert_eq!(
            blend(ThemeKey::Achiever, ThemeKey::Focus).complement,
            SAME_DOMAIN
        );
    }

    #[test]
    fn questions_depend_only_on_names() {
        let forward = blend(ThemeKey::Woo, ThemeKey::Focus);
        assert_eq!(
            forward.questions[0],
            "Where does Woo® help your Focus® land well?"
        );
        assert_eq!(forward.complement, MIXED_DOMAINS);
    }

    #[test]
    fn missing_traits_fall_back_to_blurb() {
        let theme = ThemeKey::Harmony.theme();
        let side = BlendSide::from_parts(theme, None);
        assert!(side.drivers.is_empty());
        assert!(!side.brings.is_empty());
        assert!(!side.brings.ends_with('.'));

        let narrative = blend_sides(&side, &BlendSide::new(ThemeKey::Focus));
        assert!(narrative.drivers.contains(side.brings.as_str()));
        assert!(narrative.effect.contains(side.brings.as_str()));
    }

    #[test]
    fn every_theme_produces_non_empty_narrative() {
        for key in ThemeKey::ALL {
            let narrative = blend(key, ThemeKey::Strategic);
            assert!(!narrative.drivers.contains("  "), "{key}");
            assert!(!narrative.effect.trim().is_empty(), "{key}");
        }
    }

    #[test]
    fn reflect_shows_blurbs_and_fixed_questions() {
        let view = reflect(ThemeKey::Input, ThemeKey::Relator);
        assert_eq!(view.left.0, "Input®");
        assert_eq!(view.right.1, ThemeKey::Relator.theme().blurb);
        assert_eq!(view.questions.len(), 4);
    }

    #[test]
    fn plain_text_lists_questions() {
        let text = blend(ThemeKey::Input, ThemeKey::Relator).to_plain_text();
        assert!(text.starts_with("Input® + Relator®\n"));
        assert_eq!(text.matches("\n- ").count(), 2);
    }
}
