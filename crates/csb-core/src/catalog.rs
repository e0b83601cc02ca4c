use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    Achiever,
    Activator,
    Adaptability,
    Analytical,
    Arranger,
    Belief,
    Command,
    Communication,
    Competition,
    Connectedness,
    Consistency,
    Context,
    Deliberative,
    Developer,
    Discipline,
    Empathy,
    Focus,
    Futuristic,
    Harmony,
    Ideation,
    Includer,
    Individualization,
    Input,
    Intellection,
    Learner,
    Maximizer,
    Positivity,
    Relator,
    Responsibility,
    Restorative,
    SelfAssurance,
    Significance,
    Strategic,
    Woo,
}

pub const THEME_COUNT: usize = 34;

impl ThemeKey {
    pub const ALL: [ThemeKey; THEME_COUNT] = [
        Self::Achiever,
        Self::Activator,
        Self::Adaptability,
        Self::Analytical,
        Self::Arranger,
        Self::Belief,
        Self::Command,
        Self::Communication,
        Self::Competition,
        Self::Connectedness,
        Self::Consistency,
        Self::Context,
        Self::Deliberative,
        Self::Developer,
        Self::Discipline,
        Self::Empathy,
        Self::Focus,
        Self::Futuristic,
        Self::Harmony,
        Self::Ideation,
        Self::Includer,
        Self::Individualization,
        Self::Input,
        Self::Intellection,
        Self::Learner,
        Self::Maximizer,
        Self::Positivity,
        Self::Relator,
        Self::Responsibility,
        Self::Restorative,
        Self::SelfAssurance,
        Self::Significance,
        Self::Strategic,
        Self::Woo,
    ];

    /// Stable storage identifier, the same string serde writes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Achiever => "achiever",
            Self::Activator => "activator",
            Self::Adaptability => "adaptability",
            Self::Analytical => "analytical",
            Self::Arranger => "arranger",
            Self::Belief => "belief",
            Self::Command => "command",
            Self::Communication => "communication",
            Self::Competition => "competition",
            Self::Connectedness => "connectedness",
            Self::Consistency => "consistency",
            Self::Context => "context",
            Self::Deliberative => "deliberative",
            Self::Developer => "developer",
            Self::Discipline => "discipline",
            Self::Empathy => "empathy",
            Self::Focus => "focus",
            Self::Futuristic => "futuristic",
            Self::Harmony => "harmony",
            Self::Ideation => "ideation",
            Self::Includer => "includer",
            Self::Individualization => "individualization",
            Self::Input => "input",
            Self::Intellection => "intellection",
            Self::Learner => "learner",
            Self::Maximizer => "maximizer",
            Self::Positivity => "positivity",
            Self::Relator => "relator",
            Self::Responsibility => "responsibility",
            Self::Restorative => "restorative",
            Self::SelfAssurance => "selfassurance",
            Self::Significance => "significance",
            Self::Strategic => "strategic",
            Self::Woo => "woo",
        }
    }

    /// Exact key lookup for stored and imported documents.
    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == raw)
    }

    /// Lenient lookup for typed input: trimmed, any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn theme(self) -> &'static Theme {
        theme(self)
    }

    pub fn name(self) -> &'static str {
        theme(self).name
    }

    pub fn domain(self) -> Domain {
        theme(self).domain
    }

    pub fn color(self) -> &'static str {
        theme(self).domain.color()
    }

    /// Display name with the registered mark, as used on the wheel and in reports.
    pub fn trademarked_name(self) -> String {
        with_trademark(self.name())
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme key: {0}")]
pub struct UnknownThemeKey(pub String);

impl FromStr for ThemeKey {
    type Err = UnknownThemeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownThemeKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Executing,
    Influencing,
    RelationshipBuilding,
    StrategicThinking,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Self::Executing,
        Self::Influencing,
        Self::RelationshipBuilding,
        Self::StrategicThinking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Executing => "Executing",
            Self::Influencing => "Influencing",
            Self::RelationshipBuilding => "Relationship Building",
            Self::StrategicThinking => "Strategic Thinking",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Executing => "#6A1B9A",
            Self::Influencing => "#EF6C00",
            Self::RelationshipBuilding => "#1565C0",
            Self::StrategicThinking => "#2E7D32",
        }
    }

    /// Colour as an RGB triple, for renderers that cannot take hex strings.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Executing => (0x6A, 0x1B, 0x9A),
            Self::Influencing => (0xEF, 0x6C, 0x00),
            Self::RelationshipBuilding => (0x15, 0x65, 0xC0),
            Self::StrategicThinking => (0x2E, 0x7D, 0x32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub key: ThemeKey,
    pub name: &'static str,
    pub blurb: &'static str,
    pub domain: Domain,
}

pub fn with_trademark(name: &str) -> String {
    format!("{name}®")
}

pub fn theme(key: ThemeKey) -> &'static Theme {
    // THEMES is declared in ThemeKey::ALL order.
    &THEMES[key as usize]
}

pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// Case-insensitive name search used by the picker. An empty query matches everything.
pub fn search(query: &str) -> Vec<ThemeKey> {
    let query = query.trim().to_lowercase();
    THEMES
        .iter()
        .filter(|theme| query.is_empty() || theme.name.to_lowercase().contains(&query))
        .map(|theme| theme.key)
        .collect()
}

const THEMES: [Theme; THEME_COUNT] = [
    Theme {
        key: ThemeKey::Achiever,
        name: "Achiever",
        blurb: "You carry a constant drive to get things done and feel satisfied by being busy and productive.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Activator,
        name: "Activator",
        blurb: "You turn thoughts into action and are impatient to get started rather than keep talking.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Adaptability,
        name: "Adaptability",
        blurb: "You go with the flow, live in the present and respond well to whatever each moment asks.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Analytical,
        name: "Analytical",
        blurb: "You search for reasons and causes and want ideas to hold up against the evidence.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Arranger,
        name: "Arranger",
        blurb: "You organise people and resources flexibly to find the most productive configuration.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Belief,
        name: "Belief",
        blurb: "You hold enduring core values that give your life meaning and direction.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Command,
        name: "Command",
        blurb: "You have presence, take charge and are comfortable making decisions others hesitate over.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Communication,
        name: "Communication",
        blurb: "You find it easy to put thoughts into words and bring ideas to life for others.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Competition,
        name: "Competition",
        blurb: "You measure your progress against others and strive to come out on top.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Connectedness,
        name: "Connectedness",
        blurb: "You believe things happen for a reason and see the links between people and events.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Consistency,
        name: "Consistency",
        blurb: "You value fairness and clear rules, and want people treated the same way.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Context,
        name: "Context",
        blurb: "You look to the past to understand the present and make better decisions.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Deliberative,
        name: "Deliberative",
        blurb: "You take serious care in decisions and anticipate the risks before you commit.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Developer,
        name: "Developer",
        blurb: "You see potential in others and enjoy helping them grow step by step.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Discipline,
        name: "Discipline",
        blurb: "You bring structure, routine and order to your world so that work gets done well.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Empathy,
        name: "Empathy",
        blurb: "You sense the feelings of others and can imagine yourself in their situation.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Focus,
        name: "Focus",
        blurb: "You set direction, follow through and stay on track toward the goal that matters.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Futuristic,
        name: "Futuristic",
        blurb: "You are inspired by what could be and energise others with your picture of the future.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Harmony,
        name: "Harmony",
        blurb: "You look for consensus and common ground, and prefer agreement to conflict.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Ideation,
        name: "Ideation",
        blurb: "You are fascinated by ideas and find connections between seemingly unrelated things.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Includer,
        name: "Includer",
        blurb: "You accept others readily and work to bring the people on the edge into the group.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Individualization,
        name: "Individualization",
        blurb: "You are intrigued by the unique qualities of each person and work with what makes them different.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Input,
        name: "Input",
        blurb: "You are curious and love to collect information, ideas and things that might be useful.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Intellection,
        name: "Intellection",
        blurb: "You enjoy thinking, reflecting and having time alone with your mind.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Learner,
        name: "Learner",
        blurb: "You love learning and the process of getting from not knowing to knowing excites you.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Maximizer,
        name: "Maximizer",
        blurb: "You focus on strengths to take people and work from good to excellent.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Positivity,
        name: "Positivity",
        blurb: "Your enthusiasm is contagious and you help others see what is good in a situation.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Relator,
        name: "Relator",
        blurb: "You enjoy close relationships and find satisfaction working with people you know well.",
        domain: Domain::RelationshipBuilding,
    },
    Theme {
        key: ThemeKey::Responsibility,
        name: "Responsibility",
        blurb: "You take ownership of what you say you will do and care about honesty and loyalty.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::Restorative,
        name: "Restorative",
        blurb: "You are good at figuring out what is wrong and putting it right.",
        domain: Domain::Executing,
    },
    Theme {
        key: ThemeKey::SelfAssurance,
        name: "Self-Assurance",
        blurb: "You trust your own judgement and feel confident in your ability to manage your life.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Significance,
        name: "Significance",
        blurb: "You want to make a big impact and be recognised as credible and important.",
        domain: Domain::Influencing,
    },
    Theme {
        key: ThemeKey::Strategic,
        name: "Strategic",
        blurb: "You quickly spot patterns and create alternative ways forward in any scenario.",
        domain: Domain::StrategicThinking,
    },
    Theme {
        key: ThemeKey::Woo,
        name: "Woo",
        blurb: "You love meeting new people and winning them over, breaking the ice with ease.",
        domain: Domain::Influencing,
    },
];
