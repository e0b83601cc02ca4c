//! Reflection text keyed by theme.
//!
//! Tables that cover every theme return the text directly. Partial tables
//! return `Option` and pair with an accessor that substitutes the documented
//! default, so callers never render an empty string.

use crate::catalog::ThemeKey;

/// Shown when a theme has no communication style entry.
pub const NO_COMMUNICATION_STYLE: &str = "No communication style available.";
/// Shown in place of missing balcony or basement text.
pub const MISSING_TEXT: &str = "—";
/// Shown when a theme has no investment tips yet.
pub const NO_INVESTMENT_TIPS: &str =
    "Coming soon. Specific investment ideas for this theme will be added next.";
/// Blind-spot warning used when a theme has no basement text.
pub const OVERUSED_FALLBACK: &str = "May become overused.";

pub const COMMUNICATION_PROMPTS: [&str; 3] = [
    "When do you communicate best with this theme?",
    "What might others need from you to connect well?",
    "How could you flex your style for different settings?",
];

pub const BALCONY_BASEMENT_PROMPTS: [&str; 4] = [
    "When does this strength serve you most, and when does it get in your way?",
    "What signals tell you when you are edging into the basement?",
    "Who helps you stay in the balcony version of this strength?",
    "No judgement, just awareness. Where are you today?",
];

pub fn communication_style(key: ThemeKey) -> Option<&'static str> {
    let text = match key {
        ThemeKey::Achiever => "Gets to the point and likes conversations that end with a clear next step. Respects people who follow through.",
        ThemeKey::Activator => "Short, energetic and action first. Prefers 'let's try it' over long debate and may cut discussions short.",
        ThemeKey::Adaptability => "Relaxed and responsive. Reads the moment and adjusts tone easily, but may avoid committing to long plans.",
        ThemeKey::Analytical => "Asks for evidence and precise language. Wants claims backed up and can come across as sceptical.",
        ThemeKey::Arranger => "Talks in terms of who does what and how pieces fit. Comfortable rearranging the plan mid conversation.",
        ThemeKey::Belief => "Speaks from values and purpose. Most persuasive when the message connects to what truly matters.",
        ThemeKey::Command => "Direct, candid and clear. Says the hard thing others avoid and expects the same straightness back.",
        ThemeKey::Communication => "Storyteller who finds the right words and images. Enjoys an audience and thinks out loud.",
        ThemeKey::Competition => "Frames conversations around goals, scores and winning. Motivated by comparison and clear benchmarks.",
        ThemeKey::Connectedness => "Speaks to the bigger picture and shared meaning. Helps others see how their part links to the whole.",
        ThemeKey::Consistency => "Clear, even handed and rule based. Wants the same message for everyone and dislikes special cases.",
        ThemeKey::Context => "Starts with background and history. Needs to understand how we got here before discussing what is next.",
        ThemeKey::Deliberative => "Careful, measured and private. Thinks before speaking and names the risks others overlook.",
        ThemeKey::Developer => "Encouraging and patient. Notices small progress and gives feedback that helps people grow.",
        ThemeKey::Discipline => "Structured and precise. Prefers agendas, timelines and conversations that stay on track.",
        ThemeKey::Empathy => "Listens for feelings as much as facts. Picks up on mood and responds to what is unspoken.",
        ThemeKey::Focus => "Purposeful and concise. Brings conversations back to the goal and may resist tangents.",
        ThemeKey::Futuristic => "Paints vivid pictures of what could be. Energises others with possibilities and long range vision.",
        ThemeKey::Harmony => "Looks for agreement and practical common ground. Steers away from open conflict and heated debate.",
        ThemeKey::Ideation => "Jumps between concepts and makes unexpected connections. Loves brainstorming and new angles.",
        ThemeKey::Includer => "Makes sure everyone has a voice. Invites quieter people in and notices who has been left out.",
        ThemeKey::Individualization => "Tailors the message to each person. Pays attention to what makes this listener different.",
        ThemeKey::Input => "Shares articles, facts and resources. Asks lots of questions and enjoys collecting perspectives.",
        ThemeKey::Intellection => "Reflective and thoughtful. Prefers time to think and enjoys deep, philosophical conversation.",
        ThemeKey::Learner => "Curious and inquisitive. Asks how things work and enjoys conversations that teach something new.",
        ThemeKey::Maximizer => "Focuses on what is working and how to make it excellent. Has little patience for fixing weaknesses.",
        ThemeKey::Positivity => "Upbeat, warm and encouraging. Uses humour and praise to lift the energy in the room.",
        ThemeKey::Relator => "Open and genuine with people they trust. Prefers depth over small talk and one to one conversation.",
        ThemeKey::Responsibility => "Dependable and honest. Says what they will do and reports back when it is done.",
        ThemeKey::Restorative => "Problem focused. Listens for what is broken and moves quickly to solutions.",
        ThemeKey::SelfAssurance => "Confident and decisive. Speaks with conviction and trusts their own read of the situation.",
        ThemeKey::Significance => "Speaks about impact and recognition. Wants their contribution to be seen and to matter.",
        ThemeKey::Strategic => "Thinks in options and scenarios. Quickly sorts through alternatives and names the best route.",
        ThemeKey::Woo => "Warm, outgoing and quick to build rapport. Enjoys meeting new people and breaking the ice.",
    };
    Some(text)
}

pub fn communication_style_or_default(key: ThemeKey) -> &'static str {
    communication_style(key).unwrap_or(NO_COMMUNICATION_STYLE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalconyBasement {
    /// Mature, energising expression of the theme.
    pub balcony: &'static str,
    /// Overused or reactive expression of the same theme.
    pub basement: &'static str,
}

pub fn balcony_basement(key: ThemeKey) -> Option<BalconyBasement> {
    let (balcony, basement) = match key {
        ThemeKey::Achiever => (
            "Tireless, productive and a role model for getting things done.",
            "Can't switch off, measures worth by output and burns out.",
        ),
        ThemeKey::Activator => (
            "Gets things moving and turns talk into momentum.",
            "Impatient and impulsive, starting before the thinking is done.",
        ),
        ThemeKey::Adaptability => (
            "Flexible, calm under change and responsive to what is needed now.",
            "Reactive, hard to pin down and avoids planning ahead.",
        ),
        ThemeKey::Analytical => (
            "Logical, objective and rigorous about what is true.",
            "Cold, sceptical and stuck in analysis paralysis.",
        ),
        ThemeKey::Arranger => (
            "Orchestrates people and resources into a productive whole.",
            "Constantly reshuffles plans and confuses the people involved.",
        ),
        ThemeKey::Belief => (
            "Principled, purposeful and trustworthy.",
            "Rigid, preachy and judgemental of other values.",
        ),
        ThemeKey::Command => (
            "Provides clarity and takes charge in a crisis.",
            "Bossy, intimidating and dismissive of other views.",
        ),
        ThemeKey::Communication => (
            "Engaging, articulate and makes ideas come alive.",
            "Talks too much, dominates the room and forgets to listen.",
        ),
        ThemeKey::Competition => (
            "Driven to excel and raises the bar for everyone.",
            "Sore loser who turns colleagues into rivals.",
        ),
        ThemeKey::Connectedness => (
            "Builds bridges and gives others a sense of meaning.",
            "Passive, assuming things will work out without action.",
        ),
        ThemeKey::Consistency => (
            "Fair, predictable and creates a level playing field.",
            "Inflexible and blind to individual circumstances.",
        ),
        ThemeKey::Context => (
            "Learns from history and grounds decisions in experience.",
            "Stuck in the past and resistant to new approaches.",
        ),
        ThemeKey::Deliberative => (
            "Careful, wise and protects others from unnecessary risk.",
            "Overcautious, slow and reluctant to trust.",
        ),
        ThemeKey::Developer => (
            "Sees potential and patiently helps people grow.",
            "Keeps investing in people who are not growing.",
        ),
        ThemeKey::Discipline => (
            "Organised, efficient and dependable.",
            "Controlling, rigid and thrown by surprises.",
        ),
        ThemeKey::Empathy => (
            "You sense how others feel and help them feel understood.",
            "You absorb everyone's feelings and get emotionally drained.",
        ),
        ThemeKey::Focus => (
            "Sets priorities and keeps everyone on course.",
            "Tunnel vision that ignores people and new information.",
        ),
        ThemeKey::Futuristic => (
            "Inspires others with a compelling picture of tomorrow.",
            "Lives in the future and neglects what is needed today.",
        ),
        ThemeKey::Harmony => (
            "Finds common ground and keeps teams productive.",
            "Avoids conflict and suppresses honest disagreement.",
        ),
        ThemeKey::Ideation => (
            "Creative, original and sparks fresh thinking.",
            "Scattered, chasing new ideas without finishing any.",
        ),
        ThemeKey::Includer => (
            "Makes people feel welcome and part of the group.",
            "Includes everyone in everything and slows decisions down.",
        ),
        ThemeKey::Individualization => (
            "Brings out the best in each person by seeing what is unique.",
            "Struggles with group norms and makes too many exceptions.",
        ),
        ThemeKey::Input => (
            "Resourceful, knowledgeable and generous with information.",
            "Hoards information and gets lost in collecting.",
        ),
        ThemeKey::Intellection => (
            "Deep thinker who brings clarity to complex questions.",
            "Withdrawn, overthinking and slow to act.",
        ),
        ThemeKey::Learner => (
            "Curious, quick to master new areas and keeps growing.",
            "Learns for its own sake without applying it.",
        ),
        ThemeKey::Maximizer => (
            "Takes good to great by building on strengths.",
            "Never satisfied and dismissive of anything average.",
        ),
        ThemeKey::Positivity => (
            "Lifts spirits and brings energy to the group.",
            "Glosses over real problems with forced cheer.",
        ),
        ThemeKey::Relator => (
            "Builds deep, trusting relationships.",
            "Closed off to new people and forms cliques.",
        ),
        ThemeKey::Responsibility => (
            "Dependable and keeps every promise.",
            "Takes on too much and cannot say no.",
        ),
        ThemeKey::Restorative => (
            "Solves problems and brings things back to health.",
            "Only sees what is broken, in work and in people.",
        ),
        ThemeKey::SelfAssurance => (
            "Steady inner confidence that reassures others.",
            "Arrogant and unwilling to take advice.",
        ),
        ThemeKey::Significance => (
            "Aims high and makes a meaningful impact.",
            "Seeks recognition and makes everything about themself.",
        ),
        ThemeKey::Strategic => (
            "Sees the best path forward among many options.",
            "Dismisses ideas quickly and appears to have already decided.",
        ),
        ThemeKey::Woo => (
            "Breaks the ice and builds networks with ease.",
            "Superficial connections that lack depth.",
        ),
    };
    Some(BalconyBasement { balcony, basement })
}

pub fn balcony_text(key: ThemeKey) -> &'static str {
    balcony_basement(key).map_or(MISSING_TEXT, |bb| bb.balcony)
}

pub fn basement_text(key: ThemeKey) -> &'static str {
    balcony_basement(key).map_or(MISSING_TEXT, |bb| bb.basement)
}

/// Blind-spot warning shown on an overused fader.
pub fn blind_spot(key: ThemeKey) -> &'static str {
    balcony_basement(key)
        .map(|bb| bb.basement)
        .filter(|text| !text.is_empty())
        .unwrap_or(OVERUSED_FALLBACK)
}

/// What a theme contributes to a two-theme blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTraits {
    /// Short phrase describing what the theme brings, lower case, no trailing period.
    pub brings: &'static str,
    /// Up to two motivating traits.
    pub drivers: &'static [&'static str],
}

pub fn traits(key: ThemeKey) -> Option<ThemeTraits> {
    let traits = match key {
        ThemeKey::Achiever => ThemeTraits {
            brings: "steady momentum and a finished result",
            drivers: &["stamina", "a need to produce"],
        },
        ThemeKey::Activator => ThemeTraits {
            brings: "a fast start",
            drivers: &["urgency", "a bias for action"],
        },
        ThemeKey::Adaptability => ThemeTraits {
            brings: "calm responsiveness when plans change",
            drivers: &["flexibility", "presence in the moment"],
        },
        ThemeKey::Analytical => ThemeTraits {
            brings: "clear reasoning grounded in evidence",
            drivers: &["logic", "healthy scepticism"],
        },
        ThemeKey::Arranger => ThemeTraits {
            brings: "the right people in the right places",
            drivers: &["coordination", "flexible organising"],
        },
        ThemeKey::Belief => ThemeTraits {
            brings: "a sense of purpose everyone can trust",
            drivers: &["core values", "conviction"],
        },
        ThemeKey::Command => ThemeTraits {
            brings: "clarity and decisive direction",
            drivers: &["candour", "presence"],
        },
        ThemeKey::Communication => ThemeTraits {
            brings: "ideas people remember",
            drivers: &["storytelling", "expressive language"],
        },
        ThemeKey::Competition => ThemeTraits {
            brings: "a raised bar and a drive to win",
            drivers: &["benchmarking", "ambition"],
        },
        ThemeKey::Connectedness => ThemeTraits {
            brings: "meaning that links people together",
            drivers: &["faith in links between things", "a wider perspective"],
        },
        ThemeKey::Consistency => ThemeTraits {
            brings: "fairness and predictable standards",
            drivers: &["equity", "clear rules"],
        },
        ThemeKey::Context => ThemeTraits {
            brings: "lessons from the past",
            drivers: &["historical perspective", "pattern memory"],
        },
        ThemeKey::Deliberative => ThemeTraits {
            brings: "well judged, low risk decisions",
            drivers: &["vigilance", "careful judgement"],
        },
        ThemeKey::Developer => ThemeTraits {
            brings: "growth in the people around you",
            drivers: &["patience", "belief in potential"],
        },
        ThemeKey::Discipline => ThemeTraits {
            brings: "structure and reliable routines",
            drivers: &["order", "precision"],
        },
        ThemeKey::Empathy => ThemeTraits {
            brings: "emotional understanding",
            drivers: &["attunement", "compassion"],
        },
        ThemeKey::Focus => ThemeTraits {
            brings: "direction and follow through",
            drivers: &["prioritising", "goal orientation"],
        },
        ThemeKey::Futuristic => ThemeTraits {
            brings: "an inspiring picture of what could be",
            drivers: &["vision", "optimism about tomorrow"],
        },
        ThemeKey::Harmony => ThemeTraits {
            brings: "agreement and practical common ground",
            drivers: &["consensus seeking", "calm"],
        },
        ThemeKey::Ideation => ThemeTraits {
            brings: "fresh ideas and unexpected connections",
            drivers: &["creativity", "conceptual thinking"],
        },
        ThemeKey::Includer => ThemeTraits {
            brings: "a sense of belonging for everyone",
            drivers: &["acceptance", "widening the circle"],
        },
        ThemeKey::Individualization => ThemeTraits {
            brings: "approaches tailored to each person",
            drivers: &["noticing uniqueness", "customising"],
        },
        ThemeKey::Input => ThemeTraits {
            brings: "useful information and resources",
            drivers: &["curiosity", "collecting"],
        },
        ThemeKey::Intellection => ThemeTraits {
            brings: "depth of thought",
            drivers: &["reflection", "mental activity"],
        },
        ThemeKey::Learner => ThemeTraits {
            brings: "fast mastery of new ground",
            drivers: &["curiosity", "love of progress"],
        },
        ThemeKey::Maximizer => ThemeTraits {
            brings: "excellence built on what already works",
            drivers: &["quality", "a strengths focus"],
        },
        ThemeKey::Positivity => ThemeTraits {
            brings: "energy and encouragement",
            drivers: &["enthusiasm", "humour"],
        },
        ThemeKey::Relator => ThemeTraits {
            brings: "deep trust",
            drivers: &["authenticity", "loyalty"],
        },
        ThemeKey::Responsibility => ThemeTraits {
            brings: "dependable ownership",
            drivers: &["commitment", "integrity"],
        },
        ThemeKey::Restorative => ThemeTraits {
            brings: "problems put right",
            drivers: &["diagnosis", "resilience"],
        },
        ThemeKey::SelfAssurance => ThemeTraits {
            brings: "steady confidence under pressure",
            drivers: &["inner authority", "certainty"],
        },
        ThemeKey::Significance => ThemeTraits {
            brings: "ambitious, visible impact",
            drivers: &["a desire to matter", "independence"],
        },
        ThemeKey::Strategic => ThemeTraits {
            brings: "a clear route through complexity",
            drivers: &["pattern spotting", "option weighing"],
        },
        ThemeKey::Woo => ThemeTraits {
            brings: "new connections and easy rapport",
            drivers: &["charm", "social confidence"],
        },
    };
    Some(traits)
}

/// Coaching prompts for the "explore this theme" overlay.
pub fn coaching_questions(key: ThemeKey) -> &'static [&'static str] {
    match key {
        ThemeKey::Achiever => &[
            "What does a satisfying day look like for you?",
            "How do you know when you have done enough?",
            "Which wins have you moved past without celebrating?",
            "Where could you rest without feeling unproductive?",
            "Who helps you choose what not to do?",
        ],
        ThemeKey::Activator => &[
            "What are you itching to start right now?",
            "When has moving quickly paid off for you?",
            "When has starting early cost you?",
            "Who helps you check the direction before you go?",
            "How do you explain your urgency to others?",
        ],
        ThemeKey::Adaptability => &[
            "What kind of change energises you?",
            "Where do you need a little more planning?",
            "How do you stay steady when others feel thrown?",
            "When has going with the flow let you down?",
            "Who benefits most from your calm?",
        ],
        ThemeKey::Analytical => &[
            "What question are you trying to answer right now?",
            "Which sources do you trust most, and why?",
            "When has your scepticism protected a decision?",
            "When is good enough evidence enough?",
            "How do you share your reasoning without sounding critical?",
        ],
        ThemeKey::Arranger => &[
            "Which moving pieces are you juggling today?",
            "How do you decide who fits where?",
            "When has a rearrangement surprised people?",
            "How do you keep others informed when plans shift?",
            "What project would let you orchestrate at full scale?",
        ],
        ThemeKey::Belief => &[
            "Which values guide your biggest decisions?",
            "Where does your work feel most meaningful?",
            "How do you respond when others hold different values?",
            "When have you stood by a value at a cost?",
            "How could you make your values more visible?",
        ],
        ThemeKey::Command => &[
            "When do people look to you to take charge?",
            "How do you deliver hard messages with care?",
            "Whose input do you actively invite?",
            "When has your directness helped most?",
            "How might your presence feel to someone junior?",
        ],
        ThemeKey::Communication => &[
            "Which story do you tell most often, and why?",
            "When do your words land best?",
            "How do you know when to stop talking?",
            "What message needs a clearer voice right now?",
            "How do you practise listening?",
        ],
        ThemeKey::Competition => &[
            "Who or what are you measuring yourself against?",
            "How do you recover from a loss?",
            "Where could competing with yourself work better?",
            "How do you keep rivalry healthy in a team?",
            "What would winning look like this quarter?",
        ],
        ThemeKey::Connectedness => &[
            "Where do you see links others miss?",
            "What gives you a sense of being part of something bigger?",
            "How do you help a team see the whole picture?",
            "When does trusting the process become passivity?",
            "What practice keeps you grounded?",
        ],
        ThemeKey::Consistency => &[
            "Which rules matter most to you, and why?",
            "When is an exception the fair choice?",
            "How do you make standards clear to others?",
            "Where have you levelled the playing field?",
            "Who helps you flex when situations differ?",
        ],
        ThemeKey::Context => &[
            "Which past experience shapes how you work today?",
            "What history does your team need to hear?",
            "When has looking back helped you move forward?",
            "How do you stay open to new approaches?",
            "What would you like to understand the origins of?",
        ],
        ThemeKey::Deliberative => &[
            "Which risks are you watching right now?",
            "How do you decide when you have thought enough?",
            "When has your caution saved the day?",
            "How do you explain your pace to faster colleagues?",
            "Who do you trust with your early thinking?",
        ],
        ThemeKey::Developer => &[
            "Whose growth are you most proud of?",
            "What small progress have you noticed this week?",
            "How do you decide where to invest your support?",
            "Who is investing in your development?",
            "When does helping become carrying?",
        ],
        ThemeKey::Discipline => &[
            "Which routines keep you at your best?",
            "How do you handle surprises to your plan?",
            "Where could structure help someone else?",
            "When does order become control?",
            "What would you simplify first?",
        ],
        ThemeKey::Empathy => &[
            "What emotions are you noticing in your team lately?",
            "How do you look after yourself after heavy conversations?",
            "When has sensing a mood changed your approach?",
            "How do you check that your read is accurate?",
            "Where do you need a firmer boundary?",
        ],
        ThemeKey::Focus => &[
            "What is the one goal that matters most right now?",
            "How do you say no to distractions?",
            "When has a detour turned out to be valuable?",
            "How do you share priorities with others?",
            "What measure tells you that you are on track?",
        ],
        ThemeKey::Futuristic => &[
            "What future excites you most?",
            "How do you bring others into your vision?",
            "Which step today moves that future closer?",
            "Who helps you ground big ideas in the present?",
            "How vividly can you describe five years from now?",
        ],
        ThemeKey::Harmony => &[
            "Where is there agreement others have not noticed?",
            "When is conflict worth having?",
            "How do you keep a discussion practical?",
            "What disagreement have you been avoiding?",
            "Who helps you voice a difficult view?",
        ],
        ThemeKey::Ideation => &[
            "Which idea has been on your mind this week?",
            "How do you capture ideas before they fade?",
            "Who helps you turn ideas into action?",
            "When have unrelated ideas combined into something useful?",
            "Which idea deserves to be finished?",
        ],
        ThemeKey::Includer => &[
            "Who might be feeling left out right now?",
            "How do you welcome someone new?",
            "When is a smaller group the better choice?",
            "Whose voice needs amplifying?",
            "How do you include people without slowing decisions?",
        ],
        ThemeKey::Individualization => &[
            "What makes each person on your team unique?",
            "How do you tailor feedback to the person?",
            "When do group norms matter more than individual needs?",
            "How do you explain fairness when treating people differently?",
            "Which match of person and task are you proud of?",
        ],
        ThemeKey::Input => &[
            "What have you collected recently that others could use?",
            "How do you organise what you gather?",
            "When does collecting become avoiding action?",
            "Who benefits most from your resources?",
            "What are you curious about right now?",
        ],
        ThemeKey::Intellection => &[
            "What question are you turning over at the moment?",
            "When do you get your best thinking time?",
            "How do you share half formed thoughts?",
            "When does reflection need to become action?",
            "Who enjoys thinking deeply alongside you?",
        ],
        ThemeKey::Learner => &[
            "What are you learning right now?",
            "How do you learn best?",
            "How do you apply what you learn?",
            "Which learning milestone deserves a celebration?",
            "Where could you help others learn?",
        ],
        ThemeKey::Maximizer => &[
            "What is already good that could become excellent?",
            "How do you decide where excellence matters?",
            "When is good enough the right standard?",
            "Whose strengths could you help develop?",
            "How do you explain your strengths focus to others?",
        ],
        ThemeKey::Positivity => &[
            "What are you looking forward to?",
            "How do you lift a discouraged colleague?",
            "When does optimism need to make room for concern?",
            "What would you like to celebrate this week?",
            "Who refuels your energy?",
        ],
        ThemeKey::Relator => &[
            "Which relationships energise you most?",
            "How do you build trust with someone new?",
            "When has honesty strengthened a relationship?",
            "Who might you be keeping at a distance?",
            "How do you stay connected when life gets busy?",
        ],
        ThemeKey::Responsibility => &[
            "What commitments are you carrying right now?",
            "When did you last say no?",
            "How do you ask for help?",
            "What completion deserves to be celebrated?",
            "Which promise could you hand to someone else?",
        ],
        ThemeKey::Restorative => &[
            "What problem are you itching to solve?",
            "How do you know when something is fixed?",
            "When could you let others solve their own problems?",
            "How do you notice what is working as well as what is broken?",
            "What would you restore first if you had a free week?",
        ],
        ThemeKey::SelfAssurance => &[
            "When do you trust your instinct most?",
            "Whose advice do you actively seek?",
            "How does your confidence reassure others?",
            "When has certainty led you astray?",
            "What decision are you confident about right now?",
        ],
        ThemeKey::Significance => &[
            "What impact do you want to be known for?",
            "Whose recognition matters most to you?",
            "How do you recognise the contributions of others?",
            "When does wanting to matter get in the way?",
            "What ambitious goal are you working towards?",
        ],
        ThemeKey::Strategic => &[
            "What options are you weighing right now?",
            "How do you explain the route you have chosen?",
            "When have you changed course, and why?",
            "Who helps you act once the path is clear?",
            "How do you bring others along your thinking?",
        ],
        ThemeKey::Woo => &[
            "Who did you meet recently that you want to stay in touch with?",
            "How do you turn new contacts into real relationships?",
            "When does winning people over feel draining?",
            "Which introductions could you make for others?",
            "How do you deepen a few key relationships?",
        ],
    }
}

/// One line per selected theme with tips: `• Name: first tip`.
pub fn combined_investment_focus(selected: &[ThemeKey]) -> Vec<String> {
    selected
        .iter()
        .filter_map(|key| {
            investment_tips(*key)
                .and_then(|tips| tips.first())
                .map(|first| format!("• {}: {}", key.name(), first))
        })
        .collect()
}

pub fn investment_tips(key: ThemeKey) -> Option<&'static [&'static str]> {
    let tips: &'static [&'static str] = match key {
        ThemeKey::Achiever => &[
            "Choose roles where you can set your own pace and measure productivity.",
            "Partner with Discipline or Focus to use energy efficiently.",
            "Celebrate wins before moving to the next goal.",
            "Give yourself permission to 'do' while resting.",
        ],
        ThemeKey::Activator => &[
            "Seek work that allows fast decisions and independent action.",
            "Ensure people evaluate you on outcomes, not process.",
            "Avoid activity for activity's sake; clarify purpose.",
            "Prepare explanations for why quick decisions help learning.",
        ],
        ThemeKey::Adaptability => &[
            "Choose roles requiring responsiveness to change.",
            "Practise your first three moves under pressure.",
            "Partner with Focus or Strategic for long term planning.",
            "Clarify expectations to prevent misunderstandings.",
        ],
        ThemeKey::Analytical => &[
            "Identify credible data sources you can rely on.",
            "Connect with skilled analysts in your field.",
            "Partner with Activator to move from analysis to action.",
            "Check insights with Strategic, Belief or Empathy people.",
        ],
        ThemeKey::Arranger => &[
            "Seek dynamic work environments with constant change.",
            "Learn the goals of colleagues to improve alignment.",
            "Organise large events or initiatives.",
            "Explain that flexibility is about improving implementation, not shifting priorities.",
        ],
        ThemeKey::Belief => &[
            "Clarify personal values by reflecting on peak days.",
            "Give voice to values so others understand your motivations.",
            "Seek purpose driven organisations.",
            "Accept differing values without judgement.",
        ],
        ThemeKey::Command => &[
            "Practise assertive language that creates positive change.",
            "Help colleagues commit to action.",
            "Advocate for causes you believe in.",
            "Invite others' opinions to counter perceived intensity.",
        ],
        ThemeKey::Communication => &[
            "Seek roles where attention capturing communication is valued.",
            "Collect stories and metaphors to use in speaking.",
            "Champion meaningful causes with your voice.",
            "Practise listening by paraphrasing what you hear.",
        ],
        ThemeKey::Competition => &[
            "Choose environments with clear performance metrics.",
            "Identify peers to benchmark against.",
            "Gamify tasks to increase motivation.",
            "Create strategies for handling losses productively.",
        ],
        ThemeKey::Connectedness => &[
            "Consider roles involving listening and counsel.",
            "List experiences that reinforce your sense of meaning.",
            "Help teams see the bigger picture.",
            "Partner with Communication to express connections clearly.",
        ],
        ThemeKey::Consistency => &[
            "Seek roles supporting fairness and equal access.",
            "Create your personal 'rules of consistency'.",
            "Partner with Maximizer or Individualization to flex when needed.",
            "Build relationships with people who respect follow through.",
        ],
        ThemeKey::Context => &[
            "Encourage teams to reflect on past lessons.",
            "Partner with Futuristic or Strategic for future balance.",
            "Show that Context supports positive change.",
            "Study histories and origins to deepen expertise.",
        ],
        ThemeKey::Deliberative => &[
            "Help others think through decisions.",
            "Partner with Command or Activator for balanced decision making.",
            "Explain your process to avoid appearing hesitant.",
            "Reflect on times when your instincts were accurate.",
        ],
        ThemeKey::Developer => &[
            "List people you have helped grow to reinforce impact.",
            "Partner with Individualization to target the right opportunities.",
            "Seek roles involving teaching, coaching or mentoring.",
            "Thank those who invested in your own development.",
        ],
        ThemeKey::Discipline => &[
            "Check work regularly to satisfy your need for accuracy.",
            "Help others add structure without imposing.",
            "Judge others on results, not process.",
            "Seek roles involving systems, routines and organisation.",
        ],
        ThemeKey::Empathy => &[
            "Practise naming emotions, yours and others'.",
            "Check your emotional read with trusted people.",
            "Strengthen non verbal communication skills.",
            "Set boundaries so empathy does not turn into over involvement.",
        ],
        ThemeKey::Focus => &[
            "Attach timelines and measurements to goals.",
            "Share goals with leaders to gain autonomy.",
            "Identify role models for goal setting.",
            "Allow others detours, they may lead to new insights.",
        ],
        ThemeKey::Futuristic => &[
            "Schedule time for thinking about the future.",
            "Find audiences who value your vision.",
            "Use vivid detail when describing future possibilities.",
            "Partner with Activator to turn vision into action.",
        ],
        ThemeKey::Ideation => &[
            "Make small changes regularly to stay stimulated.",
            "Join brainstorming sessions.",
            "Partner with Activator to implement ideas.",
            "Read widely to fuel creativity.",
        ],
        ThemeKey::Includer => &[
            "Choose people focused roles.",
            "Represent unheard voices.",
            "Help newcomers feel involved.",
            "Partner with Harmony or Command when exclusion is necessary.",
        ],
        ThemeKey::Individualization => &[
            "Ask questions that highlight uniqueness.",
            "Teach others why customised approaches matter.",
            "Demonstrate that fairness and individuality can coexist.",
            "Explain your perspective to help others understand nuance.",
        ],
        ThemeKey::Input => &[
            "Seek roles involving constant learning.",
            "Schedule reading time.",
            "Share collected insights with others.",
            "Partner with Focus or Discipline to avoid distraction.",
        ],
        ThemeKey::Intellection => &[
            "Schedule thinking time.",
            "Write to crystallise your thoughts.",
            "Build relationships with big thinkers.",
            "Explain why introspection is productive.",
        ],
        ThemeKey::Learner => &[
            "Choose fields with frequent change.",
            "Refine your learning method.",
            "Be a catalyst for change.",
            "Track and celebrate learning milestones.",
        ],
        ThemeKey::Maximizer => &[
            "Refine your strengths through practice.",
            "Use strengths outside work to support your mission.",
            "Explain your strengths based focus to others.",
            "Seek roles helping others succeed.",
        ],
        ThemeKey::Positivity => &[
            "Use your energy to lift discouraged people.",
            "Collect stories and sayings that inspire.",
            "Plan celebratory moments for teams.",
            "Surround yourself with people who share joy.",
        ],
        ThemeKey::Relator => &[
            "Show trust to build trust.",
            "Stay connected to your closest relationships.",
            "Develop a constructive honesty style.",
            "Seek workplaces encouraging authenticity.",
        ],
        ThemeKey::Responsibility => &[
            "Communicate your need for independence.",
            "Celebrate completions.",
            "Practise saying no intentionally.",
            "Partner with Discipline or Focus to avoid overload.",
        ],
        ThemeKey::Restorative => &[
            "Choose roles centred on problem solving.",
            "Let others know you enjoy fixing things.",
            "Redirect self criticism into developing skills.",
            "Allow others space to solve their own problems.",
        ],
        ThemeKey::SelfAssurance => &[
            "Seek start up or decision heavy roles.",
            "Trust and refine your internal compass.",
            "Partner with Strategic or Deliberative to evaluate goals.",
            "Offer reassurance to others.",
        ],
        ThemeKey::Significance => &[
            "Reflect on praise that motivated you.",
            "Share dreams with trusted people.",
            "Choose roles with autonomy.",
            "Encourage others by noticing their impact.",
        ],
        ThemeKey::Strategic => &[
            "Practise mapping alternative routes to a goal.",
            "Volunteer to help teams choose between options.",
            "Use scenario planning to test paths.",
            "Pair with Activator or Achiever to move the chosen path forward.",
        ],
        ThemeKey::Woo => &[
            "Seek roles with regular people contact.",
            "Help others break the ice in new groups.",
            "Use your network to connect people and ideas.",
            "Balance breadth of relationships with a few deeper ones.",
        ],
        ThemeKey::Harmony => return None,
    };
    Some(tips)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn complete_tables_cover_every_theme() {
        for key in ThemeKey::ALL {
            assert!(communication_style(key).is_some(), "{key}");
            assert!(balcony_basement(key).is_some(), "{key}");
            let traits = traits(key).expect("traits");
            assert!(!traits.brings.is_empty());
            assert!(!traits.drivers.is_empty() && traits.drivers.len() <= 2);
            assert!(coaching_questions(key).len() >= 4, "{key}");
        }
    }

    #[test]
    fn harmony_has_no_tips_yet() {
        assert_eq!(investment_tips(ThemeKey::Harmony), None);
        assert_eq!(investment_tips(ThemeKey::Woo).map(<[_]>::len), Some(4));
    }

    #[test]
    fn combined_focus_skips_themes_without_tips() {
        let lines = combined_investment_focus(&[
            ThemeKey::Achiever,
            ThemeKey::Harmony,
            ThemeKey::SelfAssurance,
        ]);
        assert_eq!(
            lines,
            vec![
                "• Achiever: Choose roles where you can set your own pace and measure productivity."
                    .to_string(),
                "• Self-Assurance: Seek start up or decision heavy roles.".to_string(),
            ]
        );
    }

    #[test]
    fn blind_spot_reads_basement_text() {
        assert_eq!(
            blind_spot(ThemeKey::Empathy),
            "You absorb everyone's feelings and get emotionally drained."
        );
    }
}
