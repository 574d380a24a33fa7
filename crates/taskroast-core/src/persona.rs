//! Roast intensity levels and the personas they resolve to.

use serde::{Deserialize, Serialize};

/// How hard a user has asked to be roasted.
///
/// Stored per user as a lowercase tag. Tags that do not match a known level
/// resolve to [`RoastLevel::Gentle`] rather than failing, so a corrupted or
/// legacy value can never block a user's notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    /// Encouragement with a nudge.
    #[default]
    Gentle,
    /// Direct and demanding.
    Firm,
    /// Sarcastic and backhanded.
    Toxic,
    /// No mercy.
    Unhinged,
}

impl RoastLevel {
    /// Resolve a stored tag to a level.
    ///
    /// Matching is exact; anything unrecognized (including empty strings and
    /// differently-cased tags) falls back to `Gentle`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "gentle" => Self::Gentle,
            "firm" => Self::Firm,
            "toxic" => Self::Toxic,
            "unhinged" => Self::Unhinged,
            _ => Self::Gentle,
        }
    }

    /// The lowercase tag for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Firm => "firm",
            Self::Toxic => "toxic",
            Self::Unhinged => "unhinged",
        }
    }

    /// The fixed persona that conditions the model at this level.
    pub fn persona(self) -> &'static Persona {
        match self {
            Self::Gentle => &GENTLE,
            Self::Firm => &FIRM,
            Self::Toxic => &TOXIC,
            Self::Unhinged => &UNHINGED,
        }
    }
}

/// A fixed tone/role profile used to condition the generative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Role the model plays.
    pub role: &'static str,
    /// Personality traits, rendered verbatim into the prompt.
    pub traits: &'static str,
    /// What the roast should accomplish.
    pub instruction: &'static str,
}

impl Persona {
    /// Render the system-style instruction embedding role, traits, and goal.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a {}.\nYour personality is: {}.\nGoal: {}",
            self.role, self.traits, self.instruction
        )
    }
}

static GENTLE: Persona = Persona {
    role: "Supportive Life Coach",
    traits: "Empathetic, encouraging, uses 'we' phrasing.",
    instruction: "Remind them they are capable, but these tasks need love.",
};

static FIRM: Persona = Persona {
    role: "Strict Life Manager",
    traits: "Direct, no-nonsense, values efficiency over excuses.",
    instruction: "State that the current output is unacceptable and demand a completion timeline.",
};

static TOXIC: Persona = Persona {
    role: "The 'Friend' who hates you",
    traits: "Sarcastic, backhanded compliments, uses 'bless your heart' energy.",
    instruction: "Make it clear you expected them to fail, but in a motivating way",
};

static UNHINGED: Persona = Persona {
    role: "Chaos Entity",
    traits: "Brutal, deeply personal roasts, uses psychological warfare.",
    instruction: "Make them feel like their laziness is a generational curse. No mercy. Maximum damage.",
};
