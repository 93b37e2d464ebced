//! Static narrative interpretations, one per dominant style.
//!
//! Pure lookup over the closed [`DominantStyle`] enum; nothing here
//! personalizes the text with the respondent's actual scores.

use serde::Serialize;

use super::classifier::DominantStyle;

/// Interpretive text block for one classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NarrativeText {
    /// Section headline.
    pub headline: &'static str,
    /// Short profile bullets describing the style.
    pub profile: &'static [&'static str],
    /// What the style is good at.
    pub strengths: &'static str,
    /// Where the style tends to struggle.
    pub challenges: &'static str,
    /// Development advice.
    pub advice: &'static str,
}

static RATIONAL: NarrativeText = NarrativeText {
    headline: "You lean Rational in your decision-making",
    profile: &[
        "You trust facts, data, and logic more than hunches.",
        "You like breaking problems into parts that can be analyzed.",
        "You weigh long-term consequences and risk systematically.",
        "You feel uneasy deciding without enough information.",
    ],
    strengths: "Your decisions tend to be consistent, accountable, and low on \
emotional bias. This suits roles such as analyst, accountant, engineer, or \
project manager.",
    challenges: "You may over-analyze at times (analysis paralysis) or miss \
non-verbal signals and patterns that never show up explicitly in the data.",
    advice: "Practice listening to your body and feelings occasionally. Ask \
'What does my gut say?' even without a logical reason; it can surface \
creative options the data alone does not.",
};

static INTUITIVE: NarrativeText = NarrativeText {
    headline: "You lean Intuitive in your decision-making",
    profile: &[
        "You rely on feelings, patterns, and spontaneous insight when choosing.",
        "You often 'know' the answer before you can explain why.",
        "You work comfortably with uncertainty and incomplete information.",
        "You read meaning from the whole picture rather than the details.",
    ],
    strengths: "You are fast, adaptive, and often find innovative solutions an \
analytical approach would miss. This suits artists, entrepreneurs, \
counselors, and crisis leaders.",
    challenges: "Others may struggle to follow your decisions without a logical \
trail, and intuition can carry unconscious bias.",
    advice: "Validate your intuition with a quick fact check. Ask 'What small \
piece of evidence backs this feeling?'; it builds trust and improves \
accuracy.",
};

static BALANCED: NarrativeText = NarrativeText {
    headline: "You balance Rational and Intuitive decision-making",
    profile: &[
        "You switch between logical analysis and instant insight as the context demands.",
        "You are not locked into one approach; you pick the right tool for the situation.",
        "You combine head and heart without friction.",
    ],
    strengths: "You are highly adaptive: quick to act in a crisis, systematic \
in strategic planning. That range is rare and valuable.",
    challenges: "You may sometimes be unsure whether to follow logic or \
feeling, especially when the two signals conflict.",
    advice: "Build a personal rule of thumb: rational analysis for high-impact \
reversible decisions, intuition for low-impact decisions that need speed. \
Train the self-awareness to know which mode fits the moment.",
};

/// Resolves the narrative block for a classification outcome.
pub fn narrative(style: DominantStyle) -> &'static NarrativeText {
    match style {
        DominantStyle::Rational => &RATIONAL,
        DominantStyle::Intuitive => &INTUITIVE,
        DominantStyle::Balanced => &BALANCED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_resolves_to_distinct_text() {
        let rational = narrative(DominantStyle::Rational);
        let intuitive = narrative(DominantStyle::Intuitive);
        let balanced = narrative(DominantStyle::Balanced);

        assert_ne!(rational.headline, intuitive.headline);
        assert_ne!(intuitive.headline, balanced.headline);
        assert_ne!(rational.headline, balanced.headline);
    }

    #[test]
    fn lookup_is_stable() {
        assert_eq!(
            narrative(DominantStyle::Rational),
            narrative(DominantStyle::Rational)
        );
    }

    #[test]
    fn narrative_blocks_are_fully_populated() {
        for style in [
            DominantStyle::Rational,
            DominantStyle::Intuitive,
            DominantStyle::Balanced,
        ] {
            let text = narrative(style);
            assert!(!text.headline.is_empty());
            assert!(!text.profile.is_empty());
            assert!(!text.strengths.is_empty());
            assert!(!text.challenges.is_empty());
            assert!(!text.advice.is_empty());
        }
    }
}
