//! Response template catalog.
//!
//! Pre-authored reply variants keyed by (intent, sentiment), a pool of
//! generic empathetic openings for combinations without authored variants,
//! and a small pool of stand-alone quotes. Immutable, loaded-once data.

use crate::brain::{Intent, Sentiment};

/// Openings used when no variant is registered for a combination.
pub const GENERIC_OPENINGS: &[&str] = &[
    "I'm here with you. Tell me a little more about what's on your mind.",
    "Thank you for sharing that. Let's take it one moment at a time.",
    "Whatever brought you here today, this is a good place to pause.",
    "I'm listening. Sometimes naming what we feel is already a first step.",
];

/// Stand-alone aphorisms, occasionally appended after a blank line.
pub const QUOTES: &[&str] = &[
    "\"Between stimulus and response there is a space. In that space is our power to choose.\"",
    "\"You can't stop the waves, but you can learn to surf.\"",
    "\"Feelings come and go like clouds in a windy sky. Conscious breathing is my anchor.\"",
    "\"Almost everything will work again if you unplug it for a few minutes. Including you.\"",
    "\"The quieter you become, the more you can hear.\"",
    "\"Nothing diminishes anxiety faster than action.\"",
];

/// Registered reply variants for a (intent, sentiment) pair. An empty
/// slice means the combination has no authored variants and the generic
/// openings apply.
pub fn variants(intent: Intent, sentiment: Sentiment) -> &'static [&'static str] {
    use Intent::*;
    use Sentiment::*;

    match (intent, sentiment) {
        (Stress, Negative) => &[
            "That sounds heavy. Stress tightens the body first — let's loosen its grip with one slow breath together.",
            "I hear how much pressure you're under. You don't have to solve everything right now; start with sixty calm seconds.",
            "When everything feels urgent, nothing gets space. Let's give your mind a short, protected pause.",
        ],
        (Stress, Neutral) => &[
            "Stress has a way of humming in the background. A brief reset now can keep it from building up.",
            "Noticing tension early is a skill. Want to take a short breathing break before it grows?",
        ],
        (Stress, Positive) => &[
            "It's great that you're checking in before stress takes over. A little prevention goes a long way.",
            "You sound steady even while things are busy — a quick calming exercise can help you stay that way.",
        ],
        (Focus, Negative) => &[
            "Scattered attention is exhausting. Let's narrow the world down to one small task and three quiet minutes.",
            "When focus slips, frustration follows. A short concentration session can reset the channel.",
        ],
        (Focus, Neutral) => &[
            "Attention is like a muscle — short, regular training beats willpower. Ready for a focus interval?",
            "Let's clear a little mental desk space. One task, one timer, nothing else.",
        ],
        (Focus, Positive) => &[
            "You're in a good headspace for deep work. Let's protect it with a focused session.",
            "Momentum is on your side today. A focus interval can turn it into real progress.",
        ],
        (Sleep, Negative) => &[
            "Rough nights make everything harder. Tonight, let's wind down earlier with a slow body-scan and soft sounds.",
            "Lying awake is lonely. A calm evening routine won't force sleep, but it opens the door for it.",
        ],
        (Sleep, Neutral) => &[
            "Sleep responds to rhythm more than effort. A regular wind-down ritual is the gentlest lever you have.",
            "A quieter hour before bed teaches your body what's coming next.",
        ],
        (Sleep, Positive) => &[
            "Glad the nights are treating you well. Keeping the same wind-down ritual will help it stay that way.",
            "Good sleep is worth protecting. A short evening session keeps the routine warm.",
        ],
        (Breathing, Negative) => &[
            "Your breath is the one dial you can always reach. Four counts in, six counts out — shall we?",
            "When the chest feels tight, long exhales tell the body it's safe. Let's practice a round together.",
        ],
        (Breathing, Neutral) => &[
            "A few minutes of paced breathing is the quickest reset there is. Box breathing works in any chair.",
            "Breath work needs no mat and no silence — just a minute of your attention.",
        ],
        (Breathing, Positive) => &[
            "Love that you're building the breathing habit. Each round makes the calm easier to find next time.",
            "Breathing practice on a good day is money in the bank for a hard one.",
        ],
        (Motivation, Negative) => &[
            "Wanting to give up usually means you've been carrying too much for too long — not that you're failing.",
            "Motivation follows action more often than it leads it. One tiny step counts double today.",
        ],
        (Motivation, Neutral) => &[
            "Motivation ebbs for everyone. Systems and small goals carry you through the flat stretches.",
            "On ordinary days, showing up for five minutes is the whole victory.",
        ],
        (Motivation, Positive) => &[
            "That energy is worth aiming somewhere. Pick one goal for today and make it concrete.",
            "You sound ready to move. Let's set a small target while the spark is lit.",
        ],
        (Meditation, Negative) => &[
            "Meditation doesn't ask you to feel better first. Sit down exactly as you are; that's the practice.",
            "A restless sit is still a sit. Ten minutes of watching the storm beats an hour of being the storm.",
        ],
        (Meditation, Neutral) => &[
            "A short daily sit builds the muscle quietly. Consistency matters far more than duration.",
            "Meditation is attention practice, nothing mystical — a few minutes is a real session.",
        ],
        (Meditation, Positive) => &[
            "Wonderful. A settled mind is a great time to deepen the practice a little.",
            "Keep riding that calm — a session now will anchor it for the rest of the day.",
        ],
        (Progress, Negative) => &[
            "Numbers dip; practice doesn't vanish. Every past session still counts in your favor.",
            "A broken streak erases nothing you've built. The next session starts the curve again.",
        ],
        (Progress, Neutral) => &[
            "Your history tells the story better than any single day. Let's look at the trend, not the noise.",
            "Progress in this practice is measured in weeks, and yours is on the board.",
        ],
        (Progress, Positive) => &[
            "Your numbers are genuinely good — consistency like this is what changes baselines.",
            "That's real momentum. Streaks like yours are built one ordinary day at a time.",
        ],
        (General, Neutral) => &[
            "I'm here whenever you want to talk, breathe, or just pause for a minute.",
            "Tell me what kind of moment you're in — busy, tired, curious — and we'll find something that fits.",
        ],
        // No authored variants; the generic openings take over.
        (General, Positive) | (General, Negative) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_intents_cover_every_sentiment() {
        for intent in Intent::ALL.iter().filter(|i| **i != Intent::General) {
            for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
                assert!(
                    !variants(*intent, sentiment).is_empty(),
                    "no variants for ({intent}, {sentiment})"
                );
            }
        }
    }

    #[test]
    fn general_has_gaps_covered_by_openings() {
        assert!(variants(Intent::General, Sentiment::Positive).is_empty());
        assert!(variants(Intent::General, Sentiment::Negative).is_empty());
        assert!(!variants(Intent::General, Sentiment::Neutral).is_empty());
        assert!(!GENERIC_OPENINGS.is_empty());
    }

    #[test]
    fn pools_are_non_empty_strings() {
        for intent in Intent::ALL {
            for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
                for variant in variants(intent, sentiment) {
                    assert!(!variant.trim().is_empty());
                }
            }
        }
        for quote in QUOTES {
            assert!(!quote.trim().is_empty());
        }
    }
}
