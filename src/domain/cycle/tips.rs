//! One-line guidance shown next to each phase.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

use super::phase::CyclePhase;

const MENSTRUAL_TIPS: &[&str] = &[
    "Stock check: chocolate, heating pad, patience",
    "Comfort food season - no judgment zone",
    "Hot water bottle is your best friend right now",
    "Rest is productive. Remember that.",
];

const FOLLICULAR_TIPS: &[&str] = &[
    "Good vibes zone - date night territory",
    "Energy's climbing - great time for plans",
    "She's feeling herself. Compliments land well.",
    "Green light for spontaneous adventures",
];

const OVULATION_TIPS: &[&str] = &[
    "Peak energy window - she's glowing",
    "Fertility window open - plan accordingly",
    "Social battery fully charged",
    "Best time for important conversations",
];

const LUTEAL_TIPS: &[&str] = &[
    "Tread lightly, king",
    "Cravings incoming - snacks on standby",
    "Extra patience loading...",
    "Pick your battles wisely this week",
    "Comfort > logic right now",
];

const UNKNOWN_TIPS: &[&str] = &[
    "Log a period to unlock cycle insights",
    "More data = better predictions",
];

/// All tips available for a phase.
pub fn tips_for(phase: CyclePhase) -> &'static [&'static str] {
    match phase {
        CyclePhase::Menstrual => MENSTRUAL_TIPS,
        CyclePhase::Follicular => FOLLICULAR_TIPS,
        CyclePhase::Ovulation => OVULATION_TIPS,
        CyclePhase::Luteal => LUTEAL_TIPS,
        CyclePhase::Unknown => UNKNOWN_TIPS,
    }
}

/// Picks the tip shown for a phase.
pub trait TipSource: Send + Sync {
    fn tip_for(&self, phase: CyclePhase) -> &'static str;
}

/// Uniformly random tip selection.
///
/// Seed it for reproducible output.
pub struct RandomTipSource {
    rng: Mutex<StdRng>,
}

impl RandomTipSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomTipSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TipSource for RandomTipSource {
    fn tip_for(&self, phase: CyclePhase) -> &'static str {
        let tips = tips_for(phase);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        tips.choose(&mut *rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_tips() {
        for phase in CyclePhase::ALL {
            assert!(!tips_for(phase).is_empty());
        }
        assert!(!tips_for(CyclePhase::Unknown).is_empty());
    }

    #[test]
    fn random_tip_comes_from_phase_list() {
        let source = RandomTipSource::from_entropy();
        for _ in 0..20 {
            let tip = source.tip_for(CyclePhase::Luteal);
            assert!(LUTEAL_TIPS.contains(&tip));
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let a = RandomTipSource::seeded(7);
        let b = RandomTipSource::seeded(7);
        for phase in CyclePhase::ALL {
            assert_eq!(a.tip_for(phase), b.tip_for(phase));
        }
    }
}
