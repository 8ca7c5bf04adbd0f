use std::fmt;
use std::str::FromStr;

use plotters::style::{RGBColor, BLACK, BLUE, GREEN, RED, YELLOW};

use crate::error::ReportError;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Policies that get a fixed colour in summary figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyLabel {
    Better,
    Best,
    BetterLearning,
    TrueRandom,
    Worse,
    Worser,
}

impl PolicyLabel {
    pub const ALL: [PolicyLabel; 6] = [
        PolicyLabel::Better,
        PolicyLabel::Best,
        PolicyLabel::BetterLearning,
        PolicyLabel::TrueRandom,
        PolicyLabel::Worse,
        PolicyLabel::Worser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyLabel::Better => "better",
            PolicyLabel::Best => "best",
            PolicyLabel::BetterLearning => "better_learning",
            PolicyLabel::TrueRandom => "true_random",
            PolicyLabel::Worse => "worse",
            PolicyLabel::Worser => "worser",
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            PolicyLabel::Better => BLUE,
            PolicyLabel::Best => YELLOW,
            PolicyLabel::BetterLearning => BLACK,
            PolicyLabel::TrueRandom => RED,
            PolicyLabel::Worse => GREEN,
            PolicyLabel::Worser => ORANGE,
        }
    }
}

impl fmt::Display for PolicyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyLabel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyLabel::ALL
            .iter()
            .copied()
            .find(|label| label.name() == s)
            .ok_or_else(|| ReportError::UnknownPolicy(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for label in PolicyLabel::ALL.iter() {
            assert_eq!(label.name().parse::<PolicyLabel>().unwrap(), *label);
        }
    }

    #[test]
    fn colors_are_fixed() {
        assert_eq!(PolicyLabel::Better.color(), RGBColor(0, 0, 255));
        assert_eq!(PolicyLabel::Best.color(), RGBColor(255, 255, 0));
        assert_eq!(PolicyLabel::BetterLearning.color(), RGBColor(0, 0, 0));
        assert_eq!(PolicyLabel::TrueRandom.color(), RGBColor(255, 0, 0));
        assert_eq!(PolicyLabel::Worse.color(), RGBColor(0, 255, 0));
        assert_eq!(PolicyLabel::Worser.color(), RGBColor(255, 165, 0));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(matches!(
            "greedy".parse::<PolicyLabel>(),
            Err(ReportError::UnknownPolicy(label)) if label == "greedy"
        ));
    }
}
