//! Evaluation result types.

use std::fmt;

/// Points contributed by each satisfied criterion.
pub const POINTS_PER_CRITERION: u8 = 20;

/// One of the five checks that make up the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Criterion {
    /// All criteria, in the order the evaluator runs them.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Number,
        Criterion::Special,
    ];

    /// Short hint shown next to an unmet criterion.
    pub fn hint(&self) -> &'static str {
        match self {
            Criterion::Length => "At least 8 characters",
            Criterion::Uppercase => "Contains uppercase letters",
            Criterion::Lowercase => "Contains lowercase letters",
            Criterion::Number => "Contains numbers",
            Criterion::Special => "Contains special characters",
        }
    }
}

/// Outcome of a strength check.
///
/// `is_common` is reported separately and never contributes to `score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthResult {
    pub has_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub is_common: bool,
    pub score: u8,
}

impl StrengthResult {
    pub(crate) fn set(&mut self, criterion: Criterion, met: bool) {
        match criterion {
            Criterion::Length => self.has_length = met,
            Criterion::Uppercase => self.has_uppercase = met,
            Criterion::Lowercase => self.has_lowercase = met,
            Criterion::Number => self.has_number = met,
            Criterion::Special => self.has_special = met,
        }
    }

    /// Whether the given criterion is satisfied.
    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.has_length,
            Criterion::Uppercase => self.has_uppercase,
            Criterion::Lowercase => self.has_lowercase,
            Criterion::Number => self.has_number,
            Criterion::Special => self.has_special,
        }
    }

    /// Number of satisfied criteria.
    pub fn met_count(&self) -> usize {
        Criterion::ALL.iter().filter(|c| self.is_met(**c)).count()
    }

    /// Unmet criteria, in evaluation order.
    pub fn missing(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| !self.is_met(*c))
            .collect()
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

/// Strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::None,
            1..=40 => StrengthLevel::Weak,
            41..=80 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    /// Meter fill color for this level.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::None => "#eee",
            StrengthLevel::Weak => "#ff4757",
            StrengthLevel::Medium => "#ffa502",
            StrengthLevel::Strong => "#2ed573",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLevel::None => "None",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::None);
        assert_eq!(StrengthLevel::from_score(20), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::Strong);
    }

    #[test]
    fn test_level_display_and_color() {
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
        assert_eq!(StrengthLevel::Weak.color(), "#ff4757");
    }

    #[test]
    fn test_missing_follows_evaluation_order() {
        let result = StrengthResult {
            has_lowercase: true,
            has_special: true,
            score: 40,
            ..Default::default()
        };
        assert_eq!(
            result.missing(),
            vec![Criterion::Length, Criterion::Uppercase, Criterion::Number]
        );
        assert_eq!(result.met_count(), 2);
    }
}
