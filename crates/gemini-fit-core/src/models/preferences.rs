// ABOUTME: User training preferences captured before plan generation
// ABOUTME: Goal and split enums serialize as the display labels embedded in prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::preferences::{DEFAULT_DAYS_PER_WEEK, DEFAULT_MAX_CONSECUTIVE_REST_DAYS};
use crate::errors::AppError;

/// Primary training goal
///
/// Serialized as its display label, which is also the text the model sees.
/// Labels that match no known goal are kept verbatim in [`GoalType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalType {
    /// Muscle building with moderate rep ranges
    #[default]
    Hypertrophy,
    /// Lower-body emphasis with upper-body toning
    GluteAndShape,
    /// Circuits and short rest for caloric expenditure
    MetabolicConditioning,
    /// Heavy compound lifts in low rep ranges
    MaxStrength,
    /// Unilateral, plyometric, and mobility work
    FunctionalHybrid,
    /// Joint health and sustainable loading
    Longevity,
    /// Free-text goal with no dedicated guidance
    Other(String),
}

impl GoalType {
    /// Every goal with dedicated coaching guidance
    pub const KNOWN: [Self; 6] = [
        Self::Hypertrophy,
        Self::GluteAndShape,
        Self::MetabolicConditioning,
        Self::MaxStrength,
        Self::FunctionalHybrid,
        Self::Longevity,
    ];

    /// Display label, as shown to the user and embedded in prompts
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Hypertrophy => "Muscle Building (Hypertrophy)",
            Self::GluteAndShape => "Glute Focus & Definition",
            Self::MetabolicConditioning => "Lean & Fit (Metabolic Conditioning)",
            Self::MaxStrength => "Max Strength & Power",
            Self::FunctionalHybrid => "Functional Fitness & Agility",
            Self::Longevity => "Longevity & General Health",
            Self::Other(label) => label,
        }
    }

    /// Short command-line key for known goals
    #[must_use]
    pub const fn key(&self) -> Option<&'static str> {
        match self {
            Self::Hypertrophy => Some("hypertrophy"),
            Self::GluteAndShape => Some("glute-and-shape"),
            Self::MetabolicConditioning => Some("metabolic-conditioning"),
            Self::MaxStrength => Some("max-strength"),
            Self::FunctionalHybrid => Some("functional-hybrid"),
            Self::Longevity => Some("longevity"),
            Self::Other(_) => None,
        }
    }

    /// Resolve a display label or command-line key
    #[must_use]
    pub fn from_label(value: &str) -> Self {
        let trimmed = value.trim();
        Self::KNOWN
            .into_iter()
            .find(|goal| {
                goal.label().eq_ignore_ascii_case(trimmed)
                    || goal.key().is_some_and(|key| key.eq_ignore_ascii_case(trimmed))
            })
            .unwrap_or_else(|| Self::Other(trimmed.to_owned()))
    }
}

impl From<String> for GoalType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<GoalType> for String {
    fn from(goal: GoalType) -> Self {
        match goal {
            GoalType::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl FromStr for GoalType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl Display for GoalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Routine structure requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SplitType {
    /// Every session trains the whole body
    #[serde(rename = "Full Body (Whole Body Every Session)")]
    FullBody,
    /// Muscle groups divided across the training days
    #[default]
    #[serde(rename = "Body Part Split (e.g. Upper/Lower, PPL)")]
    Split,
}

impl SplitType {
    /// Display label, as shown to the user and embedded in prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body (Whole Body Every Session)",
            Self::Split => "Body Part Split (e.g. Upper/Lower, PPL)",
        }
    }
}

impl FromStr for SplitType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "full-body" | "fullbody" | "full" => Ok(Self::FullBody),
            "split" | "body-part-split" => Ok(Self::Split),
            _ if s.trim() == Self::FullBody.label() => Ok(Self::FullBody),
            _ if s.trim() == Self::Split.label() => Ok(Self::Split),
            _ => Err(AppError::invalid_input(format!(
                "Unknown split type '{s}' (expected 'full-body' or 'split')"
            ))),
        }
    }
}

impl Display for SplitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the user's training preferences for one generation request
///
/// Numeric ranges (1-7 training days, 1-3 rest days) are enforced by the
/// input surface only; the orchestrator forwards whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Training days per week
    pub days_per_week: u8,
    /// Maximum consecutive rest days
    pub max_consecutive_rest_days: u8,
    /// Primary goal
    pub goal: GoalType,
    /// Routine structure
    pub split_type: SplitType,
    /// Undeveloped body parts to emphasize (free text)
    pub focus_areas: String,
    /// Injuries or limitations (free text)
    pub injuries: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            max_consecutive_rest_days: DEFAULT_MAX_CONSECUTIVE_REST_DAYS,
            goal: GoalType::Hypertrophy,
            split_type: SplitType::Split,
            focus_areas: String::new(),
            injuries: String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_labels_round_trip() {
        for goal in GoalType::KNOWN {
            assert_eq!(GoalType::from_label(goal.label()), goal);
        }
    }

    #[test]
    fn test_goal_from_key() {
        assert_eq!(GoalType::from_label("max-strength"), GoalType::MaxStrength);
        assert_eq!(GoalType::from_label("LONGEVITY"), GoalType::Longevity);
    }

    #[test]
    fn test_unknown_goal_kept_verbatim() {
        let goal = GoalType::from_label("Marathon prep");
        assert_eq!(goal, GoalType::Other("Marathon prep".to_owned()));
        assert_eq!(goal.label(), "Marathon prep");
        assert!(goal.key().is_none());
    }

    #[test]
    fn test_split_parsing() {
        assert_eq!("full-body".parse::<SplitType>().unwrap(), SplitType::FullBody);
        assert_eq!("Full Body".parse::<SplitType>().unwrap(), SplitType::FullBody);
        assert_eq!("split".parse::<SplitType>().unwrap(), SplitType::Split);
        assert!("bro-split-deluxe".parse::<SplitType>().is_err());
    }

    #[test]
    fn test_preferences_serialize_with_labels() {
        let json = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(json["daysPerWeek"], 4);
        assert_eq!(json["maxConsecutiveRestDays"], 2);
        assert_eq!(json["goal"], "Muscle Building (Hypertrophy)");
        assert_eq!(json["splitType"], "Body Part Split (e.g. Upper/Lower, PPL)");
    }

    #[test]
    fn test_partial_preferences_merge_with_defaults() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"daysPerWeek": 6, "injuries": "bad left knee"}"#).unwrap();
        assert_eq!(prefs.days_per_week, 6);
        assert_eq!(prefs.injuries, "bad left knee");
        assert_eq!(prefs.max_consecutive_rest_days, 2);
        assert_eq!(prefs.goal, GoalType::Hypertrophy);
        assert_eq!(prefs.split_type, SplitType::Split);
    }
}
