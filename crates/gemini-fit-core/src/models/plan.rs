// ABOUTME: Workout plan aggregate returned by the text model and its copy-on-write swap
// ABOUTME: Days are shared behind Arc so a swap only reallocates the day it touches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Base URL for exercise tutorial video searches
const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// A single exercise prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Transient identity assigned locally, never sent to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Exercise name, also the image cache key
    pub name: String,
    /// Set range, e.g. "3-4"
    pub sets: String,
    /// Rep range, e.g. "8-12"
    pub reps: String,
    /// Primary muscle group targeted
    pub muscle_group: String,
    /// Coaching notes or swap rationale
    #[serde(default)]
    pub notes: String,
    /// Ordered execution steps
    pub instructions: Vec<String>,
}

impl Exercise {
    /// Tutorial video search link for this exercise
    #[must_use]
    pub fn video_search_url(&self) -> String {
        let query = format!("{} exercise tutorial", self.name);
        format!("{VIDEO_SEARCH_URL}{}", urlencoding::encode(&query))
    }

    /// Return this exercise with a fresh transient id if it has none
    #[must_use]
    pub fn with_transient_id(mut self) -> Self {
        if self.id.is_none() {
            self.id = Some(Uuid::new_v4().to_string());
        }
        self
    }
}

/// One day of the weekly cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRoutine {
    /// Day label, e.g. "Day 1" or "Monday"
    pub day_name: String,
    /// Main focus, e.g. "Chest & Triceps" or "Rest"
    pub focus: String,
    /// Rest days conventionally carry no exercises
    pub is_rest_day: bool,
    /// Ordered exercises for the day
    pub exercises: Vec<Exercise>,
}

/// Weekly workout plan
///
/// Replaced wholesale on regeneration. Swaps go through
/// [`WorkoutPlan::with_swapped_exercise`], which leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan title
    pub plan_name: String,
    /// Short summary of the plan
    pub description: String,
    /// Ordered days, a 7-day cycle is expected but not enforced
    pub schedule: Vec<Arc<DayRoutine>>,
}

impl WorkoutPlan {
    /// Number of days marked as training days
    #[must_use]
    pub fn training_days(&self) -> usize {
        self.schedule.iter().filter(|day| !day.is_rest_day).count()
    }

    /// Number of days marked as rest days
    #[must_use]
    pub fn rest_days(&self) -> usize {
        self.schedule.iter().filter(|day| day.is_rest_day).count()
    }

    /// Total exercises across the schedule
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.schedule.iter().map(|day| day.exercises.len()).sum()
    }

    /// Exercise at the given day and position, if any
    #[must_use]
    pub fn exercise(&self, day_index: usize, exercise_index: usize) -> Option<&Exercise> {
        self.schedule
            .get(day_index)
            .and_then(|day| day.exercises.get(exercise_index))
    }

    /// Copy of this plan where every exercise carries a transient id
    #[must_use]
    pub fn with_transient_ids(&self) -> Self {
        let schedule = self
            .schedule
            .iter()
            .map(|day| {
                if day.exercises.iter().all(|exercise| exercise.id.is_some()) {
                    return Arc::clone(day);
                }
                let mut day = DayRoutine::clone(day);
                day.exercises = day
                    .exercises
                    .into_iter()
                    .map(Exercise::with_transient_id)
                    .collect();
                Arc::new(day)
            })
            .collect();

        Self {
            plan_name: self.plan_name.clone(),
            description: self.description.clone(),
            schedule,
        }
    }

    /// Day and position of the exercise with the given transient id
    #[must_use]
    pub fn locate_exercise(&self, id: &str) -> Option<(usize, usize)> {
        self.schedule.iter().enumerate().find_map(|(day_index, day)| {
            day.exercises
                .iter()
                .position(|exercise| exercise.id.as_deref() == Some(id))
                .map(|exercise_index| (day_index, exercise_index))
        })
    }

    /// New plan with the exercise at `day_index`/`exercise_index` replaced
    ///
    /// Untouched days are shared with `self` through their `Arc`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either index is out of range.
    pub fn with_swapped_exercise(
        &self,
        day_index: usize,
        exercise_index: usize,
        replacement: Exercise,
    ) -> AppResult<Self> {
        let day = self.schedule.get(day_index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Day {day_index} is out of range for a {}-day schedule",
                self.schedule.len()
            ))
        })?;

        let mut new_day = DayRoutine::clone(day);
        let slot = new_day.exercises.get_mut(exercise_index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Exercise {exercise_index} is out of range for '{}'",
                day.day_name
            ))
        })?;
        *slot = replacement;

        let mut schedule = self.schedule.clone();
        if let Some(entry) = schedule.get_mut(day_index) {
            *entry = Arc::new(new_day);
        }

        Ok(Self {
            plan_name: self.plan_name.clone(),
            description: self.description.clone(),
            schedule,
        })
    }

    /// New plan with the exercise identified by `id` replaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no exercise carries `id`.
    pub fn with_exercise_replaced(&self, id: &str, replacement: Exercise) -> AppResult<Self> {
        let (day_index, exercise_index) = self
            .locate_exercise(id)
            .ok_or_else(|| AppError::invalid_input(format!("No exercise with id '{id}'")))?;
        self.with_swapped_exercise(day_index, exercise_index, replacement.with_transient_id())
    }
}
