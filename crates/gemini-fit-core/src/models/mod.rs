// ABOUTME: Domain models for training preferences and generated workout plans
// ABOUTME: Re-exports preference enums, exercises, day routines, and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod plan;
mod preferences;

pub use plan::{DayRoutine, Exercise, WorkoutPlan};
pub use preferences::{GoalType, SplitType, UserPreferences};
