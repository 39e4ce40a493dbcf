// ABOUTME: Tests for copy-on-write exercise swaps on generated plans
// ABOUTME: Uses plans produced through RoutineService with a scripted model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{exercise_json, sample_plan_json, ScriptedModel};
use gemini_fit::config::ModelConfig;
use gemini_fit::errors::ErrorCode;
use gemini_fit::models::{UserPreferences, WorkoutPlan};
use gemini_fit::routine::RoutineService;
use serde_json::json;
use std::sync::Arc;

async fn generated_plan_and_alternative() -> Result<(WorkoutPlan, gemini_fit::models::Exercise)> {
    let model = Arc::new(
        ScriptedModel::new()
            .then_json(&sample_plan_json())
            .then_json(&json!([exercise_json(
                "Hack Squat",
                "Quadriceps",
                "Fixed path keeps the knees tracking"
            )])),
    );
    let service = RoutineService::new(model, ModelConfig::default());

    let plan = service.generate_plan(&UserPreferences::default()).await?;
    let original = plan.exercise(1, 0).unwrap().clone();
    let alternative = service
        .generate_alternatives(&original, "bad knees")
        .await?
        .remove(0);
    Ok((plan, alternative))
}

#[tokio::test]
async fn test_swap_replaces_only_target_position() -> Result<()> {
    let (plan, alternative) = generated_plan_and_alternative().await?;
    let before = plan.clone();

    let swapped = plan.with_swapped_exercise(1, 0, alternative.clone())?;

    assert_eq!(swapped.exercise(1, 0), Some(&alternative));
    assert_eq!(swapped.exercise(1, 1), plan.exercise(1, 1));
    assert_eq!(swapped.schedule.len(), plan.schedule.len());
    for (index, day) in swapped.schedule.iter().enumerate() {
        if index != 1 {
            assert!(Arc::ptr_eq(day, &plan.schedule[index]));
        }
    }

    // The original plan is untouched
    assert_eq!(plan, before);
    assert_eq!(plan.exercise(1, 0).unwrap().name, "Leg Press");
    Ok(())
}

#[tokio::test]
async fn test_swap_by_transient_id() -> Result<()> {
    let (plan, alternative) = generated_plan_and_alternative().await?;
    let target = plan.exercise(0, 1).unwrap().id.clone().unwrap();

    let swapped = plan.with_exercise_replaced(&target, alternative)?;

    assert_eq!(swapped.exercise(0, 1).unwrap().name, "Hack Squat");
    assert!(swapped.locate_exercise(&target).is_none());
    assert_eq!(plan.locate_exercise(&target), Some((0, 1)));
    Ok(())
}

#[tokio::test]
async fn test_swap_out_of_range_is_invalid_input() -> Result<()> {
    let (plan, alternative) = generated_plan_and_alternative().await?;

    let err = plan
        .with_swapped_exercise(9, 0, alternative.clone())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    // Day 3 is a rest day with no exercises
    let err = plan.with_swapped_exercise(2, 0, alternative.clone()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = plan.with_exercise_replaced("no-such-id", alternative).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[test]
fn test_video_search_url_encodes_name() {
    let exercise: gemini_fit::models::Exercise =
        serde_json::from_value(exercise_json("Romanian Deadlift", "Hamstrings", "")).unwrap();

    assert_eq!(
        exercise.video_search_url(),
        "https://www.youtube.com/results?search_query=Romanian%20Deadlift%20exercise%20tutorial"
    );
}
