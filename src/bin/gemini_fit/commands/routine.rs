// ABOUTME: Plan, alternatives, and preference commands for gemini-fit
// ABOUTME: Bridges CLI flags to the routine service and preference store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use gemini_fit::config::AppConfig;
use gemini_fit::errors::AppResult;
use gemini_fit::llm::GeminiProvider;
use gemini_fit::models::{Exercise, GoalType, UserPreferences};
use gemini_fit::preferences::PreferencesStore;
use gemini_fit::routine::RoutineService;
use tracing::{info, warn};

use crate::PlanArgs;

/// Routine service over the configured Gemini provider
pub fn routine_service(config: &AppConfig) -> AppResult<RoutineService> {
    let provider = GeminiProvider::from_config(config)?;
    Ok(RoutineService::new(Arc::new(provider), config.models.clone()))
}

fn merge(mut prefs: UserPreferences, args: PlanArgs) -> UserPreferences {
    if let Some(days) = args.days {
        prefs.days_per_week = days;
    }
    if let Some(rest) = args.rest {
        prefs.max_consecutive_rest_days = rest;
    }
    if let Some(goal) = args.goal {
        prefs.goal = GoalType::from_label(&goal);
    }
    if let Some(split) = args.split {
        prefs.split_type = split;
    }
    if let Some(focus) = args.focus {
        prefs.focus_areas = focus;
    }
    if let Some(injuries) = args.injuries {
        prefs.injuries = injuries;
    }
    prefs
}

/// Generate a plan from saved preferences plus overrides
pub async fn plan(config: &AppConfig, args: PlanArgs) -> AppResult<()> {
    let store = PreferencesStore::new(&config.preferences_path);
    let prefs = merge(store.load().await, args);

    // The plan is still worth printing when the preferences cannot be saved
    if let Err(e) = store.save(&prefs).await {
        warn!(error = %e, "Continuing without saving preferences");
    }

    let service = routine_service(config)?;
    info!(
        days = prefs.days_per_week,
        goal = %prefs.goal,
        split = %prefs.split_type,
        "Generating plan"
    );
    let plan = service.generate_plan(&prefs).await?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

/// Print alternatives for one exercise
pub async fn alternatives(
    config: &AppConfig,
    name: String,
    muscle_group: String,
    sets: String,
    reps: String,
    injuries: Option<String>,
) -> AppResult<()> {
    let injuries = match injuries {
        Some(injuries) => injuries,
        None => {
            PreferencesStore::new(&config.preferences_path)
                .load()
                .await
                .injuries
        }
    };

    let original = Exercise {
        id: None,
        name,
        sets,
        reps,
        muscle_group,
        notes: String::new(),
        instructions: Vec::new(),
    };

    let service = routine_service(config)?;
    let alternatives = service.generate_alternatives(&original, &injuries).await?;
    if alternatives.is_empty() {
        info!(exercise = %original.name, "No alternatives suggested");
    }

    println!("{}", serde_json::to_string_pretty(&alternatives)?);
    Ok(())
}

/// Print the saved preferences
pub async fn show_preferences(config: &AppConfig) -> AppResult<()> {
    let prefs = PreferencesStore::new(&config.preferences_path).load().await;
    println!("{}", serde_json::to_string_pretty(&prefs)?);
    Ok(())
}
