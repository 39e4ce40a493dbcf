// ABOUTME: Response schemas constraining model output to typed plans and exercises
// ABOUTME: Expressed in the Gemini schema dialect (OBJECT, ARRAY, STRING, BOOLEAN)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};

fn instructions_property(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Exercise object as it appears inside a plan; `notes` is optional
fn plan_exercise_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "sets": { "type": "STRING" },
            "reps": { "type": "STRING" },
            "muscleGroup": { "type": "STRING" },
            "notes": { "type": "STRING" },
            "instructions": instructions_property(
                "List of 3-5 distinct steps to perform the exercise safely. \
                 E.g. '1. Stand shoulder width apart', '2. Lower slowly'."
            ),
        },
        "required": ["name", "sets", "reps", "muscleGroup", "instructions"],
    })
}

fn day_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dayName": { "type": "STRING", "description": "e.g., Day 1, Day 2, or Monday" },
            "focus": {
                "type": "STRING",
                "description": "Main focus of the day, e.g., Chest & Triceps, or Rest"
            },
            "isRestDay": { "type": "BOOLEAN" },
            "exercises": { "type": "ARRAY", "items": plan_exercise_schema() },
        },
        "required": ["dayName", "focus", "isRestDay", "exercises"],
    })
}

/// Schema for a complete weekly plan
#[must_use]
pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "planName": { "type": "STRING" },
            "description": { "type": "STRING" },
            "schedule": { "type": "ARRAY", "items": day_schema() },
        },
        "required": ["planName", "description", "schedule"],
    })
}

/// Schema for a list of alternatives; every item must carry `notes`
#[must_use]
pub fn alternatives_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "sets": { "type": "STRING" },
                "reps": { "type": "STRING" },
                "muscleGroup": { "type": "STRING" },
                "notes": {
                    "type": "STRING",
                    "description": "Explanation of why this is a good alternative, \
                                    specifically addressing injury safety if applicable."
                },
                "instructions": instructions_property(
                    "List of 3-5 distinct steps to perform the exercise safely."
                ),
            },
            "required": ["name", "sets", "reps", "muscleGroup", "notes", "instructions"],
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_plan_schema_nesting() {
        let plan = plan_schema();
        assert_eq!(required(&plan), ["planName", "description", "schedule"]);

        let day = &plan["properties"]["schedule"]["items"];
        assert_eq!(required(day), ["dayName", "focus", "isRestDay", "exercises"]);
        assert_eq!(day["properties"]["isRestDay"]["type"], "BOOLEAN");

        let exercise = &day["properties"]["exercises"]["items"];
        assert!(!required(exercise).contains(&"notes"));
        assert_eq!(exercise["properties"]["instructions"]["type"], "ARRAY");
    }

    #[test]
    fn test_alternatives_schema_requires_notes() {
        let schema = alternatives_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert!(required(&schema["items"]).contains(&"notes"));
    }
}
