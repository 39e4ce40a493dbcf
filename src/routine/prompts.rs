// ABOUTME: Prompt builders for plans, alternatives, and exercise photos
// ABOUTME: Embeds goal strategy, split policy, and injury safety clauses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gemini_fit_core::models::{Exercise, GoalType, SplitType, UserPreferences};

/// Placeholder for empty free-text fields
const NONE_PLACEHOLDER: &str = "None";

/// Goal-specific programming strategy
#[must_use]
pub const fn goal_instructions(goal: &GoalType) -> &'static str {
    match goal {
        GoalType::Hypertrophy => {
            "Focus on 8-12 rep range, progressive overload, and hitting all muscle groups evenly."
        }
        GoalType::GluteAndShape => {
            "Design a routine with high volume for glutes and hamstrings (hip thrusts, RDLs, \
             lunges). For the upper body, focus on 'toning' rep ranges (12-15 reps) for shoulders \
             and back to create an hourglass illusion, but minimize heavy trap or pec isolation \
             work."
        }
        GoalType::MetabolicConditioning => {
            "Create a routine that utilizes supersets, circuits, or AMRAPs. Keep rest periods \
             short (30-60s) to keep the heart rate elevated. Focus on compound movements that \
             recruit large muscle groups to maximize caloric expenditure."
        }
        GoalType::MaxStrength => {
            "Focus on the big 3/4 compound lifts (Squat, Bench, Deadlift, Overhead Press). Lower \
             rep ranges (1-5 reps), longer rest periods (3-5 mins), high intensity relative to 1RM."
        }
        GoalType::FunctionalHybrid => {
            "Incorporate unilateral movements, plyometrics, and core stability. Focus on movement \
             quality and explosive power rather than just 1RM strength. Mix resistance training \
             with mobility work."
        }
        GoalType::Longevity => {
            "Focus on joint health, mobility, and moderate resistance. Prioritize safety and \
             sustainable movement patterns over heavy loading."
        }
        GoalType::Other(_) => "Focus on balanced general health and fitness.",
    }
}

/// How the model should interpret the requested routine structure
#[must_use]
pub const fn split_context(split: SplitType) -> &'static str {
    match split {
        SplitType::FullBody => {
            "The user explicitly requested a FULL BODY routine. Every session MUST target the \
             entire body (e.g. Squat/Hinge, Push, Pull, Carry/Core). Do not split by body parts."
        }
        SplitType::Split => {
            "The user explicitly requested a SPLIT routine. Divide the body parts logically \
             across the available days (e.g. Upper/Lower for 4 days, PPL for 6 days, or \
             Push/Pull/FullBody for 3 days)."
        }
    }
}

fn or_none(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NONE_PLACEHOLDER
    } else {
        trimmed
    }
}

/// Weekly plan prompt for the given preferences
#[must_use]
pub fn plan_prompt(prefs: &UserPreferences) -> String {
    let injuries = or_none(&prefs.injuries);

    format!(
        "Create a detailed weekly gym routine based on the following user preferences:
- Training Days per Week: {days}
- Maximum Consecutive Rest Days: {rest}
- Routine Structure: {split}
- Primary Goal: {goal}
- Focus Areas (Undeveloped body parts): {focus}
- Injuries/Limitations: {injuries}

CRITICAL INJURY SAFETY CHECK:
The user has reported the following injuries: \"{injuries}\".
- You must perform a safety validation for every single exercise selected.
- If an exercise typically aggravates the listed injury (e.g., Barbell Squats for \"bad knees\"), you MUST replace it with a joint-friendly alternative (e.g., Reverse Lunges or Leg Press) or remove it.
- Do not list exercises that are widely known to be high-risk for the specific reported injury.
- If you make a substitution for safety, mention \"injury-friendly variation\" in the notes.

IMPORTANT INSTRUCTIONS:
1. ROUTINE STRUCTURE: {split_context}
2. Include rest days explicitly in the schedule to match a 7-day cycle.
3. Provide specific sets and rep ranges aligned with the goal.
4. Provide clear, step-by-step execution instructions (3-5 steps) for every exercise.
5. SPECIFIC GOAL STRATEGY: {strategy}
",
        days = prefs.days_per_week,
        rest = prefs.max_consecutive_rest_days,
        split = prefs.split_type,
        goal = prefs.goal,
        focus = or_none(&prefs.focus_areas),
        split_context = split_context(prefs.split_type),
        strategy = goal_instructions(&prefs.goal),
    )
}

/// Prompt asking for three alternatives to `original`
#[must_use]
pub fn alternatives_prompt(original: &Exercise, injuries: &str) -> String {
    let injuries = or_none(injuries);

    format!(
        "The user wants to swap out the exercise \"{name}\" which targets the {muscle}.

Target Muscle Group: {muscle}
Original Volume: {sets} sets x {reps} reps
User's Reported Injuries: \"{injuries}\"

Your Goal:
Suggest 3 alternative exercises that target the same muscle group but are biomechanically distinct or use different equipment.

INJURY SAFETY PROTOCOL:
The user has reported the following injuries: \"{injuries}\".
1. You MUST evaluate each alternative against these injuries.
2. If an exercise is known to aggravate the reported injury (e.g. Squats for bad knees, Overhead press for shoulder impingement), DO NOT suggest it.
3. In the 'notes' field for each alternative, you MUST explain WHY this specific exercise is a safer option for their injury (e.g. \"Leg Press provides back support which protects the lumbar spine compared to Barbell Squats\").
4. If no injuries are reported, use the 'notes' field to explain the benefit of this variation (e.g. \"Focuses more on the peak contraction\").

Output requirements:
- 3 distinct exercises.
- Adjust sets and reps if the nature of the exercise changes (e.g. isolation movements often require higher reps than compounds).
- Provide 3-5 concise, step-by-step execution instructions.
",
        name = original.name,
        muscle = original.muscle_group,
        sets = original.sets,
        reps = original.reps,
    )
}

/// Photorealistic studio photo prompt for an exercise
#[must_use]
pub fn image_prompt(exercise_name: &str) -> String {
    format!(
        "Generate a professional, photorealistic studio photograph of a fitness model performing the \"{exercise_name}\" exercise.

REQUIREMENTS:
- Style: High-quality sports photography, 8k resolution, highly detailed, cinematic lighting.
- Subject: A fit individual showing correct anatomical form.
- Background: Clean, neutral studio background (white or light grey).
- NOT ALLOWED: Do not produce cartoons, vector art, 3D renders, drawings, or abstract illustrations. The image must look like a real photo.
"
    )
}
