// ABOUTME: Command handlers for the gemini-fit CLI
// ABOUTME: Routine generation and image lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod image;
pub mod routine;
