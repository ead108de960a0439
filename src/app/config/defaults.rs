// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Generation**: Inference steps, guidance scale and output size
//! - **Backend**: Base origin and request timeout

// ==========================================================================
// Generation Defaults
// ==========================================================================

/// Default number of inference steps.
pub const DEFAULT_STEPS: u32 = 30;

/// Minimum number of inference steps offered by the slider.
pub const MIN_STEPS: u32 = 10;

/// Maximum number of inference steps offered by the slider.
pub const MAX_STEPS: u32 = 50;

/// Default classifier-free guidance scale.
pub const DEFAULT_GUIDANCE: f32 = 7.5;

/// Minimum guidance scale.
pub const MIN_GUIDANCE: f32 = 1.0;

/// Maximum guidance scale.
pub const MAX_GUIDANCE: f32 = 20.0;

/// Granularity of the guidance slider.
pub const GUIDANCE_STEP: f32 = 0.5;

/// Default output width and height in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 512;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default per-request timeout (in seconds). CPU inference can take minutes.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3_600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_STEPS > 0);
    assert!(MAX_STEPS >= MIN_STEPS);
    assert!(DEFAULT_STEPS >= MIN_STEPS);
    assert!(DEFAULT_STEPS <= MAX_STEPS);

    assert!(MIN_GUIDANCE > 0.0);
    assert!(MAX_GUIDANCE > MIN_GUIDANCE);
    assert!(DEFAULT_GUIDANCE >= MIN_GUIDANCE);
    assert!(DEFAULT_GUIDANCE <= MAX_GUIDANCE);
    assert!(GUIDANCE_STEP > 0.0);

    assert!(DEFAULT_IMAGE_SIZE > 0);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
