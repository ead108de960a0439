// SPDX-License-Identifier: MPL-2.0
//! Generation settings with range enforcement.

use crate::api::GenerateRequest;
use crate::app::config::defaults::{
    DEFAULT_GUIDANCE, DEFAULT_IMAGE_SIZE, DEFAULT_STEPS, GUIDANCE_STEP, MAX_GUIDANCE, MAX_STEPS,
    MIN_GUIDANCE, MIN_STEPS,
};

/// Parameters sent with every generation request.
///
/// Steps are kept in `[MIN_STEPS, MAX_STEPS]` and guidance in
/// `[MIN_GUIDANCE, MAX_GUIDANCE]` on a `GUIDANCE_STEP` grid. Width and height
/// have no UI control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    steps: u32,
    guidance: f32,
    width: u32,
    height: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            guidance: DEFAULT_GUIDANCE,
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl GenerationSettings {
    /// Builds settings from possibly out-of-range values (e.g. a hand-edited
    /// config file).
    #[must_use]
    pub fn new(steps: u32, guidance: f32, width: u32, height: u32) -> Self {
        let mut settings = Self {
            width: width.max(1),
            height: height.max(1),
            ..Self::default()
        };
        settings.set_steps(steps);
        settings.set_guidance(guidance);
        settings
    }

    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps.clamp(MIN_STEPS, MAX_STEPS);
    }

    /// Sets guidance, snapping to the slider grid.
    pub fn set_guidance(&mut self, guidance: f32) {
        let guidance = if guidance.is_finite() {
            guidance
        } else {
            DEFAULT_GUIDANCE
        };
        let snapped = (guidance / GUIDANCE_STEP).round() * GUIDANCE_STEP;
        self.guidance = snapped.clamp(MIN_GUIDANCE, MAX_GUIDANCE);
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn guidance(&self) -> f32 {
        self.guidance
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Builds the request body for `POST /generate`.
    #[must_use]
    pub fn to_request(&self, prompt: &str, negative_prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.to_string(),
            negative_prompt: negative_prompt.to_string(),
            num_inference_steps: self.steps,
            guidance_scale: self.guidance,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_studio_defaults() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.steps(), 30);
        assert_eq!(settings.guidance(), 7.5);
        assert_eq!(settings.width(), 512);
        assert_eq!(settings.height(), 512);
    }

    #[test]
    fn steps_are_clamped() {
        let mut settings = GenerationSettings::default();
        settings.set_steps(3);
        assert_eq!(settings.steps(), MIN_STEPS);
        settings.set_steps(500);
        assert_eq!(settings.steps(), MAX_STEPS);
        settings.set_steps(42);
        assert_eq!(settings.steps(), 42);
    }

    #[test]
    fn guidance_snaps_and_clamps() {
        let mut settings = GenerationSettings::default();
        settings.set_guidance(7.3);
        assert_eq!(settings.guidance(), 7.5);
        settings.set_guidance(7.2);
        assert_eq!(settings.guidance(), 7.0);
        settings.set_guidance(0.1);
        assert_eq!(settings.guidance(), MIN_GUIDANCE);
        settings.set_guidance(99.0);
        assert_eq!(settings.guidance(), MAX_GUIDANCE);
        settings.set_guidance(f32::NAN);
        assert_eq!(settings.guidance(), DEFAULT_GUIDANCE);
    }

    #[test]
    fn new_sanitizes_config_values() {
        let settings = GenerationSettings::new(0, 30.0, 0, 768);
        assert_eq!(settings.steps(), MIN_STEPS);
        assert_eq!(settings.guidance(), MAX_GUIDANCE);
        assert_eq!(settings.width(), 1);
        assert_eq!(settings.height(), 768);
    }

    #[test]
    fn request_carries_every_field() {
        let request = GenerationSettings::default().to_request("sunset", "blurry");
        assert_eq!(request.prompt, "sunset");
        assert_eq!(request.negative_prompt, "blurry");
        assert_eq!(request.num_inference_steps, 30);
        assert_eq!(request.guidance_scale, 7.5);
        assert_eq!((request.width, request.height), (512, 512));
    }
}
