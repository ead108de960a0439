// SPDX-License-Identifier: MPL-2.0
pub mod progress_ring;

pub use progress_ring::ProgressRing;
