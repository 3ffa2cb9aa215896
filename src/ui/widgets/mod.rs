// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod world_map;

pub use animated_spinner::AnimatedSpinner;
pub use world_map::WorldMap;
