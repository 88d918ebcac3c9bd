use bevy::prelude::*;

/// Marks the entity driven by local keyboard input.
#[derive(Component, Debug)]
pub struct PlayerController {
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self { active: true }
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }
}
