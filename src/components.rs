use bevy::prelude::*;

/// Mesh entity showing the circle at this index of the presented draw list.
#[derive(Component, Deref, DerefMut)]
pub struct Disc(pub usize);
