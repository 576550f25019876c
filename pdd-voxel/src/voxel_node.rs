use godot::classes::Node;
use godot::prelude::*;

use crate::log::{GodotLog, LogSink};

/// Printed once per instance when it enters the scene tree.
pub const READY_MESSAGE: &str = "PDDVoxelNode loaded: GDExtension is working.";

/// Scene node exposed to Godot as `PDDVoxelNode`.
///
/// Carries no state of its own yet. Instances are created and freed by the
/// engine; this crate never constructs one.
#[derive(GodotClass)]
#[class(base=Node, rename=PDDVoxelNode)]
pub struct PddVoxelNode {
    base: Base<Node>,
}

#[godot_api]
impl INode for PddVoxelNode {
    fn init(base: Base<Node>) -> Self {
        Self { base }
    }

    /// Called when the node and its children have entered the scene tree.
    fn ready(&mut self) {
        announce_ready(&mut GodotLog);
    }
}

// Methods, properties and signals exported to GDScript go here. None yet.
#[godot_api]
impl PddVoxelNode {}

fn announce_ready(log: &mut impl LogSink) {
    log.info(READY_MESSAGE);
}
