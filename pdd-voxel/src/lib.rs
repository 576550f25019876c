//! PDD Voxel Godot Extension
//!
//! A GDExtension library exposing the `PDDVoxelNode` scene node to Godot 4.
//! Godot locates the library through `pdd_voxel.gdextension` and calls
//! [`ENTRY_SYMBOL`] to start the initialization sequence.

use godot::prelude::*;

mod class_db;
pub mod lifecycle;
mod log;
mod voxel_node;

pub use voxel_node::{PddVoxelNode, READY_MESSAGE};

use class_db::EngineClassDb;
use lifecycle::TARGET_LEVEL;
use log::GodotLog;

/// Name of the exported entry function. Must match both the `entry_symbol`
/// in the `#[gdextension]` attribute below and the one in the descriptor.
pub const ENTRY_SYMBOL: &str = "pdd_voxel_library_init";

/// The extension entry point for PDD Voxel.
struct PddVoxelExtension;

#[gdextension(entry_symbol = pdd_voxel_library_init)]
unsafe impl ExtensionLibrary for PddVoxelExtension {
    fn min_level() -> InitLevel {
        TARGET_LEVEL.into()
    }

    fn on_level_init(level: InitLevel) {
        lifecycle::initialize(level.into(), &mut EngineClassDb::new(GodotLog));
    }

    fn on_level_deinit(level: InitLevel) {
        lifecycle::terminate(level.into(), &mut EngineClassDb::new(GodotLog));
    }
}
