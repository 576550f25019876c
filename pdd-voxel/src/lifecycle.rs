//! Initialization and teardown protocol of the extension.
//!
//! Godot drives the extension through a fixed sequence of initialization
//! levels: ascending on load, descending on shutdown. This module decides what
//! happens at each level. It holds no state between calls and performs no
//! engine calls itself; the host side is reached only through
//! [`ClassRegistrar`].

use godot::init::InitLevel;

/// Host-defined initialization phase, in the order Godot runs them on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleLevel {
    Core,
    Servers,
    Scene,
    Editor,
}

impl ModuleLevel {
    pub const ASCENDING: [ModuleLevel; 4] = [
        ModuleLevel::Core,
        ModuleLevel::Servers,
        ModuleLevel::Scene,
        ModuleLevel::Editor,
    ];
}

impl From<InitLevel> for ModuleLevel {
    fn from(level: InitLevel) -> Self {
        match level {
            InitLevel::Core => ModuleLevel::Core,
            InitLevel::Servers => ModuleLevel::Servers,
            InitLevel::Scene => ModuleLevel::Scene,
            InitLevel::Editor => ModuleLevel::Editor,
        }
    }
}

impl From<ModuleLevel> for InitLevel {
    fn from(level: ModuleLevel) -> Self {
        match level {
            ModuleLevel::Core => InitLevel::Core,
            ModuleLevel::Servers => InitLevel::Servers,
            ModuleLevel::Scene => InitLevel::Scene,
            ModuleLevel::Editor => InitLevel::Editor,
        }
    }
}

/// The only level at which this extension registers classes. Also reported to
/// Godot as the minimum initialization level.
pub const TARGET_LEVEL: ModuleLevel = ModuleLevel::Scene;

/// Identity of a class exposed to Godot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Name visible to scenes and GDScript.
    pub name: &'static str,
    pub base: &'static str,
}

pub const VOXEL_NODE: ClassDescriptor = ClassDescriptor {
    name: "PDDVoxelNode",
    base: "Node",
};

/// Every class this extension exposes, in registration order.
pub const CLASSES: &[ClassDescriptor] = &[VOXEL_NODE];

/// Host capability that makes a class known to the engine's class database.
pub trait ClassRegistrar {
    fn register(&mut self, class: &ClassDescriptor);
}

/// Initializer callback, invoked once per level in ascending order.
pub fn initialize(level: ModuleLevel, registrar: &mut impl ClassRegistrar) {
    if level != TARGET_LEVEL {
        return;
    }
    for class in CLASSES {
        registrar.register(class);
    }
}

/// Terminator callback, invoked once per level in descending order.
///
/// Registered classes belong to the engine's class database, which drops them
/// itself when the library is unloaded, so there is nothing to undo here.
pub fn terminate(_level: ModuleLevel, _registrar: &mut impl ClassRegistrar) {}
