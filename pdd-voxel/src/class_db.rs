use godot::classes::ClassDb;
use godot::prelude::*;

use crate::lifecycle::{ClassDescriptor, ClassRegistrar};
use crate::log::LogSink;

/// [`ClassRegistrar`] backed by Godot's `ClassDB`.
///
/// godot-rust registers every `#[derive(GodotClass)]` type on its own, right
/// before the extension's `on_level_init` runs for that level. Registering
/// again would be a contract violation, so this only checks that the engine
/// now knows the class under the expected name and base. Silent on success.
pub struct EngineClassDb<L: LogSink> {
    log: L,
}

impl<L: LogSink> EngineClassDb<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }
}

impl<L: LogSink> ClassRegistrar for EngineClassDb<L> {
    fn register(&mut self, class: &ClassDescriptor) {
        let db = ClassDb::singleton();
        let name = StringName::from(class.name);

        let parent = db
            .class_exists(&name)
            .then(|| db.get_parent_class(&name).to_string());
        verify(class, parent.as_deref(), &mut self.log);
    }
}

/// Reports a class the engine does not know, or knows under another base.
/// `parent` is `None` when the class is missing from `ClassDB`.
fn verify(class: &ClassDescriptor, parent: Option<&str>, log: &mut impl LogSink) {
    match parent {
        None => log.error(&format!("{} is missing from ClassDB", class.name)),
        Some(parent) if parent != class.base => log.error(&format!(
            "{} registered with base {}, expected {}",
            class.name, parent, class.base
        )),
        Some(_) => {}
    }
}
