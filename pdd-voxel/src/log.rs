use godot::prelude::*;

/// Destination for the extension's diagnostic lines.
///
/// Inside the engine this is Godot's output panel (see [`GodotLog`]). Code that
/// must stay testable without a running engine takes a `&mut impl LogSink`.
pub trait LogSink {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Forwards to `godot_print!` / `godot_error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GodotLog;

impl LogSink for GodotLog {
    fn info(&mut self, message: &str) {
        godot_print!("{}", message);
    }

    fn error(&mut self, message: &str) {
        godot_error!("{}", message);
    }
}
