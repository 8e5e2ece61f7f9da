// src/engine/debug.rs

use std::sync::atomic::{AtomicBool, Ordering};

pub struct DebugFlags {
    pub debug_text: AtomicBool,
    pub collision: AtomicBool,
}

impl DebugFlags {
    pub const fn new() -> Self {
        Self {
            debug_text: AtomicBool::new(false),
            collision: AtomicBool::new(false),
        }
    }

    pub fn set_debug_text(&self, enabled: bool) {
        self.debug_text.store(enabled, Ordering::Relaxed);
    }

    pub fn set_collision(&self, enabled: bool) {
        self.collision.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug_text_enabled(&self) -> bool {
        self.debug_text.load(Ordering::Relaxed)
    }

    /// Per-contact logging. Only prints while debug text is also on.
    pub fn is_collision_enabled(&self) -> bool {
        self.collision.load(Ordering::Relaxed)
    }
}

impl Default for DebugFlags {
    fn default() -> Self {
        Self::new()
    }
}

static DEBUG_FLAGS: DebugFlags = DebugFlags::new();

pub fn debug_flags() -> &'static DebugFlags {
    &DEBUG_FLAGS
}

#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::engine::debug::debug_flags().is_debug_text_enabled() {
            println!("[DEBUG {}:{}] {}", file!(), line!(), format!($($arg)*));
        }
    };
}

/// Like [`debug_print!`], but also gated on collision debug.
#[macro_export]
macro_rules! collision_debug_print {
    ($($arg:tt)*) => {
        if $crate::engine::debug::debug_flags().is_collision_enabled() {
            $crate::debug_print!($($arg)*);
        }
    };
}

/// Set debug text flag
pub fn set_debug_text(enabled: bool) {
    DEBUG_FLAGS.set_debug_text(enabled);
}

pub fn set_collision_debug(enabled: bool) {
    DEBUG_FLAGS.set_collision(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_drive_the_shared_flags() {
        let flags = DebugFlags::new();
        assert!(!flags.is_debug_text_enabled());
        flags.set_debug_text(true);
        flags.set_collision(true);
        assert!(flags.is_debug_text_enabled() && flags.is_collision_enabled());

        set_collision_debug(true);
        assert!(debug_flags().is_collision_enabled());
        set_collision_debug(false);
        assert!(!debug_flags().is_collision_enabled());
    }
}
