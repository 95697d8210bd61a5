//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ViewConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch categories - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch categories - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<ViewConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ViewConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Refetch the category list (after create/update/delete)
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ViewConfig {
        self.config.get_value()
    }

    pub fn indent_px(&self) -> usize {
        self.config.with_value(|config| config.indent_px)
    }

    pub fn search_debounce_ms(&self) -> u32 {
        self.config.with_value(|config| config.search_debounce_ms)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
