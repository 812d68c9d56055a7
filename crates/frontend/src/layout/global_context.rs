use leptos::prelude::*;

/// UI state shared by the shell.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Ids of sidebar groups the user collapsed
    pub collapsed_groups: RwSignal<Vec<&'static str>>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            collapsed_groups: RwSignal::new(vec![]),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, id: &'static str) {
        self.collapsed_groups.update(|groups| {
            if let Some(pos) = groups.iter().position(|g| *g == id) {
                groups.remove(pos);
            } else {
                groups.push(id);
            }
        });
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
