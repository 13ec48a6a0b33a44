use dioxus::dioxus_core::Task;
use dioxus::prelude::{use_signal, Signal};

use crate::ui::state::controller::TableController;

pub struct AppState {
    pub controller: Signal<TableController>,
    pub search_task: Signal<Option<Task>>,
}

impl AppState {
    pub fn new(default_page_size: usize) -> Self {
        Self {
            controller: use_signal(|| TableController::new(default_page_size)),
            search_task: use_signal(|| None::<Task>),
        }
    }
}
