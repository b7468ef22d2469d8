use std::sync::Arc;

use serverlist_core::application::ServerListService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ServerListService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ServerListService) -> Self {
        Self { args, service }
    }
}
