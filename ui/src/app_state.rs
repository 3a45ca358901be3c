use std::ops::Deref;
use std::sync::Arc;

use api::MintWorkflow;

pub struct AppStateData {
    /// `None` when no wallet provider is configured for this session.
    pub workflow: Option<Arc<MintWorkflow>>,
}

/// The stable, non-reactive application state provided as a context.
#[derive(Clone)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(workflow: Option<Arc<MintWorkflow>>) -> Self {
        Self(Arc::new(AppStateData { workflow }))
    }
}
