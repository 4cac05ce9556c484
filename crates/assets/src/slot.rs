use crate::{AssetError, Model};

/// Where a slot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No result delivered yet; the placeholder stands in.
    Pending,
    /// The real model arrived.
    Ready,
    /// Loading failed; the placeholder stands in permanently.
    Failed,
}

/// A registration slot for one asynchronously loaded model.
///
/// The loader collaborator delivers its result with [`fulfill`]; the scene
/// polls [`resolve`] each tick instead of being driven by a callback, which
/// keeps the loop single-threaded and deterministic. Resolution never
/// fails: pending or failed slots yield the placeholder.
///
/// [`fulfill`]: LoadSlot::fulfill
/// [`resolve`]: LoadSlot::resolve
#[derive(Debug, Clone)]
pub struct LoadSlot {
    label: String,
    placeholder: Model,
    state: SlotState,
}

#[derive(Debug, Clone)]
enum SlotState {
    Pending,
    Ready(Model),
    Failed,
}

impl LoadSlot {
    pub fn new(label: impl Into<String>, placeholder: Model) -> Self {
        Self {
            label: label.into(),
            placeholder,
            state: SlotState::Pending,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn status(&self) -> SlotStatus {
        match self.state {
            SlotState::Pending => SlotStatus::Pending,
            SlotState::Ready(_) => SlotStatus::Ready,
            SlotState::Failed => SlotStatus::Failed,
        }
    }

    /// Deliver the load result. Later deliveries overwrite earlier ones;
    /// the loader may retry a failed load.
    pub fn fulfill(&mut self, result: Result<Model, AssetError>) {
        match result {
            Ok(model) => {
                tracing::info!(slot = %self.label, model = %model.name, "asset ready");
                self.state = SlotState::Ready(model);
            }
            Err(e) => {
                tracing::warn!(slot = %self.label, error = %e, "asset load failed; using placeholder");
                self.state = SlotState::Failed;
            }
        }
    }

    /// The model to use right now: the loaded one, or the placeholder
    /// while pending or after failure.
    pub fn resolve(&self) -> &Model {
        match &self.state {
            SlotState::Ready(model) => model,
            SlotState::Pending | SlotState::Failed => &self.placeholder,
        }
    }
}
