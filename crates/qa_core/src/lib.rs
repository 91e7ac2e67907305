//! Q&A core: pure two-phase interaction controller and view-model helpers.
mod effect;
mod msg;
mod notice;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notice::{
    CONTEXT_ANALYZED_BANNER, EMPTY_QUESTION_ALERT, EMPTY_TOPIC_ALERT, UNKNOWN_ERROR,
};
pub use state::{AppState, CallFailure, CallOutcome, Phase, PhaseState, RequestId, Variant};
pub use update::update;
pub use view_model::AppViewModel;
