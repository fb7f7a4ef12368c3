pub mod diary_flow;
pub mod run_ctx;

pub use diary_flow::{DiaryFlow, Generated, RunOutcome};
pub use run_ctx::RunCtx;
