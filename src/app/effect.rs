//! Side effects returned by the reducer, executed by EffectRunner.

use crate::app::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// Reports back with `CopySucceeded` / `CopyFailed`.
    CopyToClipboard {
        content: String,
    },

    /// Written into the configured export directory.
    ExportSql {
        file_name: String,
        content: String,
    },

    DispatchActions(Vec<Action>),
}
