//! Screen state controllers
//!
//! Each view owns its state and a [`ViewScope`]; the `async` methods are the
//! UI events. A shell renders from the getters after each call returns.

mod home;
mod lookup;
pub mod messages;
mod scope;
mod workbench;

pub use home::HomeView;
pub use lookup::{LookupState, OrderLookupView};
pub use scope::{ScopeHandle, ViewScope};
pub use workbench::{
    EditorMode, ListMode, OrderEditor, OrderModal, OrderWorkbench, ProgressModal, ProgressPanel,
    ProgressPhase,
};
