pub mod apps;
pub mod boot;
pub mod components;
pub mod contact;
mod effect_executor;
pub mod gesture;
pub mod host;
pub mod layout;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use apps::{AppDescriptor, AppRegistry, CatalogError};
pub use components::{render_app_contents, DeviceShell, ShellProvider, ShellRuntimeContext};
pub use gesture::{interpret_gesture, DragRelease, DragTracker, GestureSurface};
pub use host::ShellHostContext;
pub use layout::{select_layout, ShellLayout};
pub use model::*;
pub use reducer::{reduce_shell, AppStep, ReducerError, ShellAction, ShellEffect};
pub use runtime_context::use_shell_runtime;
