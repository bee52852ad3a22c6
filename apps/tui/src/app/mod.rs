// Dashboard controller: state, dialogs, chart geometry and key handling

pub mod actions;
pub mod charts;
pub mod input;
pub mod state;

pub use actions::{open_store, StorageBackend};
pub use charts::{ActiveTooltip, ChartCache, ChartId};
pub use input::handle_input;
pub use state::{App, ConfirmAction, DateField, EditState, Modal, ReportItem, SettingsItem};
