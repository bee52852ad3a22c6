pub mod analytics;
pub mod modals;
pub mod overview;
pub mod reports;
pub mod settings;
