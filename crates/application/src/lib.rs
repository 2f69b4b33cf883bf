//! Application layer - task handlers and menu loop
//!
//! Defines the ports the tasks depend on (translation, synthesis,
//! recognition, playback, console) and orchestrates them into the four
//! interactive tasks plus the menu that dispatches to them. All external
//! capabilities sit behind ports, so every flow is testable with mocks.

pub mod error;
pub mod menu;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use menu::{MenuChoice, MenuLoop};
pub use services::task_service::{TaskConfig, TaskService};
