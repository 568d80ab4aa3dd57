mod empty_message;
mod error_message;
mod help;
mod loading;
mod status;

/// Small reusable paragraphs shared by the panels.
pub struct UiComponent;
