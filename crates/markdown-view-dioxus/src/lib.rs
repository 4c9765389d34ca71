pub mod ui;

pub use ui::components::error_screen::ErrorScreen;
pub use ui::components::markdown_view::MarkdownView;
pub use ui::components::ui_element::UiElementView;
