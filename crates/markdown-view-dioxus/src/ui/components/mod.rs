pub mod error_screen;
pub mod markdown_view;
pub mod ui_element;
