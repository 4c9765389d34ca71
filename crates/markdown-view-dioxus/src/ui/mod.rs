pub mod components;
pub mod css;
