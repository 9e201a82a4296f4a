pub mod header;
pub mod select_input;
pub mod spinner;
pub mod text_input;
