pub mod confirm;
pub mod editor;
pub mod fetch;
pub mod list_edit;
pub mod parse;
pub mod status;
