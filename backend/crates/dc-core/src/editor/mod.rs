pub mod experience_editor;
pub mod experience_list;
pub mod profile_store;
