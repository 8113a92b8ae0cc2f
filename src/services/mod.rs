pub mod catalog;
pub mod dialogue;
pub mod forms;
pub mod gallery;
pub mod sessions;
