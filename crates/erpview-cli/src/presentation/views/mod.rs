pub mod system;
pub mod ui_tree;
pub mod view;
