pub mod action_list;
pub mod progress_bar;
