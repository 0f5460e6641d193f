pub mod app;
pub mod ask_jarvis;
pub mod button;
pub mod create_user_modal;
pub mod modal;
pub mod pull_to_refresh;
pub mod server_list;
pub mod table;
pub mod user_list;
