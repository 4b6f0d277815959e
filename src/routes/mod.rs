pub mod delete_post;
pub mod get_post;
pub mod update_post;
