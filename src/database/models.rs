pub mod blog;
pub mod blog_tag;
pub mod category;
pub mod comment;
pub mod status;
pub mod tag;
pub mod user;
