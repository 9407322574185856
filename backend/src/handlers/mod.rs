pub mod github;
pub mod root;


pub use github::configure_github_routes;
pub use root::configure_root_routes;
