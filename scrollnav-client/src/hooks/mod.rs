pub mod scroll;

pub use scroll::use_nav_autohide;
