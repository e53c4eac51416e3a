pub mod decor;
pub mod footer;
pub mod icon;
pub mod layout;
pub mod motion;
pub mod navbar;
