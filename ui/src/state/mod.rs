pub mod contact;
pub mod gallery;
pub mod nav;
