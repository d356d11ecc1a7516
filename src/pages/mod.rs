pub mod contact;
pub mod gallery;
pub mod home;
pub mod property;
