pub mod contact_form;
pub mod footer;
pub mod gallery_modal;
pub mod header;
pub mod modal;
pub mod property_modal;
pub mod range_picker;
