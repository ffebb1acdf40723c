pub mod status_service;
pub mod contact_service;
pub mod gallery_service;
pub mod catalog_service;
