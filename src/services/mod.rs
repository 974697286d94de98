//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions with the
//! repository layer. They provide a clean boundary between the menu loop
//! and the data access layer.

mod contact_service;

pub use contact_service::ContactService;
