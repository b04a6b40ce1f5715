mod contact_service;
mod mail_dispatcher;

pub use contact_service::ContactService;
pub use mail_dispatcher::MailDispatcher;
