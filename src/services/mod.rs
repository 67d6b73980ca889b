pub mod auth_service;
pub mod mail_service;
pub mod upload_service;

pub use auth_service::AuthService;
pub use mail_service::MailService;
pub use upload_service::UploadService;
