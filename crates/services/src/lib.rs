#![forbid(unsafe_code)]

pub mod app_services;
pub mod card_service;
pub mod draw_service;
pub mod error;

pub use app_services::AppServices;
pub use card_service::CardService;
pub use draw_service::DrawService;
pub use error::{AppServicesError, CardServiceError, DrawError};
