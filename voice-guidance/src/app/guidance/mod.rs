mod guidance_app;
mod guidance_app_config;
mod guidance_app_error;

pub use guidance_app::GuidanceApp;
pub use guidance_app_config::GuidanceAppConfig;
pub use guidance_app_error::GuidanceAppError;
