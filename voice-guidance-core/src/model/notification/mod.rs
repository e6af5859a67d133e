mod announcement_timing;
mod notification_settings;

pub use announcement_timing::AnnouncementTiming;
pub use notification_settings::NotificationSettings;
