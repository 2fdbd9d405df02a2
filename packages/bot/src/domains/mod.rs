// Bot domains

pub mod home;
pub mod listings;
pub mod onboarding;
pub mod settings;
