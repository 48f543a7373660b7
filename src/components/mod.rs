mod email_verification;
mod hero;
mod lead_form;
mod resource_access;
mod resources_section;

pub use email_verification::EmailVerification;
pub use hero::HeroSection;
pub use lead_form::LeadFormSection;
pub use resource_access::ResourceAccess;
pub use resources_section::ResourcesSection;
