//! Site-wide constants for the contact surface.

pub const CONTACT_EMAIL: &str = "hello@brightforge.io";
pub const CONTACT_PHONE: &str = "(555) 014-2800";
pub const CONTACT_ADDRESS: &str = "400 Foundry Ave\nSuite 12, Portland, OR";
pub const CONTACT_HOURS: &str = "Mon-Fri: 9am to 6pm\nSat: 9am to 1pm";
