/// Prefix of every notification subject line
pub const NOTIFICATION_SUBJECT_PREFIX: &str = "New Contact Form Submission: ";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_MISSING_FIELDS: &str =
    "Missing required fields: name, email, subject, and message are required.";

pub const MSG_INVALID_EMAIL: &str = "Invalid email format.";

pub const MSG_EMAIL_SENT: &str = "Email sent successfully!";

pub const MSG_DELIVERY_FAILED: &str = "Failed to send email. Please try again later.";

pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";

pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

pub const MSG_HEALTH_OK: &str = "Server is running";
