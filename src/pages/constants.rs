//! Shared layout constants and state keys for pages

/// Height of the feedback label row in pixels
pub const LABEL_ROW_HEIGHT_PX: u32 = 40;

/// State key for the feedback label text
pub const FEEDBACK_KEY: &str = "feedback";

/// State key for the happy face
pub const HAPPY_FACE_KEY: &str = "happy_face";

/// State key for the sad face
pub const SAD_FACE_KEY: &str = "sad_face";
