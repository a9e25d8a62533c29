use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateBlogRequest {
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub blog_topic: String,
}

/// A topic of only whitespace is as missing as an absent one.
fn not_blank(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("Missing 'blog_topic' in request".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct GenerateBlogResponse {
    pub body: String,
}
