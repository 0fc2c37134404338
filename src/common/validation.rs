use validator::{ValidationError, ValidationErrors};

/// Format validation errors into a single readable message
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} validation failed", field));
            messages.push(msg);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join(", ")
    }
}

/// Answer labels are single letters A-D
pub fn validate_answer_label(label: &str) -> Result<(), ValidationError> {
    if !matches!(label, "A" | "B" | "C" | "D") {
        return Err(ValidationError::new("answer_label_invalid")
            .with_message(format!("Answer label must be one of A-D, got {:?}", label).into()));
    }

    Ok(())
}
