//! Request validation for recipe payloads and query parameters.

use crate::error::AppError;
use crate::model::RecipeInput;
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    /// Title must contain something other than whitespace.
    pub fn validate(input: &RecipeInput) -> Result<(), AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".into()));
        }
        Ok(())
    }

    /// Required `id` query parameter as a recipe id.
    pub fn require_id(params: &HashMap<String, String>) -> Result<i64, AppError> {
        Self::optional_id(params)?.ok_or_else(|| AppError::BadRequest("missing recipe id".into()))
    }

    /// `id` query parameter if present. Empty counts as absent.
    pub fn optional_id(params: &HashMap<String, String>) -> Result<Option<i64>, AppError> {
        match params.get("id").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("invalid recipe id: {}", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn id_parsing() {
        assert_eq!(RequestValidator::require_id(&params(&[("id", "12")])).unwrap(), 12);
        assert_eq!(RequestValidator::optional_id(&params(&[])).unwrap(), None);
        assert_eq!(RequestValidator::optional_id(&params(&[("id", "")])).unwrap(), None);

        let err = RequestValidator::require_id(&params(&[])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "missing recipe id"));

        let err = RequestValidator::require_id(&params(&[("id", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.contains("abc")));
    }

    #[test]
    fn blank_title_rejected() {
        let mut input = RecipeInput {
            title: "   ".into(),
            description: String::new(),
            ingredients: vec![],
            instructions: vec![],
        };
        assert!(RequestValidator::validate(&input).is_err());
        input.title = "Soup".into();
        assert!(RequestValidator::validate(&input).is_ok());
    }
}
