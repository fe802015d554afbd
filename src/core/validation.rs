//! 表单校验结果
//!
//! 绑定阶段和 `validator` 规则产生的错误都汇总到 [`ValidationResult`]，
//! 由调用方显式传入控制器，而不是挂在全局状态上。

use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// 字段名 -> 错误消息列表
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// 合并 `validator` 产生的字段错误
    pub fn merge(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field));
                self.add_error(field.to_string(), message);
            }
        }
    }
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        let mut result = ValidationResult::new();
        result.merge(&errors);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "required"))]
        name: String,
    }

    #[test]
    fn empty_result_is_valid() {
        assert!(ValidationResult::new().is_valid());
    }

    #[test]
    fn add_error_groups_by_field() {
        let mut result = ValidationResult::new();
        result.add_error("name", "first");
        result.add_error("name", "second");
        result.add_error("price", "bad");

        assert!(!result.is_valid());
        assert_eq!(result.errors_for("name"), ["first", "second"]);
        assert_eq!(result.fields().collect::<Vec<_>>(), vec!["name", "price"]);
        assert!(result.errors_for("color").is_empty());
    }

    #[test]
    fn converts_validator_errors() {
        let errors = Sample {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let result = ValidationResult::from(errors);
        assert_eq!(result.errors_for("name"), ["required"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut result = ValidationResult::new();
        result.add_error("name", "required");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["required"] }));
    }
}
