//! 表单绑定
//!
//! 把提交的表单字段绑定成 [`Product`]，同时产生显式的 [`ValidationResult`]。
//! 无法解析的值不会让请求失败，只会记录为字段错误，用户输入按原样回显。

use std::collections::HashMap;
use validator::Validate;

use super::model::Product;
use crate::core::validation::ValidationResult;

/// 绑定后的表单
#[derive(Debug, Clone, PartialEq)]
pub struct BoundProduct {
    pub product: Product,
    pub validation: ValidationResult,
}

/// 绑定编辑表单，`id` 参与绑定
pub fn bind_product(fields: &HashMap<String, String>) -> BoundProduct {
    bind(fields, true)
}

/// 绑定新建表单：id 由存储分配，表单中的 `id` 一律忽略
pub fn bind_new_product(fields: &HashMap<String, String>) -> BoundProduct {
    bind(fields, false)
}

fn bind(fields: &HashMap<String, String>, with_id: bool) -> BoundProduct {
    let mut validation = ValidationResult::new();
    let mut product = Product::default();

    if let Some(raw) = non_empty(fields, "id").filter(|_| with_id) {
        match raw.parse::<i32>() {
            Ok(id) => product.id = id,
            Err(_) => validation.add_error("id", format!("The value '{}' is not valid for Id.", raw)),
        }
    }

    product.name = fields.get("name").map(|s| s.trim().to_string()).unwrap_or_default();
    product.color = fields.get("color").map(|s| s.trim().to_string()).unwrap_or_default();

    match non_empty(fields, "price") {
        Some(raw) => match raw.parse::<f64>() {
            Ok(price) if price.is_finite() => product.price = price,
            _ => validation.add_error("price", format!("The value '{}' is not valid for Price.", raw)),
        },
        None => validation.add_error("price", "The Price field is required."),
    }

    if let Err(errors) = product.validate() {
        validation.merge(&errors);
    }

    BoundProduct {
        product,
        validation,
    }
}

/// 解析查询字符串中的 id，缺失、空串或非整数都视为没有 id
pub fn parse_id(raw: Option<&str>) -> Option<i32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn non_empty<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn binds_a_complete_form() {
        let bound = bind_product(&form(&[
            ("id", "4"),
            ("name", " Silgi "),
            ("price", "12.5"),
            ("color", "Beyaz"),
        ]));

        assert!(bound.validation.is_valid());
        assert_eq!(bound.product, Product::new(4, "Silgi", 12.5, "Beyaz"));
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let bound = bind_product(&form(&[("name", "Kalem"), ("price", "100"), ("color", "Mavi")]));
        assert!(bound.validation.is_valid());
        assert_eq!(bound.product.id, 0);
    }

    #[test]
    fn unparseable_values_are_field_errors() {
        let bound = bind_product(&form(&[
            ("id", "x"),
            ("name", "Kalem"),
            ("price", "abc"),
            ("color", "Mavi"),
        ]));

        assert!(!bound.validation.is_valid());
        assert_eq!(bound.validation.errors_for("id"), ["The value 'x' is not valid for Id."]);
        assert_eq!(
            bound.validation.errors_for("price"),
            ["The value 'abc' is not valid for Price."]
        );
        assert_eq!(bound.product.name, "Kalem");
    }

    #[rstest]
    #[case("2147483646")]
    #[case("x")]
    fn new_product_form_drops_the_id(#[case] id: &str) {
        let bound = bind_new_product(&form(&[
            ("id", id),
            ("name", "Silgi"),
            ("price", "1"),
            ("color", "Beyaz"),
        ]));

        assert!(bound.validation.is_valid());
        assert_eq!(bound.product.id, 0);
    }

    #[rstest]
    #[case("NaN")]
    #[case("inf")]
    fn non_finite_prices_are_rejected(#[case] price: &str) {
        let bound = bind_product(&form(&[("name", "Kalem"), ("price", price), ("color", "Mavi")]));
        assert_eq!(bound.validation.fields().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn missing_fields_collect_every_error() {
        let bound = bind_product(&HashMap::new());
        assert_eq!(
            bound.validation.fields().collect::<Vec<_>>(),
            vec!["color", "name", "price"]
        );
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("abc"), None)]
    #[case(Some(" 7 "), Some(7))]
    #[case(Some("-1"), Some(-1))]
    fn parses_query_ids(#[case] raw: Option<&str>, #[case] expected: Option<i32>) {
        assert_eq!(parse_id(raw), expected);
    }
}
