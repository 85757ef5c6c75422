//! 产品数据模型

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::store::StoreError;

pub type ProductId = u64;

/// 产品记录，`id` 由存储分配，创建后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub(crate) fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
        }
    }
}

/// 创建/更新请求体
///
/// 所有字段在线上格式中都是可选的，缺失与非法的判断统一交给 [`ProductPayload::into_fields`]。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_price")]
    #[validate(required, range(exclusive_min = 0.0))]
    pub price: Option<f64>,

    #[validate(required, length(min = 1))]
    pub category: Option<String>,

    pub in_stock: Option<bool>,
}

/// 校验通过后的产品字段
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductPayload {
    /// 校验请求体并转换为类型化字段
    ///
    /// 字段缺失优先于价格非法报告；`inStock` 缺省为 `true`。
    pub fn into_fields(self) -> Result<ProductFields, StoreError> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let missing = field_errors
                .values()
                .flat_map(|errs| errs.iter())
                .any(|err| err.code == "required" || err.code == "length");
            return Err(if missing {
                StoreError::MissingFields
            } else {
                StoreError::InvalidPrice
            });
        }

        match (self.name, self.description, self.price, self.category) {
            (Some(name), Some(description), Some(price), Some(category)) => Ok(ProductFields {
                name,
                description,
                price,
                category,
                in_stock: self.in_stock.unwrap_or(true),
            }),
            _ => Err(StoreError::MissingFields),
        }
    }
}

/// 价格既可以是 JSON 数字，也可以是数字字符串；空字符串视为缺失
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    let price = match Option::<RawPrice>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawPrice::Number(n)) => n,
        Some(RawPrice::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(RawPrice::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid price: {s:?}")))?,
    };

    if !price.is_finite() {
        return Err(D::Error::custom("price must be a finite number"));
    }
    Ok(Some(price))
}

/// 删除成功后的响应体
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
    pub product: Product,
}

impl DeleteProductResponse {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
            product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ProductPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_payload_defaults_in_stock() {
        let fields = payload(json!({
            "name": "Desk Lamp",
            "description": "LED lamp",
            "price": 24.5,
            "category": "home"
        }))
        .into_fields()
        .unwrap();

        assert_eq!(fields.name, "Desk Lamp");
        assert_eq!(fields.price, 24.5);
        assert!(fields.in_stock);
    }

    #[test]
    fn test_missing_field_is_reported_before_price() {
        let err = payload(json!({
            "name": "Desk Lamp",
            "description": "LED lamp",
            "price": -3
        }))
        .into_fields()
        .unwrap_err();
        assert_eq!(err, StoreError::MissingFields);

        let err = payload(json!({
            "name": "",
            "description": "LED lamp",
            "price": 3,
            "category": "home"
        }))
        .into_fields()
        .unwrap_err();
        assert_eq!(err, StoreError::MissingFields);
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [json!(0), json!(-0.01), json!("0")] {
            let err = payload(json!({
                "name": "Desk Lamp",
                "description": "LED lamp",
                "price": price,
                "category": "home"
            }))
            .into_fields()
            .unwrap_err();
            assert_eq!(err, StoreError::InvalidPrice);
        }
    }

    #[test]
    fn test_price_accepts_numeric_string() {
        let p = payload(json!({ "price": " 19.90 " }));
        assert_eq!(p.price, Some(19.9));

        let p = payload(json!({ "price": "" }));
        assert_eq!(p.price, None);

        let p = payload(json!({ "price": null }));
        assert_eq!(p.price, None);
    }

    #[test]
    fn test_price_rejects_garbage() {
        assert!(serde_json::from_value::<ProductPayload>(json!({ "price": "cheap" })).is_err());
        assert!(serde_json::from_value::<ProductPayload>(json!({ "price": "NaN" })).is_err());
        assert!(serde_json::from_value::<ProductPayload>(json!({ "price": true })).is_err());
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: 7,
            name: "Mug".into(),
            description: "Ceramic".into(),
            price: 8.0,
            category: "kitchen".into(),
            in_stock: false,
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["inStock"], json!(false));
        assert!(value.get("in_stock").is_none());
    }
}
