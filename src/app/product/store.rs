//! 产品内存存储
//!
//! 按插入顺序保存产品记录，并维护单调递增的 id 计数器。
//! 计数器与集合长度无关，删除后 id 不会被重新分配。

use super::model::{Product, ProductId, ProductPayload};

/// 存储层错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Price must be greater than 0")]
    InvalidPrice,
    #[error("Product not found")]
    NotFound(ProductId),
}

#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// 带三条示例数据的存储，计数器从 4 开始
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        let samples = [
            (
                "Wireless Headphones",
                "High-quality wireless headphones with noise cancellation",
                199.99,
                "electronics",
                true,
            ),
            (
                "Cotton T-Shirt",
                "Comfortable 100% cotton t-shirt in various colors",
                29.99,
                "clothing",
                true,
            ),
            (
                "JavaScript Guide",
                "Complete guide to modern JavaScript development",
                49.99,
                "books",
                false,
            ),
        ];

        for (name, description, price, category, in_stock) in samples {
            let id = store.allocate_id();
            store.products.push(Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                in_stock,
            });
        }
        store
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn create(&mut self, payload: ProductPayload) -> Result<Product, StoreError> {
        let fields = payload.into_fields()?;
        let product = Product::from_fields(self.allocate_id(), fields);
        self.products.push(product.clone());
        Ok(product)
    }

    /// 覆盖除 `id` 外的全部字段，记录在集合中的位置不变
    ///
    /// 目标不存在时先报告 `NotFound`，不再校验请求体。
    pub fn replace(
        &mut self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let fields = payload.into_fields()?;
        let product = Product::from_fields(id, fields);
        self.products[index] = product.clone();
        Ok(product)
    }

    pub fn remove(&mut self, id: ProductId) -> Result<Product, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.products.remove(index))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn allocate_id(&mut self) -> ProductId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
