//! 产品业务服务

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use super::model::{Product, ProductId, ProductPayload};
use super::store::{ProductStore, StoreError};
use crate::core::error::CoreError;

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingFields | StoreError::InvalidPrice => {
                CoreError::BadRequest(err.to_string())
            }
            StoreError::NotFound(_) => CoreError::NotFound(err.to_string()),
        }
    }
}

/// 持有产品存储的服务，所有写操作在写锁内完成
#[derive(Clone)]
pub struct ProductService {
    store: Arc<RwLock<ProductStore>>,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self, failure: &str) -> Result<RwLockReadGuard<'_, ProductStore>, CoreError> {
        self.store
            .read()
            .map_err(|_| CoreError::InternalServerError(failure.to_string()))
    }

    fn write(&self, failure: &str) -> Result<RwLockWriteGuard<'_, ProductStore>, CoreError> {
        self.store
            .write()
            .map_err(|_| CoreError::InternalServerError(failure.to_string()))
    }

    pub fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let store = self.read("Failed to fetch products")?;
        Ok(store.list_all().to_vec())
    }

    pub fn get_product(&self, id: ProductId) -> Result<Product, CoreError> {
        let store = self.read("Failed to fetch product")?;
        store
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id).into())
    }

    pub fn create_product(&self, payload: ProductPayload) -> Result<Product, CoreError> {
        let mut store = self.write("Failed to create product")?;
        let product = store.create(payload).map_err(|e| {
            warn!("创建产品被拒绝: {}", e);
            e
        })?;
        info!(id = product.id, "已创建产品: {}", product.name);
        Ok(product)
    }

    /// 更新产品
    ///
    /// 请求体的解析结果在确认 `id` 存在之后才生效，目标不存在时总是返回 404。
    pub fn update_product(
        &self,
        id: ProductId,
        payload: Result<ProductPayload, CoreError>,
    ) -> Result<Product, CoreError> {
        let mut store = self.write("Failed to update product")?;
        if store.find_by_id(id).is_none() {
            return Err(StoreError::NotFound(id).into());
        }
        let payload = payload?;
        let product = store.replace(id, payload).map_err(|e| {
            warn!(id, "更新产品被拒绝: {}", e);
            e
        })?;
        info!(id, "已更新产品");
        Ok(product)
    }

    pub fn delete_product(&self, id: ProductId) -> Result<Product, CoreError> {
        let mut store = self.write("Failed to delete product")?;
        let product = store.remove(id)?;
        info!(id, remaining = store.len(), "已删除产品");
        Ok(product)
    }

    pub fn count(&self) -> Result<usize, CoreError> {
        let store = self.read("Failed to read product store")?;
        debug!(count = store.len(), "统计产品数量");
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_store_errors_map_to_http_taxonomy() {
        let err: CoreError = StoreError::InvalidPrice.into();
        assert!(matches!(err, CoreError::BadRequest(ref m) if m == "Price must be greater than 0"));

        let err: CoreError = StoreError::NotFound(9).into();
        assert!(matches!(err, CoreError::NotFound(ref m) if m == "Product not found"));
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let service = ProductService::new(ProductStore::with_sample_data());
        let clone = service.clone();
        let _ = thread::spawn(move || {
            let _guard = clone.store.write().unwrap();
            panic!("poison the store");
        })
        .join();

        let err = service.list_products().unwrap_err();
        assert!(matches!(err, CoreError::InternalServerError(ref m) if m == "Failed to fetch products"));
        assert!(matches!(
            service.delete_product(1),
            Err(CoreError::InternalServerError(_))
        ));
    }

    #[test]
    fn test_update_reports_missing_id_before_body_error() {
        let service = ProductService::new(ProductStore::with_sample_data());
        let body_error = || Err(CoreError::BadRequest("invalid type: integer".to_string()));

        let err = service.update_product(9999, body_error()).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref m) if m == "Product not found"));

        let err = service.update_product(1, body_error()).unwrap_err();
        assert!(matches!(err, CoreError::BadRequest(_)));
        assert_eq!(service.get_product(1).unwrap().name, "Wireless Headphones");
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let service = ProductService::new(ProductStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    let payload: ProductPayload = serde_json::from_value(serde_json::json!({
                        "name": format!("p{i}"),
                        "description": "d",
                        "price": 1.5,
                        "category": "c"
                    }))
                    .unwrap();
                    service.create_product(payload).unwrap().id
                })
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
