//! 产品控制器
//!
//! 与传输层无关：每个动作只依赖 [`ProductRepository`]，返回
//! [`ActionResult`]（渲染 / 重定向 / 未找到）。存储的非预期错误原样向上传播。

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{model::Product, repository::ProductRepository};
use crate::core::error::StoreError;
use crate::core::response::{ActionResult, RedirectTarget, ViewName};
use crate::core::validation::ValidationResult;

pub type ActionOutcome<M> = Result<ActionResult<M>, StoreError>;

#[derive(Clone)]
pub struct ProductsController {
    repository: Arc<dyn ProductRepository>,
}

impl ProductsController {
    pub const INDEX: RedirectTarget = RedirectTarget {
        action: "Index",
        path: "/products",
    };

    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ProductRepository> {
        &self.repository
    }

    pub async fn index(&self) -> ActionOutcome<Vec<Product>> {
        let products = self.repository.get_all().await?;
        Ok(ActionResult::view(ViewName::Index, products))
    }

    pub async fn details(&self, id: Option<i32>) -> ActionOutcome<Product> {
        let Some(id) = id else {
            return Ok(ActionResult::RedirectToAction(Self::INDEX));
        };
        self.render_existing(ViewName::Details, id).await
    }

    pub fn create_form(&self) -> ActionResult<Option<Product>> {
        ActionResult::view(ViewName::Create, None)
    }

    pub async fn create(&self, product: Product, validation: ValidationResult) -> ActionOutcome<Product> {
        if !validation.is_valid() {
            debug!("Create rejected by validation: {:?}", validation);
            return Ok(ActionResult::rerender(ViewName::Create, product, validation));
        }

        let stored = self.repository.create(&product).await?;
        info!("Created product: {} ({})", stored.name, stored.id);
        Ok(ActionResult::RedirectToAction(Self::INDEX))
    }

    pub async fn edit_form(&self, id: Option<i32>) -> ActionOutcome<Product> {
        let Some(id) = id else {
            return Ok(ActionResult::RedirectToAction(Self::INDEX));
        };
        self.render_existing(ViewName::Edit, id).await
    }

    pub async fn edit(
        &self,
        id: Option<i32>,
        product: Product,
        validation: ValidationResult,
    ) -> ActionOutcome<Product> {
        if id != Some(product.id) {
            debug!("Edit id {:?} does not match body id {}", id, product.id);
            return Ok(ActionResult::NotFound);
        }

        if !validation.is_valid() {
            debug!("Edit rejected by validation: {:?}", validation);
            return Ok(ActionResult::rerender(ViewName::Edit, product, validation));
        }

        match self.repository.update(&product).await {
            Ok(()) => {}
            Err(err @ StoreError::Concurrency { .. }) => {
                warn!("Concurrent change while updating product {}", product.id);
                if self.repository.get_by_id(product.id).await?.is_none() {
                    return Ok(ActionResult::NotFound);
                }
                return Err(err);
            }
            Err(err) => return Err(err),
        }

        info!("Updated product: {} ({})", product.name, product.id);
        Ok(ActionResult::RedirectToAction(Self::INDEX))
    }

    pub async fn delete_form(&self, id: Option<i32>) -> ActionOutcome<Product> {
        let Some(id) = id else {
            return Ok(ActionResult::NotFound);
        };
        self.render_existing(ViewName::Delete, id).await
    }

    pub async fn delete_confirmed(&self, id: i32) -> ActionOutcome<Product> {
        self.repository.delete(id).await?;
        info!("Deleted product: {}", id);
        Ok(ActionResult::RedirectToAction(Self::INDEX))
    }

    async fn render_existing(&self, view: ViewName, id: i32) -> ActionOutcome<Product> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ActionResult::view(view, product)),
            None => {
                debug!("Product {} not found", id);
                Ok(ActionResult::NotFound)
            }
        }
    }
}
