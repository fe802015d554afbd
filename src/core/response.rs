//! 核心响应处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;
use uuid::Uuid;

use super::{error::CoreError, validation::ValidationResult};

/// API 响应结构
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::new(true, data)
    }

    pub fn new(success: bool, data: T) -> Self {
        Self {
            success,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// 视图名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewName {
    Index,
    Details,
    Create,
    Edit,
    Delete,
}

/// 渲染视图所需的数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<M> {
    pub view: ViewName,
    pub model: M,
    pub errors: ValidationResult,
}

/// 重定向目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectTarget {
    pub action: &'static str,
    pub path: &'static str,
}

/// 控制器动作的三种结果：渲染、重定向、未找到
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    View(ViewResult<M>),
    RedirectToAction(RedirectTarget),
    NotFound,
}

impl<M> ActionResult<M> {
    pub fn view(view: ViewName, model: M) -> Self {
        Self::rerender(view, model, ValidationResult::new())
    }

    pub fn rerender(view: ViewName, model: M, errors: ValidationResult) -> Self {
        ActionResult::View(ViewResult {
            view,
            model,
            errors,
        })
    }
}

impl<M: Serialize> IntoResponse for ActionResult<M> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::View(view) => {
                let valid = view.errors.is_valid();
                let status = if valid {
                    StatusCode::OK
                } else {
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                (status, Json(ApiResponse::new(valid, view))).into_response()
            }
            ActionResult::RedirectToAction(target) => Redirect::to(target.path).into_response(),
            ActionResult::NotFound => {
                CoreError::NotFound("The requested product does not exist".to_string())
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    const INDEX: RedirectTarget = RedirectTarget {
        action: "Index",
        path: "/products",
    };

    #[test]
    fn redirect_uses_see_other() {
        let response = ActionResult::<()>::RedirectToAction(INDEX).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/products");
    }

    #[test]
    fn invalid_view_is_unprocessable() {
        let mut errors = ValidationResult::new();
        errors.add_error("name", "required");
        let response = ActionResult::rerender(ViewName::Create, (), errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn valid_view_is_ok() {
        let response = ActionResult::view(ViewName::Index, Vec::<u32>::new()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn not_found_is_404() {
        let response = ActionResult::<()>::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
