//! 产品管理页面

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../public/index.html"))
}
