//! CRUD routes for one resource kind, mounted at `/{collection}`.

use crate::handlers::entity::{
    create, delete as delete_handler, list, method_not_allowed, read, route_not_found, update,
};
use crate::resource::Resource;
use crate::routes::health;
use crate::state::AppState;
use crate::store::ResourceStore;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn entity_routes<R: Resource>(store: Arc<ResourceStore<R>>) -> Router {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/:id", R::COLLECTION);
    Router::new()
        .route("/health", health(R::SERVICE).fallback(method_not_allowed))
        .route(
            &collection,
            get(list::<R>).post(create::<R>).fallback(method_not_allowed),
        )
        .route(
            &item,
            get(read::<R>)
                .put(update::<R>)
                .delete(delete_handler::<R>)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(AppState { store })
}
