// API module entry
// Read-only REST endpoints over the sample collections

mod handlers;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::routing::{Collection, Route};

/// Produce the response for a resolved route
pub fn handle_route(route: Route, state: &AppState) -> Response<Full<Bytes>> {
    let data = &state.data;
    match route {
        Route::Root => handlers::handle_root(),
        Route::Health => handlers::handle_health(),
        Route::Stats => handlers::handle_stats(state),
        Route::List(Collection::Users) => handlers::handle_list(&data.users),
        Route::List(Collection::Products) => handlers::handle_list(&data.products),
        Route::List(Collection::Posts) => handlers::handle_list(&data.posts),
        Route::Item(Collection::Users, id) => handlers::handle_item(&data.users, id),
        Route::Item(Collection::Products, id) => handlers::handle_item(&data.products, id),
        Route::Item(Collection::Posts, id) => handlers::handle_item(&data.posts, id),
        Route::NotFound => handlers::handle_route_not_found(),
    }
}
