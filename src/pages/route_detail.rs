use leptos::prelude::*;

use crate::components::route_map::RouteMap;

#[component]
pub fn RouteDetailPage() -> impl IntoView {
	view! { <RouteMap /> }
}
