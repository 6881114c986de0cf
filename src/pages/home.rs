use leptos::prelude::*;

use crate::components::site_map::{DEFAULT_SECTION_ORDER, SiteMapCanvas};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let section_order = Signal::derive(move || {
		DEFAULT_SECTION_ORDER
			.iter()
			.map(|key| key.to_string())
			.collect::<Vec<_>>()
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="site-architecture">
				<div class="site-architecture-header">
					<h1>"Site Architecture"</h1>
					<p class="subtitle">"Hover a node to trace its links. Click to visit it."</p>
				</div>
				<SiteMapCanvas section_order=section_order />
			</div>
		</ErrorBoundary>
	}
}
