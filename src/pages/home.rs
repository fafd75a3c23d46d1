use leptos::prelude::*;

use crate::components::drift_field::DriftFieldCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
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

			<div class="drift-field-page">
				<DriftFieldCanvas />
				<div class="page-overlay">
					<h1>"Drifting Nodes"</h1>
					<p class="subtitle">
						"A soft field of circles wandering behind the page content."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
