//! Binary entry point: mounts the client-side app to the document body.

use drift_field_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
