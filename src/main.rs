use leptos::prelude::*;
use site_architecture::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
