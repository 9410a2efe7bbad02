use log::{info, Level};

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting site behavior");
    autopos_site::start();
}
