use signup_personalize::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo::console::warn!(format!("console logger unavailable: {e}"));
    }

    yew::Renderer::<App>::new().render();
}
