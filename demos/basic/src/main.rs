mod app;
mod log_renderer;
mod simulated_source;

use app::App;

const FRAMES: u32 = 120;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut app = App::default();
    for _ in 0..FRAMES {
        app.update();
    }
    app.shutdown();
}
