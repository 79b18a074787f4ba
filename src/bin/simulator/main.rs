use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod hud;
mod playback;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = app::run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
