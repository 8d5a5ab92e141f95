use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use tally::cli::{Args, Mode};
use tally::controller::bind_shared;
use tally::logging::{init_tracing, LogTarget};
use tally::server::{HttpServer, HttpState};
use tally::shutdown::ShutdownManager;
use tally::ui::app::App;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mode = args.mode();
    init_tracing(match mode {
        Mode::Headless => LogTarget::Headless,
        Mode::Tui | Mode::TuiWithServer => LogTarget::Tui,
    });

    let config = args.load_config().context("Failed to load configuration")?;
    let (controller, controls, view) =
        bind_shared(&config.elements).context("Failed to bind counter")?;
    let shutdown = ShutdownManager::new();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    // SIGTERM/Ctrl+C end every mode through the same flag, so the terminal
    // UI drops its guard and the HTTP host drains.
    runtime.spawn(shutdown.clone().listen_for_signals());

    let state = HttpState::new(
        controller.clone(),
        controls,
        view.clone(),
        config.elements.clone(),
    );
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    match mode {
        Mode::Headless => runtime.block_on(async {
            let mut server = HttpServer::new(config.server.clone(), state, shutdown.clone());
            let addr = server.try_bind().await?;
            println!("Accepting connections on http://{}", addr);

            server.run().await?;
            anyhow::Ok(())
        }),
        Mode::TuiWithServer => {
            let mut server = HttpServer::new(config.server.clone(), state, shutdown.clone());
            runtime.block_on(server.try_bind())?;
            let url = server.base_url();
            let handle = runtime.spawn(server.run());

            let app = App::new(controller, view).with_server_url(url);
            let result = tally::ui::run(app, tick_rate, shutdown.clone());
            shutdown.signal();
            runtime.block_on(handle)??;
            result.context("Terminal UI failed")
        }
        Mode::Tui => {
            let app = App::new(controller, view);
            tally::ui::run(app, tick_rate, shutdown).context("Terminal UI failed")
        }
    }
}
