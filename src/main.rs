use std::io;

use clap::Parser;

use ptahhotep::Workspace;
use ptahhotep::config::{Cli, WorkspaceConfig};
use ptahhotep::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use ptahhotep::drivers::{InputDriver, OutputDriver};
use ptahhotep::event_loop::{ControlFlow, EventLoop};
use ptahhotep::tracing_sub;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = WorkspaceConfig::try_from(&cli)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    tracing_sub::init(config.log_level, config.log_file.as_deref()).map_err(io::Error::other)?;
    tracing::info!(
        cell_width = config.metrics.cell_width,
        cell_height = config.metrics.cell_height,
        presets = config.presets,
        "starting workspace"
    );

    let mut workspace = Workspace::new(&config);
    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), config.tick);
    event_loop.driver().set_mouse_capture(true)?;

    let result = event_loop.run(|_, event| {
        match event {
            Some(event) => {
                workspace.handle_event(&event);
            }
            None => output.draw(|mut frame| workspace.render(&mut frame))?,
        }
        if workspace.should_quit() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    });

    output.exit()?;
    if let Err(err) = &result {
        tracing::error!(%err, "workspace stopped");
    }
    result
}
