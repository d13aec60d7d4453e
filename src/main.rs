use skyburst::app::App;
use skyburst::RunError;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
