use std::sync::Arc;

use winit::window::Window;

use crate::orchestrator::WindowControls;

impl WindowControls for Arc<Window> {
    fn minimize(&mut self) {
        self.set_minimized(true);
    }

    fn set_maximized(&mut self, maximized: bool) {
        Window::set_maximized(&**self, maximized);
    }
}
