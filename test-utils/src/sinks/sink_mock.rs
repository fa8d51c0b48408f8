use cube_common::constants::N_TRIANGLE_COORDINATES;
use cube_common::TriangleSink;

type MockCallback = Option<Box<dyn FnMut(&[f32; N_TRIANGLE_COORDINATES])>>;

/// Triangle sink that records every submission instead of drawing it.
#[derive(Default)]
pub struct SinkMock {
    triangles: Vec<[f32; N_TRIANGLE_COORDINATES]>,
    callback: MockCallback,
}

impl SinkMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&[f32; N_TRIANGLE_COORDINATES]) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn triangles(&self) -> &[[f32; N_TRIANGLE_COORDINATES]] {
        &self.triangles
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
    }
}

impl TriangleSink for SinkMock {
    fn draw_triangle(&mut self, vertices: &[f32; N_TRIANGLE_COORDINATES]) {
        if let Some(callback) = self.callback.as_mut() {
            callback(vertices);
        }
        self.triangles.push(*vertices);
    }
}

impl std::fmt::Debug for SinkMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkMock")
            .field("triangles", &self.triangles)
            .field("callback", &"<callback_fn>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_triangles() {
        let mut sink = SinkMock::new();
        let vertices = [0.0; N_TRIANGLE_COORDINATES];
        sink.draw_triangle(&vertices);
        assert_eq!(sink.triangles(), &[vertices]);
        sink.clear();
        assert!(sink.triangles().is_empty());
    }

    #[test]
    fn test_callback_invoked() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        let mut sink = SinkMock::new();
        sink.register_callback(move |_| calls_clone.set(calls_clone.get() + 1));
        sink.draw_triangle(&[1.0; N_TRIANGLE_COORDINATES]);
        sink.draw_triangle(&[2.0; N_TRIANGLE_COORDINATES]);
        assert_eq!(calls.get(), 2);
    }
}
