//! Abstract operations.

/// Operation to draw a value from scratch.
#[derive(Clone, Copy, Debug)]
pub struct Draw<T>(pub T);

/// Operation to highlight a value over an already drawn one.
#[derive(Clone, Copy, Debug)]
pub struct Highlight<T>(pub T);
