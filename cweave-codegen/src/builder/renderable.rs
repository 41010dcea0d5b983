//! The sink seam between node models and text output.
//!
//! Nodes never build strings for whole files themselves; they write lines
//! into a [`Sink`], which owns the only mutable state of a render pass: the
//! indentation depth.

/// An append-only, line-oriented writer with an indentation depth.
///
/// Every construct that opens a nested region must pair `push_indent` with
/// `push_dedent` so siblings see the depth they started with.
pub trait Sink {
    /// Write text with no indentation prefix and no newline.
    fn push_raw(&mut self, s: &str);

    /// Write a line prefixed with the current indentation.
    fn push_line(&mut self, s: &str);

    /// Write an empty line (no indentation).
    fn push_blank(&mut self);

    /// Increase the indentation depth by one level.
    fn push_indent(&mut self);

    /// Decrease the indentation depth by one level.
    fn push_dedent(&mut self);
}

/// A node that knows how to write itself to a [`Sink`].
///
/// Rendering takes `&self`: a tree can be rendered any number of times and
/// produces the same text each time.
pub trait Renderable {
    /// Write this node to the sink.
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S);
}

impl<T: Renderable> Renderable for [T] {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        for item in self {
            item.render_to(out);
        }
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.as_slice().render_to(out);
    }
}
