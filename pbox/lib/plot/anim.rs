//! Frame-by-frame animation driving.
//!
//! An [`Animation`] knows how many frames it has and how to draw any one of
//! them from scratch; it holds no state between frames. The drivers here
//! clear the canvas, draw each frame in order, and hand the result to the
//! backend before moving on to the next.

use std::path::Path;
use log::{ debug, info };
use plotters::{ coord::Shift, prelude::* };
use crate::{
    error::PlotError,
    plot::{ FigureSize, PlotResult },
};

/// A sequence of frames, each a pure function of its index.
pub trait Animation {
    /// Total number of frames.
    fn frame_count(&self) -> usize;

    /// Display time of each frame, in milliseconds.
    fn frame_delay_ms(&self) -> u32;

    /// Draw frame `idx` onto a blank `root`.
    fn draw_frame<DB>(&self, root: &DrawingArea<DB, Shift>, idx: usize)
        -> PlotResult<()>
    where DB: DrawingBackend;
}

/// Draw every frame of `anim` in order onto `root`, presenting after each.
///
/// With a multi-frame backend (e.g. an animated GIF) each presentation
/// appends a frame; otherwise each frame overwrites the last.
pub fn render_frames<A, DB>(anim: &A, root: &DrawingArea<DB, Shift>)
    -> PlotResult<()>
where
    A: Animation,
    DB: DrawingBackend,
{
    let n = anim.frame_count();
    for idx in 0..n {
        debug!("drawing frame {}/{}", idx + 1, n);
        root.fill(&WHITE)?;
        anim.draw_frame(root, idx)?;
        root.present()?;
    }
    Ok(())
}

/// Render all frames of `anim` to an animated GIF at `path`.
///
/// Blocks until encoding is finished. If rendering fails partway through,
/// the file is left incomplete.
pub fn save_gif<A, P>(anim: &A, path: P, size: FigureSize) -> PlotResult<()>
where
    A: Animation,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    info!(
        "rendering {} frames ({} ms each) to {}",
        anim.frame_count(), anim.frame_delay_ms(), path.display(),
    );
    let root
        = BitMapBackend::gif(path, size.pixels(), anim.frame_delay_ms())
        .map_err(|err| PlotError::Backend(err.to_string()))?
        .into_drawing_area();
    render_frames(anim, &root)?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use super::*;

    // records which frames were requested, drawing nothing
    struct Recorder {
        frames: usize,
        seen: RefCell<Vec<usize>>,
    }

    impl Animation for Recorder {
        fn frame_count(&self) -> usize { self.frames }

        fn frame_delay_ms(&self) -> u32 { 10 }

        fn draw_frame<DB>(&self, _root: &DrawingArea<DB, Shift>, idx: usize)
            -> PlotResult<()>
        where DB: DrawingBackend
        {
            PlotError::check_frame(idx, self.frames)?;
            self.seen.borrow_mut().push(idx);
            Ok(())
        }
    }

    #[test]
    fn frames_are_drawn_in_order() {
        let rec = Recorder { frames: 4, seen: RefCell::new(Vec::new()) };
        let mut buf = vec![0_u8; 8 * 8 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (8, 8))
                .into_drawing_area();
            render_frames(&rec, &root).unwrap();
        }
        assert_eq!(*rec.seen.borrow(), vec![0, 1, 2, 3]);
        assert!(buf.iter().all(|&b| b == 255));
    }
}
