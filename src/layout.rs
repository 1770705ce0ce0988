//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use crate::fixed_vec::FixedVec;
use crate::geom::{rect, vec2, Recti, Vec2i};

/// Maximum number of widths a single `row()` call may declare.
pub const MAX_WIDTHS: usize = 16;
/// Maximum nesting depth of the layout stack.
pub const LAYOUT_STACK_SIZE: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Row,
    Column,
}

/// One entry of the layout stack: the running cursor and row/column state
/// for a single container (or nested column) body.
#[derive(Copy, Clone, Debug)]
pub struct Layout {
    /// Content-area rectangle this layout lays widgets out within.
    body: Recti,
    /// Top-left corner widgets are placed relative to.
    position: Vec2i,
    /// Size of the last widget placed, used by `NEXT_ROW`-style advances.
    size: Vec2i,
    /// Cursor for the next `next()` call.
    next: Vec2i,
    /// Accumulated maximum extent, used to report content size for scrolling
    /// and `AUTO_SIZE` containers.
    max: Vec2i,
    widths: [i32; MAX_WIDTHS],
    n_widths: usize,
    row_index: usize,
    row_height: i32,
    direction: Direction,
    indent: i32,
}

impl Layout {
    fn new(body: Recti, indent: i32) -> Self {
        Layout {
            body,
            position: vec2(body.x, body.y),
            size: vec2(0, 0),
            next: vec2(body.x, body.y),
            max: vec2(i32::MIN, i32::MIN),
            widths: [0; MAX_WIDTHS],
            n_widths: 0,
            row_index: 0,
            row_height: 0,
            direction: Direction::Row,
            indent,
        }
    }
}

/// Row/column layout engine. Owns a stack of [`Layout`] frames:
/// one per open container body, plus one per nested `begin_column`.
pub struct LayoutStack {
    stack: FixedVec<Layout, LAYOUT_STACK_SIZE>,
    spacing: i32,
    /// Style's default widget width/height, padding already folded in, used
    /// to resolve a row's `0`-width/height cells (spec §4.4's table).
    default_size: Vec2i,
}

impl LayoutStack {
    /// Creates an empty layout stack using `spacing` between cells and
    /// `default_size` (already padded) for cells declared with width/height
    /// `0`.
    pub fn new(spacing: i32, default_size: Vec2i) -> Self { LayoutStack { stack: FixedVec::new(), spacing, default_size } }

    fn top(&self) -> &Layout { self.stack.last().expect("layout_next called with no open layout") }
    fn top_mut(&mut self) -> &mut Layout { self.stack.last_mut().expect("no open layout") }

    /// Opens a new layout frame over `body`'s content area.
    pub fn begin(&mut self, body: Recti, indent: i32) { self.stack.push(Layout::new(body, indent)); }

    /// Closes the current layout frame, merging its accumulated maximum
    /// extent into the parent (used when closing a nested column so the
    /// parent's content-size bookkeeping still accounts for it).
    pub fn end(&mut self) -> Vec2i {
        let closed = self.stack.pop().expect("layout_end without matching begin");
        let max = vec2(closed.max.x.max(closed.body.x), closed.max.y.max(closed.body.y));
        if let Some(parent) = self.stack.last_mut() {
            parent.position.x = closed.body.x - parent.body.x;
            parent.next.x = parent.position.x;
            parent.next.y = closed.max.y.max(parent.next.y);
            parent.max.x = parent.max.x.max(max.x);
            parent.max.y = parent.max.y.max(max.y);
        }
        max
    }

    /// Declares the widths for the upcoming row(s). A width of 0 means "size
    /// to content" (client-provided via the widget's own measurement); a
    /// positive width is an absolute pixel size; a negative width `-k` means
    /// "fill remaining space minus `k` pixels".
    pub fn row(&mut self, widths: &[i32], height: i32) {
        assert!(widths.len() <= MAX_WIDTHS, "row() given more than {MAX_WIDTHS} widths");
        let l = self.top_mut();
        l.n_widths = widths.len();
        l.widths[..widths.len()].copy_from_slice(widths);
        l.row_index = 0;
        l.row_height = height;
        l.direction = Direction::Row;
        l.next = vec2(l.body.x + l.indent, l.next.y.max(l.position.y));
    }

    /// Begins a nested column: a new layout frame whose body is the
    /// remaining width of the current row at the current cursor.
    pub fn begin_column(&mut self) {
        let next = self.next_rect(0, 0);
        self.begin(next, 0);
    }

    /// Ends a nested column, merging its extent back into the parent row.
    pub fn end_column(&mut self) { self.end(); }

    /// Overrides the position/size the *next* `next()` call will return,
    /// bypassing the row width table for that one widget.
    pub fn set_next(&mut self, r: Recti, relative: bool) {
        let l = self.top_mut();
        l.next = if relative { vec2(l.body.x + r.x, l.body.y + r.y) } else { vec2(r.x, r.y) };
        l.size = vec2(r.width, r.height);
    }

    fn next_rect(&mut self, content_w: i32, content_h: i32) -> Recti {
        let default_size = self.default_size;
        let l = self.top_mut();
        let idx = l.row_index;
        let width = if idx < l.n_widths {
            l.widths[idx]
        } else if l.n_widths == 0 {
            0
        } else {
            l.widths[l.n_widths - 1]
        };
        // a row/column declared with 0 falls back to the caller's requested
        // content size first (an explicit widget measurement), and only to
        // the style's padded default when the caller didn't ask for one
        // either — mirrors the reference `layout_next`'s `result.w == 0 →
        // style.size.x + 2*padding` step, generalized to let widgets that do
        // know their own content size (e.g. checkboxes sizing to label text)
        // still request it via `content_w`/`content_h`.
        let height = if l.row_height != 0 {
            l.row_height
        } else if content_h != 0 {
            content_h
        } else {
            default_size.y
        };
        let resolved_w = resolve_fill(width, l.body, l.next.x, if content_w != 0 { content_w } else { default_size.x });
        let pos = l.next;
        let size = vec2(resolved_w, height);

        l.next.x += size.x + self.spacing;
        l.row_index += 1;
        if l.row_index >= l.n_widths.max(1) {
            l.next.x = l.body.x + l.indent;
            l.next.y += size.y + self.spacing;
            l.row_index = 0;
        }
        l.position = pos;
        l.size = size;
        l.max.x = l.max.x.max(pos.x + size.x);
        l.max.y = l.max.y.max(pos.y + size.y);
        rect(pos.x, pos.y, size.x, size.y)
    }

    /// Advances the cursor and returns the rectangle the next widget should
    /// occupy, resolving content-sized (`0`) cells against `content_size`.
    pub fn next(&mut self, content_size: Vec2i) -> Recti { self.next_rect(content_size.x, content_size.y) }

    /// Current content-area rectangle of the open layout.
    pub fn body(&self) -> Recti { self.top().body }

    /// Accumulated maximum extent so far (used for scroll content size and
    /// `AUTO_SIZE`).
    pub fn max_extent(&self) -> Vec2i { self.top().max }

    /// `true` if any layout frame is currently open.
    pub fn is_open(&self) -> bool { !self.stack.is_empty() }
}

fn resolve_fill(width: i32, body: Recti, cursor_x: i32, content_w: i32) -> i32 {
    if width > 0 {
        width
    } else if width == 0 {
        content_w.max(0)
    } else {
        let remaining = body.x + body.width - cursor_x;
        (remaining + width + 1).max(0) // width is negative (-k): fill to edge, +1 per the original fill formula
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_widths_tile_left_to_right() {
        let mut ls = LayoutStack::new(4, vec2(0, 0));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[50, 50], 20);
        let r1 = ls.next(vec2(0, 0));
        let r2 = ls.next(vec2(0, 0));
        assert_eq!(r1, rect(0, 0, 50, 20));
        assert_eq!(r2, rect(54, 0, 50, 20));
    }

    #[test]
    fn negative_width_fills_to_edge_minus_k() {
        let mut ls = LayoutStack::new(0, vec2(0, 0));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[-10], 20);
        let r = ls.next(vec2(0, 0));
        assert_eq!(r, rect(0, 0, 191, 20));
    }

    #[test]
    fn single_fill_column_of_minus_one_spans_full_body_width() {
        let mut ls = LayoutStack::new(0, vec2(0, 0));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[-1], 20);
        let r = ls.next(vec2(0, 0));
        assert_eq!(r.width, 200);
    }

    #[test]
    fn row_wraps_after_declared_widths_exhausted() {
        let mut ls = LayoutStack::new(0, vec2(0, 0));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[50, 50], 20);
        let _ = ls.next(vec2(0, 0));
        let _ = ls.next(vec2(0, 0));
        let r3 = ls.next(vec2(0, 0));
        assert_eq!(r3.y, 20);
    }

    #[test]
    fn nested_column_merges_into_parent() {
        let mut ls = LayoutStack::new(0, vec2(0, 0));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[100], 20);
        let _outer = ls.next(vec2(0, 0));
        ls.begin_column();
        ls.row(&[30], 15);
        let _inner = ls.next(vec2(0, 0));
        ls.end_column();
        assert!(ls.is_open());
    }

    #[test]
    fn zero_width_falls_back_to_style_default_size() {
        let mut ls = LayoutStack::new(0, vec2(78, 20));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[0], 0);
        let r = ls.next(vec2(0, 0));
        assert_eq!(r, rect(0, 0, 78, 20));
    }

    #[test]
    fn explicit_content_size_overrides_style_default() {
        let mut ls = LayoutStack::new(0, vec2(78, 20));
        ls.begin(rect(0, 0, 200, 100), 0);
        ls.row(&[0], 0);
        let r = ls.next(vec2(40, 16));
        assert_eq!(r, rect(0, 0, 40, 16));
    }
}
