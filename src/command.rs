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
use crate::geom::{intersect_rects, Color, Recti, Vec2i};
use crate::style::{ControlColor, FontId, Style, WidgetOption};

/// Maximum number of commands recorded in a single frame. A byte-arena
/// implementation would size this as a raw KiB budget; here the buffer is a
/// tagged `enum` rather than raw bytes, so the ceiling is expressed as an
/// item count instead.
pub const COMMAND_CAPACITY: usize = 4096;

/// Identifies which built-in glyph a `Command::Icon` should draw. The core
/// ships no rasterizer (non-goal); the client's backend maps these to actual
/// pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IconId {
    /// Title bar close button.
    Close,
    /// Checked checkbox mark.
    Check,
    /// Collapsed tree-node/header disclosure triangle.
    Collapsed,
    /// Expanded tree-node/header disclosure triangle.
    Expanded,
}

/// A single recorded drawing (or clip-region) operation. The command list is
/// append-only within a frame; [`Command::Jump`] entries are threaded through
/// afterward to express z-order without physically moving any other command.
#[derive(Clone, Debug)]
pub enum Command {
    /// Installs a new clip rectangle for all subsequent commands, until the
    /// matching pop (a second `Clip` pushed by the popping side).
    Clip {
        /// The rectangle to clip to, in screen coordinates.
        rect: Recti,
    },
    /// Filled rectangle.
    Rect {
        /// Rectangle to fill, in screen coordinates.
        rect: Recti,
        /// Fill color.
        color: Color,
    },
    /// Baseline-positioned text run, in `font`'s metrics.
    Text {
        /// Font the client should use to shape/rasterize `text`.
        font: FontId,
        /// Top-left position of the text run.
        pos: Vec2i,
        /// Text color.
        color: Color,
        /// The text to draw.
        text: String,
    },
    /// A built-in icon glyph, centered in `rect`.
    Icon {
        /// Rectangle the icon is centered within.
        rect: Recti,
        /// Which built-in glyph to draw.
        id: IconId,
        /// Icon color.
        color: Color,
    },
    /// Redirects traversal to `target` (an index into the same buffer), or
    /// ends traversal when `target` is `None`. Used exclusively to express
    /// root-container z-order; never emitted by widget code directly.
    Jump {
        /// Index of the next command to visit, or `None` to stop.
        target: Option<usize>,
    },
}

/// Whether a rectangle falls entirely inside, entirely outside, or straddles
/// the current clip rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Clip {
    /// Entirely outside the clip rectangle; nothing to draw.
    All,
    /// Straddles the clip boundary; needs a clip/restore wrap.
    Part,
    /// Entirely inside the clip rectangle; draws unwrapped.
    None,
}

/// Append-only per-frame command log plus the clip-rectangle stack used to
/// decide how drawing calls are recorded.
pub struct CommandList {
    commands: FixedVec<Command, COMMAND_CAPACITY>,
    clip_stack: FixedVec<Recti, 32>,
}

impl Default for CommandList {
    fn default() -> Self { CommandList { commands: FixedVec::new(), clip_stack: FixedVec::new() } }
}

/// A rectangle that covers the whole i32 coordinate space; used as the
/// implicit clip region before any `push_clip_rect` call.
pub fn unclipped_rect() -> Recti {
    Recti { x: i32::MIN / 2, y: i32::MIN / 2, width: i32::MAX, height: i32::MAX }
}

impl CommandList {
    /// Creates an empty command list with no active clip.
    pub fn new() -> Self { Self::default() }

    /// Clears all recorded commands, keeping capacity. Called at the start
    /// of every frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Number of commands recorded so far this frame.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Appends `cmd`, returning the index it was stored at.
    pub fn push(&mut self, cmd: Command) -> usize {
        let idx = self.commands.len();
        self.commands.push(cmd);
        idx
    }

    /// Mutably borrows a previously pushed command, used to patch
    /// `Command::Jump { target }` after the fact (root z-sorting).
    pub fn get_mut(&mut self, idx: usize) -> &mut Command { &mut self.commands[idx] }

    /// Current clip rectangle, or the unbounded rect if the stack is empty.
    pub fn clip_rect(&self) -> Recti { *self.clip_stack.last().unwrap_or(&UNCLIPPED) }

    /// Pushes a new clip rectangle, intersected with the current one
    /// (clip regions only ever shrink as they nest).
    pub fn push_clip_rect(&mut self, rect: Recti) {
        let current = self.clip_rect();
        let clipped = intersect_rects(rect, current);
        self.clip_stack.push(clipped);
        self.push(Command::Clip { rect: clipped });
    }

    /// Pops the most recently pushed clip rectangle and re-installs its
    /// parent, recording the restore as another `Clip` command.
    pub fn pop_clip_rect(&mut self) {
        self.clip_stack.pop();
        self.push(Command::Clip { rect: self.clip_rect() });
    }

    /// Classifies `rect` against the current clip rectangle.
    pub fn check_clip(&self, rect: Recti) -> Clip {
        let c = self.clip_rect();
        if rect.x >= c.x + c.width
            || rect.x + rect.width <= c.x
            || rect.y >= c.y + c.height
            || rect.y + rect.height <= c.y
        {
            return Clip::All;
        }
        if rect.x >= c.x && rect.x + rect.width <= c.x + c.width && rect.y >= c.y && rect.y + rect.height <= c.y + c.height {
            return Clip::None;
        }
        Clip::Part
    }

    /// Records a filled rectangle, intersected with the clip region. Skips
    /// emitting a command entirely for a fully-clipped or zero-area result.
    pub fn draw_rect(&mut self, rect: Recti, color: Color) {
        let r = intersect_rects(rect, self.clip_rect());
        if !r.is_empty() {
            self.push(Command::Rect { rect: r, color });
        }
    }

    /// Draws a 1px border around `rect` using four thin rectangles.
    pub fn draw_box(&mut self, rect: Recti, color: Color) {
        self.draw_rect(crate::geom::rect(rect.x + 1, rect.y, rect.width - 2, 1), color);
        self.draw_rect(crate::geom::rect(rect.x + 1, rect.y + rect.height - 1, rect.width - 2, 1), color);
        self.draw_rect(crate::geom::rect(rect.x, rect.y, 1, rect.height), color);
        self.draw_rect(crate::geom::rect(rect.x + rect.width - 1, rect.y, 1, rect.height), color);
    }

    /// Records a text run. If only partially visible, wraps it between a
    /// clip push/pop pair so the client renderer need not clip text itself.
    pub fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2i, color: Color, text_bounds: Recti) {
        let clipped = self.check_clip(text_bounds);
        if clipped == Clip::All {
            return;
        }
        if clipped == Clip::Part {
            let clip = self.clip_rect();
            self.push(Command::Clip { rect: clip });
        }
        self.push(Command::Text { font, pos, color, text: text.to_string() });
        if clipped == Clip::Part {
            let clip = self.clip_rect();
            self.push(Command::Clip { rect: clip });
        }
    }

    /// Records a built-in icon, with the same partial-clip wrapping as
    /// [`CommandList::draw_text`].
    pub fn draw_icon(&mut self, id: IconId, rect: Recti, color: Color) {
        let clipped = self.check_clip(rect);
        if clipped == Clip::All {
            return;
        }
        if clipped == Clip::Part {
            let clip = self.clip_rect();
            self.push(Command::Clip { rect: clip });
        }
        self.push(Command::Icon { rect, id, color });
        if clipped == Clip::Part {
            let clip = self.clip_rect();
            self.push(Command::Clip { rect: clip });
        }
    }

    /// Fills `rect` with the palette color for `color_id`, plus a 1px border
    /// unless `color_id` names one of the borderless backgrounds.
    pub fn draw_frame(&mut self, style: &Style, rect: Recti, color_id: ControlColor) {
        self.draw_rect(rect, style.color(color_id));
        if matches!(color_id, ControlColor::ScrollBase | ControlColor::ScrollThumb | ControlColor::TitleBG) {
            return;
        }
        if style.color(ControlColor::Border).a != 0 {
            self.draw_box(expand_by(rect, 1), style.color(ControlColor::Border));
        }
    }

    /// Fills a widget's background, promoting `color_id` to its hover/focus
    /// variant first. A no-op if `opt` requests no frame at all.
    pub fn draw_widget_frame(&mut self, style: &Style, rect: Recti, color_id: ControlColor, focused: bool, hovered: bool, opt: WidgetOption) {
        if opt.has_no_frame() {
            return;
        }
        let mut c = color_id;
        if hovered {
            c = c.hover();
        }
        if focused {
            c = c.focus();
        }
        self.draw_frame(style, rect, c);
    }

    /// Follows the jump chain starting at `start`, yielding every non-`Jump`
    /// command in z-order. This is how a client walks the final frame output
    /// after [`crate::context::Context::end`] has patched the jump targets.
    pub fn iter_from(&self, start: usize) -> CommandIter<'_> { CommandIter { list: self, cursor: Some(start) } }

    /// Raw, insertion-order view of every recorded command (including
    /// `Jump`s), mainly useful for tests and debugging.
    pub fn raw(&self) -> &[Command] { self.commands.as_slice() }
}

const UNCLIPPED: Recti = Recti { x: i32::MIN / 2, y: i32::MIN / 2, width: i32::MAX, height: i32::MAX };

fn expand_by(r: Recti, n: i32) -> Recti { crate::geom::expand_rect(r, n) }

/// Iterator produced by [`CommandList::iter_from`]; transparently follows
/// `Command::Jump` so callers never see jump records themselves.
pub struct CommandIter<'a> {
    list: &'a CommandList,
    cursor: Option<usize>,
}

impl<'a> Iterator for CommandIter<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let idx = self.cursor?;
            match &self.list.commands.as_slice()[idx] {
                Command::Jump { target } => {
                    self.cursor = *target;
                    continue;
                }
                other => {
                    self.cursor = Some(idx + 1).filter(|&i| i < self.list.commands.len());
                    return Some(other);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{color, rect, vec2};

    #[test]
    fn clip_all_part_none() {
        let mut cl = CommandList::new();
        cl.push_clip_rect(rect(0, 0, 100, 100));
        assert_eq!(cl.check_clip(rect(10, 10, 5, 5)), Clip::None);
        assert_eq!(cl.check_clip(rect(90, 90, 20, 20)), Clip::Part);
        assert_eq!(cl.check_clip(rect(200, 200, 5, 5)), Clip::All);
    }

    #[test]
    fn clip_stack_shrinks_monotonically() {
        let mut cl = CommandList::new();
        cl.push_clip_rect(rect(0, 0, 100, 100));
        cl.push_clip_rect(rect(-50, -50, 1000, 1000));
        // second push must be intersected against the first, not replace it.
        assert_eq!(cl.clip_rect(), rect(0, 0, 100, 100));
        cl.pop_clip_rect();
        assert_eq!(cl.clip_rect(), rect(0, 0, 100, 100));
    }

    #[test]
    fn fully_clipped_rect_emits_nothing() {
        let mut cl = CommandList::new();
        cl.push_clip_rect(rect(0, 0, 10, 10));
        let before = cl.len();
        cl.draw_rect(rect(100, 100, 5, 5), color(255, 0, 0, 255));
        assert_eq!(cl.len(), before);
    }

    #[test]
    fn jump_chain_is_transparent_to_iteration() {
        let mut cl = CommandList::new();
        let r1 = cl.push(Command::Rect { rect: rect(0, 0, 1, 1), color: color(1, 1, 1, 1) });
        let j = cl.push(Command::Jump { target: None });
        let r2 = cl.push(Command::Rect { rect: rect(2, 2, 1, 1), color: color(2, 2, 2, 2) });
        *cl.get_mut(j) = Command::Jump { target: Some(r2) };
        let collected: Vec<_> = cl.iter_from(r1).collect();
        // r1's natural successor is the jump, which redirects straight to r2.
        assert_eq!(collected.len(), 2);
        assert!(matches!(collected[0], Command::Rect { .. }));
        assert!(matches!(collected[1], Command::Rect { .. }));
    }

    #[test]
    fn text_inside_clip_region_is_not_wrapped() {
        let mut cl = CommandList::new();
        cl.push_clip_rect(rect(0, 0, 100, 100));
        let before = cl.len();
        cl.draw_text(FontId(0), "hi", vec2(1, 1), color(0, 0, 0, 255), rect(1, 1, 10, 10));
        // one Text command, no surrounding Clip wrap since it's fully inside.
        assert_eq!(cl.len(), before + 1);
    }
}
