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
use crate::geom::{rect, vec2, Recti, Vec2i};
use crate::id::Id;
use crate::pool::Pool;

/// Number of simultaneously retained windows/panels/popups.
pub const CONTAINER_POOL_SIZE: usize = 48;
/// Number of simultaneously retained tree-node/header expansion states.
pub const TREENODE_POOL_SIZE: usize = 48;
/// Maximum nesting depth of open containers within a single frame.
pub const CONTAINER_STACK_SIZE: usize = 32;
/// Maximum number of root containers (top-level windows/popups) in a frame.
pub const ROOT_LIST_SIZE: usize = 32;

/// Cross-frame state for one window, panel, or popup. Everything else about
/// a container (its widgets, its layout) is rebuilt every frame; only this
/// struct survives between frames, keyed by the container's [`Id`] in a
/// [`ContainerArena`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Container {
    /// Outer rectangle, including title bar if present.
    pub rect: Recti,
    /// Content rectangle (inside title bar/borders), used as the layout body.
    pub body: Recti,
    /// Current scroll offset within `body`.
    pub scroll: Vec2i,
    /// Content size measured last frame; drives scrollbar extents and
    /// `AUTO_SIZE` resizing, which therefore trails content by one frame.
    pub content_size: Vec2i,
    /// Draw order; higher draws later (on top). Updated by `bring_to_front`.
    pub zindex: i32,
    /// `false` once the user has clicked the close icon.
    pub open: bool,
}

impl Container {
    /// A fresh container positioned at the given default rectangle.
    pub fn new(default_rect: Recti) -> Self {
        Container { rect: default_rect, body: default_rect, scroll: vec2(0, 0), content_size: vec2(0, 0), zindex: 0, open: true }
    }
}

/// Fixed-capacity, LRU-recycled store of [`Container`]s, backed by an array
/// instead of a `HashMap` so a frame can never cause it to grow.
pub struct ContainerArena {
    pool: Pool<CONTAINER_POOL_SIZE>,
    data: [Container; CONTAINER_POOL_SIZE],
    next_zindex: i32,
}

impl Default for ContainerArena {
    fn default() -> Self { ContainerArena { pool: Pool::new(), data: [Container::default(); CONTAINER_POOL_SIZE], next_zindex: 1 } }
}

impl ContainerArena {
    /// Creates an empty arena.
    pub fn new() -> Self { Self::default() }

    /// Gets the existing container for `id`, if it was touched recently
    /// enough to still occupy a slot.
    pub fn get(&self, id: Id) -> Option<&Container> { self.pool.find(id).map(|idx| &self.data[idx]) }

    /// `true` if `id` already occupies a pool slot (as opposed to the slot
    /// [`ContainerArena::get_or_insert`] is about to create fresh).
    pub fn contains(&self, id: Id) -> bool { self.pool.find(id).is_some() }

    /// Gets or creates the container for `id`, initializing a fresh one at
    /// `default_rect` the first time it's seen (or after eviction).
    pub fn get_or_insert(&mut self, id: Id, frame: u64, default_rect: Recti) -> &mut Container {
        let existed = self.pool.find(id).is_some();
        let idx = self.pool.claim(id, frame);
        if !existed {
            self.data[idx] = Container::new(default_rect);
        }
        &mut self.data[idx]
    }

    /// Raises `id`'s container above every other currently-known container.
    pub fn bring_to_front(&mut self, id: Id) {
        if let Some(idx) = self.pool.find(id) {
            self.data[idx].zindex = self.next_zindex;
            self.next_zindex += 1;
        }
    }

    /// Iterates every container currently occupying a pool slot, along with
    /// its id. Used once per frame to resolve which root the mouse is over.
    pub fn iter_live(&self) -> impl Iterator<Item = (Id, &Container)> + '_ {
        self.pool.iter_live().map(move |id| (id, &self.data[self.pool.find(id).unwrap()]))
    }
}

/// `scroll_base` / `scroll_max` / `scroll_drag_delta` / `scroll_thumb`
/// are parameterized over a single axis so the same code serves both the
/// vertical and horizontal scrollbar.

/// Maximum scroll offset along one axis: how much content overhangs the
/// visible area, floored at zero (can't scroll a view that already shows
/// everything).
pub fn scrollbar_max_scroll(content_len: i32, view_len: i32) -> i32 { (content_len - view_len).max(0) }

/// Length (in pixels) of the draggable thumb along the scrollbar track.
pub fn scrollbar_thumb_len(track_len: i32, thumb_size: i32, content_len: i32, view_len: i32) -> i32 {
    if content_len <= 0 {
        return track_len;
    }
    thumb_size.max((track_len * view_len / content_len).min(track_len))
}

/// Thumb's offset along the track for the current `scroll` position.
pub fn scrollbar_thumb_pos(track_len: i32, thumb_len: i32, scroll: i32, max_scroll: i32) -> i32 {
    if max_scroll <= 0 {
        return 0;
    }
    let travel = (track_len - thumb_len).max(0);
    crate::geom::clamp(scroll, 0, max_scroll) * travel / max_scroll
}

/// Maps a drag delta in pixels along the track back into a scroll-offset
/// delta, the inverse of [`scrollbar_thumb_pos`].
pub fn scrollbar_drag_delta(track_len: i32, thumb_len: i32, max_scroll: i32, pixel_delta: i32) -> i32 {
    let travel = (track_len - thumb_len).max(1);
    pixel_delta * max_scroll / travel
}

/// Vertical scrollbar track rectangle along the right edge of `body`, given
/// the configured `scrollbar_size`.
pub fn vertical_scrollbar_rect(body: Recti, scrollbar_size: i32) -> Recti {
    rect(body.x + body.width, body.y, scrollbar_size, body.height)
}

/// Horizontal scrollbar track rectangle along the bottom edge of `body`.
pub fn horizontal_scrollbar_rect(body: Recti, scrollbar_size: i32) -> Recti {
    rect(body.x, body.y + body.height, body.width, scrollbar_size)
}

/// Shrinks `body` to leave room for whichever scrollbar the *previous*
/// frame's `content` (plus padding) overflows, so the current frame's layout
/// never places a widget under a scrollbar track. Mirrors the teacher's
/// `scrollbars` container-begin-time shrink: a vertical scrollbar steals
/// width, a horizontal one steals height, each measured against `body`
/// before either shrink is applied.
pub fn shrink_body_for_scrollbars(body: Recti, content: Vec2i, padding: i32, scrollbar_size: i32) -> Recti {
    let mut b = body;
    if content.y + padding * 2 > body.height {
        b.width -= scrollbar_size;
    }
    if content.x + padding * 2 > body.width {
        b.height -= scrollbar_size;
    }
    b
}

/// Minimum window size enforced by the resize handle.
pub const MIN_WINDOW_SIZE: Vec2i = Vec2i { x: 96, y: 64 };

/// Rectangle of the small diagonal resize handle at a window's bottom-right
/// corner.
pub fn resize_handle_rect(outer: Recti, handle_size: i32) -> Recti {
    rect(outer.x + outer.width - handle_size, outer.y + outer.height - handle_size, handle_size, handle_size)
}

/// Title bar rectangle along the top edge of a window's outer rectangle.
pub fn title_bar_rect(outer: Recti, title_height: i32) -> Recti { rect(outer.x, outer.y, outer.width, title_height) }

/// Close icon rectangle, a square docked to the right end of the title bar.
pub fn close_icon_rect(title_bar: Recti) -> Recti {
    rect(title_bar.x + title_bar.width - title_bar.height, title_bar.y, title_bar.height, title_bar.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_reuses_slot_across_frames() {
        let mut a = ContainerArena::new();
        let id = Id(7);
        a.get_or_insert(id, 0, rect(0, 0, 10, 10)).scroll = vec2(3, 4);
        let c = a.get_or_insert(id, 1, rect(0, 0, 10, 10));
        assert_eq!(c.scroll, vec2(3, 4));
    }

    #[test]
    fn bring_to_front_increases_zindex_monotonically() {
        let mut a = ContainerArena::new();
        let id_a = Id(1);
        let id_b = Id(2);
        a.get_or_insert(id_a, 0, rect(0, 0, 1, 1));
        a.get_or_insert(id_b, 0, rect(0, 0, 1, 1));
        a.bring_to_front(id_a);
        let za = a.get(id_a).unwrap().zindex;
        a.bring_to_front(id_b);
        let zb = a.get(id_b).unwrap().zindex;
        assert!(zb > za);
    }

    #[test]
    fn scroll_max_floors_at_zero() {
        assert_eq!(scrollbar_max_scroll(50, 100), 0);
        assert_eq!(scrollbar_max_scroll(150, 100), 50);
    }

    #[test]
    fn thumb_len_has_minimum_size() {
        let len = scrollbar_thumb_len(100, 8, 10000, 100);
        assert_eq!(len, 8);
    }

    #[test]
    fn thumb_pos_and_drag_delta_are_inverse_ish() {
        let track = 100;
        let thumb = 20;
        let max_scroll = 200;
        let pos = scrollbar_thumb_pos(track, thumb, 100, max_scroll);
        let delta = scrollbar_drag_delta(track, thumb, max_scroll, pos);
        // round-trips within rounding error of the original scroll value.
        assert!((delta - 100).abs() <= max_scroll / track + 1);
    }

    #[test]
    fn resize_handle_is_in_bottom_right_corner() {
        let outer = rect(10, 10, 200, 100);
        let r = resize_handle_rect(outer, 16);
        assert_eq!(r, rect(194, 94, 16, 16));
    }

    #[test]
    fn shrink_body_for_scrollbars_leaves_small_content_untouched() {
        let body = rect(0, 0, 100, 100);
        let shrunk = shrink_body_for_scrollbars(body, vec2(0, 0), 0, 10);
        assert_eq!(shrunk, body);
    }

    #[test]
    fn shrink_body_for_scrollbars_reserves_space_on_both_axes() {
        let body = rect(0, 0, 100, 100);
        let shrunk = shrink_body_for_scrollbars(body, vec2(200, 200), 0, 10);
        assert_eq!(shrunk, rect(0, 0, 90, 90));
    }
}
