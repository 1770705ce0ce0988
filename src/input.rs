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
use crate::geom::{vec2, Vec2i};
use crate::style::{KeyMode, MouseButton};

/// Per-frame input state, fed in by the client and consumed by
/// [`crate::context::Context`]. The core never polls an input backend
/// itself.
#[derive(Default, Clone, Debug)]
pub struct Input {
    mouse_pos: Vec2i,
    last_mouse_pos: Vec2i,
    mouse_wheel: Vec2i,
    mouse_down: MouseButton,
    mouse_pressed: MouseButton,
    key_down: KeyMode,
    key_pressed: KeyMode,
    input_text: String,
}

impl Input {
    /// Creates a zeroed input frame.
    pub fn new() -> Self { Self::default() }

    /// Records the latest absolute mouse position.
    pub fn set_mouse_pos(&mut self, pos: Vec2i) { self.mouse_pos = pos; }

    /// Accumulates scroll wheel delta for this frame.
    pub fn add_scroll(&mut self, delta: Vec2i) { self.mouse_wheel.x += delta.x; self.mouse_wheel.y += delta.y; }

    /// Marks a mouse button as pressed this frame (and held from now on).
    pub fn mouse_down(&mut self, btn: MouseButton) {
        self.mouse_pressed |= btn & !self.mouse_down;
        self.mouse_down |= btn;
    }

    /// Marks a mouse button as released.
    pub fn mouse_up(&mut self, btn: MouseButton) { self.mouse_down &= !btn; }

    /// Marks a key as pressed this frame (and held from now on).
    pub fn key_down(&mut self, key: KeyMode) {
        self.key_pressed |= key & !self.key_down;
        self.key_down |= key;
    }

    /// Marks a key as released.
    pub fn key_up(&mut self, key: KeyMode) { self.key_down &= !key; }

    /// Appends client-decoded text input (already UTF-8, already IME
    /// composed) for this frame, consumed by `textbox_raw`. The accumulator
    /// is capped at 32 bytes per frame; a caller that overflows it is
    /// feeding more text than a single frame can carry.
    pub fn push_text(&mut self, text: &str) {
        assert!(self.input_text.len() + text.len() <= 32, "input_text overflow: capped at 32 bytes per frame");
        self.input_text.push_str(text);
    }

    /// Current absolute mouse position.
    pub fn mouse_pos(&self) -> Vec2i { self.mouse_pos }

    /// Mouse movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2i { vec2(self.mouse_pos.x - self.last_mouse_pos.x, self.mouse_pos.y - self.last_mouse_pos.y) }

    /// Accumulated scroll delta this frame.
    pub fn scroll_delta(&self) -> Vec2i { self.mouse_wheel }

    /// Buttons currently held.
    pub fn mouse_down_buttons(&self) -> MouseButton { self.mouse_down }

    /// Buttons that transitioned to held this frame.
    pub fn mouse_pressed_buttons(&self) -> MouseButton { self.mouse_pressed }

    /// Keys currently held.
    pub fn key_down_keys(&self) -> KeyMode { self.key_down }

    /// Keys that transitioned to held this frame.
    pub fn key_pressed_keys(&self) -> KeyMode { self.key_pressed }

    /// Text entered this frame.
    pub fn text(&self) -> &str { &self.input_text }

    /// Clears the per-frame transient fields (`pressed` edges, wheel delta,
    /// text) while preserving held state. Called by `Context::end`, after
    /// the frame's widgets have had a chance to observe this frame's press
    /// edges, so that a button press registered between `end` and the next
    /// `begin` survives through the whole of the next frame before being
    /// cleared.
    pub fn begin_frame(&mut self) {
        self.mouse_pressed = MouseButton::empty();
        self.key_pressed = KeyMode::empty();
        self.mouse_wheel = vec2(0, 0);
        self.input_text.clear();
    }

    /// Snapshots the current mouse position as "last" for next frame's
    /// delta computation. Called at the end of a frame, before
    /// `begin_frame` clears the edge state.
    pub fn end_frame(&mut self) { self.last_mouse_pos = self.mouse_pos; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_only_fires_once() {
        let mut i = Input::new();
        i.mouse_down(MouseButton::LEFT);
        assert!(i.mouse_pressed_buttons().contains(MouseButton::LEFT));
        i.begin_frame();
        assert!(!i.mouse_pressed_buttons().contains(MouseButton::LEFT));
        assert!(i.mouse_down_buttons().contains(MouseButton::LEFT));
    }

    #[test]
    fn mouse_delta_tracks_across_frames() {
        let mut i = Input::new();
        i.set_mouse_pos(vec2(10, 10));
        i.end_frame();
        i.set_mouse_pos(vec2(15, 12));
        let d = i.mouse_delta();
        assert_eq!(d, vec2(5, 2));
    }

    #[test]
    fn text_clears_each_frame() {
        let mut i = Input::new();
        i.push_text("hi");
        assert_eq!(i.text(), "hi");
        i.begin_frame();
        assert_eq!(i.text(), "");
    }
}
