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
use crate::id::Id;
use crate::style::{MouseButton, WidgetOption};

/// Outcome of a single [`Interaction::update_control`] call: what the caller
/// (a widget function) should draw and whether this frame counts as an
/// activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// `true` if this control is the one the mouse is currently over.
    pub hovered: bool,
    /// `true` if this control currently holds focus.
    pub focused: bool,
}

/// Cross-frame hover/focus bookkeeping. Only one widget may hold
/// focus at a time; focus is a per-frame lease that `end_frame` revokes
/// unless some widget re-asserted it by calling `update_control` again this
/// frame.
#[derive(Default)]
pub struct Interaction {
    hover: Id,
    focus: Id,
    focus_touched_this_frame: bool,
}

impl Interaction {
    /// Creates interaction state with nothing hovered or focused.
    pub fn new() -> Self { Self::default() }

    /// Currently hovered widget, if any.
    pub fn hover(&self) -> Id { self.hover }

    /// Currently focused widget, if any.
    pub fn focus(&self) -> Id { self.focus }

    /// Forces focus onto `id` unconditionally (used by containers that open
    /// a text box already active, or by `bring_to_front`-on-click logic).
    pub fn set_focus(&mut self, id: Id) {
        self.focus = id;
        self.focus_touched_this_frame = true;
    }

    /// Clears focus if it currently belongs to `id`.
    pub fn release_focus(&mut self, id: Id) {
        if self.focus == id {
            self.focus = Id::NONE;
        }
    }

    /// Resolves hover/focus transitions for one control this frame. `over`
    /// is the fully-resolved "is the mouse over this control" test — the
    /// control's rect contains the mouse, the current clip contains the
    /// mouse, and the enclosing container is the frame's `hover_root` (see
    /// [`crate::context::Context::mouse_over`]); the last conjunct is what
    /// keeps widgets in a covered window from stealing hover out from under
    /// whatever window is actually on top. `opt`'s
    /// [`WidgetOption::HOLD_FOCUS`] keeps focus alive across frames where the
    /// mouse button isn't held, for controls (textboxes, in-progress numeric
    /// edits) that aren't driven by a continuous press.
    pub fn update_control(&mut self, id: Id, over: bool, mouse_down: MouseButton, mouse_pressed: MouseButton, opt: WidgetOption) -> ControlState {
        let mouse_over = over;

        if self.focus == id {
            self.focus_touched_this_frame = true;
        }

        if opt.contains(WidgetOption::NO_INTERACT) {
            return ControlState { hovered: false, focused: self.focus == id };
        }

        if mouse_over && mouse_down.is_empty() {
            self.hover = id;
        }

        if self.focus == id {
            if !mouse_pressed.is_empty() && !mouse_over {
                self.focus = Id::NONE;
            }
            if mouse_down.is_empty() && !opt.contains(WidgetOption::HOLD_FOCUS) {
                self.focus = Id::NONE;
            }
        }

        if self.hover == id {
            if !mouse_pressed.is_empty() {
                self.focus = id;
                self.focus_touched_this_frame = true;
            } else if !mouse_over {
                self.hover = Id::NONE;
            }
        }

        ControlState { hovered: self.hover == id, focused: self.focus == id }
    }

    /// Clears the per-frame focus-reassertion flag. Called at the start of
    /// `Context::begin`.
    pub fn begin_frame(&mut self) { self.focus_touched_this_frame = false; }

    /// Revokes focus if no widget reasserted it this frame. Called at the
    /// end of `Context::end`.
    pub fn end_frame(&mut self) {
        if !self.focus_touched_this_frame {
            self.focus = Id::NONE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_set_when_mouse_over_and_no_button_down() {
        let mut i = Interaction::new();
        let s = i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::empty());
        assert!(s.hovered);
        assert_eq!(i.hover(), Id(1));
    }

    #[test]
    fn press_while_hovered_grants_focus() {
        let mut i = Interaction::new();
        i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::empty());
        let s = i.update_control(Id(1), true, MouseButton::LEFT, MouseButton::LEFT, WidgetOption::empty());
        assert!(s.focused);
        assert_eq!(i.focus(), Id(1));
    }

    #[test]
    fn focus_revoked_at_end_of_frame_without_reassertion() {
        let mut i = Interaction::new();
        i.set_focus(Id(5));
        i.begin_frame();
        // widget never calls update_control this frame (e.g. it was hidden).
        i.end_frame();
        assert_eq!(i.focus(), Id::NONE);
    }

    #[test]
    fn focus_survives_frame_when_reasserted() {
        let mut i = Interaction::new();
        i.begin_frame();
        i.set_focus(Id(5));
        i.end_frame();
        assert_eq!(i.focus(), Id(5));
    }

    #[test]
    fn focus_survives_mouse_release_with_hold_focus() {
        let mut i = Interaction::new();
        i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::empty());
        i.update_control(Id(1), true, MouseButton::LEFT, MouseButton::LEFT, WidgetOption::empty());
        assert_eq!(i.focus(), Id(1));
        // mouse released (and moved off the control), but HOLD_FOCUS keeps it (e.g. a textbox while typing).
        let s = i.update_control(Id(1), false, MouseButton::empty(), MouseButton::empty(), WidgetOption::HOLD_FOCUS);
        assert!(s.focused);
        assert_eq!(i.focus(), Id(1));
    }

    #[test]
    fn focus_drops_on_mouse_release_without_hold_focus() {
        let mut i = Interaction::new();
        i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::empty());
        i.update_control(Id(1), true, MouseButton::LEFT, MouseButton::LEFT, WidgetOption::empty());
        let s = i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::empty());
        assert!(!s.focused);
        assert_eq!(i.focus(), Id::NONE);
    }

    #[test]
    fn no_interact_never_hovers_or_focuses() {
        let mut i = Interaction::new();
        let s = i.update_control(Id(1), true, MouseButton::LEFT, MouseButton::LEFT, WidgetOption::NO_INTERACT);
        assert!(!s.hovered);
        assert_ne!(i.hover(), Id(1));
    }

    #[test]
    fn no_interact_still_touches_existing_focus() {
        // a focused widget declared NO_INTERACT for one frame (e.g. disabled
        // mid-edit) must still be re-asserted, or `end_frame` clears it.
        let mut i = Interaction::new();
        i.set_focus(Id(1));
        i.begin_frame();
        let s = i.update_control(Id(1), true, MouseButton::empty(), MouseButton::empty(), WidgetOption::NO_INTERACT);
        assert!(s.focused);
        i.end_frame();
        assert_eq!(i.focus(), Id(1));
    }
}
