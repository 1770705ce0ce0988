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
use crate::command::IconId;
use crate::context::{Context, Id, Measure};
use crate::geom::{clamp, rect, vec2, Recti};
use crate::style::{ControlColor, MouseButton, WidgetOption};

/// Result of a widget call: which edges of state changed this frame. Most
/// widgets only ever set `submitted`; sliders/numbers also report `changed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetResult {
    /// The widget's primary action fired (button clicked, checkbox toggled,
    /// slider dragged to a new value, textbox `Return` pressed).
    pub submitted: bool,
    /// The widget's value changed, distinct from `submitted` for sliders
    /// where every drag tick changes the value without "submitting" in the
    /// textbox sense.
    pub changed: bool,
}

/// Outcome of a frame's shared shift-click numeric text-edit check,
/// consulted by `slider`/`number` before they run their own drag handling.
enum NumberEdit {
    /// No edit in progress for this widget; proceed with normal handling.
    Inactive,
    /// An edit is in progress and was handled this frame (keystrokes
    /// consumed or the edit just started); the caller must not also run its
    /// drag logic or re-run `update_control` without `HOLD_FOCUS`.
    Editing,
    /// The edit was submitted (or lost focus) this frame; parse result.
    Submitted(f32),
}

fn text_rect_for(rect: Recti, pad: i32) -> Recti { crate::geom::rect(rect.x + pad, rect.y, (rect.width - 2 * pad).max(0), rect.height) }

impl<M: Measure> Context<M> {
    fn next_rect(&mut self, content: (i32, i32)) -> Recti { self.layout_mut().next(vec2(content.0, content.1)) }

    fn text_align_x(&self, rect: Recti, text_w: i32, opt: WidgetOption) -> i32 {
        let pad = self.style.padding;
        if opt.contains(WidgetOption::ALIGN_CENTER) {
            rect.x + (rect.width - text_w) / 2
        } else if opt.contains(WidgetOption::ALIGN_RIGHT) {
            rect.x + rect.width - text_w - pad
        } else {
            rect.x + pad
        }
    }

    fn draw_widget_frame(&mut self, r: Recti, color_id: ControlColor, focused: bool, hovered: bool, opt: WidgetOption) {
        let style = self.style.clone();
        self.command_list_mut().draw_widget_frame(&style, r, color_id, focused, hovered, opt);
    }

    fn draw_control_text(&mut self, text: &str, r: Recti, color_id: ControlColor, opt: WidgetOption) {
        let font = self.style.font;
        let text_w = self.measure().text_width(font, text);
        let text_h = self.measure().text_height(font);
        let x = self.text_align_x(r, text_w, opt);
        let y = r.y + (r.height - text_h) / 2;
        let color = self.style.color(color_id);
        self.command_list_mut().push_clip_rect(r);
        self.command_list_mut().draw_text(font, text, vec2(x, y), color, r);
        self.command_list_mut().pop_clip_rect();
    }

    /// Renders a static, non-interactive label — no id, no hover/focus.
    pub fn label(&mut self, text: &str) {
        let r = self.next_rect((0, 0));
        self.draw_control_text(text, r, ControlColor::Text, WidgetOption::empty());
    }

    /// A clickable push-button. Returns `submitted = true` the frame it is
    /// clicked (press-and-release within the control, per `update_control`'s
    /// hover/focus resolution).
    pub fn button(&mut self, label: &str) -> WidgetResult { self.button_ex(label, WidgetOption::ALIGN_CENTER) }

    /// [`Context::button`] with explicit alignment/frame options.
    pub fn button_ex(&mut self, label: &str, opt: WidgetOption) -> WidgetResult {
        let id = self.ids().get_id_str(label);
        let r = self.next_rect((0, 0));
        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        let state = self.interaction_mut().update_control(id, over, down, pressed, opt);

        self.draw_widget_frame(r, ControlColor::Button, state.focused, state.hovered, opt);
        self.draw_control_text(label, r, ControlColor::Text, opt);

        let submitted = state.hovered && state.focused && pressed.contains(MouseButton::LEFT);
        WidgetResult { submitted, changed: false }
    }

    /// A checkbox; `value` is toggled in place and `submitted` reports
    /// whether this frame's click flipped it.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> WidgetResult {
        let id = self.ids().get_id_str(label);
        let r = self.next_rect((0, 0));
        let box_rect = rect(r.x, r.y, r.height, r.height);
        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        let state = self.interaction_mut().update_control(id, over, down, pressed, WidgetOption::empty());

        let mut changed = false;
        if state.hovered && state.focused && pressed.contains(MouseButton::LEFT) {
            *value = !*value;
            changed = true;
        }

        self.draw_widget_frame(box_rect, ControlColor::Base, state.focused, state.hovered, WidgetOption::empty());
        if *value {
            self.command_list_mut().draw_icon(IconId::Check, box_rect, self.style.color(ControlColor::Text));
        }
        let text_r = rect(r.x + box_rect.width, r.y, r.width - box_rect.width, r.height);
        self.draw_control_text(label, text_r, ControlColor::Text, WidgetOption::empty());

        WidgetResult { submitted: changed, changed }
    }

    /// Word-wrapped, non-interactive paragraph text, one line per row.
    pub fn text(&mut self, text: &str) {
        let font = self.style.font;
        let color = self.style.color(ControlColor::Text);
        let line_h = self.measure().text_height(font);
        let space_w = self.measure().text_width(font, " ");

        self.layout_mut().row(&[-1], line_h);
        let body_width = self.layout().body().width;

        let mut line = String::new();
        let mut line_w = 0;
        for word in text.split(' ') {
            let word_w = self.measure().text_width(font, word);
            let added = if line.is_empty() { word_w } else { word_w + space_w };
            if line_w + added > body_width && !line.is_empty() {
                let r = self.next_rect((0, 0));
                self.command_list_mut().draw_text(font, &line, vec2(r.x, r.y), color, r);
                line.clear();
                line_w = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_w += space_w;
            }
            line.push_str(word);
            line_w += word_w;
        }
        if !line.is_empty() {
            let r = self.next_rect((0, 0));
            self.command_list_mut().draw_text(font, &line, vec2(r.x, r.y), color, r);
        }
    }

    /// A single-line, UTF-8-aware raw text input. `buf` is mutated in
    /// place; `Return` submits (reported via `submitted`) and releases
    /// focus. Backspace removes one whole scalar value (walks back over
    /// UTF-8 continuation bytes), never splitting a multi-byte codepoint.
    pub fn textbox_raw(&mut self, buf: &mut String, id_seed: &str) -> WidgetResult {
        let id = self.ids().get_id_str(id_seed);
        self.textbox_raw_with_id(buf, id)
    }

    /// [`Context::textbox_raw`], but the caller supplies the id directly
    /// instead of deriving it from a seed string — used by
    /// [`Context::number_textbox`] so the edit textbox shares the id that
    /// was actually focused (the slider/number's own id), not one hashed
    /// from an unrelated literal seed.
    fn textbox_raw_with_id(&mut self, buf: &mut String, id: Id) -> WidgetResult {
        let r = self.next_rect((0, 0));
        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        // textboxes own their focus: HOLD_FOCUS keeps it alive across
        // frames where the mouse isn't held, e.g. while typing.
        let state = self.interaction_mut().update_control(id, over, down, pressed, WidgetOption::HOLD_FOCUS);
        if state.hovered && pressed.contains(MouseButton::LEFT) {
            self.interaction_mut().set_focus(id);
        }

        let mut result = WidgetResult::default();
        if self.interaction().focus() == id {
            let typed = self.input().text().to_string();
            if !typed.is_empty() {
                buf.push_str(&typed);
                result.changed = true;
            }
            if self.input().key_pressed_keys().contains(crate::style::KeyMode::BACKSPACE) {
                pop_last_char(buf);
                result.changed = true;
            }
            if self.input().key_pressed_keys().contains(crate::style::KeyMode::RETURN) {
                self.interaction_mut().release_focus(id);
                result.submitted = true;
            }
        }

        self.draw_widget_frame(r, ControlColor::Base, state.focused, state.hovered, WidgetOption::empty());
        let text_r = text_rect_for(r, self.style.padding);
        self.draw_control_text(buf, text_r, ControlColor::Text, WidgetOption::empty());

        if self.interaction().focus() == id {
            let font = self.style.font;
            let text_w = self.measure().text_width(font, buf);
            let text_h = self.measure().text_height(font);
            let caret_x = text_r.x + text_w.min(text_r.width);
            let caret = rect(caret_x, text_r.y + (text_r.height - text_h) / 2, 1, text_h);
            self.command_list_mut().draw_rect(caret, self.style.color(ControlColor::Text));
        }

        result
    }

    /// A draggable slider over `[low, high]`, quantized to `step`
    /// (round-half-up). Shift+click switches to a precise numeric text edit
    /// (see [`Context::number_textbox`]).
    pub fn slider(&mut self, label_seed: &str, value: &mut f32, low: f32, high: f32, step: f32) -> WidgetResult {
        let id = self.ids().get_id_str(label_seed);
        let r = self.next_rect((0, 0));

        match self.number_textbox(id, *value) {
            NumberEdit::Submitted(edited) => {
                *value = clamp(edited, low, high);
                return WidgetResult { submitted: true, changed: true };
            }
            NumberEdit::Editing => return WidgetResult::default(),
            NumberEdit::Inactive => {}
        }

        let mouse = self.input().mouse_pos();
        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        let shift = self.input().key_down_keys().contains(crate::style::KeyMode::SHIFT);
        let state = self.interaction_mut().update_control(id, over, down, pressed, WidgetOption::empty());

        if state.hovered && shift && pressed.contains(MouseButton::LEFT) {
            self.set_number_edit(Some((id, format!("{value}"))));
            return WidgetResult::default();
        }

        let mut changed = false;
        if state.focused && down.contains(MouseButton::LEFT) {
            let range = (high - low).max(f32::EPSILON);
            let t = (mouse.x - r.x) as f32 / r.width.max(1) as f32;
            let raw = low + clamp(t, 0.0, 1.0) * range;
            let stepped = if step > 0.0 { (raw / step + 0.5).floor() * step } else { raw };
            let new_value = clamp(stepped, low, high);
            if (new_value - *value).abs() > f32::EPSILON {
                *value = new_value;
                changed = true;
            }
        }

        self.draw_widget_frame(r, ControlColor::Base, state.focused, state.hovered, WidgetOption::empty());
        let range = (high - low).max(f32::EPSILON);
        let t = clamp((*value - low) / range, 0.0, 1.0);
        let thumb_w = self.style.thumb_size.max(8);
        let thumb_x = r.x + ((r.width - thumb_w) as f32 * t) as i32;
        let thumb = rect(thumb_x, r.y, thumb_w, r.height);
        self.draw_widget_frame(thumb, ControlColor::Button, state.focused, state.hovered, WidgetOption::empty());

        WidgetResult { submitted: false, changed }
    }

    /// A drag-to-change numeric field: while focused and the mouse button is
    /// held, `value` is nudged by `mouse_delta.x * step` each frame.
    pub fn number(&mut self, label_seed: &str, value: &mut f32, step: f32) -> WidgetResult {
        let id = self.ids().get_id_str(label_seed);
        let r = self.next_rect((0, 0));

        match self.number_textbox(id, *value) {
            NumberEdit::Submitted(edited) => {
                *value = edited;
                return WidgetResult { submitted: true, changed: true };
            }
            NumberEdit::Editing => return WidgetResult::default(),
            NumberEdit::Inactive => {}
        }

        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        let shift = self.input().key_down_keys().contains(crate::style::KeyMode::SHIFT);
        let state = self.interaction_mut().update_control(id, over, down, pressed, WidgetOption::empty());

        if state.hovered && shift && pressed.contains(MouseButton::LEFT) {
            self.set_number_edit(Some((id, format!("{value}"))));
            return WidgetResult::default();
        }

        let mut changed = false;
        if state.focused && down.contains(MouseButton::LEFT) {
            let delta = self.input().mouse_delta();
            if delta.x != 0 {
                *value += delta.x as f32 * step;
                changed = true;
            }
        }

        self.draw_widget_frame(r, ControlColor::Base, state.focused, state.hovered, WidgetOption::empty());
        self.draw_control_text(&format!("{value:.2}"), r, ControlColor::Text, WidgetOption::ALIGN_CENTER);

        WidgetResult { submitted: false, changed }
    }

    /// Shared shift-click numeric text-edit escape hatch for `slider`/
    /// `number`: if `id` currently owns the shared edit buffer, draws the
    /// textbox (sharing `id` itself as its focus target, not a literal seed)
    /// and reports whether the caller should fall through to its normal
    /// drag handling this frame.
    fn number_textbox(&mut self, id: Id, current: f32) -> NumberEdit {
        let editing = matches!(self.number_edit(), Some((edit_id, _)) if *edit_id == id);
        if !editing {
            return NumberEdit::Inactive;
        }
        let mut buf = self.number_edit().unwrap().1.clone();
        if self.interaction().focus() != id {
            self.interaction_mut().set_focus(id);
        }
        let result = self.textbox_raw_with_id(&mut buf, id);
        self.set_number_edit(Some((id, buf.clone())));

        if result.submitted || self.interaction().focus() != id {
            self.set_number_edit(None);
            return NumberEdit::Submitted(buf.trim().parse().unwrap_or(current));
        }
        NumberEdit::Editing
    }

    /// Collapsible section header. Expansion state is retained by presence
    /// in the tree-node pool: present means expanded, unless `opt` carries
    /// `EXPANDED`, which inverts that convention. Returns `true` while
    /// expanded.
    pub fn header(&mut self, label: &str, opt: WidgetOption) -> bool { self.header_impl(label, opt, false) }

    /// Like [`Context::header`], but also indents its body and is intended
    /// to be followed by child widgets until the caller is done (there is
    /// no separate `end_treenode`: the indent is cosmetic only, applied to
    /// the *next* row via the layout's `indent`).
    pub fn treenode(&mut self, label: &str, opt: WidgetOption) -> bool { self.header_impl(label, opt, true) }

    fn header_impl(&mut self, label: &str, opt: WidgetOption, indent_body: bool) -> bool {
        let id = self.ids().get_id_str(label);
        let present = self.treenodes_mut().find(id).is_some();
        let inverted = opt.contains(WidgetOption::EXPANDED);
        let mut expanded = present != inverted;

        let r = self.next_rect((0, 0));
        let over = self.mouse_over(r);
        let (down, pressed) = (self.input().mouse_down_buttons(), self.input().mouse_pressed_buttons());
        let state = self.interaction_mut().update_control(id, over, down, pressed, WidgetOption::empty());
        if state.hovered && state.focused && pressed.contains(MouseButton::LEFT) {
            expanded = !expanded;
            let now_present = expanded != inverted;
            let frame = self.frame_number();
            if now_present {
                self.treenodes_mut().claim(id, frame);
            } else if let Some(idx) = self.treenodes_mut().find(id) {
                self.treenodes_mut().release(idx);
            }
        } else if let Some(idx) = self.treenodes_mut().find(id) {
            self.treenodes_mut().update(idx, self.frame_number());
        }

        self.draw_widget_frame(r, ControlColor::Button, state.focused, state.hovered, WidgetOption::empty());
        let icon = if expanded { IconId::Expanded } else { IconId::Collapsed };
        let icon_rect = rect(r.x, r.y, r.height, r.height);
        self.command_list_mut().draw_icon(icon, icon_rect, self.style.color(ControlColor::Text));
        let text_r = rect(r.x + r.height, r.y, r.width - r.height, r.height);
        self.draw_control_text(label, text_r, ControlColor::Text, WidgetOption::empty());

        if expanded && indent_body {
            let indent = self.style.indent;
            let body = self.layout().body();
            self.layout_mut().set_next(rect(body.x + indent, self.next_rect((0, 0)).y, body.width - indent, 0), false);
        }

        expanded
    }
}

fn pop_last_char(s: &mut String) {
    if let Some((idx, _)) = s.char_indices().last() {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vec2;
    use crate::style::ContainerOption;

    struct FixedMeasure;
    impl Measure for FixedMeasure {
        fn text_width(&self, _font: crate::style::FontId, text: &str) -> i32 { text.chars().count() as i32 * 8 }
        fn text_height(&self, _font: crate::style::FontId) -> i32 { 16 }
    }

    fn ctx() -> Context<FixedMeasure> { Context::new(FixedMeasure) }

    #[test]
    fn button_press_reports_submitted() {
        let mut c = ctx();
        let mut submitted = false;
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                let r = c.button("OK");
                submitted = r.submitted;
                c.end_window();
            }
        });
        assert!(!submitted);

        // click inside the button's rect on the next frame.
        c.input_mut().set_mouse_pos(vec2(15, 40));
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                let r = c.button("OK");
                submitted = r.submitted;
                c.end_window();
            }
        });
        assert!(submitted);
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut c = ctx();
        let mut value = false;
        c.input_mut().set_mouse_pos(vec2(15, 40));
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.checkbox("check", &mut value);
                c.end_window();
            }
        });
        assert!(value);
    }

    #[test]
    fn textbox_backspace_removes_one_utf8_scalar() {
        let mut s = String::from("héllo");
        pop_last_char(&mut s);
        assert_eq!(s, "héll");
        pop_last_char(&mut s); // 'l'
        pop_last_char(&mut s); // 'l'
        pop_last_char(&mut s); // 'é' — must remove the whole codepoint, not one byte.
        assert_eq!(s, "h");
        assert!(s.is_char_boundary(s.len()));
    }

    #[test]
    fn slider_step_quantizes_round_half_up() {
        let mut c = ctx();
        let mut value = 0.0f32;
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 10.0, 1.0);
                c.end_window();
            }
        });
        c.input_mut().set_mouse_pos(vec2(55, 40));
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 10.0, 1.0);
                c.end_window();
            }
        });
        assert!((value - value.round()).abs() < f32::EPSILON);
    }

    #[test]
    fn slider_drag_reports_changed_not_submitted() {
        let mut c = ctx();
        let mut value = 0.0f32;
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 10.0, 1.0);
                c.end_window();
            }
        });
        c.input_mut().set_mouse_pos(vec2(55, 40));
        c.input_mut().mouse_down(MouseButton::LEFT);
        let mut result = WidgetResult::default();
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                result = c.slider("s", &mut value, 0.0, 10.0, 1.0);
                c.end_window();
            }
        });
        assert!(result.changed);
        assert!(!result.submitted);
    }

    #[test]
    fn slider_shift_click_text_edit_captures_keystrokes_and_submits() {
        // regression test: the shift-click numeric edit must route input
        // through the *slider's own* id, not a fixed literal seed that never
        // holds focus.
        let mut c = ctx();
        let mut value = 0.0f32;
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 100.0, 0.0);
                c.end_window();
            }
        });

        // move the mouse over the slider (no button down yet) so it becomes hovered.
        c.input_mut().set_mouse_pos(vec2(55, 40));
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 100.0, 0.0);
                c.end_window();
            }
        });

        // shift+click enters text-edit mode.
        c.input_mut().key_down(crate::style::KeyMode::SHIFT);
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                c.slider("s", &mut value, 0.0, 100.0, 0.0);
                c.end_window();
            }
        });

        // release the mouse (still with shift held) and type a replacement value.
        c.input_mut().mouse_up(MouseButton::LEFT);
        c.input_mut().push_text("42");
        let mut result = WidgetResult::default();
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                result = c.slider("s", &mut value, 0.0, 100.0, 0.0);
                c.end_window();
            }
        });
        assert!(!result.submitted && !result.changed, "still editing, no submit yet");

        // Return commits the typed value.
        c.input_mut().key_down(crate::style::KeyMode::RETURN);
        c.frame(|c| {
            if c.begin_window("W", rect(0, 0, 200, 200), ContainerOption::empty()) {
                c.layout_mut().row(&[100], 20);
                result = c.slider("s", &mut value, 0.0, 100.0, 0.0);
                c.end_window();
            }
        });
        assert!(result.submitted);
        assert_eq!(value, 42.0);
    }
}
