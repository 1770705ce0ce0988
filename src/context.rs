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
use crate::command::{Command, CommandIter, CommandList};
use crate::container::{
    close_icon_rect, resize_handle_rect, title_bar_rect, ContainerArena, CONTAINER_STACK_SIZE, MIN_WINDOW_SIZE, ROOT_LIST_SIZE, TREENODE_POOL_SIZE,
};
use crate::fixed_vec::FixedVec;
use crate::geom::{rect, vec2, Recti, Vec2i};
use crate::id::IdStack;
pub use crate::id::Id;
use crate::input::Input;
use crate::interaction::Interaction;
use crate::layout::LayoutStack;
use crate::pool::Pool;
use crate::style::{ContainerOption, ControlColor, FontId, MouseButton, Style, WidgetOption};

struct RootEntry {
    id: Id,
    head_idx: usize,
    tail_idx: usize,
}

/// One open container (window, popup, or panel) on the nesting stack. Panels
/// are not roots: they draw inline in their parent's command stream and have
/// no jump-chain entry of their own.
struct OpenContainer {
    id: Id,
    is_root: bool,
    opt: ContainerOption,
}

/// The measurement callbacks the core needs from the client: text
/// shaping/rasterization is entirely out of scope, so layout can only ask
/// "how wide/tall is this" and trust the answer.
pub trait Measure {
    /// Width in pixels of `text` set in `font`.
    fn text_width(&self, font: FontId, text: &str) -> i32;
    /// Line height in pixels of `font`.
    fn text_height(&self, font: FontId) -> i32;
}

/// The immediate-mode frame driver. Owns every piece of cross-frame state
/// (focus, hover, container geometry, scroll, tree expansion) and the
/// current frame's append-only command list. Clients construct one `Context`
/// up front and drive it once per tick via [`Context::begin`]/[`Context::end`]
/// (or the [`Context::frame`] convenience wrapper).
pub struct Context<M: Measure> {
    /// Live palette/metrics, mutable so clients can theme before or between
    /// frames.
    pub style: Style,
    measure: M,
    frame: u64,
    input: Input,
    ids: IdStack,
    commands: CommandList,
    layout: LayoutStack,
    interaction: Interaction,
    containers: ContainerArena,
    treenodes: Pool<TREENODE_POOL_SIZE>,
    open_stack: FixedVec<OpenContainer, CONTAINER_STACK_SIZE>,
    roots: FixedVec<RootEntry, ROOT_LIST_SIZE>,
    hover_root: Option<Id>,
    number_edit: Option<(Id, String)>,
    last_rect: Recti,
}

impl<M: Measure> Context<M> {
    /// Creates a context with default style, using `measure` for all text
    /// sizing.
    pub fn new(measure: M) -> Self {
        let style = Style::default();
        Context {
            style,
            measure,
            frame: 0,
            input: Input::new(),
            ids: IdStack::new(),
            commands: CommandList::new(),
            layout: LayoutStack::new(4, vec2(style.size.0 + style.padding * 2, style.size.1 + style.padding * 2)),
            interaction: Interaction::new(),
            containers: ContainerArena::new(),
            treenodes: Pool::new(),
            open_stack: FixedVec::new(),
            roots: FixedVec::new(),
            hover_root: None,
            number_edit: None,
            last_rect: Recti::default(),
        }
    }

    /// Mutable access to this frame's input feed. The client is entirely
    /// responsible for populating it before `begin`/`frame`.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Read-only access to the current input snapshot.
    pub fn input(&self) -> &Input { &self.input }

    /// Starts a new frame: clears the previous command list, snapshots which
    /// container (if any) the mouse is over, and rolls the focus lease
    /// forward.
    pub fn begin(&mut self) {
        self.frame += 1;
        self.commands.clear();
        self.commands.push(Command::Jump { target: None }); // index 0: patched in `end`
        self.layout = LayoutStack::new(self.style.spacing, vec2(self.style.size.0 + self.style.padding * 2, self.style.size.1 + self.style.padding * 2));
        self.roots.clear();
        self.interaction.begin_frame();

        // topmost container (by zindex) whose rect contains the mouse.
        self.hover_root = None;
        let mouse = self.input.mouse_pos();
        let mut best_z = i32::MIN;
        for (id, c) in self.containers.iter_live() {
            if c.open && c.rect.contains(mouse) && c.zindex >= best_z {
                best_z = c.zindex;
                self.hover_root = Some(id);
            }
        }
    }

    /// Ends the frame: patches the root-container jump chain into z-order
    /// and revokes focus that nothing reasserted.
    pub fn end(&mut self) {
        assert!(self.open_stack.is_empty(), "begin_window/begin_panel/begin_popup left unclosed at frame end");

        let mut order: Vec<usize> = (0..self.roots.len()).collect();
        order.sort_by_key(|&i| self.containers.get(self.roots.as_slice()[i].id).map(|c| c.zindex).unwrap_or(0));

        if !order.is_empty() {
            let first_head = self.roots.as_slice()[order[0]].head_idx;
            *self.commands.get_mut(0) = Command::Jump { target: Some(first_head + 1) };
            for w in 0..order.len() {
                let cur = &self.roots.as_slice()[order[w]];
                let cur_tail = cur.tail_idx;
                if w + 1 < order.len() {
                    let next_head = self.roots.as_slice()[order[w + 1]].head_idx;
                    *self.commands.get_mut(cur_tail) = Command::Jump { target: Some(next_head + 1) };
                } else {
                    *self.commands.get_mut(cur_tail) = Command::Jump { target: None };
                }
            }
        }

        self.interaction.end_frame();
        self.input.end_frame();
        self.input.begin_frame();
    }

    /// Runs `body` between `begin`/`end`. The usual way to drive a frame.
    pub fn frame(&mut self, body: impl FnOnce(&mut Self)) {
        self.begin();
        body(self);
        self.end();
    }

    /// Z-ordered, jump-chain-resolved view of this frame's recorded
    /// commands, ready for a client renderer to walk.
    pub fn commands(&self) -> CommandIter<'_> { self.commands.iter_from(0) }

    pub(crate) fn command_list_mut(&mut self) -> &mut CommandList { &mut self.commands }
    pub(crate) fn command_list(&self) -> &CommandList { &self.commands }
    pub(crate) fn ids_mut(&mut self) -> &mut IdStack { &mut self.ids }
    pub(crate) fn ids(&self) -> &IdStack { &self.ids }
    pub(crate) fn layout_mut(&mut self) -> &mut LayoutStack { &mut self.layout }
    pub(crate) fn layout(&self) -> &LayoutStack { &self.layout }
    pub(crate) fn interaction_mut(&mut self) -> &mut Interaction { &mut self.interaction }
    pub(crate) fn interaction(&self) -> &Interaction { &self.interaction }
    pub(crate) fn treenodes_mut(&mut self) -> &mut Pool<TREENODE_POOL_SIZE> { &mut self.treenodes }
    pub(crate) fn measure(&self) -> &M { &self.measure }
    pub(crate) fn frame_number(&self) -> u64 { self.frame }
    pub(crate) fn set_last_rect(&mut self, r: Recti) { self.last_rect = r; }
    pub(crate) fn last_rect(&self) -> Recti { self.last_rect }
    pub(crate) fn number_edit(&self) -> Option<&(Id, String)> { self.number_edit.as_ref() }
    pub(crate) fn set_number_edit(&mut self, v: Option<(Id, String)>) { self.number_edit = v; }

    fn current_container_id(&self) -> Option<Id> { self.open_stack.last().map(|c| c.id) }

    /// The root container (window/popup) enclosing whatever is currently
    /// open, if any. Windows never nest, so at most one root is open at a
    /// time; panels nested inside it don't change this.
    fn current_root(&self) -> Option<Id> { self.open_stack.as_slice().iter().find(|c| c.is_root).map(|c| c.id) }

    /// Spec §4.6's `mouse_over`: the mouse is over `rect`, within the current
    /// clip, *and* inside the container the frame has already decided owns
    /// hover this frame. That last check is what stops a widget in a
    /// background window from stealing hover through whatever window is
    /// actually on top.
    pub(crate) fn mouse_over(&self, rect: Recti) -> bool {
        let mouse = self.input.mouse_pos();
        rect.contains(mouse) && self.commands.clip_rect().contains(mouse) && self.current_root() == self.hover_root
    }

    /// Opens (or resumes) a window titled by `title`, using `default_rect`
    /// the first time this id is seen. Draws the title bar, close icon, and
    /// resize handle unless suppressed by `opt`, and establishes a clipped,
    /// scrollable layout body. Returns `false` (and opens nothing) if the
    /// window has been closed by the user or `opt` requests `CLOSED` and no
    /// retained state exists yet. An already-open container keeps its
    /// `open` value regardless of `CLOSED`.
    pub fn begin_window(&mut self, title: &str, default_rect: Recti, opt: ContainerOption) -> bool {
        let id = self.ids.get_id_str(title);
        let existed = self.containers.contains(id);
        {
            let c = self.containers.get_or_insert(id, self.frame, default_rect);
            if !existed && opt.contains(ContainerOption::CLOSED) {
                c.open = false;
            }
            if !c.open {
                return false;
            }
        }

        if opt.contains(ContainerOption::POPUP)
            && self.input.mouse_pressed_buttons().contains(MouseButton::LEFT)
            && self.hover_root != Some(id)
        {
            self.containers.get_or_insert(id, self.frame, default_rect).open = false;
            return false;
        }

        if self.input.mouse_pressed_buttons().contains(MouseButton::LEFT) && self.hover_root == Some(id) {
            self.containers.bring_to_front(id);
        }

        let outer = self.containers.get(id).unwrap().rect;
        let head_idx = self.commands.push(Command::Jump { target: None });
        self.roots.push(RootEntry { id, head_idx, tail_idx: 0 });
        self.open_stack.push(OpenContainer { id, is_root: true, opt });

        let title_h = if opt.contains(ContainerOption::NO_TITLE) { 0 } else { self.style.title_height };

        if !opt.contains(ContainerOption::NO_FRAME) {
            self.commands.draw_frame(&self.style, outer, ControlColor::WindowBG);
        }

        if title_h > 0 {
            let tbar = title_bar_rect(outer, title_h);
            self.commands.draw_frame(&self.style, tbar, ControlColor::TitleBG);

            // dragging: press-and-hold anywhere on the bar except the close icon.
            let close_r = close_icon_rect(tbar);
            let drag_id = self.ids.get_id_str("!title");
            let mouse = self.input.mouse_pos();
            if self.interaction.focus() == drag_id || (tbar.contains(mouse) && !close_r.contains(mouse)) {
                let over = self.mouse_over(tbar);
                let state = self.interaction.update_control(drag_id, over, self.input.mouse_down_buttons(), self.input.mouse_pressed_buttons(), WidgetOption::empty());
                if state.focused && self.input.mouse_down_buttons().contains(MouseButton::LEFT) {
                    let delta = self.input.mouse_delta();
                    let c = self.containers.get_or_insert(id, self.frame, default_rect);
                    c.rect.x += delta.x;
                    c.rect.y += delta.y;
                }
            }

            let font = self.style.font;
            let text_h = self.measure.text_height(font);
            let pad = self.style.padding;
            self.commands.draw_text(font, title, vec2(tbar.x + pad, tbar.y + (tbar.height - text_h) / 2), self.style.color(ControlColor::TitleText), tbar);

            if !opt.contains(ContainerOption::NO_CLOSE) {
                let close_id = self.ids.get_id_str("!close");
                let over = self.mouse_over(close_r);
                let state = self.interaction.update_control(close_id, over, self.input.mouse_down_buttons(), self.input.mouse_pressed_buttons(), WidgetOption::empty());
                self.commands.draw_icon(crate::command::IconId::Close, close_r, self.style.color(ControlColor::TitleText));
                if state.hovered && self.input.mouse_pressed_buttons().contains(MouseButton::LEFT) {
                    // the window still draws in full this frame; `open` only
                    // gates whether the *next* `begin_window` call opens it.
                    let c = self.containers.get_or_insert(id, self.frame, default_rect);
                    c.open = false;
                }
            }
        }

        let outer = self.containers.get(id).unwrap().rect;
        let body = rect(outer.x, outer.y + title_h, outer.width, outer.height - title_h);
        {
            let c = self.containers.get_or_insert(id, self.frame, default_rect);
            c.body = body;
        }

        if !opt.contains(ContainerOption::NO_RESIZE) {
            let handle = resize_handle_rect(outer, self.style.scrollbar_size + 4);
            let resize_id = self.ids.get_id_str("!resize");
            let over = self.mouse_over(handle);
            let state = self.interaction.update_control(resize_id, over, self.input.mouse_down_buttons(), self.input.mouse_pressed_buttons(), WidgetOption::empty());
            if state.focused && self.input.mouse_down_buttons().contains(MouseButton::LEFT) {
                let delta = self.input.mouse_delta();
                let c = self.containers.get_or_insert(id, self.frame, default_rect);
                c.rect.width = (c.rect.width + delta.x).max(MIN_WINDOW_SIZE.x);
                c.rect.height = (c.rect.height + delta.y).max(MIN_WINDOW_SIZE.y);
            }
        }

        self.push_container_body(id, opt);
        true
    }

    fn push_container_body(&mut self, id: Id, opt: ContainerOption) {
        let base_body = self.containers.get(id).unwrap().body;
        let scroll = self.containers.get(id).unwrap().scroll;
        let content = self.containers.get(id).unwrap().content_size;

        // scrollbars are sized and hit-tested against last frame's content,
        // one frame behind like AUTO_SIZE; they draw and interact here,
        // before the body is shrunk, so their track (which sits in the strip
        // between the shrunk and unshrunk body) is still within the clip.
        let body = if opt.contains(ContainerOption::NO_SCROLL) {
            base_body
        } else {
            self.commands.push_clip_rect(base_body);
            let shrunk = crate::container::shrink_body_for_scrollbars(base_body, content, self.style.padding, self.style.scrollbar_size);
            self.handle_scrollbars(id, shrunk);
            self.commands.pop_clip_rect();
            shrunk
        };

        {
            let c = self.containers.get_or_insert(id, self.frame, base_body);
            c.body = body;
        }

        self.commands.push_clip_rect(body);
        self.ids.push(&id.0.to_ne_bytes());
        self.layout.begin(rect(body.x - scroll.x, body.y - scroll.y, body.width, body.height), self.style.indent);

        if !opt.contains(ContainerOption::NO_SCROLL) {
            self.apply_scroll_input(id, body);
        }
    }

    fn apply_scroll_input(&mut self, id: Id, body: Recti) {
        let mouse = self.input.mouse_pos();
        if !body.contains(mouse) {
            return;
        }
        let wheel = self.input.scroll_delta();
        if wheel.y == 0 && wheel.x == 0 {
            return;
        }
        let content = self.containers.get(id).unwrap().content_size;
        let c = self.containers.get_or_insert(id, self.frame, body);
        let max_y = crate::container::scrollbar_max_scroll(content.y, body.height);
        let max_x = crate::container::scrollbar_max_scroll(content.x, body.width);
        c.scroll.y = crate::geom::clamp(c.scroll.y + wheel.y, 0, max_y);
        c.scroll.x = crate::geom::clamp(c.scroll.x + wheel.x, 0, max_x);
    }

    /// Draws and handles drag-interaction for both scrollbars against the
    /// already-shrunk `body`, called from `push_container_body` while the
    /// active clip is still the unshrunk body (so the track, which sits in
    /// the reclaimed strip, remains hit-testable). A scrollbar only appears
    /// when content overhangs its axis; otherwise that axis's scroll resets.
    fn handle_scrollbars(&mut self, id: Id, body: Recti) {
        let (content, scroll) = {
            let c = self.containers.get(id).unwrap();
            (c.content_size, c.scroll)
        };
        let sb_size = self.style.scrollbar_size;

        let max_y = crate::container::scrollbar_max_scroll(content.y, body.height);
        if max_y > 0 {
            let track = crate::container::vertical_scrollbar_rect(body, sb_size);
            self.commands.draw_frame(&self.style, track, ControlColor::ScrollBase);
            let thumb_len = crate::container::scrollbar_thumb_len(track.height, self.style.thumb_size, content.y, body.height);
            let thumb_pos = crate::container::scrollbar_thumb_pos(track.height, thumb_len, scroll.y, max_y);
            let thumb = rect(track.x, track.y + thumb_pos, track.width, thumb_len);
            self.commands.draw_frame(&self.style, thumb, ControlColor::ScrollThumb);

            let thumb_id = self.ids.get_id_str("!scrollbary");
            let over = self.mouse_over(track);
            let state = self.interaction.update_control(thumb_id, over, self.input.mouse_down_buttons(), self.input.mouse_pressed_buttons(), WidgetOption::empty());
            if state.focused && self.input.mouse_down_buttons().contains(MouseButton::LEFT) {
                let delta = self.input.mouse_delta();
                let d = crate::container::scrollbar_drag_delta(track.height, thumb_len, max_y, delta.y);
                let c = self.containers.get_or_insert(id, self.frame, body);
                c.scroll.y = crate::geom::clamp(c.scroll.y + d, 0, max_y);
            }
        } else {
            self.containers.get_or_insert(id, self.frame, body).scroll.y = 0;
        }

        let max_x = crate::container::scrollbar_max_scroll(content.x, body.width);
        if max_x > 0 {
            let track = crate::container::horizontal_scrollbar_rect(body, sb_size);
            self.commands.draw_frame(&self.style, track, ControlColor::ScrollBase);
            let thumb_len = crate::container::scrollbar_thumb_len(track.width, self.style.thumb_size, content.x, body.width);
            let thumb_pos = crate::container::scrollbar_thumb_pos(track.width, thumb_len, scroll.x, max_x);
            let thumb = rect(track.x + thumb_pos, track.y, thumb_len, track.height);
            self.commands.draw_frame(&self.style, thumb, ControlColor::ScrollThumb);

            let thumb_id = self.ids.get_id_str("!scrollbarx");
            let over = self.mouse_over(track);
            let state = self.interaction.update_control(thumb_id, over, self.input.mouse_down_buttons(), self.input.mouse_pressed_buttons(), WidgetOption::empty());
            if state.focused && self.input.mouse_down_buttons().contains(MouseButton::LEFT) {
                let delta = self.input.mouse_delta();
                let d = crate::container::scrollbar_drag_delta(track.width, thumb_len, max_x, delta.x);
                let c = self.containers.get_or_insert(id, self.frame, body);
                c.scroll.x = crate::geom::clamp(c.scroll.x + d, 0, max_x);
            }
        } else {
            self.containers.get_or_insert(id, self.frame, body).scroll.x = 0;
        }
    }

    fn end_container_bookkeeping(&mut self, id: Id) {
        // measured against the layout's own (scroll-offset) body, not the
        // container's unscrolled `body` field — `layout.max` was accumulated
        // in that scrolled coordinate space (see `push_container_body`'s
        // `layout.begin(rect(body.x - scroll.x, body.y - scroll.y, ...))`),
        // so subtracting the unscrolled body would under-report content_size
        // by exactly the scroll offset.
        let content = self.layout.max_extent();
        let layout_body = self.layout.body();
        let body = self.containers.get(id).unwrap().body;
        let c = self.containers.get_or_insert(id, self.frame, body);
        c.content_size = vec2((content.x - layout_body.x).max(0), (content.y - layout_body.y).max(0));
    }

    /// Closes the most recently opened window. Must be called exactly once
    /// for every `begin_window` that returned `true`. If the window was
    /// opened with [`ContainerOption::AUTO_SIZE`], its rect is snapped to
    /// the content measured this frame, one frame behind the content that
    /// drove it.
    pub fn end_window(&mut self) {
        let id = self.current_container_id().expect("end_window without matching begin_window");
        self.end_container_bookkeeping(id);
        self.layout.end();
        self.ids.pop();
        self.commands.pop_clip_rect();

        let tail_idx = self.commands.push(Command::Jump { target: None });
        if let Some(entry) = self.roots.iter_mut().rev().find(|r| r.id == id) {
            entry.tail_idx = tail_idx;
        }
        let opened = self.open_stack.pop();
        if let Some(opened) = opened {
            debug_assert!(opened.is_root, "end_window called on a non-root container; use end_panel instead");
            if opened.opt.contains(ContainerOption::AUTO_SIZE) {
                let (content, rect) = {
                    let c = self.containers.get(id).unwrap();
                    (c.content_size, c.rect)
                };
                let title_h = if opened.opt.contains(ContainerOption::NO_TITLE) { 0 } else { self.style.title_height };
                let padding = self.style.padding;
                let c = self.containers.get_or_insert(id, self.frame, rect);
                c.rect.width = content.x + padding * 2;
                c.rect.height = content.y + title_h + padding * 2;
            }
        }
    }

    /// Opens a popup at `anchor`, sized to `size`, the first frame after the
    /// caller sets it open. A popup is just a window with no title bar,
    /// positioned once and then behaving like any other root.
    pub fn begin_popup(&mut self, name: &str, anchor: Vec2i, size: Vec2i) -> bool {
        let id = self.ids.get_id_str(name);
        let default_rect = rect(anchor.x, anchor.y, size.x, size.y);
        let opt = ContainerOption::NO_TITLE | ContainerOption::NO_RESIZE | ContainerOption::POPUP;
        self.begin_window(name, default_rect, opt) && {
            self.containers.bring_to_front(id);
            true
        }
    }

    /// Marks `name`'s popup container open, to be picked up by the next
    /// matching `begin_popup` call.
    pub fn open_popup(&mut self, name: &str, anchor: Vec2i, size: Vec2i) {
        let id = self.ids.get_id_str(name);
        let rect = rect(anchor.x, anchor.y, size.x, size.y);
        let c = self.containers.get_or_insert(id, self.frame, rect);
        c.open = true;
        c.rect = rect;
        self.containers.bring_to_front(id);
    }

    /// Closes `name`'s popup container immediately.
    pub fn close_popup(&mut self, name: &str) {
        let id = self.ids.get_id_str(name);
        if let Some(c) = self.containers.get(id) {
            let mut c = *c;
            c.open = false;
            let body = c.body;
            *self.containers.get_or_insert(id, self.frame, body) = c;
        }
    }

    /// Closes the most recently opened popup. Identical bookkeeping to
    /// `end_window`.
    pub fn end_popup(&mut self) { self.end_window(); }

    /// Opens a non-root child panel: a scrollable sub-region of the current
    /// layout with no title bar and no independent z-order (it draws inline,
    /// nested in whatever root container is already open).
    pub fn begin_panel(&mut self, name: &str, opt: ContainerOption) {
        let id = self.ids.push_str(name);
        let rect = self.layout.next(vec2(0, 0));
        {
            let c = self.containers.get_or_insert(id, self.frame, rect);
            c.rect = rect;
        }
        if !opt.contains(ContainerOption::NO_FRAME) {
            self.commands.draw_frame(&self.style, rect, ControlColor::PanelBG);
        }
        self.open_stack.push(OpenContainer { id, is_root: false, opt });
        let c = self.containers.get_or_insert(id, self.frame, rect);
        c.body = rect;
        self.push_container_body(id, opt);
    }

    /// Closes the most recently opened panel.
    pub fn end_panel(&mut self) {
        let id = self.current_container_id().expect("end_panel without matching begin_panel");
        self.end_container_bookkeeping(id);
        self.layout.end();
        self.ids.pop();
        self.commands.pop_clip_rect();
        self.ids.pop();
        if let Some(opened) = self.open_stack.pop() {
            debug_assert!(!opened.is_root, "end_panel called on a root container; use end_window instead");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMeasure;
    impl Measure for FixedMeasure {
        fn text_width(&self, _font: FontId, text: &str) -> i32 { text.chars().count() as i32 * 8 }
        fn text_height(&self, _font: FontId) -> i32 { 16 }
    }

    fn ctx() -> Context<FixedMeasure> { Context::new(FixedMeasure) }

    #[test]
    fn single_window_round_trips_clean() {
        let mut c = ctx();
        c.frame(|c| {
            let opened = c.begin_window("Demo", rect(0, 0, 200, 150), ContainerOption::empty());
            assert!(opened);
            if opened {
                c.end_window();
            }
        });
        assert!(c.commands().count() > 0);
    }

    #[test]
    fn two_overlapping_windows_front_most_on_click() {
        let mut c = ctx();
        c.frame(|c| {
            if c.begin_window("A", rect(0, 0, 100, 100), ContainerOption::empty()) {
                c.end_window();
            }
            if c.begin_window("B", rect(10, 10, 100, 100), ContainerOption::empty()) {
                c.end_window();
            }
        });
        let id_b = c.ids.get_id_str("B");
        let z_b_before = c.containers.get(id_b).unwrap().zindex;

        c.input_mut().set_mouse_pos(vec2(5, 5));
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            if c.begin_window("A", rect(0, 0, 100, 100), ContainerOption::empty()) {
                c.end_window();
            }
            if c.begin_window("B", rect(10, 10, 100, 100), ContainerOption::empty()) {
                c.end_window();
            }
        });
        let id_a = c.ids.get_id_str("A");
        let z_a_after = c.containers.get(id_a).unwrap().zindex;
        let z_b_after = c.containers.get(id_b).unwrap().zindex;
        assert!(z_a_after > z_b_before);
        assert_eq!(z_b_after, z_b_before);
    }

    #[test]
    fn close_icon_closes_window_next_frame() {
        let mut c = ctx();
        c.frame(|c| {
            if c.begin_window("C", rect(0, 0, 100, 100), ContainerOption::empty()) {
                c.end_window();
            }
        });
        let id = c.ids.get_id_str("C");
        {
            let cont = c.containers.get(id).unwrap();
            let close_r = close_icon_rect(title_bar_rect(cont.rect, c.style.title_height));
            let cx = close_r.x + close_r.width / 2;
            let cy = close_r.y + close_r.height / 2;
            c.input_mut().set_mouse_pos(vec2(cx, cy));
            c.input_mut().mouse_down(MouseButton::LEFT);
        }
        c.frame(|c| {
            let opened = c.begin_window("C", rect(0, 0, 100, 100), ContainerOption::empty());
            assert!(!opened);
        });
    }

    #[test]
    fn closed_flag_only_suppresses_first_appearance() {
        let mut c = ctx();
        c.frame(|c| {
            let opened = c.begin_window("D", rect(0, 0, 100, 100), ContainerOption::CLOSED);
            assert!(!opened);
        });
        // retained state now exists with open == false; CLOSED on a later
        // call must not override an explicit reopen.
        let id = c.ids.get_id_str("D");
        c.containers.get_or_insert(id, c.frame_number(), rect(0, 0, 100, 100)).open = true;
        c.frame(|c| {
            let opened = c.begin_window("D", rect(0, 0, 100, 100), ContainerOption::CLOSED);
            assert!(opened);
            if opened {
                c.end_window();
            }
        });
    }

    #[test]
    fn popup_lifecycle_closes_on_outside_press() {
        let mut c = ctx();
        c.open_popup("P", vec2(100, 100), vec2(50, 50));
        c.frame(|c| {
            let active = c.begin_popup("P", vec2(100, 100), vec2(50, 50));
            assert!(active);
            if active {
                c.end_popup();
            }
        });
        let id = c.ids.get_id_str("P");
        assert_eq!(c.containers.get(id).unwrap().rect, rect(100, 100, 50, 50));

        c.input_mut().set_mouse_pos(vec2(500, 500));
        c.input_mut().mouse_down(MouseButton::LEFT);
        c.frame(|c| {
            let active = c.begin_popup("P", vec2(100, 100), vec2(50, 50));
            assert!(!active);
        });
        assert!(!c.containers.get(id).unwrap().open);
    }

    #[test]
    fn vertical_scrollbar_reserves_body_width_once_content_overflows() {
        let mut c = ctx();
        let build = |c: &mut Context<FixedMeasure>| {
            if c.begin_window("S", rect(0, 0, 100, 100), ContainerOption::empty()) {
                c.layout_mut().row(&[50], 20);
                for _ in 0..20 {
                    c.label("row");
                }
                c.end_window();
            }
        };
        // frame 1: content_size is still the default (0, 0), so no shrink yet.
        c.frame(build);
        let id = c.ids.get_id_str("S");
        let body_before = c.containers.get(id).unwrap().body;

        // frame 2: the body shrinks against frame 1's now-measured overflow.
        c.frame(build);
        let body_after = c.containers.get(id).unwrap().body;
        assert!(body_after.width < body_before.width);
        assert_eq!(body_after.width, body_before.width - c.style.scrollbar_size);
    }

    #[test]
    fn auto_size_snaps_rect_to_content_one_frame_later() {
        let mut c = ctx();
        c.frame(|c| {
            if c.begin_window("E", rect(0, 0, 300, 300), ContainerOption::AUTO_SIZE) {
                c.label("hi");
                c.end_window();
            }
        });
        let id = c.ids.get_id_str("E");
        let after_first = c.containers.get(id).unwrap().rect;
        assert!(after_first.width < 300 || after_first.height < 300);

        c.frame(|c| {
            if c.begin_window("E", after_first, ContainerOption::AUTO_SIZE) {
                c.label("hi");
                c.end_window();
            }
        });
        let after_second = c.containers.get(id).unwrap().rect;
        assert_eq!(after_second, after_first);
    }

    #[test]
    fn content_size_is_unaffected_by_scroll_offset() {
        // regression: content_size must equal layout.max - layout.body (the
        // *scrolled* body), not layout.max - container.body (unscrolled) —
        // otherwise content_size shrinks by the scroll offset once the
        // container has been scrolled at all.
        let mut c = ctx();
        let build = |c: &mut Context<FixedMeasure>| {
            if c.begin_window("Scroller", rect(0, 0, 100, 100), ContainerOption::empty()) {
                c.layout_mut().row(&[50], 20);
                for _ in 0..20 {
                    c.label("row");
                }
                c.end_window();
            }
        };

        c.frame(build);
        let id = c.ids.get_id_str("Scroller");
        let content_before = c.containers.get(id).unwrap().content_size;
        assert!(content_before.y > 0);

        // scroll down, then measure again — content_size must not change
        // just because the container is now scrolled.
        c.containers.get_or_insert(id, c.frame_number(), rect(0, 0, 100, 100)).scroll = vec2(0, 40);
        c.frame(build);
        let content_after = c.containers.get(id).unwrap().content_size;
        assert_eq!(content_after, content_before);
    }
}
