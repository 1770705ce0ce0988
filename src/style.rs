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
use crate::geom::{color, Color};
use bitflags::bitflags;

/// Opaque handle to a client-owned font. The core never inspects it; it is
/// threaded through to the `text_width`/`text_height` callbacks and back out
/// on `Command::Text` so the client's renderer knows which font to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FontId(
    /// Client-defined font handle, opaque to this crate.
    pub u32,
);

/// Index into [`Style::colors`], naming which palette entry a given draw
/// operation should use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ControlColor {
    /// Default text color.
    Text = 0,
    /// Frame border stroke color.
    Border,
    /// Window body background.
    WindowBG,
    /// Title bar background.
    TitleBG,
    /// Title bar text color.
    TitleText,
    /// Panel (non-root container) background.
    PanelBG,
    /// Button background, idle.
    Button,
    /// Button background, hovered.
    ButtonHover,
    /// Button background, focused.
    ButtonFocus,
    /// Base-control (checkbox/textbox/slider track) background, idle.
    Base,
    /// Base-control background, hovered.
    BaseHover,
    /// Base-control background, focused.
    BaseFocus,
    /// Scrollbar track background.
    ScrollBase,
    /// Scrollbar thumb background.
    ScrollThumb,
}

impl ControlColor {
    /// Promotes `Button`/`Base` to their `Hover` variant, no-op otherwise.
    pub fn hover(self) -> Self {
        match self {
            ControlColor::Button => ControlColor::ButtonHover,
            ControlColor::Base => ControlColor::BaseHover,
            other => other,
        }
    }

    /// Promotes `Button`/`ButtonHover`/`Base`/`BaseHover` to their `Focus`
    /// variant, no-op otherwise.
    pub fn focus(self) -> Self {
        match self {
            ControlColor::Button | ControlColor::ButtonHover => ControlColor::ButtonFocus,
            ControlColor::Base | ControlColor::BaseHover => ControlColor::BaseFocus,
            other => other,
        }
    }
}

pub(crate) const COLOR_COUNT: usize = 14;

bitflags! {
    /// Behavioral flags passed to container-opening calls (`begin_window`,
    /// `begin_popup`, `begin_panel`, ...).
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ContainerOption: u32 {
        /// Suppress the default background/border fill for this container.
        const NO_FRAME       = 1 << 0;
        /// Suppress the title bar (and therefore dragging/closing via it).
        const NO_TITLE       = 1 << 1;
        /// Suppress the close icon in the title bar.
        const NO_CLOSE       = 1 << 2;
        /// Suppress the resize handle at the bottom-right corner.
        const NO_RESIZE      = 1 << 3;
        /// Suppress scrollbars and wheel/drag scrolling of this container.
        const NO_SCROLL      = 1 << 4;
        /// Re-measure size to fit content every frame (one-frame lag).
        const AUTO_SIZE      = 1 << 5;
        /// Marks this root as a popup: a press while `hover_root` points
        /// elsewhere closes it immediately.
        const POPUP          = 1 << 6;
        /// Starts closed the first time this container's id is seen; a
        /// container that already has retained state keeps its existing
        /// `open` value regardless of this flag.
        const CLOSED         = 1 << 7;
    }
}

bitflags! {
    /// Behavioral flags passed to individual widget calls.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct WidgetOption: u32 {
        /// Center-align the widget's text within its rectangle.
        const ALIGN_CENTER = 1 << 0;
        /// Right-align the widget's text within its rectangle.
        const ALIGN_RIGHT  = 1 << 1;
        /// Skip hover/focus resolution entirely: the widget never becomes
        /// hovered or focused and always draws in its idle color.
        const NO_INTERACT  = 1 << 2;
        /// Suppress the widget's background/border fill.
        const NO_FRAME     = 1 << 3;
        /// Don't stretch the widget to fill its row's declared width; size
        /// it to content instead.
        const NO_STRETCH   = 1 << 4;
        /// For `header`/`treenode`: invert the pool-presence convention, so
        /// presence in the pool means *collapsed* instead of *expanded*.
        const EXPANDED     = 1 << 5;
        /// Keep focus across a frame where the mouse button is no longer
        /// held, instead of releasing it on the first such frame. Textboxes
        /// and in-progress numeric edits pass this so typing doesn't drop
        /// focus the instant the initiating click is released.
        const HOLD_FOCUS   = 1 << 6;
    }
}

impl WidgetOption {
    /// Shorthand used throughout draw helpers.
    pub fn has_no_frame(self) -> bool { self.contains(WidgetOption::NO_FRAME) }
}

bitflags! {
    /// Pressed-mouse-button mask for an input frame.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct MouseButton: u32 {
        /// Primary (left) mouse button.
        const LEFT   = 1 << 0;
        /// Secondary (right) mouse button.
        const RIGHT  = 1 << 1;
        /// Middle mouse button / wheel click.
        const MIDDLE = 1 << 2;
    }
}

bitflags! {
    /// Modifier/held-key mask for an input frame.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct KeyMode: u32 {
        /// Either Shift key.
        const SHIFT     = 1 << 0;
        /// Either Ctrl key.
        const CTRL      = 1 << 1;
        /// Either Alt key.
        const ALT       = 1 << 2;
        /// Backspace.
        const BACKSPACE = 1 << 3;
        /// Return/Enter.
        const RETURN    = 1 << 4;
    }
}

/// Visual and metric configuration. Flat palette only: no theming beyond
/// per-client substitution of the whole struct.
#[derive(Clone, Debug)]
pub struct Style {
    /// Font used unless a widget call overrides it.
    pub font: FontId,
    /// Default size hint for widgets that don't size to content.
    pub size: (i32, i32),
    /// Inner margin between a container's border and its content.
    pub padding: i32,
    /// Gap between successive widgets in a layout row/column.
    pub spacing: i32,
    /// Horizontal offset applied to indented rows (e.g. treenode children).
    pub indent: i32,
    /// Height of a window's title bar.
    pub title_height: i32,
    /// Thickness of a scrollbar track.
    pub scrollbar_size: i32,
    /// Length of a scrollbar thumb along its track's minor axis.
    pub thumb_size: i32,
    colors: [Color; COLOR_COUNT],
}

impl Style {
    /// Looks up a palette entry.
    pub fn color(&self, c: ControlColor) -> Color { self.colors[c as usize] }

    /// Overwrites a palette entry.
    pub fn set_color(&mut self, c: ControlColor, value: Color) { self.colors[c as usize] = value; }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font: FontId(0),
            size: (68, 10),
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                color(230, 230, 230, 255), // Text
                color(25, 25, 25, 255),    // Border
                color(50, 50, 50, 255),    // WindowBG
                color(25, 25, 25, 255),    // TitleBG
                color(240, 240, 240, 255), // TitleText
                color(0, 0, 0, 0),         // PanelBG
                color(75, 75, 75, 255),    // Button
                color(95, 95, 95, 255),    // ButtonHover
                color(115, 115, 115, 255), // ButtonFocus
                color(30, 30, 30, 255),    // Base
                color(35, 35, 35, 255),    // BaseHover
                color(40, 40, 40, 255),    // BaseFocus
                color(43, 43, 43, 255),    // ScrollBase
                color(30, 30, 30, 255),    // ScrollThumb
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_focus_promotion() {
        assert_eq!(ControlColor::Button.hover(), ControlColor::ButtonHover);
        assert_eq!(ControlColor::Button.focus(), ControlColor::ButtonFocus);
        assert_eq!(ControlColor::ButtonHover.focus(), ControlColor::ButtonFocus);
        assert_eq!(ControlColor::Text.hover(), ControlColor::Text);
    }

    #[test]
    fn default_style_has_full_palette() {
        let s = Style::default();
        assert_eq!(s.color(ControlColor::Text).a, 255);
        assert_eq!(s.color(ControlColor::PanelBG).a, 0);
    }
}
