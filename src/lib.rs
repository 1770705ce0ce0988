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
#![deny(missing_docs)]
//! `microui-core` is the platform-agnostic core of an immediate-mode GUI
//! toolkit inspired by [rxi/microui](https://github.com/rxi/microui): frame
//! identity, layout, a recorded command buffer, and the container/widget
//! interaction state machine, with no rendering, font rasterization, or input
//! polling of its own. Clients feed it an [`Input`] snapshot and a
//! [`Measure`] implementation each frame and walk the resulting [`Command`]
//! stream with their own renderer.
//!
//! A minimal frame looks like:
//!
//! ```
//! use microui_core::*;
//!
//! struct FixedMeasure;
//! impl Measure for FixedMeasure {
//!     fn text_width(&self, _font: FontId, text: &str) -> i32 { text.len() as i32 * 8 }
//!     fn text_height(&self, _font: FontId) -> i32 { 16 }
//! }
//!
//! let mut ctx = Context::new(FixedMeasure);
//! ctx.frame(|ctx| {
//!     if ctx.begin_window("Demo", rect(40, 40, 200, 150), ContainerOption::empty()) {
//!         ctx.end_window();
//!     }
//! });
//! for _cmd in ctx.commands() {
//!     // hand off to a renderer
//! }
//! ```

mod command;
mod container;
mod context;
mod fixed_vec;
mod geom;
mod id;
mod input;
mod interaction;
mod layout;
mod pool;
mod style;
mod widgets;

pub use command::{Clip, Command, CommandIter, IconId, COMMAND_CAPACITY};
pub use container::{Container, CONTAINER_POOL_SIZE, CONTAINER_STACK_SIZE, MIN_WINDOW_SIZE, ROOT_LIST_SIZE, TREENODE_POOL_SIZE};
pub use context::{Context, Measure};
pub use fixed_vec::FixedVec;
pub use geom::{clamp, color, expand_rect, intersect_rects, rect, vec2, Color, Recti, Vec2i};
pub use id::{Id, ID_STACK_SIZE};
pub use input::Input;
pub use interaction::ControlState;
pub use style::{ContainerOption, ControlColor, FontId, KeyMode, MouseButton, Style, WidgetOption};
pub use widgets::WidgetResult;

/// Crate version; bump this alongside any change to the wire-visible
/// [`Command`] shape.
pub const VERSION: &str = "2.02";
