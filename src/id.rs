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

/// Maximum depth of the id stack.
pub const ID_STACK_SIZE: usize = 32;

const FNV_SEED: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Frame-stable widget identity, derived by hashing a seed (the enclosing
/// id's hash, or a fixed start value at the root) together with caller-given
/// bytes. `Id(0)` denotes "no widget" (unfocused/unhovered).
pub struct Id(
    /// The FNV-1a hash value. `0` is reserved for [`Id::NONE`].
    pub u32,
);

impl Id {
    /// The reserved "nothing" id.
    pub const NONE: Id = Id(0);

    fn hash_step(h: u32, byte: u8) -> u32 { (h ^ byte as u32).wrapping_mul(FNV_PRIME) }

    fn hash_bytes(seed: u32, bytes: &[u8]) -> u32 {
        let mut h = seed;
        for &b in bytes {
            h = Self::hash_step(h, b);
        }
        h
    }
}

/// Hierarchical stack of [`Id`]s: each pushed id is hashed together with the
/// current top-of-stack (or the FNV-1a seed, if the stack is empty) so that
/// identical labels at different nesting depths never collide.
#[derive(Default)]
pub struct IdStack {
    stack: FixedVec<u32, ID_STACK_SIZE>,
}

impl IdStack {
    /// Creates an empty id stack.
    pub fn new() -> Self { Self::default() }

    fn top(&self) -> u32 { *self.stack.last().unwrap_or(&FNV_SEED) }

    /// Computes the id for `bytes` against the current stack top, without
    /// pushing it. Used by widgets, which derive an id for this frame only.
    pub fn get_id(&self, bytes: &[u8]) -> Id { Id(Id::hash_bytes(self.top(), bytes)) }

    /// Computes the id for a `&str` label (UTF-8 bytes).
    pub fn get_id_str(&self, s: &str) -> Id { self.get_id(s.as_bytes()) }

    /// Computes the id for an arbitrary pointer-sized value, for widgets that
    /// key off of caller-owned storage (an address) rather than a label.
    pub fn get_id_usize(&self, value: usize) -> Id { self.get_id(&value.to_ne_bytes()) }

    /// Pushes a new id derived from `bytes` onto the stack, entering a new
    /// naming scope (e.g. a container or a `push_id` block).
    pub fn push(&mut self, bytes: &[u8]) -> Id {
        let id = self.get_id(bytes);
        self.stack.push(id.0);
        id
    }

    /// Pushes a new id derived from a `&str` label.
    pub fn push_str(&mut self, s: &str) -> Id { self.push(s.as_bytes()) }

    /// Pops the most recently pushed scope. Asserts if the stack is empty;
    /// every push must be matched by exactly one pop.
    pub fn pop(&mut self) {
        assert!(!self.stack.is_empty(), "id stack underflow: pop without matching push");
        self.stack.pop();
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize { self.stack.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_label_different_scope_differs() {
        let mut a = IdStack::new();
        let id_root = a.get_id_str("button");

        let mut b = IdStack::new();
        b.push_str("panel");
        let id_nested = b.get_id_str("button");

        assert_ne!(id_root, id_nested);
    }

    #[test]
    fn same_label_same_scope_matches() {
        let s = IdStack::new();
        assert_eq!(s.get_id_str("ok"), s.get_id_str("ok"));
    }

    #[test]
    fn none_is_zero() { assert_eq!(Id::NONE.0, 0); }

    #[test]
    #[should_panic(expected = "id stack underflow")]
    fn pop_without_push_panics() {
        let mut s = IdStack::new();
        s.pop();
    }

    #[test]
    fn push_pop_restores_scope() {
        let mut s = IdStack::new();
        let before = s.get_id_str("x");
        s.push_str("scope");
        let _inside = s.get_id_str("x");
        s.pop();
        let after = s.get_id_str("x");
        assert_eq!(before, after);
    }
}
