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
use std::ops::{Index, IndexMut};

/// A `Vec`-backed stack with a const-generic capacity ceiling.
///
/// Stands in for the fixed-size arrays the C implementation embeds directly
/// in `mu_Context`. Pushing past `N` is a programmer error, not a recoverable
/// condition (no frame is supposed to ever need more), so it asserts rather
/// than growing or returning `Result`.
#[derive(Clone, Debug)]
pub struct FixedVec<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self { FixedVec { items: Vec::with_capacity(N) } }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Capacity ceiling for this stack.
    pub const CAPACITY: usize = N;

    /// Creates an empty stack.
    pub fn new() -> Self { Self::default() }

    /// Number of items currently stored.
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` when no items are stored.
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Pushes a new item. Asserts if doing so would exceed `N`.
    pub fn push(&mut self, value: T) {
        assert!(self.items.len() < N, "fixed-capacity stack overflow (capacity {N})");
        self.items.push(value);
    }

    /// Pops the last item, if any.
    pub fn pop(&mut self) -> Option<T> { self.items.pop() }

    /// Borrows the last item, if any.
    pub fn last(&self) -> Option<&T> { self.items.last() }

    /// Mutably borrows the last item, if any.
    pub fn last_mut(&mut self) -> Option<&mut T> { self.items.last_mut() }

    /// Truncates the stack back to `len`.
    pub fn truncate(&mut self, len: usize) { self.items.truncate(len); }

    /// Clears the stack.
    pub fn clear(&mut self) { self.items.clear(); }

    /// Iterates over the stored items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Mutably iterates over the stored items in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    /// Borrows the items as a plain slice.
    pub fn as_slice(&self) -> &[T] { &self.items }
}

impl<T, const N: usize> Index<usize> for FixedVec<T, N> {
    type Output = T;
    fn index(&self, idx: usize) -> &T { &self.items[idx] }
}

impl<T, const N: usize> IndexMut<usize> for FixedVec<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut T { &mut self.items[idx] }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_order() {
        let mut s: FixedVec<i32, 4> = FixedVec::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.last(), Some(&2));
    }

    #[test]
    #[should_panic(expected = "fixed-capacity stack overflow")]
    fn overflow_asserts() {
        let mut s: FixedVec<i32, 2> = FixedVec::new();
        s.push(1);
        s.push(2);
        s.push(3);
    }

    #[test]
    fn truncate_shrinks() {
        let mut s: FixedVec<i32, 8> = FixedVec::new();
        for i in 0..5 {
            s.push(i);
        }
        s.truncate(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.as_slice(), &[0, 1]);
    }
}
