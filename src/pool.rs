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

/// A slot in a fixed-size, LRU-by-last-update pool. `None` means the slot is
/// free. Reuse evicts whichever occupied slot has the oldest
/// `last_update_frame`, backed by a fixed array instead of a `HashMap` so the
/// pool never grows past `N`.
pub struct Pool<const N: usize> {
    slots: [Option<(Id, u64)>; N],
}

impl<const N: usize> Default for Pool<N> {
    fn default() -> Self { Pool { slots: [None; N] } }
}

impl<const N: usize> Pool<N> {
    /// Creates an empty pool.
    pub fn new() -> Self { Self::default() }

    /// Looks up the slot index currently holding `id`, if any.
    pub fn find(&self, id: Id) -> Option<usize> {
        self.slots.iter().position(|s| matches!(s, Some((sid, _)) if *sid == id))
    }

    /// Refreshes the last-update frame for an already-occupied slot.
    pub fn update(&mut self, idx: usize, frame: u64) {
        if let Some(slot) = self.slots[idx].as_mut() {
            slot.1 = frame;
        }
    }

    /// Claims a slot for `id`: reuses an existing slot if present, otherwise
    /// allocates the first free slot, otherwise evicts the slot with the
    /// oldest `last_update_frame`. Returns the slot index.
    pub fn claim(&mut self, id: Id, frame: u64) -> usize {
        if let Some(idx) = self.find(id) {
            self.update(idx, frame);
            return idx;
        }
        if let Some(idx) = self.slots.iter().position(|s| s.is_none()) {
            self.slots[idx] = Some((id, frame));
            return idx;
        }
        let (idx, _) = self
            .slots
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| s.unwrap().1)
            .expect("pool capacity is never zero");
        self.slots[idx] = Some((id, frame));
        idx
    }

    /// Frees the slot at `idx`, if occupied.
    pub fn release(&mut self, idx: usize) { self.slots[idx] = None; }

    /// Returns `true` if `idx` currently holds a live entry.
    pub fn is_live(&self, idx: usize) -> bool { self.slots[idx].is_some() }

    /// Iterates the ids of every occupied slot, in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = Id> + '_ {
        self.slots.iter().filter_map(|s| s.map(|(id, _)| id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_reuses_existing_slot() {
        let mut p: Pool<4> = Pool::new();
        let idx1 = p.claim(Id(1), 0);
        let idx2 = p.claim(Id(1), 1);
        assert_eq!(idx1, idx2);
    }

    #[test]
    fn claim_evicts_oldest_when_full() {
        let mut p: Pool<2> = Pool::new();
        let a = p.claim(Id(1), 0);
        let _b = p.claim(Id(2), 5);
        // id 1 is the oldest (frame 0); claiming a third id should evict it.
        let c = p.claim(Id(3), 10);
        assert_eq!(c, a);
        assert_eq!(p.find(Id(1)), None);
        assert_eq!(p.find(Id(2)).is_some(), true);
    }

    #[test]
    fn release_frees_slot() {
        let mut p: Pool<2> = Pool::new();
        let idx = p.claim(Id(1), 0);
        p.release(idx);
        assert!(!p.is_live(idx));
        assert_eq!(p.find(Id(1)), None);
    }
}
