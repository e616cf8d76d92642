use bit_vec::BitVec;

/// Root arguments bound for one bind point, indexed by root parameter.
///
/// Every sequence grows on demand; slots that were never written hold their
/// default (unbound) value. Root constants keep a parallel mask of the words
/// that were actually written, so that a partially written parameter can be
/// restored without clobbering the words the application never defined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootBindings {
    pub descriptor_tables: Vec<ipt::GpuDescriptorHandle>,
    pub constant_buffer_views: Vec<ipt::GpuVirtualAddress>,
    pub shader_resource_views: Vec<ipt::GpuVirtualAddress>,
    pub unordered_access_views: Vec<ipt::GpuVirtualAddress>,
    pub constants: Vec<Vec<u32>>,
    pub constant_masks: Vec<BitVec>,
}

fn ensure_size<T: Clone + Default>(vec: &mut Vec<T>, size: usize) {
    if vec.len() < size {
        vec.resize(size, T::default());
    }
}

fn within_root_signature(index: usize, end: usize) -> bool {
    let fits = index < ipt::MAX_ROOT_SIGNATURE_DWORDS && end <= ipt::MAX_ROOT_SIGNATURE_DWORDS;
    if !fits {
        log::warn!(
            "Root argument {} (up to word {}) exceeds any root signature, not tracked",
            index,
            end
        );
    }
    fits
}

fn set_slot<T: Clone + Default>(vec: &mut Vec<T>, index: u32, value: T) {
    let index = index as usize;
    if !within_root_signature(index, 0) {
        return;
    }
    ensure_size(vec, index + 1);
    vec[index] = value;
}

impl RootBindings {
    pub fn is_empty(&self) -> bool {
        self.descriptor_tables.is_empty()
            && self.constant_buffer_views.is_empty()
            && self.shader_resource_views.is_empty()
            && self.unordered_access_views.is_empty()
            && self.constants.is_empty()
            && self.constant_masks.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.descriptor_tables.clear();
        self.constant_buffer_views.clear();
        self.shader_resource_views.clear();
        self.unordered_access_views.clear();
        self.constants.clear();
        self.constant_masks.clear();
    }

    pub(crate) fn set_descriptor_table(&mut self, index: u32, handle: ipt::GpuDescriptorHandle) {
        set_slot(&mut self.descriptor_tables, index, handle);
    }

    pub(crate) fn set_constant_buffer_view(&mut self, index: u32, address: ipt::GpuVirtualAddress) {
        set_slot(&mut self.constant_buffer_views, index, address);
    }

    pub(crate) fn set_shader_resource_view(&mut self, index: u32, address: ipt::GpuVirtualAddress) {
        set_slot(&mut self.shader_resource_views, index, address);
    }

    pub(crate) fn set_unordered_access_view(
        &mut self,
        index: u32,
        address: ipt::GpuVirtualAddress,
    ) {
        set_slot(&mut self.unordered_access_views, index, address);
    }

    /// Writes `data` into root parameter `index` starting at word `offset`,
    /// marking every written word.
    ///
    /// Writes that cannot fit a root signature are ignored.
    pub(crate) fn set_constants(&mut self, index: u32, offset: u32, data: &[u32]) {
        let index = index as usize;
        let start = offset as usize;
        let end = start.saturating_add(data.len());
        if !within_root_signature(index, end) {
            return;
        }
        ensure_size(&mut self.constants, index + 1);
        ensure_size(&mut self.constant_masks, index + 1);

        let words = &mut self.constants[index];
        let mask = &mut self.constant_masks[index];
        if words.len() < end {
            words.resize(end, 0);
            mask.grow(end - mask.len(), false);
        }
        ipt::strict_assert_eq!(words.len(), mask.len());

        words[start..end].copy_from_slice(data);
        for bit in start..end {
            mask.set(bit, true);
        }
    }

    /// Iterates over the contiguous runs of written words of root parameter
    /// `index`, as `(offset, words)` pairs.
    pub fn constant_runs(&self, index: usize) -> ConstantRuns<'_> {
        match (self.constants.get(index), self.constant_masks.get(index)) {
            (Some(words), Some(mask)) => ConstantRuns {
                words,
                mask: Some(mask),
                position: 0,
            },
            _ => ConstantRuns {
                words: &[],
                mask: None,
                position: 0,
            },
        }
    }
}

pub struct ConstantRuns<'a> {
    words: &'a [u32],
    mask: Option<&'a BitVec>,
    position: usize,
}

impl<'a> Iterator for ConstantRuns<'a> {
    type Item = (u32, &'a [u32]);

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.mask?;
        let len = self.words.len().min(mask.len());
        while self.position < len && !mask[self.position] {
            self.position += 1;
        }
        if self.position == len {
            return None;
        }
        let start = self.position;
        while self.position < len && mask[self.position] {
            self.position += 1;
        }
        Some((start as u32, &self.words[start..self.position]))
    }
}
