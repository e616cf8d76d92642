/*! Binding state tracking.
 *
 * A `BindingState` mirrors what a command list currently has bound, updated
 * one mutator call at a time. Bindable objects are referenced weakly: the
 * native list owns the reference counting of what is bound to it, and the
 * tracker only remembers identities. A [`StateSnapshot`] upgrades them to
 * strong references for the time it is alive.
 *
 * [`StateSnapshot`]: crate::snapshot::StateSnapshot
 */

mod root;

use std::{
    fmt,
    sync::{Arc, Weak},
};

use arrayvec::ArrayVec;
use hal::DescriptorHeap as _;

pub use root::{ConstantRuns, RootBindings};

/// Weak reference to an object bound to a command list.
pub struct Bound<T>(Option<Weak<T>>);

impl<T> Bound<T> {
    pub fn new(object: Option<&Arc<T>>) -> Self {
        Self(object.map(Arc::downgrade))
    }

    /// Returns `true` if something was bound, whether or not it is still alive.
    pub fn is_bound(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if `object` is what is bound.
    pub fn is(&self, object: Option<&Arc<T>>) -> bool {
        match (self.0.as_ref(), object) {
            (None, None) => true,
            (Some(weak), Some(strong)) => std::ptr::eq(weak.as_ptr(), Arc::as_ptr(strong)),
            _ => false,
        }
    }

    pub fn upgrade(&self) -> Option<Arc<T>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }
}

impl<T> Default for Bound<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Clone for Bound<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Bound<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.as_ref(), other.0.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ref weak) => write!(f, "Bound({:p})", weak.as_ptr()),
            None => write!(f, "Unbound"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthBias {
    pub depth_bias: f32,
    pub depth_bias_clamp: f32,
    pub slope_scaled_depth_bias: f32,
}

/// Stencil reference, in the form it was last set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StencilRef {
    Combined(u32),
    Split { front: u32, back: u32 },
}

/// Everything bound that is not a reference counted object.
///
/// `None` marks state the command list never had set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateValues {
    /// Indexed by [`ipt::BindPoint::index`].
    pub root: [RootBindings; 2],
    pub render_targets: ArrayVec<ipt::CpuDescriptorHandle, { ipt::MAX_RENDER_TARGETS }>,
    /// Kept apart from `render_targets`, which holds a single handle when
    /// `render_targets_single_handle_range` is set.
    pub num_render_targets: u32,
    pub render_targets_single_handle_range: bool,
    pub depth_stencil: Option<ipt::CpuDescriptorHandle>,
    pub viewports: ArrayVec<ipt::Viewport, { ipt::MAX_VIEWPORTS }>,
    pub scissor_rects: ArrayVec<ipt::Rect, { ipt::MAX_VIEWPORTS }>,
    pub primitive_topology: ipt::PrimitiveTopology,
    pub blend_factor: Option<[f32; 4]>,
    pub depth_bias: Option<DepthBias>,
    pub stencil_ref: Option<StencilRef>,
}

/// State currently bound to a command list.
pub struct BindingState<A: hal::Api> {
    pipeline_state: Bound<A::PipelineState>,
    state_object: Bound<A::StateObject>,
    root_signatures: [Bound<A::RootSignature>; 2],
    descriptor_heaps: [Bound<A::DescriptorHeap>; ipt::MAX_BOUND_DESCRIPTOR_HEAPS],
    values: StateValues,
}

impl<A: hal::Api> Default for BindingState<A> {
    fn default() -> Self {
        Self {
            pipeline_state: Bound::default(),
            state_object: Bound::default(),
            root_signatures: Default::default(),
            descriptor_heaps: Default::default(),
            values: StateValues::default(),
        }
    }
}

impl<A: hal::Api> Clone for BindingState<A> {
    fn clone(&self) -> Self {
        Self {
            pipeline_state: self.pipeline_state.clone(),
            state_object: self.state_object.clone(),
            root_signatures: self.root_signatures.clone(),
            descriptor_heaps: self.descriptor_heaps.clone(),
            values: self.values.clone(),
        }
    }
}

impl<A: hal::Api> PartialEq for BindingState<A> {
    fn eq(&self, other: &Self) -> bool {
        self.pipeline_state == other.pipeline_state
            && self.state_object == other.state_object
            && self.root_signatures == other.root_signatures
            && self.descriptor_heaps == other.descriptor_heaps
            && self.values == other.values
    }
}

impl<A: hal::Api> fmt::Debug for BindingState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingState")
            .field("pipeline_state", &self.pipeline_state)
            .field("state_object", &self.state_object)
            .field("root_signatures", &self.root_signatures)
            .field("descriptor_heaps", &self.descriptor_heaps)
            .field("values", &self.values)
            .finish()
    }
}

impl<A: hal::Api> BindingState<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pipeline_state(&self) -> &Bound<A::PipelineState> {
        &self.pipeline_state
    }

    pub fn state_object(&self) -> &Bound<A::StateObject> {
        &self.state_object
    }

    pub fn root_signature(&self, bind_point: ipt::BindPoint) -> &Bound<A::RootSignature> {
        &self.root_signatures[bind_point.index()]
    }

    /// Heap bound in `slot`, see [`ipt::DescriptorHeapType::shader_visible_slot`].
    pub fn descriptor_heap(&self, slot: usize) -> &Bound<A::DescriptorHeap> {
        &self.descriptor_heaps[slot]
    }

    pub fn values(&self) -> &StateValues {
        &self.values
    }

    pub fn root(&self, bind_point: ipt::BindPoint) -> &RootBindings {
        &self.values.root[bind_point.index()]
    }

    /// Resets everything to its default, then binds `pipeline_state`.
    ///
    /// This is the only way the ray tracing state object becomes unbound.
    pub fn clear(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>) {
        *self = Self::default();
        self.pipeline_state = Bound::new(pipeline_state);
    }

    pub fn set_pipeline_state(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>) {
        self.pipeline_state = Bound::new(pipeline_state);
    }

    pub fn set_state_object(&mut self, state_object: Option<&Arc<A::StateObject>>) {
        self.state_object = Bound::new(state_object);
    }

    /// Binds a root signature, discarding every root argument of the bind point.
    pub fn set_root_signature(
        &mut self,
        bind_point: ipt::BindPoint,
        root_signature: Option<&Arc<A::RootSignature>>,
    ) {
        self.root_signatures[bind_point.index()] = Bound::new(root_signature);
        self.values.root[bind_point.index()].clear();
    }

    /// Replaces both heap slots. Slots not given a heap become unbound.
    pub fn set_descriptor_heaps(&mut self, heaps: &[&Arc<A::DescriptorHeap>]) {
        self.descriptor_heaps = Default::default();
        for &heap in heaps {
            match heap.heap_type().shader_visible_slot() {
                Some(slot) => self.descriptor_heaps[slot] = Bound::new(Some(heap)),
                None => log::debug!("Ignoring non shader visible heap {:?}", heap),
            }
        }
    }

    pub fn set_root_descriptor_table(
        &mut self,
        bind_point: ipt::BindPoint,
        index: u32,
        handle: ipt::GpuDescriptorHandle,
    ) {
        self.values.root[bind_point.index()].set_descriptor_table(index, handle);
    }

    pub fn set_root_constant_buffer_view(
        &mut self,
        bind_point: ipt::BindPoint,
        index: u32,
        address: ipt::GpuVirtualAddress,
    ) {
        self.values.root[bind_point.index()].set_constant_buffer_view(index, address);
    }

    pub fn set_root_shader_resource_view(
        &mut self,
        bind_point: ipt::BindPoint,
        index: u32,
        address: ipt::GpuVirtualAddress,
    ) {
        self.values.root[bind_point.index()].set_shader_resource_view(index, address);
    }

    pub fn set_root_unordered_access_view(
        &mut self,
        bind_point: ipt::BindPoint,
        index: u32,
        address: ipt::GpuVirtualAddress,
    ) {
        self.values.root[bind_point.index()].set_unordered_access_view(index, address);
    }

    pub fn set_root_32bit_constants(
        &mut self,
        bind_point: ipt::BindPoint,
        index: u32,
        data: &[u32],
        offset: u32,
    ) {
        self.values.root[bind_point.index()].set_constants(index, offset, data);
    }

    pub fn set_render_targets(
        &mut self,
        num_render_targets: u32,
        render_targets: &[ipt::CpuDescriptorHandle],
        single_handle_range: bool,
        depth_stencil: Option<ipt::CpuDescriptorHandle>,
    ) {
        ipt::strict_assert!((num_render_targets as usize) <= ipt::MAX_RENDER_TARGETS);
        let values = &mut self.values;
        values.render_targets.clear();
        values.render_targets.extend(
            render_targets
                .iter()
                .copied()
                .take(ipt::MAX_RENDER_TARGETS),
        );
        values.num_render_targets = num_render_targets.min(ipt::MAX_RENDER_TARGETS as u32);
        values.render_targets_single_handle_range = single_handle_range;
        values.depth_stencil = depth_stencil;
    }

    pub fn set_viewports(&mut self, viewports: &[ipt::Viewport]) {
        ipt::strict_assert!(viewports.len() <= ipt::MAX_VIEWPORTS);
        self.values.viewports.clear();
        self.values
            .viewports
            .extend(viewports.iter().copied().take(ipt::MAX_VIEWPORTS));
    }

    pub fn set_scissor_rects(&mut self, rects: &[ipt::Rect]) {
        ipt::strict_assert!(rects.len() <= ipt::MAX_VIEWPORTS);
        self.values.scissor_rects.clear();
        self.values
            .scissor_rects
            .extend(rects.iter().copied().take(ipt::MAX_VIEWPORTS));
    }

    pub fn set_primitive_topology(&mut self, topology: ipt::PrimitiveTopology) {
        self.values.primitive_topology = topology;
    }

    /// `None` stands for the native default of all ones.
    pub fn set_blend_factor(&mut self, factor: Option<&[f32; 4]>) {
        self.values.blend_factor = Some(factor.copied().unwrap_or([1.0; 4]));
    }

    pub fn set_depth_bias(&mut self, depth_bias: DepthBias) {
        self.values.depth_bias = Some(depth_bias);
    }

    pub fn set_stencil_ref(&mut self, stencil_ref: u32) {
        self.values.stencil_ref = Some(StencilRef::Combined(stencil_ref));
    }

    pub fn set_front_and_back_stencil_ref(&mut self, front: u32, back: u32) {
        self.values.stencil_ref = Some(StencilRef::Split { front, back });
    }
}
