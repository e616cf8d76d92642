use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::track::{BindingState, Bound, RootBindings, StateValues, StencilRef};

/// Point in time copy of the state bound to a command list.
///
/// Every object bound at capture time is kept alive by a strong reference
/// until the snapshot is applied or dropped, so the objects it re-binds are
/// guaranteed to still exist.
pub struct StateSnapshot<A: hal::Api> {
    pipeline_state: Option<Arc<A::PipelineState>>,
    state_object: Option<Arc<A::StateObject>>,
    root_signatures: [Option<Arc<A::RootSignature>>; 2],
    descriptor_heaps: [Option<Arc<A::DescriptorHeap>>; ipt::MAX_BOUND_DESCRIPTOR_HEAPS],
    values: StateValues,
}

fn retain<T>(bound: &Bound<T>, what: &str) -> Option<Arc<T>> {
    let strong = bound.upgrade();
    if strong.is_none() && bound.is_bound() {
        log::warn!("Bound {} was destroyed before the state snapshot", what);
    }
    strong
}

impl<A: hal::Api> StateSnapshot<A> {
    pub fn capture(state: &BindingState<A>) -> Self {
        log::trace!("Capturing binding state");
        Self {
            pipeline_state: retain(state.pipeline_state(), "pipeline state"),
            state_object: retain(state.state_object(), "state object"),
            root_signatures: ipt::BindPoint::ALL
                .map(|bind_point| retain(state.root_signature(bind_point), "root signature")),
            descriptor_heaps: [0, 1].map(|slot| retain(state.descriptor_heap(slot), "descriptor heap")),
            values: state.values().clone(),
        }
    }

    pub fn values(&self) -> &StateValues {
        &self.values
    }

    /// Re-binds the captured state on `list`, consuming the snapshot.
    ///
    /// Objects that were not bound at capture time and root arguments that
    /// cannot be bound natively (null tables, zero addresses) are skipped.
    /// Root constants are only restored where they had been written.
    pub fn apply<L>(self, list: &mut L)
    where
        L: hal::CommandList<A> + ?Sized,
    {
        profiling::scope!("apply", "StateSnapshot");
        log::trace!("Applying binding state");

        let heaps = self
            .descriptor_heaps
            .iter()
            .flatten()
            .collect::<ArrayVec<_, { ipt::MAX_BOUND_DESCRIPTOR_HEAPS }>>();
        if !heaps.is_empty() {
            list.set_descriptor_heaps(&heaps);
        }

        let [ref graphics_signature, ref compute_signature] = self.root_signatures;
        if let Some(ref signature) = *graphics_signature {
            list.set_graphics_root_signature(Some(signature));
        }
        if let Some(ref signature) = *compute_signature {
            list.set_compute_root_signature(Some(signature));
        }
        if let Some(ref pipeline_state) = self.pipeline_state {
            list.set_pipeline_state(Some(pipeline_state));
        }
        if let Some(ref state_object) = self.state_object {
            ipt::strict_assert!(list.interface_version() >= ipt::InterfaceVersion::V4);
            list.set_pipeline_state1(Some(state_object));
        }

        for bind_point in ipt::BindPoint::ALL {
            apply_root::<A, L>(list, bind_point, &self.values.root[bind_point.index()]);
        }

        let values = &self.values;
        list.om_set_render_targets(
            values.num_render_targets,
            &values.render_targets,
            values.render_targets_single_handle_range,
            values.depth_stencil,
        );
        if !values.viewports.is_empty() {
            list.rs_set_viewports(&values.viewports);
        }
        if !values.scissor_rects.is_empty() {
            list.rs_set_scissor_rects(&values.scissor_rects);
        }
        if values.primitive_topology != ipt::PrimitiveTopology::Undefined {
            list.ia_set_primitive_topology(values.primitive_topology);
        }
        if let Some(ref factor) = values.blend_factor {
            list.om_set_blend_factor(Some(factor));
        }
        if let Some(bias) = values.depth_bias {
            ipt::strict_assert!(list.interface_version() >= ipt::InterfaceVersion::V9);
            list.rs_set_depth_bias(
                bias.depth_bias,
                bias.depth_bias_clamp,
                bias.slope_scaled_depth_bias,
            );
        }
        match values.stencil_ref {
            Some(StencilRef::Combined(stencil_ref)) => list.om_set_stencil_ref(stencil_ref),
            Some(StencilRef::Split { front, back }) => {
                ipt::strict_assert!(list.interface_version() >= ipt::InterfaceVersion::V8);
                list.om_set_front_and_back_stencil_ref(front, back)
            }
            None => {}
        }
    }
}

fn apply_root<A, L>(list: &mut L, bind_point: ipt::BindPoint, root: &RootBindings)
where
    A: hal::Api,
    L: hal::CommandList<A> + ?Sized,
{
    use ipt::BindPoint as Bp;

    for (index, &table) in root.descriptor_tables.iter().enumerate() {
        if table.is_null() {
            continue;
        }
        match bind_point {
            Bp::Graphics => list.set_graphics_root_descriptor_table(index as u32, table),
            Bp::Compute => list.set_compute_root_descriptor_table(index as u32, table),
        }
    }
    for (index, &address) in root.constant_buffer_views.iter().enumerate() {
        if address == 0 {
            continue;
        }
        match bind_point {
            Bp::Graphics => list.set_graphics_root_constant_buffer_view(index as u32, address),
            Bp::Compute => list.set_compute_root_constant_buffer_view(index as u32, address),
        }
    }
    for (index, &address) in root.shader_resource_views.iter().enumerate() {
        if address == 0 {
            continue;
        }
        match bind_point {
            Bp::Graphics => list.set_graphics_root_shader_resource_view(index as u32, address),
            Bp::Compute => list.set_compute_root_shader_resource_view(index as u32, address),
        }
    }
    for (index, &address) in root.unordered_access_views.iter().enumerate() {
        if address == 0 {
            continue;
        }
        match bind_point {
            Bp::Graphics => list.set_graphics_root_unordered_access_view(index as u32, address),
            Bp::Compute => list.set_compute_root_unordered_access_view(index as u32, address),
        }
    }
    for index in 0..root.constants.len() {
        for (offset, words) in root.constant_runs(index) {
            match bind_point {
                Bp::Graphics => {
                    list.set_graphics_root_32bit_constants(index as u32, words, offset)
                }
                Bp::Compute => list.set_compute_root_32bit_constants(index as u32, words, offset),
            }
        }
    }
}
