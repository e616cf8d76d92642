use std::sync::Arc;

use hal::{CommandList as _, DeviceError};
use ipt::{BindPoint, InterfaceVersion};

use crate::{
    snapshot::StateSnapshot,
    track::{BindingState, DepthBias},
};

/// Command list that forwards every call to a native list while tracking
/// the state bound to it.
///
/// Calls are forwarded first and tracked afterwards. Entry points newer than
/// the negotiated interface version must not be called, see
/// [`Self::check_and_upgrade_interface`].
pub struct CommandListProxy<A: hal::Api> {
    raw: A::CommandList,
    pub(crate) device: Arc<A::Device>,
    state: BindingState<A>,
    interface_version: InterfaceVersion,
}

impl<A: hal::Api> CommandListProxy<A> {
    pub fn new(device: Arc<A::Device>, raw: A::CommandList) -> Self {
        Self {
            raw,
            device,
            state: BindingState::default(),
            interface_version: InterfaceVersion::V0,
        }
    }

    /// Makes `requested` usable on this proxy if the native list supports it.
    ///
    /// Returns `false` if the native list is too old.
    pub fn check_and_upgrade_interface(&mut self, requested: InterfaceVersion) -> bool {
        if requested <= self.interface_version {
            return true;
        }
        if requested > self.raw.interface_version() {
            return false;
        }
        log::debug!(
            "Upgrading command list interface from {:?} to {:?}",
            self.interface_version,
            requested
        );
        self.interface_version = requested;
        true
    }

    pub fn state(&self) -> &BindingState<A> {
        &self.state
    }

    pub fn raw(&self) -> &A::CommandList {
        &self.raw
    }

    /// Gives access to the native list. Calls recorded on it are not tracked.
    pub fn raw_mut(&mut self) -> &mut A::CommandList {
        &mut self.raw
    }

    pub fn into_raw(self) -> A::CommandList {
        self.raw
    }

    pub fn capture_state(&self) -> StateSnapshot<A> {
        StateSnapshot::capture(&self.state)
    }

    /// Re-binds `snapshot` on the native list.
    ///
    /// The tracked state is left alone: it already describes what the
    /// snapshot restores.
    pub fn apply_state(&mut self, snapshot: StateSnapshot<A>) {
        snapshot.apply(&mut self.raw);
    }

    fn require(&self, version: InterfaceVersion) {
        ipt::strict_assert!(
            self.interface_version >= version,
            "Entry point needs {:?}, negotiated {:?}",
            version,
            self.interface_version
        );
    }
}

impl<A: hal::Api> hal::CommandList<A> for CommandListProxy<A> {
    fn set_name(&mut self, name: &str) -> Result<(), DeviceError> {
        self.raw.set_name(name)
    }
    fn private_data(&self, guid: &ipt::Guid, data: Option<&mut [u8]>) -> Result<usize, DeviceError> {
        self.raw.private_data(guid, data)
    }
    fn set_private_data(&mut self, guid: &ipt::Guid, data: Option<&[u8]>) -> Result<(), DeviceError> {
        self.raw.set_private_data(guid, data)
    }
    fn device(&self) -> &A::Device {
        &self.device
    }
    fn list_type(&self) -> ipt::CommandListType {
        self.raw.list_type()
    }
    fn interface_version(&self) -> InterfaceVersion {
        self.interface_version
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.raw.close()
    }
    fn reset(
        &mut self,
        allocator: &A::CommandAllocator,
        initial_state: Option<&Arc<A::PipelineState>>,
    ) -> Result<(), DeviceError> {
        self.raw.reset(allocator, initial_state)?;
        self.state.clear(initial_state);
        Ok(())
    }
    fn clear_state(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>) {
        self.raw.clear_state(pipeline_state);
        self.state.clear(pipeline_state);
    }
    fn draw_instanced(
        &mut self,
        vertex_count_per_instance: u32,
        instance_count: u32,
        start_vertex_location: u32,
        start_instance_location: u32,
    ) {
        self.raw.draw_instanced(
            vertex_count_per_instance,
            instance_count,
            start_vertex_location,
            start_instance_location,
        )
    }
    fn draw_indexed_instanced(
        &mut self,
        index_count_per_instance: u32,
        instance_count: u32,
        start_index_location: u32,
        base_vertex_location: i32,
        start_instance_location: u32,
    ) {
        self.raw.draw_indexed_instanced(
            index_count_per_instance,
            instance_count,
            start_index_location,
            base_vertex_location,
            start_instance_location,
        )
    }
    fn dispatch(&mut self, x: u32, y: u32, z: u32) {
        self.raw.dispatch(x, y, z)
    }
    fn copy_buffer_region(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        num_bytes: u64,
    ) {
        self.raw
            .copy_buffer_region(dst, dst_offset, src, src_offset, num_bytes)
    }
    fn copy_texture_region(
        &mut self,
        dst: &hal::TextureCopyLocation<A>,
        dst_x: u32,
        dst_y: u32,
        dst_z: u32,
        src: &hal::TextureCopyLocation<A>,
        src_box: Option<&ipt::Box3d>,
    ) {
        self.raw
            .copy_texture_region(dst, dst_x, dst_y, dst_z, src, src_box)
    }
    fn copy_resource(&mut self, dst: &A::Resource, src: &A::Resource) {
        self.raw.copy_resource(dst, src)
    }
    fn copy_tiles(
        &mut self,
        tiled_resource: &A::Resource,
        region_start: &ipt::TiledResourceCoordinate,
        region_size: &ipt::TileRegionSize,
        buffer: &A::Resource,
        buffer_start_offset: u64,
        flags: ipt::TileCopyFlags,
    ) {
        self.raw.copy_tiles(
            tiled_resource,
            region_start,
            region_size,
            buffer,
            buffer_start_offset,
            flags,
        )
    }
    fn resolve_subresource(
        &mut self,
        dst: &A::Resource,
        dst_subresource: u32,
        src: &A::Resource,
        src_subresource: u32,
        format: ipt::Format,
    ) {
        self.raw
            .resolve_subresource(dst, dst_subresource, src, src_subresource, format)
    }
    fn ia_set_primitive_topology(&mut self, topology: ipt::PrimitiveTopology) {
        self.raw.ia_set_primitive_topology(topology);
        self.state.set_primitive_topology(topology);
    }
    fn rs_set_viewports(&mut self, viewports: &[ipt::Viewport]) {
        self.raw.rs_set_viewports(viewports);
        self.state.set_viewports(viewports);
    }
    fn rs_set_scissor_rects(&mut self, rects: &[ipt::Rect]) {
        self.raw.rs_set_scissor_rects(rects);
        self.state.set_scissor_rects(rects);
    }
    fn om_set_blend_factor(&mut self, factor: Option<&[f32; 4]>) {
        self.raw.om_set_blend_factor(factor);
        self.state.set_blend_factor(factor);
    }
    fn om_set_stencil_ref(&mut self, stencil_ref: u32) {
        self.raw.om_set_stencil_ref(stencil_ref);
        self.state.set_stencil_ref(stencil_ref);
    }
    fn set_pipeline_state(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>) {
        self.raw.set_pipeline_state(pipeline_state);
        self.state.set_pipeline_state(pipeline_state);
    }
    fn resource_barrier(&mut self, barriers: &[hal::ResourceBarrier<A>]) {
        self.raw.resource_barrier(barriers)
    }
    fn execute_bundle(&mut self, bundle: &A::CommandList) {
        self.raw.execute_bundle(bundle)
    }
    fn set_descriptor_heaps(&mut self, heaps: &[&Arc<A::DescriptorHeap>]) {
        self.raw.set_descriptor_heaps(heaps);
        self.state.set_descriptor_heaps(heaps);
    }
    fn set_compute_root_signature(&mut self, root_signature: Option<&Arc<A::RootSignature>>) {
        self.raw.set_compute_root_signature(root_signature);
        self.state
            .set_root_signature(BindPoint::Compute, root_signature);
    }
    fn set_graphics_root_signature(&mut self, root_signature: Option<&Arc<A::RootSignature>>) {
        self.raw.set_graphics_root_signature(root_signature);
        self.state
            .set_root_signature(BindPoint::Graphics, root_signature);
    }
    fn set_compute_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    ) {
        self.raw
            .set_compute_root_descriptor_table(root_parameter_index, base_descriptor);
        self.state.set_root_descriptor_table(
            BindPoint::Compute,
            root_parameter_index,
            base_descriptor,
        );
    }
    fn set_graphics_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    ) {
        self.raw
            .set_graphics_root_descriptor_table(root_parameter_index, base_descriptor);
        self.state.set_root_descriptor_table(
            BindPoint::Graphics,
            root_parameter_index,
            base_descriptor,
        );
    }
    fn set_compute_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    ) {
        self.raw.set_compute_root_32bit_constant(
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
        self.state.set_root_32bit_constants(
            BindPoint::Compute,
            root_parameter_index,
            &[src_data],
            dest_offset_in_32bit_values,
        );
    }
    fn set_graphics_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    ) {
        self.raw.set_graphics_root_32bit_constant(
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
        self.state.set_root_32bit_constants(
            BindPoint::Graphics,
            root_parameter_index,
            &[src_data],
            dest_offset_in_32bit_values,
        );
    }
    fn set_compute_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    ) {
        self.raw.set_compute_root_32bit_constants(
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
        self.state.set_root_32bit_constants(
            BindPoint::Compute,
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
    }
    fn set_graphics_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    ) {
        self.raw.set_graphics_root_32bit_constants(
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
        self.state.set_root_32bit_constants(
            BindPoint::Graphics,
            root_parameter_index,
            src_data,
            dest_offset_in_32bit_values,
        );
    }
    fn set_compute_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_compute_root_constant_buffer_view(root_parameter_index, buffer_location);
        self.state.set_root_constant_buffer_view(
            BindPoint::Compute,
            root_parameter_index,
            buffer_location,
        );
    }
    fn set_graphics_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_graphics_root_constant_buffer_view(root_parameter_index, buffer_location);
        self.state.set_root_constant_buffer_view(
            BindPoint::Graphics,
            root_parameter_index,
            buffer_location,
        );
    }
    fn set_compute_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_compute_root_shader_resource_view(root_parameter_index, buffer_location);
        self.state.set_root_shader_resource_view(
            BindPoint::Compute,
            root_parameter_index,
            buffer_location,
        );
    }
    fn set_graphics_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_graphics_root_shader_resource_view(root_parameter_index, buffer_location);
        self.state.set_root_shader_resource_view(
            BindPoint::Graphics,
            root_parameter_index,
            buffer_location,
        );
    }
    fn set_compute_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_compute_root_unordered_access_view(root_parameter_index, buffer_location);
        self.state.set_root_unordered_access_view(
            BindPoint::Compute,
            root_parameter_index,
            buffer_location,
        );
    }
    fn set_graphics_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
        self.raw
            .set_graphics_root_unordered_access_view(root_parameter_index, buffer_location);
        self.state.set_root_unordered_access_view(
            BindPoint::Graphics,
            root_parameter_index,
            buffer_location,
        );
    }
    fn ia_set_index_buffer(&mut self, view: Option<&ipt::IndexBufferView>) {
        self.raw.ia_set_index_buffer(view)
    }
    fn ia_set_vertex_buffers(&mut self, start_slot: u32, views: &[ipt::VertexBufferView]) {
        self.raw.ia_set_vertex_buffers(start_slot, views)
    }
    fn so_set_targets(&mut self, start_slot: u32, views: &[ipt::StreamOutputBufferView]) {
        self.raw.so_set_targets(start_slot, views)
    }
    fn om_set_render_targets(
        &mut self,
        num_render_targets: u32,
        render_targets: &[ipt::CpuDescriptorHandle],
        single_handle_to_descriptor_range: bool,
        depth_stencil: Option<ipt::CpuDescriptorHandle>,
    ) {
        self.raw.om_set_render_targets(
            num_render_targets,
            render_targets,
            single_handle_to_descriptor_range,
            depth_stencil,
        );
        self.state.set_render_targets(
            num_render_targets,
            render_targets,
            single_handle_to_descriptor_range,
            depth_stencil,
        );
    }
    fn clear_depth_stencil_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        flags: ipt::ClearFlags,
        depth: f32,
        stencil: u8,
        rects: &[ipt::Rect],
    ) {
        self.raw
            .clear_depth_stencil_view(view, flags, depth, stencil, rects)
    }
    fn clear_render_target_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        color: &[f32; 4],
        rects: &[ipt::Rect],
    ) {
        self.raw.clear_render_target_view(view, color, rects)
    }
    fn clear_unordered_access_view_uint(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &A::Resource,
        values: &[u32; 4],
        rects: &[ipt::Rect],
    ) {
        self.raw
            .clear_unordered_access_view_uint(view_gpu, view_cpu, resource, values, rects)
    }
    fn clear_unordered_access_view_float(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &A::Resource,
        values: &[f32; 4],
        rects: &[ipt::Rect],
    ) {
        self.raw
            .clear_unordered_access_view_float(view_gpu, view_cpu, resource, values, rects)
    }
    fn discard_resource(&mut self, resource: &A::Resource, region: Option<&ipt::DiscardRegion>) {
        self.raw.discard_resource(resource, region)
    }
    fn begin_query(&mut self, heap: &A::QueryHeap, ty: ipt::QueryType, index: u32) {
        self.raw.begin_query(heap, ty, index)
    }
    fn end_query(&mut self, heap: &A::QueryHeap, ty: ipt::QueryType, index: u32) {
        self.raw.end_query(heap, ty, index)
    }
    fn resolve_query_data(
        &mut self,
        heap: &A::QueryHeap,
        ty: ipt::QueryType,
        start_index: u32,
        num_queries: u32,
        dst: &A::Resource,
        aligned_dst_offset: u64,
    ) {
        self.raw.resolve_query_data(
            heap,
            ty,
            start_index,
            num_queries,
            dst,
            aligned_dst_offset,
        )
    }
    fn set_predication(
        &mut self,
        buffer: Option<&A::Resource>,
        aligned_buffer_offset: u64,
        operation: ipt::PredicationOp,
    ) {
        self.raw
            .set_predication(buffer, aligned_buffer_offset, operation)
    }
    fn set_marker(&mut self, metadata: u32, data: &[u8]) {
        self.raw.set_marker(metadata, data)
    }
    fn begin_event(&mut self, metadata: u32, data: &[u8]) {
        self.raw.begin_event(metadata, data)
    }
    fn end_event(&mut self) {
        self.raw.end_event()
    }
    fn execute_indirect(
        &mut self,
        signature: &A::CommandSignature,
        max_command_count: u32,
        argument_buffer: &A::Resource,
        argument_buffer_offset: u64,
        count_buffer: Option<&A::Resource>,
        count_buffer_offset: u64,
    ) {
        self.raw.execute_indirect(
            signature,
            max_command_count,
            argument_buffer,
            argument_buffer_offset,
            count_buffer,
            count_buffer_offset,
        )
    }

    fn atomic_copy_buffer_uint(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        dependencies: &[&A::Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    ) {
        self.require(InterfaceVersion::V1);
        self.raw.atomic_copy_buffer_uint(
            dst,
            dst_offset,
            src,
            src_offset,
            dependencies,
            dependent_subresource_ranges,
        )
    }
    fn atomic_copy_buffer_uint64(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        dependencies: &[&A::Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    ) {
        self.require(InterfaceVersion::V1);
        self.raw.atomic_copy_buffer_uint64(
            dst,
            dst_offset,
            src,
            src_offset,
            dependencies,
            dependent_subresource_ranges,
        )
    }
    fn om_set_depth_bounds(&mut self, min: f32, max: f32) {
        self.require(InterfaceVersion::V1);
        self.raw.om_set_depth_bounds(min, max)
    }
    fn set_sample_positions(
        &mut self,
        samples_per_pixel: u32,
        num_pixels: u32,
        positions: &[ipt::SamplePosition],
    ) {
        self.require(InterfaceVersion::V1);
        self.raw
            .set_sample_positions(samples_per_pixel, num_pixels, positions)
    }
    fn resolve_subresource_region(
        &mut self,
        dst: &A::Resource,
        dst_subresource: u32,
        dst_x: u32,
        dst_y: u32,
        src: &A::Resource,
        src_subresource: u32,
        src_rect: Option<&ipt::Rect>,
        format: ipt::Format,
        mode: ipt::ResolveMode,
    ) {
        self.require(InterfaceVersion::V1);
        self.raw.resolve_subresource_region(
            dst,
            dst_subresource,
            dst_x,
            dst_y,
            src,
            src_subresource,
            src_rect,
            format,
            mode,
        )
    }
    fn set_view_instance_mask(&mut self, mask: u32) {
        self.require(InterfaceVersion::V1);
        self.raw.set_view_instance_mask(mask)
    }

    fn write_buffer_immediate(
        &mut self,
        params: &[ipt::WriteBufferImmediateParameter],
        modes: Option<&[ipt::WriteBufferImmediateMode]>,
    ) {
        self.require(InterfaceVersion::V2);
        self.raw.write_buffer_immediate(params, modes)
    }

    fn set_protected_resource_session(&mut self, session: Option<&A::ProtectedResourceSession>) {
        self.require(InterfaceVersion::V3);
        self.raw.set_protected_resource_session(session)
    }

    fn begin_render_pass(
        &mut self,
        render_targets: &[ipt::RenderPassRenderTargetDesc],
        depth_stencil: Option<&ipt::RenderPassDepthStencilDesc>,
        flags: ipt::RenderPassFlags,
    ) {
        self.require(InterfaceVersion::V4);
        self.raw
            .begin_render_pass(render_targets, depth_stencil, flags)
    }
    fn end_render_pass(&mut self) {
        self.require(InterfaceVersion::V4);
        self.raw.end_render_pass()
    }
    fn initialize_meta_command(&mut self, meta_command: &A::MetaCommand, parameters: &[u8]) {
        self.require(InterfaceVersion::V4);
        self.raw.initialize_meta_command(meta_command, parameters)
    }
    fn execute_meta_command(&mut self, meta_command: &A::MetaCommand, parameters: &[u8]) {
        self.require(InterfaceVersion::V4);
        self.raw.execute_meta_command(meta_command, parameters)
    }
    fn build_raytracing_acceleration_structure(
        &mut self,
        desc: &ipt::BuildAccelerationStructureDesc,
        postbuild_info: &[ipt::PostbuildInfoDesc],
    ) {
        self.require(InterfaceVersion::V4);
        self.raw
            .build_raytracing_acceleration_structure(desc, postbuild_info)
    }
    fn emit_raytracing_acceleration_structure_postbuild_info(
        &mut self,
        desc: &ipt::PostbuildInfoDesc,
        source_acceleration_structures: &[ipt::GpuVirtualAddress],
    ) {
        self.require(InterfaceVersion::V4);
        self.raw
            .emit_raytracing_acceleration_structure_postbuild_info(
                desc,
                source_acceleration_structures,
            )
    }
    fn copy_raytracing_acceleration_structure(
        &mut self,
        dst: ipt::GpuVirtualAddress,
        src: ipt::GpuVirtualAddress,
        mode: ipt::AccelerationStructureCopyMode,
    ) {
        self.require(InterfaceVersion::V4);
        self.raw
            .copy_raytracing_acceleration_structure(dst, src, mode)
    }
    fn set_pipeline_state1(&mut self, state_object: Option<&Arc<A::StateObject>>) {
        self.require(InterfaceVersion::V4);
        self.raw.set_pipeline_state1(state_object);
        self.state.set_state_object(state_object);
    }
    fn dispatch_rays(&mut self, desc: &ipt::DispatchRaysDesc) {
        self.require(InterfaceVersion::V4);
        self.raw.dispatch_rays(desc)
    }

    fn rs_set_shading_rate(
        &mut self,
        base_shading_rate: ipt::ShadingRate,
        combiners: Option<&[ipt::ShadingRateCombiner; 2]>,
    ) {
        self.require(InterfaceVersion::V5);
        self.raw.rs_set_shading_rate(base_shading_rate, combiners)
    }
    fn rs_set_shading_rate_image(&mut self, image: Option<&A::Resource>) {
        self.require(InterfaceVersion::V5);
        self.raw.rs_set_shading_rate_image(image)
    }

    fn dispatch_mesh(&mut self, x: u32, y: u32, z: u32) {
        self.require(InterfaceVersion::V6);
        self.raw.dispatch_mesh(x, y, z)
    }

    fn barrier(&mut self, groups: &[hal::BarrierGroup<A>]) {
        self.require(InterfaceVersion::V7);
        self.raw.barrier(groups)
    }

    fn om_set_front_and_back_stencil_ref(&mut self, front: u32, back: u32) {
        self.require(InterfaceVersion::V8);
        self.raw.om_set_front_and_back_stencil_ref(front, back);
        self.state.set_front_and_back_stencil_ref(front, back);
    }

    fn rs_set_depth_bias(
        &mut self,
        depth_bias: f32,
        depth_bias_clamp: f32,
        slope_scaled_depth_bias: f32,
    ) {
        self.require(InterfaceVersion::V9);
        self.raw
            .rs_set_depth_bias(depth_bias, depth_bias_clamp, slope_scaled_depth_bias);
        self.state.set_depth_bias(DepthBias {
            depth_bias,
            depth_bias_clamp,
            slope_scaled_depth_bias,
        });
    }
    fn ia_set_index_buffer_strip_cut_value(&mut self, value: ipt::IndexBufferStripCutValue) {
        self.require(InterfaceVersion::V9);
        self.raw.ia_set_index_buffer_strip_cut_value(value)
    }

    fn set_program(&mut self, desc: &ipt::SetProgramDesc) {
        self.require(InterfaceVersion::V10);
        self.raw.set_program(desc)
    }
    fn dispatch_graph(&mut self, desc: &ipt::DispatchGraphDesc) {
        self.require(InterfaceVersion::V10);
        self.raw.dispatch_graph(desc)
    }
}
