#![allow(unused_variables)]

use std::{num::NonZeroU64, sync::Arc};

#[derive(Clone, Debug)]
pub struct Api;
#[derive(Debug)]
pub struct Context;
#[derive(Debug)]
pub struct Encoder;
#[derive(Debug)]
pub struct Resource;
#[derive(Debug)]
pub struct DescriptorHeap {
    pub heap_type: ipt::DescriptorHeapType,
}

type DeviceResult<T> = Result<T, crate::DeviceError>;

impl crate::Api for Api {
    type Device = Context;
    type CommandList = Encoder;

    type Resource = Resource;
    type ResourceView = Resource;
    type CommandAllocator = Resource;
    type QueryHeap = Resource;
    type CommandSignature = Resource;
    type ProtectedResourceSession = Resource;
    type MetaCommand = Resource;

    type PipelineState = Resource;
    type StateObject = Resource;
    type RootSignature = Resource;
    type DescriptorHeap = DescriptorHeap;
}

impl crate::DescriptorHeap for DescriptorHeap {
    fn heap_type(&self) -> ipt::DescriptorHeapType {
        self.heap_type
    }
}

impl crate::Device<Api> for Context {
    fn id(&self) -> ipt::DeviceId {
        ipt::DeviceId::new(NonZeroU64::MIN)
    }
    fn resource_desc(&self, resource: &Resource) -> ipt::ResourceDesc {
        ipt::ResourceDesc::default()
    }
    fn create_resource_view(
        &self,
        resource: &Resource,
        usage: ipt::ResourceUses,
        desc: &ipt::ResourceViewDesc,
    ) -> DeviceResult<Resource> {
        Err(crate::DeviceError::Lost)
    }
    fn destroy_resource_view(&self, view: Resource) {}
}

impl crate::CommandList<Api> for Encoder {
    fn set_name(&mut self, name: &str) -> DeviceResult<()> {
        Ok(())
    }
    fn private_data(&self, guid: &ipt::Guid, data: Option<&mut [u8]>) -> DeviceResult<usize> {
        Err(crate::DeviceError::NotFound)
    }
    fn set_private_data(&mut self, guid: &ipt::Guid, data: Option<&[u8]>) -> DeviceResult<()> {
        Ok(())
    }
    fn device(&self) -> &Context {
        &Context
    }
    fn list_type(&self) -> ipt::CommandListType {
        ipt::CommandListType::Direct
    }
    fn interface_version(&self) -> ipt::InterfaceVersion {
        ipt::InterfaceVersion::LATEST
    }

    fn close(&mut self) -> DeviceResult<()> {
        Ok(())
    }
    fn reset(
        &mut self,
        allocator: &Resource,
        initial_state: Option<&Arc<Resource>>,
    ) -> DeviceResult<()> {
        Ok(())
    }
    fn clear_state(&mut self, pipeline_state: Option<&Arc<Resource>>) {}
    fn draw_instanced(
        &mut self,
        vertex_count_per_instance: u32,
        instance_count: u32,
        start_vertex_location: u32,
        start_instance_location: u32,
    ) {
    }
    fn draw_indexed_instanced(
        &mut self,
        index_count_per_instance: u32,
        instance_count: u32,
        start_index_location: u32,
        base_vertex_location: i32,
        start_instance_location: u32,
    ) {
    }
    fn dispatch(&mut self, x: u32, y: u32, z: u32) {}
    fn copy_buffer_region(
        &mut self,
        dst: &Resource,
        dst_offset: u64,
        src: &Resource,
        src_offset: u64,
        num_bytes: u64,
    ) {
    }
    fn copy_texture_region(
        &mut self,
        dst: &crate::TextureCopyLocation<Api>,
        dst_x: u32,
        dst_y: u32,
        dst_z: u32,
        src: &crate::TextureCopyLocation<Api>,
        src_box: Option<&ipt::Box3d>,
    ) {
    }
    fn copy_resource(&mut self, dst: &Resource, src: &Resource) {}
    fn copy_tiles(
        &mut self,
        tiled_resource: &Resource,
        region_start: &ipt::TiledResourceCoordinate,
        region_size: &ipt::TileRegionSize,
        buffer: &Resource,
        buffer_start_offset: u64,
        flags: ipt::TileCopyFlags,
    ) {
    }
    fn resolve_subresource(
        &mut self,
        dst: &Resource,
        dst_subresource: u32,
        src: &Resource,
        src_subresource: u32,
        format: ipt::Format,
    ) {
    }
    fn ia_set_primitive_topology(&mut self, topology: ipt::PrimitiveTopology) {}
    fn rs_set_viewports(&mut self, viewports: &[ipt::Viewport]) {}
    fn rs_set_scissor_rects(&mut self, rects: &[ipt::Rect]) {}
    fn om_set_blend_factor(&mut self, factor: Option<&[f32; 4]>) {}
    fn om_set_stencil_ref(&mut self, stencil_ref: u32) {}
    fn set_pipeline_state(&mut self, pipeline_state: Option<&Arc<Resource>>) {}
    fn resource_barrier(&mut self, barriers: &[crate::ResourceBarrier<Api>]) {}
    fn execute_bundle(&mut self, bundle: &Encoder) {}
    fn set_descriptor_heaps(&mut self, heaps: &[&Arc<DescriptorHeap>]) {}
    fn set_compute_root_signature(&mut self, root_signature: Option<&Arc<Resource>>) {}
    fn set_graphics_root_signature(&mut self, root_signature: Option<&Arc<Resource>>) {}
    fn set_compute_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    ) {
    }
    fn set_graphics_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    ) {
    }
    fn set_compute_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    ) {
    }
    fn set_graphics_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    ) {
    }
    fn set_compute_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    ) {
    }
    fn set_graphics_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    ) {
    }
    fn set_compute_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn set_graphics_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn set_compute_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn set_graphics_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn set_compute_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn set_graphics_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    ) {
    }
    fn ia_set_index_buffer(&mut self, view: Option<&ipt::IndexBufferView>) {}
    fn ia_set_vertex_buffers(&mut self, start_slot: u32, views: &[ipt::VertexBufferView]) {}
    fn so_set_targets(&mut self, start_slot: u32, views: &[ipt::StreamOutputBufferView]) {}
    fn om_set_render_targets(
        &mut self,
        num_render_targets: u32,
        render_targets: &[ipt::CpuDescriptorHandle],
        single_handle_to_descriptor_range: bool,
        depth_stencil: Option<ipt::CpuDescriptorHandle>,
    ) {
    }
    fn clear_depth_stencil_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        flags: ipt::ClearFlags,
        depth: f32,
        stencil: u8,
        rects: &[ipt::Rect],
    ) {
    }
    fn clear_render_target_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        color: &[f32; 4],
        rects: &[ipt::Rect],
    ) {
    }
    fn clear_unordered_access_view_uint(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &Resource,
        values: &[u32; 4],
        rects: &[ipt::Rect],
    ) {
    }
    fn clear_unordered_access_view_float(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &Resource,
        values: &[f32; 4],
        rects: &[ipt::Rect],
    ) {
    }
    fn discard_resource(&mut self, resource: &Resource, region: Option<&ipt::DiscardRegion>) {}
    fn begin_query(&mut self, heap: &Resource, ty: ipt::QueryType, index: u32) {}
    fn end_query(&mut self, heap: &Resource, ty: ipt::QueryType, index: u32) {}
    fn resolve_query_data(
        &mut self,
        heap: &Resource,
        ty: ipt::QueryType,
        start_index: u32,
        num_queries: u32,
        dst: &Resource,
        aligned_dst_offset: u64,
    ) {
    }
    fn set_predication(
        &mut self,
        buffer: Option<&Resource>,
        aligned_buffer_offset: u64,
        operation: ipt::PredicationOp,
    ) {
    }
    fn set_marker(&mut self, metadata: u32, data: &[u8]) {}
    fn begin_event(&mut self, metadata: u32, data: &[u8]) {}
    fn end_event(&mut self) {}
    fn execute_indirect(
        &mut self,
        signature: &Resource,
        max_command_count: u32,
        argument_buffer: &Resource,
        argument_buffer_offset: u64,
        count_buffer: Option<&Resource>,
        count_buffer_offset: u64,
    ) {
    }

    fn atomic_copy_buffer_uint(
        &mut self,
        dst: &Resource,
        dst_offset: u64,
        src: &Resource,
        src_offset: u64,
        dependencies: &[&Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    ) {
    }
    fn atomic_copy_buffer_uint64(
        &mut self,
        dst: &Resource,
        dst_offset: u64,
        src: &Resource,
        src_offset: u64,
        dependencies: &[&Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    ) {
    }
    fn om_set_depth_bounds(&mut self, min: f32, max: f32) {}
    fn set_sample_positions(
        &mut self,
        samples_per_pixel: u32,
        num_pixels: u32,
        positions: &[ipt::SamplePosition],
    ) {
    }
    fn resolve_subresource_region(
        &mut self,
        dst: &Resource,
        dst_subresource: u32,
        dst_x: u32,
        dst_y: u32,
        src: &Resource,
        src_subresource: u32,
        src_rect: Option<&ipt::Rect>,
        format: ipt::Format,
        mode: ipt::ResolveMode,
    ) {
    }
    fn set_view_instance_mask(&mut self, mask: u32) {}

    fn write_buffer_immediate(
        &mut self,
        params: &[ipt::WriteBufferImmediateParameter],
        modes: Option<&[ipt::WriteBufferImmediateMode]>,
    ) {
    }

    fn set_protected_resource_session(&mut self, session: Option<&Resource>) {}

    fn begin_render_pass(
        &mut self,
        render_targets: &[ipt::RenderPassRenderTargetDesc],
        depth_stencil: Option<&ipt::RenderPassDepthStencilDesc>,
        flags: ipt::RenderPassFlags,
    ) {
    }
    fn end_render_pass(&mut self) {}
    fn initialize_meta_command(&mut self, meta_command: &Resource, parameters: &[u8]) {}
    fn execute_meta_command(&mut self, meta_command: &Resource, parameters: &[u8]) {}
    fn build_raytracing_acceleration_structure(
        &mut self,
        desc: &ipt::BuildAccelerationStructureDesc,
        postbuild_info: &[ipt::PostbuildInfoDesc],
    ) {
    }
    fn emit_raytracing_acceleration_structure_postbuild_info(
        &mut self,
        desc: &ipt::PostbuildInfoDesc,
        source_acceleration_structures: &[ipt::GpuVirtualAddress],
    ) {
    }
    fn copy_raytracing_acceleration_structure(
        &mut self,
        dst: ipt::GpuVirtualAddress,
        src: ipt::GpuVirtualAddress,
        mode: ipt::AccelerationStructureCopyMode,
    ) {
    }
    fn set_pipeline_state1(&mut self, state_object: Option<&Arc<Resource>>) {}
    fn dispatch_rays(&mut self, desc: &ipt::DispatchRaysDesc) {}

    fn rs_set_shading_rate(
        &mut self,
        base_shading_rate: ipt::ShadingRate,
        combiners: Option<&[ipt::ShadingRateCombiner; 2]>,
    ) {
    }
    fn rs_set_shading_rate_image(&mut self, image: Option<&Resource>) {}

    fn dispatch_mesh(&mut self, x: u32, y: u32, z: u32) {}

    fn barrier(&mut self, groups: &[crate::BarrierGroup<Api>]) {}

    fn om_set_front_and_back_stencil_ref(&mut self, front: u32, back: u32) {}

    fn rs_set_depth_bias(
        &mut self,
        depth_bias: f32,
        depth_bias_clamp: f32,
        slope_scaled_depth_bias: f32,
    ) {
    }
    fn ia_set_index_buffer_strip_cut_value(&mut self, value: ipt::IndexBufferStripCutValue) {}

    fn set_program(&mut self, desc: &ipt::SetProgramDesc) {}
    fn dispatch_graph(&mut self, desc: &ipt::DispatchGraphDesc) {}
}
