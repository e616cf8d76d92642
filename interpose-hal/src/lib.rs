/*! This library describes the native command list recording contract.
 *  Backends implement it for the real driver objects, and interposing
 *  layers implement it again on top of a backend, with the following shape:
 *  - Compile-time backend selection via traits.
 *  - One flat `CommandList` trait covering every interface generation.
 *    The generation an object actually supports is queried, not inherited.
 *  - Bindable objects that the native API reference counts (pipeline states,
 *    state objects, root signatures, descriptor heaps) are passed as `Arc`s.
 *    Everything else is passed by reference.
 *  - Resource transitions are explicit.
 */

#![allow(
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
    // Explicit lifetimes are often easier to reason about.
    clippy::needless_lifetimes,
    // The native entry points take this many arguments.
    clippy::too_many_arguments,
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_qualifications,
    // We don't match on a reference, unless required.
    clippy::pattern_type_mismatch,
)]

pub mod empty;

use std::{fmt, ops::Range, sync::Arc};

use thiserror::Error;

/// Subresource index that selects every subresource of a resource.
pub const ALL_SUBRESOURCES: u32 = 0xffff_ffff;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DeviceError {
    #[error("out of memory")]
    OutOfMemory,
    #[error("device is lost")]
    Lost,
    #[error("invalid call")]
    InvalidCall,
    #[error("requested data was not found")]
    NotFound,
}

pub trait Api: Clone + fmt::Debug + Sized + 'static {
    type Device: Device<Self>;
    type CommandList: CommandList<Self>;

    type Resource: fmt::Debug;
    type ResourceView: fmt::Debug;
    type CommandAllocator: fmt::Debug;
    type QueryHeap: fmt::Debug;
    type CommandSignature: fmt::Debug;
    type ProtectedResourceSession: fmt::Debug;
    type MetaCommand: fmt::Debug;

    type PipelineState: fmt::Debug;
    type StateObject: fmt::Debug;
    type RootSignature: fmt::Debug;
    type DescriptorHeap: DescriptorHeap;
}

pub trait DescriptorHeap: fmt::Debug {
    fn heap_type(&self) -> ipt::DescriptorHeapType;
}

pub trait Device<A: Api>: fmt::Debug {
    /// Identity of this device, stable for its lifetime.
    fn id(&self) -> ipt::DeviceId;

    fn resource_desc(&self, resource: &A::Resource) -> ipt::ResourceDesc;

    /// Creates a view of `resource` usable as `usage`.
    ///
    /// `usage` is expected to name a single kind of view.
    fn create_resource_view(
        &self,
        resource: &A::Resource,
        usage: ipt::ResourceUses,
        desc: &ipt::ResourceViewDesc,
    ) -> Result<A::ResourceView, DeviceError>;

    fn destroy_resource_view(&self, view: A::ResourceView);
}

/// Recording interface of a graphics command list.
///
/// Methods are listed in the order the interface generations introduced
/// them. Callers must not use a method newer than [`Self::interface_version`].
pub trait CommandList<A: Api> {
    // Object and device child surface.

    fn set_name(&mut self, name: &str) -> Result<(), DeviceError>;
    /// Copies private data attached under `guid` into `data`, returning its size.
    ///
    /// With `data` set to `None` only the size is queried.
    fn private_data(&self, guid: &ipt::Guid, data: Option<&mut [u8]>) -> Result<usize, DeviceError>;
    /// Attaches `data` under `guid`, or removes the entry when `data` is `None`.
    fn set_private_data(&mut self, guid: &ipt::Guid, data: Option<&[u8]>) -> Result<(), DeviceError>;
    fn device(&self) -> &A::Device;
    fn list_type(&self) -> ipt::CommandListType;
    /// The most recent interface generation this list can be used as.
    fn interface_version(&self) -> ipt::InterfaceVersion;

    // V0

    fn close(&mut self) -> Result<(), DeviceError>;
    /// Starts recording again. Afterwards all state is at its default and
    /// `initial_state` is the bound pipeline.
    fn reset(
        &mut self,
        allocator: &A::CommandAllocator,
        initial_state: Option<&Arc<A::PipelineState>>,
    ) -> Result<(), DeviceError>;
    /// Resets all state to its default, then binds `pipeline_state`.
    fn clear_state(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>);
    fn draw_instanced(
        &mut self,
        vertex_count_per_instance: u32,
        instance_count: u32,
        start_vertex_location: u32,
        start_instance_location: u32,
    );
    fn draw_indexed_instanced(
        &mut self,
        index_count_per_instance: u32,
        instance_count: u32,
        start_index_location: u32,
        base_vertex_location: i32,
        start_instance_location: u32,
    );
    fn dispatch(&mut self, x: u32, y: u32, z: u32);
    fn copy_buffer_region(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        num_bytes: u64,
    );
    fn copy_texture_region(
        &mut self,
        dst: &TextureCopyLocation<A>,
        dst_x: u32,
        dst_y: u32,
        dst_z: u32,
        src: &TextureCopyLocation<A>,
        src_box: Option<&ipt::Box3d>,
    );
    fn copy_resource(&mut self, dst: &A::Resource, src: &A::Resource);
    fn copy_tiles(
        &mut self,
        tiled_resource: &A::Resource,
        region_start: &ipt::TiledResourceCoordinate,
        region_size: &ipt::TileRegionSize,
        buffer: &A::Resource,
        buffer_start_offset: u64,
        flags: ipt::TileCopyFlags,
    );
    fn resolve_subresource(
        &mut self,
        dst: &A::Resource,
        dst_subresource: u32,
        src: &A::Resource,
        src_subresource: u32,
        format: ipt::Format,
    );
    fn ia_set_primitive_topology(&mut self, topology: ipt::PrimitiveTopology);
    fn rs_set_viewports(&mut self, viewports: &[ipt::Viewport]);
    fn rs_set_scissor_rects(&mut self, rects: &[ipt::Rect]);
    /// `None` resets the blend factor to all ones.
    fn om_set_blend_factor(&mut self, factor: Option<&[f32; 4]>);
    fn om_set_stencil_ref(&mut self, stencil_ref: u32);
    fn set_pipeline_state(&mut self, pipeline_state: Option<&Arc<A::PipelineState>>);
    fn resource_barrier(&mut self, barriers: &[ResourceBarrier<A>]);
    fn execute_bundle(&mut self, bundle: &A::CommandList);
    /// Binds up to one heap of each shader visible class.
    fn set_descriptor_heaps(&mut self, heaps: &[&Arc<A::DescriptorHeap>]);
    fn set_compute_root_signature(&mut self, root_signature: Option<&Arc<A::RootSignature>>);
    fn set_graphics_root_signature(&mut self, root_signature: Option<&Arc<A::RootSignature>>);
    fn set_compute_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    );
    fn set_graphics_root_descriptor_table(
        &mut self,
        root_parameter_index: u32,
        base_descriptor: ipt::GpuDescriptorHandle,
    );
    fn set_compute_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    );
    fn set_graphics_root_32bit_constant(
        &mut self,
        root_parameter_index: u32,
        src_data: u32,
        dest_offset_in_32bit_values: u32,
    );
    fn set_compute_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    );
    fn set_graphics_root_32bit_constants(
        &mut self,
        root_parameter_index: u32,
        src_data: &[u32],
        dest_offset_in_32bit_values: u32,
    );
    fn set_compute_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn set_graphics_root_constant_buffer_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn set_compute_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn set_graphics_root_shader_resource_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn set_compute_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn set_graphics_root_unordered_access_view(
        &mut self,
        root_parameter_index: u32,
        buffer_location: ipt::GpuVirtualAddress,
    );
    fn ia_set_index_buffer(&mut self, view: Option<&ipt::IndexBufferView>);
    fn ia_set_vertex_buffers(&mut self, start_slot: u32, views: &[ipt::VertexBufferView]);
    fn so_set_targets(&mut self, start_slot: u32, views: &[ipt::StreamOutputBufferView]);
    /// Binds render targets and an optional depth stencil view.
    ///
    /// With `single_handle_to_descriptor_range` set, `render_targets` holds
    /// one handle that starts a contiguous run of `num_render_targets`
    /// descriptors. Otherwise it holds one handle per render target.
    fn om_set_render_targets(
        &mut self,
        num_render_targets: u32,
        render_targets: &[ipt::CpuDescriptorHandle],
        single_handle_to_descriptor_range: bool,
        depth_stencil: Option<ipt::CpuDescriptorHandle>,
    );
    fn clear_depth_stencil_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        flags: ipt::ClearFlags,
        depth: f32,
        stencil: u8,
        rects: &[ipt::Rect],
    );
    fn clear_render_target_view(
        &mut self,
        view: ipt::CpuDescriptorHandle,
        color: &[f32; 4],
        rects: &[ipt::Rect],
    );
    fn clear_unordered_access_view_uint(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &A::Resource,
        values: &[u32; 4],
        rects: &[ipt::Rect],
    );
    fn clear_unordered_access_view_float(
        &mut self,
        view_gpu: ipt::GpuDescriptorHandle,
        view_cpu: ipt::CpuDescriptorHandle,
        resource: &A::Resource,
        values: &[f32; 4],
        rects: &[ipt::Rect],
    );
    fn discard_resource(&mut self, resource: &A::Resource, region: Option<&ipt::DiscardRegion>);
    fn begin_query(&mut self, heap: &A::QueryHeap, ty: ipt::QueryType, index: u32);
    fn end_query(&mut self, heap: &A::QueryHeap, ty: ipt::QueryType, index: u32);
    fn resolve_query_data(
        &mut self,
        heap: &A::QueryHeap,
        ty: ipt::QueryType,
        start_index: u32,
        num_queries: u32,
        dst: &A::Resource,
        aligned_dst_offset: u64,
    );
    fn set_predication(
        &mut self,
        buffer: Option<&A::Resource>,
        aligned_buffer_offset: u64,
        operation: ipt::PredicationOp,
    );
    fn set_marker(&mut self, metadata: u32, data: &[u8]);
    fn begin_event(&mut self, metadata: u32, data: &[u8]);
    fn end_event(&mut self);
    fn execute_indirect(
        &mut self,
        signature: &A::CommandSignature,
        max_command_count: u32,
        argument_buffer: &A::Resource,
        argument_buffer_offset: u64,
        count_buffer: Option<&A::Resource>,
        count_buffer_offset: u64,
    );

    // V1

    fn atomic_copy_buffer_uint(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        dependencies: &[&A::Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    );
    fn atomic_copy_buffer_uint64(
        &mut self,
        dst: &A::Resource,
        dst_offset: u64,
        src: &A::Resource,
        src_offset: u64,
        dependencies: &[&A::Resource],
        dependent_subresource_ranges: &[ipt::SubresourceRangeU64],
    );
    fn om_set_depth_bounds(&mut self, min: f32, max: f32);
    fn set_sample_positions(
        &mut self,
        samples_per_pixel: u32,
        num_pixels: u32,
        positions: &[ipt::SamplePosition],
    );
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
    );
    fn set_view_instance_mask(&mut self, mask: u32);

    // V2

    fn write_buffer_immediate(
        &mut self,
        params: &[ipt::WriteBufferImmediateParameter],
        modes: Option<&[ipt::WriteBufferImmediateMode]>,
    );

    // V3

    fn set_protected_resource_session(&mut self, session: Option<&A::ProtectedResourceSession>);

    // V4

    fn begin_render_pass(
        &mut self,
        render_targets: &[ipt::RenderPassRenderTargetDesc],
        depth_stencil: Option<&ipt::RenderPassDepthStencilDesc>,
        flags: ipt::RenderPassFlags,
    );
    fn end_render_pass(&mut self);
    fn initialize_meta_command(&mut self, meta_command: &A::MetaCommand, parameters: &[u8]);
    fn execute_meta_command(&mut self, meta_command: &A::MetaCommand, parameters: &[u8]);
    fn build_raytracing_acceleration_structure(
        &mut self,
        desc: &ipt::BuildAccelerationStructureDesc,
        postbuild_info: &[ipt::PostbuildInfoDesc],
    );
    fn emit_raytracing_acceleration_structure_postbuild_info(
        &mut self,
        desc: &ipt::PostbuildInfoDesc,
        source_acceleration_structures: &[ipt::GpuVirtualAddress],
    );
    fn copy_raytracing_acceleration_structure(
        &mut self,
        dst: ipt::GpuVirtualAddress,
        src: ipt::GpuVirtualAddress,
        mode: ipt::AccelerationStructureCopyMode,
    );
    /// Binds a ray tracing or work graph state object.
    fn set_pipeline_state1(&mut self, state_object: Option<&Arc<A::StateObject>>);
    fn dispatch_rays(&mut self, desc: &ipt::DispatchRaysDesc);

    // V5

    fn rs_set_shading_rate(
        &mut self,
        base_shading_rate: ipt::ShadingRate,
        combiners: Option<&[ipt::ShadingRateCombiner; 2]>,
    );
    fn rs_set_shading_rate_image(&mut self, image: Option<&A::Resource>);

    // V6

    fn dispatch_mesh(&mut self, x: u32, y: u32, z: u32);

    // V7

    fn barrier(&mut self, groups: &[BarrierGroup<A>]);

    // V8

    fn om_set_front_and_back_stencil_ref(&mut self, front: u32, back: u32);

    // V9

    fn rs_set_depth_bias(&mut self, depth_bias: f32, depth_bias_clamp: f32, slope_scaled_depth_bias: f32);
    fn ia_set_index_buffer_strip_cut_value(&mut self, value: ipt::IndexBufferStripCutValue);

    // V10

    fn set_program(&mut self, desc: &ipt::SetProgramDesc);
    fn dispatch_graph(&mut self, desc: &ipt::DispatchGraphDesc);
}

#[derive(Clone, Debug)]
pub enum ResourceBarrier<'a, A: Api> {
    /// Changes how a subresource is used.
    Transition {
        resource: &'a A::Resource,
        subresource: u32,
        usage: Range<ipt::ResourceUses>,
    },
    Aliasing {
        before: Option<&'a A::Resource>,
        after: Option<&'a A::Resource>,
    },
    /// Orders unordered access to `resource`, or to every resource when `None`.
    UnorderedAccess { resource: Option<&'a A::Resource> },
}

impl<'a, A: Api> ResourceBarrier<'a, A> {
    /// Transition of every subresource of `resource`.
    pub fn transition(resource: &'a A::Resource, usage: Range<ipt::ResourceUses>) -> Self {
        Self::Transition {
            resource,
            subresource: ALL_SUBRESOURCES,
            usage,
        }
    }
}

#[derive(Clone, Debug)]
pub enum TextureCopyLocation<'a, A: Api> {
    Subresource {
        resource: &'a A::Resource,
        index: u32,
    },
    PlacedFootprint {
        resource: &'a A::Resource,
        footprint: ipt::PlacedSubresourceFootprint,
    },
}

#[derive(Clone, Debug)]
pub struct BufferBarrier<'a, A: Api> {
    pub sync: Range<ipt::BarrierSync>,
    pub access: Range<ipt::BarrierAccess>,
    pub resource: &'a A::Resource,
    pub offset: u64,
    pub size: u64,
}

#[derive(Clone, Debug)]
pub struct TextureBarrier<'a, A: Api> {
    pub sync: Range<ipt::BarrierSync>,
    pub access: Range<ipt::BarrierAccess>,
    pub layout: Range<ipt::BarrierLayout>,
    pub resource: &'a A::Resource,
    pub subresources: ipt::BarrierSubresourceRange,
    pub discard: bool,
}

#[derive(Clone, Debug)]
pub enum BarrierGroup<'a, A: Api> {
    Global(&'a [ipt::GlobalBarrier]),
    Texture(&'a [TextureBarrier<'a, A>]),
    Buffer(&'a [BufferBarrier<'a, A>]),
}
