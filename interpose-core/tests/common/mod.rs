//! Recording backend for integration tests.
//!
//! `MockList` behaves like a native list that remembers what is bound to it,
//! so restoring state on it can be checked field by field.

#![allow(dead_code, unused_variables)]

use std::{
    num::NonZeroU64,
    sync::{
        atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering},
        Arc,
    },
};

use interpose_core::{
    hook::{FeatureHandle, ProgressCallback},
    track::DepthBias,
    BindingState, CommandListProxy, EffectRuntime, EvaluateFeature, FeatureParameters,
    FeatureResult,
};
use ipt::{BindPoint, DeviceId, Format, InterfaceVersion, ResourceUses};
use parking_lot::Mutex;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn device_id(raw: u64) -> DeviceId {
    DeviceId::new(NonZeroU64::new(raw).unwrap())
}

#[derive(Clone, Debug)]
pub struct Mock;

#[derive(Debug)]
pub struct MockResource {
    pub format: Format,
}

#[derive(Debug)]
pub struct MockView {
    pub id: u32,
    pub format: Format,
}

#[derive(Debug, Default)]
pub struct MockObject;

#[derive(Debug)]
pub struct MockHeap(pub ipt::DescriptorHeapType);

impl hal::DescriptorHeap for MockHeap {
    fn heap_type(&self) -> ipt::DescriptorHeapType {
        self.0
    }
}

impl hal::Api for Mock {
    type Device = MockDevice;
    type CommandList = MockList;

    type Resource = MockResource;
    type ResourceView = MockView;
    type CommandAllocator = MockObject;
    type QueryHeap = MockObject;
    type CommandSignature = MockObject;
    type ProtectedResourceSession = MockObject;
    type MetaCommand = MockObject;

    type PipelineState = MockObject;
    type StateObject = MockObject;
    type RootSignature = MockObject;
    type DescriptorHeap = MockHeap;
}

#[derive(Debug)]
pub struct MockDevice {
    id: DeviceId,
    next_view: AtomicU32,
    /// Formats of every view created so far.
    pub created: Mutex<Vec<Format>>,
    /// Ids of every view destroyed so far.
    pub destroyed: Mutex<Vec<u32>>,
    /// Makes creation of sRGB views fail.
    pub fail_srgb: AtomicBool,
}

impl MockDevice {
    pub fn new(id: DeviceId) -> Arc<Self> {
        Arc::new(Self {
            id,
            next_view: AtomicU32::new(1),
            created: Mutex::new(Vec::new()),
            destroyed: Mutex::new(Vec::new()),
            fail_srgb: AtomicBool::new(false),
        })
    }
}

impl hal::Device<Mock> for MockDevice {
    fn id(&self) -> DeviceId {
        self.id
    }
    fn resource_desc(&self, resource: &MockResource) -> ipt::ResourceDesc {
        ipt::ResourceDesc {
            dimension: ipt::ResourceDimension::Texture2D,
            width: 1920,
            height: 1080,
            depth_or_array_layers: 1,
            mip_levels: 1,
            format: resource.format,
            sample_count: 1,
        }
    }
    fn create_resource_view(
        &self,
        resource: &MockResource,
        usage: ResourceUses,
        desc: &ipt::ResourceViewDesc,
    ) -> Result<MockView, hal::DeviceError> {
        assert_eq!(usage, ResourceUses::RENDER_TARGET);
        if desc.format.is_srgb() && self.fail_srgb.load(Ordering::SeqCst) {
            return Err(hal::DeviceError::OutOfMemory);
        }
        self.created.lock().push(desc.format);
        Ok(MockView {
            id: self.next_view.fetch_add(1, Ordering::SeqCst),
            format: desc.format,
        })
    }
    fn destroy_resource_view(&self, view: MockView) {
        self.destroyed.lock().push(view.id);
    }
}

/// Native list stand-in that logs calls and tracks its own bound state.
pub struct MockList {
    device: Arc<MockDevice>,
    pub version: InterfaceVersion,
    pub state: BindingState<Mock>,
    pub calls: Vec<&'static str>,
    pub transitions: Vec<(ResourceUses, ResourceUses)>,
}

impl MockList {
    pub fn new(device: &Arc<MockDevice>) -> Self {
        Self {
            device: Arc::clone(device),
            version: InterfaceVersion::LATEST,
            state: BindingState::new(),
            calls: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|&&name| name == call).count()
    }
}

pub fn proxy(device: &Arc<MockDevice>) -> CommandListProxy<Mock> {
    let mut list = CommandListProxy::new(Arc::clone(device), MockList::new(device));
    assert!(list.check_and_upgrade_interface(InterfaceVersion::LATEST));
    list
}

impl hal::CommandList<Mock> for MockList {
    fn set_name(&mut self, name: &str) -> Result<(), hal::DeviceError> {
        self.calls.push("set_name");
        Ok(())
    }
    fn private_data(
        &self,
        guid: &ipt::Guid,
        data: Option<&mut [u8]>,
    ) -> Result<usize, hal::DeviceError> {
        Err(hal::DeviceError::NotFound)
    }
    fn set_private_data(
        &mut self,
        guid: &ipt::Guid,
        data: Option<&[u8]>,
    ) -> Result<(), hal::DeviceError> {
        self.calls.push("set_private_data");
        Ok(())
    }
    fn device(&self) -> &MockDevice {
        &self.device
    }
    fn list_type(&self) -> ipt::CommandListType {
        ipt::CommandListType::Direct
    }
    fn interface_version(&self) -> InterfaceVersion {
        self.version
    }

    fn close(&mut self) -> Result<(), hal::DeviceError> {
        self.calls.push("close");
        Ok(())
    }
    fn reset(
        &mut self,
        allocator: &MockObject,
        initial_state: Option<&Arc<MockObject>>,
    ) -> Result<(), hal::DeviceError> {
        self.calls.push("reset");
        self.state.clear(initial_state);
        Ok(())
    }
    fn clear_state(&mut self, pipeline_state: Option<&Arc<MockObject>>) {
        self.calls.push("clear_state");
        self.state.clear(pipeline_state);
    }
    fn draw_instanced(&mut self, _: u32, _: u32, _: u32, _: u32) {
        self.calls.push("draw_instanced");
    }
    fn draw_indexed_instanced(&mut self, _: u32, _: u32, _: u32, _: i32, _: u32) {
        self.calls.push("draw_indexed_instanced");
    }
    fn dispatch(&mut self, x: u32, y: u32, z: u32) {
        self.calls.push("dispatch");
    }
    fn copy_buffer_region(&mut self, _: &MockResource, _: u64, _: &MockResource, _: u64, _: u64) {
        self.calls.push("copy_buffer_region");
    }
    fn copy_texture_region(
        &mut self,
        _: &hal::TextureCopyLocation<Mock>,
        _: u32,
        _: u32,
        _: u32,
        _: &hal::TextureCopyLocation<Mock>,
        _: Option<&ipt::Box3d>,
    ) {
        self.calls.push("copy_texture_region");
    }
    fn copy_resource(&mut self, dst: &MockResource, src: &MockResource) {
        self.calls.push("copy_resource");
    }
    fn copy_tiles(
        &mut self,
        _: &MockResource,
        _: &ipt::TiledResourceCoordinate,
        _: &ipt::TileRegionSize,
        _: &MockResource,
        _: u64,
        _: ipt::TileCopyFlags,
    ) {
        self.calls.push("copy_tiles");
    }
    fn resolve_subresource(&mut self, _: &MockResource, _: u32, _: &MockResource, _: u32, _: Format) {
        self.calls.push("resolve_subresource");
    }
    fn ia_set_primitive_topology(&mut self, topology: ipt::PrimitiveTopology) {
        self.calls.push("ia_set_primitive_topology");
        self.state.set_primitive_topology(topology);
    }
    fn rs_set_viewports(&mut self, viewports: &[ipt::Viewport]) {
        self.calls.push("rs_set_viewports");
        self.state.set_viewports(viewports);
    }
    fn rs_set_scissor_rects(&mut self, rects: &[ipt::Rect]) {
        self.calls.push("rs_set_scissor_rects");
        self.state.set_scissor_rects(rects);
    }
    fn om_set_blend_factor(&mut self, factor: Option<&[f32; 4]>) {
        self.calls.push("om_set_blend_factor");
        self.state.set_blend_factor(factor);
    }
    fn om_set_stencil_ref(&mut self, stencil_ref: u32) {
        self.calls.push("om_set_stencil_ref");
        self.state.set_stencil_ref(stencil_ref);
    }
    fn set_pipeline_state(&mut self, pipeline_state: Option<&Arc<MockObject>>) {
        self.calls.push("set_pipeline_state");
        self.state.set_pipeline_state(pipeline_state);
    }
    fn resource_barrier(&mut self, barriers: &[hal::ResourceBarrier<Mock>]) {
        self.calls.push("resource_barrier");
        for barrier in barriers {
            if let hal::ResourceBarrier::Transition { ref usage, .. } = *barrier {
                self.transitions.push((usage.start, usage.end));
            }
        }
    }
    fn execute_bundle(&mut self, bundle: &MockList) {
        self.calls.push("execute_bundle");
    }
    fn set_descriptor_heaps(&mut self, heaps: &[&Arc<MockHeap>]) {
        self.calls.push("set_descriptor_heaps");
        self.state.set_descriptor_heaps(heaps);
    }
    fn set_compute_root_signature(&mut self, root_signature: Option<&Arc<MockObject>>) {
        self.calls.push("set_compute_root_signature");
        self.state.set_root_signature(BindPoint::Compute, root_signature);
    }
    fn set_graphics_root_signature(&mut self, root_signature: Option<&Arc<MockObject>>) {
        self.calls.push("set_graphics_root_signature");
        self.state.set_root_signature(BindPoint::Graphics, root_signature);
    }
    fn set_compute_root_descriptor_table(&mut self, index: u32, handle: ipt::GpuDescriptorHandle) {
        self.calls.push("set_compute_root_descriptor_table");
        self.state.set_root_descriptor_table(BindPoint::Compute, index, handle);
    }
    fn set_graphics_root_descriptor_table(&mut self, index: u32, handle: ipt::GpuDescriptorHandle) {
        self.calls.push("set_graphics_root_descriptor_table");
        self.state.set_root_descriptor_table(BindPoint::Graphics, index, handle);
    }
    fn set_compute_root_32bit_constant(&mut self, index: u32, data: u32, offset: u32) {
        self.calls.push("set_compute_root_32bit_constant");
        self.state.set_root_32bit_constants(BindPoint::Compute, index, &[data], offset);
    }
    fn set_graphics_root_32bit_constant(&mut self, index: u32, data: u32, offset: u32) {
        self.calls.push("set_graphics_root_32bit_constant");
        self.state.set_root_32bit_constants(BindPoint::Graphics, index, &[data], offset);
    }
    fn set_compute_root_32bit_constants(&mut self, index: u32, data: &[u32], offset: u32) {
        self.calls.push("set_compute_root_32bit_constants");
        self.state.set_root_32bit_constants(BindPoint::Compute, index, data, offset);
    }
    fn set_graphics_root_32bit_constants(&mut self, index: u32, data: &[u32], offset: u32) {
        self.calls.push("set_graphics_root_32bit_constants");
        self.state.set_root_32bit_constants(BindPoint::Graphics, index, data, offset);
    }
    fn set_compute_root_constant_buffer_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_compute_root_constant_buffer_view");
        self.state.set_root_constant_buffer_view(BindPoint::Compute, index, address);
    }
    fn set_graphics_root_constant_buffer_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_graphics_root_constant_buffer_view");
        self.state.set_root_constant_buffer_view(BindPoint::Graphics, index, address);
    }
    fn set_compute_root_shader_resource_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_compute_root_shader_resource_view");
        self.state.set_root_shader_resource_view(BindPoint::Compute, index, address);
    }
    fn set_graphics_root_shader_resource_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_graphics_root_shader_resource_view");
        self.state.set_root_shader_resource_view(BindPoint::Graphics, index, address);
    }
    fn set_compute_root_unordered_access_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_compute_root_unordered_access_view");
        self.state.set_root_unordered_access_view(BindPoint::Compute, index, address);
    }
    fn set_graphics_root_unordered_access_view(&mut self, index: u32, address: u64) {
        self.calls.push("set_graphics_root_unordered_access_view");
        self.state.set_root_unordered_access_view(BindPoint::Graphics, index, address);
    }
    fn ia_set_index_buffer(&mut self, view: Option<&ipt::IndexBufferView>) {
        self.calls.push("ia_set_index_buffer");
    }
    fn ia_set_vertex_buffers(&mut self, start_slot: u32, views: &[ipt::VertexBufferView]) {
        self.calls.push("ia_set_vertex_buffers");
    }
    fn so_set_targets(&mut self, start_slot: u32, views: &[ipt::StreamOutputBufferView]) {
        self.calls.push("so_set_targets");
    }
    fn om_set_render_targets(
        &mut self,
        num_render_targets: u32,
        render_targets: &[ipt::CpuDescriptorHandle],
        single_handle_to_descriptor_range: bool,
        depth_stencil: Option<ipt::CpuDescriptorHandle>,
    ) {
        self.calls.push("om_set_render_targets");
        self.state.set_render_targets(
            num_render_targets,
            render_targets,
            single_handle_to_descriptor_range,
            depth_stencil,
        );
    }
    fn clear_depth_stencil_view(
        &mut self,
        _: ipt::CpuDescriptorHandle,
        _: ipt::ClearFlags,
        _: f32,
        _: u8,
        _: &[ipt::Rect],
    ) {
        self.calls.push("clear_depth_stencil_view");
    }
    fn clear_render_target_view(&mut self, _: ipt::CpuDescriptorHandle, _: &[f32; 4], _: &[ipt::Rect]) {
        self.calls.push("clear_render_target_view");
    }
    fn clear_unordered_access_view_uint(
        &mut self,
        _: ipt::GpuDescriptorHandle,
        _: ipt::CpuDescriptorHandle,
        _: &MockResource,
        _: &[u32; 4],
        _: &[ipt::Rect],
    ) {
        self.calls.push("clear_unordered_access_view_uint");
    }
    fn clear_unordered_access_view_float(
        &mut self,
        _: ipt::GpuDescriptorHandle,
        _: ipt::CpuDescriptorHandle,
        _: &MockResource,
        _: &[f32; 4],
        _: &[ipt::Rect],
    ) {
        self.calls.push("clear_unordered_access_view_float");
    }
    fn discard_resource(&mut self, _: &MockResource, _: Option<&ipt::DiscardRegion>) {
        self.calls.push("discard_resource");
    }
    fn begin_query(&mut self, _: &MockObject, _: ipt::QueryType, _: u32) {
        self.calls.push("begin_query");
    }
    fn end_query(&mut self, _: &MockObject, _: ipt::QueryType, _: u32) {
        self.calls.push("end_query");
    }
    fn resolve_query_data(
        &mut self,
        _: &MockObject,
        _: ipt::QueryType,
        _: u32,
        _: u32,
        _: &MockResource,
        _: u64,
    ) {
        self.calls.push("resolve_query_data");
    }
    fn set_predication(&mut self, _: Option<&MockResource>, _: u64, _: ipt::PredicationOp) {
        self.calls.push("set_predication");
    }
    fn set_marker(&mut self, _: u32, _: &[u8]) {
        self.calls.push("set_marker");
    }
    fn begin_event(&mut self, _: u32, _: &[u8]) {
        self.calls.push("begin_event");
    }
    fn end_event(&mut self) {
        self.calls.push("end_event");
    }
    fn execute_indirect(
        &mut self,
        _: &MockObject,
        _: u32,
        _: &MockResource,
        _: u64,
        _: Option<&MockResource>,
        _: u64,
    ) {
        self.calls.push("execute_indirect");
    }

    fn atomic_copy_buffer_uint(
        &mut self,
        _: &MockResource,
        _: u64,
        _: &MockResource,
        _: u64,
        _: &[&MockResource],
        _: &[ipt::SubresourceRangeU64],
    ) {
        self.calls.push("atomic_copy_buffer_uint");
    }
    fn atomic_copy_buffer_uint64(
        &mut self,
        _: &MockResource,
        _: u64,
        _: &MockResource,
        _: u64,
        _: &[&MockResource],
        _: &[ipt::SubresourceRangeU64],
    ) {
        self.calls.push("atomic_copy_buffer_uint64");
    }
    fn om_set_depth_bounds(&mut self, _: f32, _: f32) {
        self.calls.push("om_set_depth_bounds");
    }
    fn set_sample_positions(&mut self, _: u32, _: u32, _: &[ipt::SamplePosition]) {
        self.calls.push("set_sample_positions");
    }
    fn resolve_subresource_region(
        &mut self,
        _: &MockResource,
        _: u32,
        _: u32,
        _: u32,
        _: &MockResource,
        _: u32,
        _: Option<&ipt::Rect>,
        _: Format,
        _: ipt::ResolveMode,
    ) {
        self.calls.push("resolve_subresource_region");
    }
    fn set_view_instance_mask(&mut self, _: u32) {
        self.calls.push("set_view_instance_mask");
    }

    fn write_buffer_immediate(
        &mut self,
        _: &[ipt::WriteBufferImmediateParameter],
        _: Option<&[ipt::WriteBufferImmediateMode]>,
    ) {
        self.calls.push("write_buffer_immediate");
    }

    fn set_protected_resource_session(&mut self, _: Option<&MockObject>) {
        self.calls.push("set_protected_resource_session");
    }

    fn begin_render_pass(
        &mut self,
        _: &[ipt::RenderPassRenderTargetDesc],
        _: Option<&ipt::RenderPassDepthStencilDesc>,
        _: ipt::RenderPassFlags,
    ) {
        self.calls.push("begin_render_pass");
    }
    fn end_render_pass(&mut self) {
        self.calls.push("end_render_pass");
    }
    fn initialize_meta_command(&mut self, _: &MockObject, _: &[u8]) {
        self.calls.push("initialize_meta_command");
    }
    fn execute_meta_command(&mut self, _: &MockObject, _: &[u8]) {
        self.calls.push("execute_meta_command");
    }
    fn build_raytracing_acceleration_structure(
        &mut self,
        _: &ipt::BuildAccelerationStructureDesc,
        _: &[ipt::PostbuildInfoDesc],
    ) {
        self.calls.push("build_raytracing_acceleration_structure");
    }
    fn emit_raytracing_acceleration_structure_postbuild_info(
        &mut self,
        _: &ipt::PostbuildInfoDesc,
        _: &[ipt::GpuVirtualAddress],
    ) {
        self.calls.push("emit_raytracing_acceleration_structure_postbuild_info");
    }
    fn copy_raytracing_acceleration_structure(
        &mut self,
        _: ipt::GpuVirtualAddress,
        _: ipt::GpuVirtualAddress,
        _: ipt::AccelerationStructureCopyMode,
    ) {
        self.calls.push("copy_raytracing_acceleration_structure");
    }
    fn set_pipeline_state1(&mut self, state_object: Option<&Arc<MockObject>>) {
        self.calls.push("set_pipeline_state1");
        self.state.set_state_object(state_object);
    }
    fn dispatch_rays(&mut self, _: &ipt::DispatchRaysDesc) {
        self.calls.push("dispatch_rays");
    }

    fn rs_set_shading_rate(
        &mut self,
        _: ipt::ShadingRate,
        _: Option<&[ipt::ShadingRateCombiner; 2]>,
    ) {
        self.calls.push("rs_set_shading_rate");
    }
    fn rs_set_shading_rate_image(&mut self, _: Option<&MockResource>) {
        self.calls.push("rs_set_shading_rate_image");
    }

    fn dispatch_mesh(&mut self, _: u32, _: u32, _: u32) {
        self.calls.push("dispatch_mesh");
    }

    fn barrier(&mut self, _: &[hal::BarrierGroup<Mock>]) {
        self.calls.push("barrier");
    }

    fn om_set_front_and_back_stencil_ref(&mut self, front: u32, back: u32) {
        self.calls.push("om_set_front_and_back_stencil_ref");
        self.state.set_front_and_back_stencil_ref(front, back);
    }

    fn rs_set_depth_bias(
        &mut self,
        depth_bias: f32,
        depth_bias_clamp: f32,
        slope_scaled_depth_bias: f32,
    ) {
        self.calls.push("rs_set_depth_bias");
        self.state.set_depth_bias(DepthBias {
            depth_bias,
            depth_bias_clamp,
            slope_scaled_depth_bias,
        });
    }
    fn ia_set_index_buffer_strip_cut_value(&mut self, _: ipt::IndexBufferStripCutValue) {
        self.calls.push("ia_set_index_buffer_strip_cut_value");
    }

    fn set_program(&mut self, _: &ipt::SetProgramDesc) {
        self.calls.push("set_program");
    }
    fn dispatch_graph(&mut self, _: &ipt::DispatchGraphDesc) {
        self.calls.push("dispatch_graph");
    }
}

type RenderFn = dyn Fn(&mut MockList) + Send + Sync;

/// Effect runtime that records the views it is given and runs `render`.
pub struct MockRuntime {
    device: DeviceId,
    pub enabled: AtomicBool,
    pub rendered: Mutex<Vec<(u32, u32)>>,
    render: Box<RenderFn>,
}

impl MockRuntime {
    pub fn new(device: DeviceId, render: impl Fn(&mut MockList) + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            device,
            enabled: AtomicBool::new(true),
            rendered: Mutex::new(Vec::new()),
            render: Box::new(render),
        })
    }
}

impl EffectRuntime<Mock> for MockRuntime {
    fn device_id(&self) -> DeviceId {
        self.device
    }
    fn preprocess_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
    fn render_effects(&self, list: &mut MockList, view: &MockView, view_srgb: &MockView) {
        self.rendered.lock().push((view.id, view_srgb.id));
        (self.render)(list);
    }
}

/// Original feature evaluation, counting its calls.
#[derive(Default)]
pub struct CountingOriginal {
    pub calls: AtomicUsize,
    pub calls_with_list: AtomicUsize,
}

impl EvaluateFeature<Mock> for CountingOriginal {
    fn evaluate(
        &self,
        list: Option<&mut CommandListProxy<Mock>>,
        feature: Option<&FeatureHandle>,
        parameters: Option<&dyn FeatureParameters<Mock>>,
        progress: Option<ProgressCallback>,
    ) -> FeatureResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(list) = list {
            self.calls_with_list.fetch_add(1, Ordering::SeqCst);
            hal::CommandList::dispatch(list, 8, 8, 1);
        }
        FeatureResult::SUCCESS
    }
}

pub struct Parameters<'a> {
    pub color: Option<&'a MockResource>,
}

impl FeatureParameters<Mock> for Parameters<'_> {
    fn resource(&self, name: &str) -> Option<&MockResource> {
        match name {
            "Color" => self.color,
            _ => None,
        }
    }
}
