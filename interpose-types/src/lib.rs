/*! This library describes the values that flow through a native command list.
 *  It is agnostic of the backend implementing the list and of the layer
 *  interposing on it, and is shared by both.
 */

#![allow(
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
)]
#![warn(missing_docs)]

use std::num::NonZeroU64;

use bitflags::bitflags;

pub mod assertions;
mod format;

pub use format::Format;

/// Maximum number of simultaneously bound render targets.
pub const MAX_RENDER_TARGETS: usize = 8;
/// Maximum number of viewports, and of scissor rects, per pipeline.
pub const MAX_VIEWPORTS: usize = 16;
/// Number of descriptor heap classes that can be bound to a command list at once.
pub const MAX_BOUND_DESCRIPTOR_HEAPS: usize = 2;
/// Size limit of a root signature in 32-bit words. Every root parameter takes
/// at least one word, so this also bounds parameter indices and constant offsets.
pub const MAX_ROOT_SIGNATURE_DWORDS: usize = 64;

/// Address of a location in GPU memory.
pub type GpuVirtualAddress = u64;

/// Handle of a descriptor in a shader-visible descriptor heap.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct GpuDescriptorHandle {
    /// Raw GPU address of the descriptor.
    pub ptr: u64,
}

impl GpuDescriptorHandle {
    /// Returns `true` for the null handle, which never refers to a descriptor.
    pub fn is_null(&self) -> bool {
        self.ptr == 0
    }
}

/// Handle of a descriptor in CPU-visible descriptor memory.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct CpuDescriptorHandle {
    /// Raw CPU address of the descriptor.
    pub ptr: usize,
}

impl CpuDescriptorHandle {
    /// Returns `true` for the null handle.
    pub fn is_null(&self) -> bool {
        self.ptr == 0
    }
}

/// Identity of a device, stable for the lifetime of the device.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct DeviceId(NonZeroU64);

impl DeviceId {
    /// Creates an identity from a raw non-zero value, such as the address of
    /// the native device object.
    pub fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// Returns the raw value this identity was created from.
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

/// Interface GUID, used to key private data attached to objects.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Guid {
    #[allow(missing_docs)]
    pub data1: u32,
    #[allow(missing_docs)]
    pub data2: u16,
    #[allow(missing_docs)]
    pub data3: u16,
    #[allow(missing_docs)]
    pub data4: [u8; 8],
}

/// Rasterizer viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
    #[allow(missing_docs)]
    pub width: f32,
    #[allow(missing_docs)]
    pub height: f32,
    #[allow(missing_docs)]
    pub min_depth: f32,
    #[allow(missing_docs)]
    pub max_depth: f32,
}

/// Integer rectangle, right and bottom edges exclusive.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Rect {
    #[allow(missing_docs)]
    pub left: i32,
    #[allow(missing_docs)]
    pub top: i32,
    #[allow(missing_docs)]
    pub right: i32,
    #[allow(missing_docs)]
    pub bottom: i32,
}

/// Three-dimensional box, far edges exclusive.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Box3d {
    #[allow(missing_docs)]
    pub left: u32,
    #[allow(missing_docs)]
    pub top: u32,
    #[allow(missing_docs)]
    pub front: u32,
    #[allow(missing_docs)]
    pub right: u32,
    #[allow(missing_docs)]
    pub bottom: u32,
    #[allow(missing_docs)]
    pub back: u32,
}

/// How the input assembler interprets vertex data.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum PrimitiveTopology {
    /// Nothing has been set; the value a fresh command list starts with.
    #[default]
    Undefined,
    #[allow(missing_docs)]
    PointList,
    #[allow(missing_docs)]
    LineList,
    #[allow(missing_docs)]
    LineStrip,
    #[allow(missing_docs)]
    TriangleList,
    #[allow(missing_docs)]
    TriangleStrip,
    #[allow(missing_docs)]
    LineListAdj,
    #[allow(missing_docs)]
    LineStripAdj,
    #[allow(missing_docs)]
    TriangleListAdj,
    #[allow(missing_docs)]
    TriangleStripAdj,
    /// Patch list with the given number of control points (1..=32).
    PatchList(u8),
}

/// One of the two independent sets of root arguments of a command list.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BindPoint {
    #[allow(missing_docs)]
    Graphics,
    #[allow(missing_docs)]
    Compute,
}

impl BindPoint {
    /// Both bind points, in storage order.
    pub const ALL: [BindPoint; 2] = [BindPoint::Graphics, BindPoint::Compute];

    /// Index of the bind point in per-bind-point arrays.
    pub fn index(&self) -> usize {
        match *self {
            Self::Graphics => 0,
            Self::Compute => 1,
        }
    }
}

/// Class of a descriptor heap.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DescriptorHeapType {
    /// Constant buffer, shader resource and unordered access views.
    CbvSrvUav,
    #[allow(missing_docs)]
    Sampler,
    /// Render target views. Never shader visible.
    Rtv,
    /// Depth stencil views. Never shader visible.
    Dsv,
}

impl DescriptorHeapType {
    /// Slot this heap class occupies when bound to a command list, if it can
    /// be bound at all.
    pub fn shader_visible_slot(&self) -> Option<usize> {
        match *self {
            Self::CbvSrvUav => Some(0),
            Self::Sampler => Some(1),
            Self::Rtv | Self::Dsv => None,
        }
    }
}

/// Kind of queue a command list records for.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CommandListType {
    #[allow(missing_docs)]
    Direct,
    #[allow(missing_docs)]
    Bundle,
    #[allow(missing_docs)]
    Compute,
    #[allow(missing_docs)]
    Copy,
    #[allow(missing_docs)]
    VideoDecode,
    #[allow(missing_docs)]
    VideoProcess,
    #[allow(missing_docs)]
    VideoEncode,
}

/// Generation of the graphics command list interface.
///
/// Every generation is a superset of the previous one.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum InterfaceVersion {
    /// The base interface.
    #[default]
    V0 = 0,
    /// Atomic copies, depth bounds, sample positions, region resolves, view instancing.
    V1 = 1,
    /// Immediate buffer writes.
    V2 = 2,
    /// Protected resource sessions.
    V3 = 3,
    /// Render passes, meta commands and ray tracing.
    V4 = 4,
    /// Variable rate shading.
    V5 = 5,
    /// Mesh shaders.
    V6 = 6,
    /// Enhanced barriers.
    V7 = 7,
    /// Separate front and back stencil references.
    V8 = 8,
    /// Dynamic depth bias and index buffer strip cut.
    V9 = 9,
    /// Work graphs.
    V10 = 10,
}

impl InterfaceVersion {
    /// The most recent generation.
    pub const LATEST: Self = Self::V10;
}

bitflags! {
    /// Usage state of a resource, as declared to barriers.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct ResourceUses: u32 {
        /// Also known as `COMMON` or `PRESENT`.
        const COMMON = 0;
        #[allow(missing_docs)]
        const VERTEX_AND_CONSTANT_BUFFER = 0x1;
        #[allow(missing_docs)]
        const INDEX_BUFFER = 0x2;
        #[allow(missing_docs)]
        const RENDER_TARGET = 0x4;
        #[allow(missing_docs)]
        const UNORDERED_ACCESS = 0x8;
        #[allow(missing_docs)]
        const DEPTH_WRITE = 0x10;
        #[allow(missing_docs)]
        const DEPTH_READ = 0x20;
        #[allow(missing_docs)]
        const NON_PIXEL_SHADER_RESOURCE = 0x40;
        #[allow(missing_docs)]
        const PIXEL_SHADER_RESOURCE = 0x80;
        #[allow(missing_docs)]
        const STREAM_OUT = 0x100;
        #[allow(missing_docs)]
        const INDIRECT_ARGUMENT = 0x200;
        #[allow(missing_docs)]
        const COPY_DEST = 0x400;
        #[allow(missing_docs)]
        const COPY_SOURCE = 0x800;
        #[allow(missing_docs)]
        const RESOLVE_DEST = 0x1000;
        #[allow(missing_docs)]
        const RESOLVE_SOURCE = 0x2000;
        #[allow(missing_docs)]
        const SHADING_RATE_SOURCE = 0x100_0000;
        /// Readable from any shader stage.
        const SHADER_RESOURCE = Self::NON_PIXEL_SHADER_RESOURCE.bits() | Self::PIXEL_SHADER_RESOURCE.bits();
    }
}

bitflags! {
    /// Aspects cleared by a depth stencil clear.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct ClearFlags: u32 {
        #[allow(missing_docs)]
        const DEPTH = 0x1;
        #[allow(missing_docs)]
        const STENCIL = 0x2;
    }
}

bitflags! {
    /// Direction and behavior of a tile copy.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct TileCopyFlags: u32 {
        #[allow(missing_docs)]
        const NO_HAZARD = 0x1;
        #[allow(missing_docs)]
        const LINEAR_BUFFER_TO_SWIZZLED_TILED_RESOURCE = 0x2;
        #[allow(missing_docs)]
        const SWIZZLED_TILED_RESOURCE_TO_LINEAR_BUFFER = 0x4;
    }
}

bitflags! {
    /// Modifiers of a render pass.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct RenderPassFlags: u32 {
        #[allow(missing_docs)]
        const ALLOW_UAV_WRITES = 0x1;
        #[allow(missing_docs)]
        const SUSPENDING_PASS = 0x2;
        #[allow(missing_docs)]
        const RESUMING_PASS = 0x4;
    }
}

bitflags! {
    /// Synchronization scope of an enhanced barrier.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct BarrierSync: u32 {
        #[allow(missing_docs)]
        const ALL = 0x1;
        #[allow(missing_docs)]
        const DRAW = 0x2;
        #[allow(missing_docs)]
        const RENDER_TARGET = 0x10;
        #[allow(missing_docs)]
        const PIXEL_SHADING = 0x80;
        #[allow(missing_docs)]
        const COMPUTE_SHADING = 0x100;
        #[allow(missing_docs)]
        const COPY = 0x400;
    }
}

bitflags! {
    /// Access type of an enhanced barrier. The empty set means `COMMON`.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct BarrierAccess: u32 {
        #[allow(missing_docs)]
        const CONSTANT_BUFFER = 0x2;
        #[allow(missing_docs)]
        const RENDER_TARGET = 0x8;
        #[allow(missing_docs)]
        const UNORDERED_ACCESS = 0x10;
        #[allow(missing_docs)]
        const SHADER_RESOURCE = 0x80;
        #[allow(missing_docs)]
        const COPY_DEST = 0x400;
        #[allow(missing_docs)]
        const COPY_SOURCE = 0x800;
        #[allow(missing_docs)]
        const NO_ACCESS = 0x8000_0000;
    }
}

/// Texture layout of an enhanced barrier.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum BarrierLayout {
    #[allow(missing_docs)]
    #[default]
    Undefined,
    #[allow(missing_docs)]
    Common,
    #[allow(missing_docs)]
    Present,
    #[allow(missing_docs)]
    RenderTarget,
    #[allow(missing_docs)]
    UnorderedAccess,
    #[allow(missing_docs)]
    DepthStencilWrite,
    #[allow(missing_docs)]
    DepthStencilRead,
    #[allow(missing_docs)]
    ShaderResource,
    #[allow(missing_docs)]
    CopySource,
    #[allow(missing_docs)]
    CopyDest,
}

/// Subresources touched by an enhanced texture barrier.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct BarrierSubresourceRange {
    #[allow(missing_docs)]
    pub index_or_first_mip_level: u32,
    #[allow(missing_docs)]
    pub num_mip_levels: u32,
    #[allow(missing_docs)]
    pub first_array_slice: u32,
    #[allow(missing_docs)]
    pub num_array_slices: u32,
    #[allow(missing_docs)]
    pub first_plane: u32,
    #[allow(missing_docs)]
    pub num_planes: u32,
}

/// Enhanced barrier that is not tied to a resource.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct GlobalBarrier {
    #[allow(missing_docs)]
    pub sync_before: BarrierSync,
    #[allow(missing_docs)]
    pub sync_after: BarrierSync,
    #[allow(missing_docs)]
    pub access_before: BarrierAccess,
    #[allow(missing_docs)]
    pub access_after: BarrierAccess,
}

/// Dimensionality of a resource.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ResourceDimension {
    #[allow(missing_docs)]
    #[default]
    Unknown,
    #[allow(missing_docs)]
    Buffer,
    #[allow(missing_docs)]
    Texture1D,
    #[allow(missing_docs)]
    Texture2D,
    #[allow(missing_docs)]
    Texture3D,
}

/// Description of a resource, as reported by the device.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResourceDesc {
    #[allow(missing_docs)]
    pub dimension: ResourceDimension,
    #[allow(missing_docs)]
    pub width: u64,
    #[allow(missing_docs)]
    pub height: u32,
    #[allow(missing_docs)]
    pub depth_or_array_layers: u16,
    #[allow(missing_docs)]
    pub mip_levels: u16,
    /// Underlying format. [`Format::Unknown`] for buffers.
    pub format: Format,
    #[allow(missing_docs)]
    pub sample_count: u32,
}

/// Description of a view to create on a resource.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ResourceViewDesc {
    /// Format the view interprets the resource with.
    pub format: Format,
    #[allow(missing_docs)]
    pub first_level: u32,
    #[allow(missing_docs)]
    pub first_layer: u32,
    #[allow(missing_docs)]
    pub layers: u32,
}

impl ResourceViewDesc {
    /// View of the first mip level and array layer with the given format.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            first_level: 0,
            first_layer: 0,
            layers: 1,
        }
    }
}

/// Index buffer binding.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct IndexBufferView {
    #[allow(missing_docs)]
    pub buffer_location: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub size_in_bytes: u32,
    /// Either [`Format::R16Uint`] or [`Format::R32Uint`].
    pub format: Format,
}

/// Vertex buffer binding.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct VertexBufferView {
    #[allow(missing_docs)]
    pub buffer_location: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub size_in_bytes: u32,
    #[allow(missing_docs)]
    pub stride_in_bytes: u32,
}

/// Stream output target binding.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct StreamOutputBufferView {
    #[allow(missing_docs)]
    pub buffer_location: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub size_in_bytes: u64,
    #[allow(missing_docs)]
    pub buffer_filled_size_location: GpuVirtualAddress,
}

/// Footprint of a subresource placed in a buffer.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct PlacedSubresourceFootprint {
    #[allow(missing_docs)]
    pub offset: u64,
    #[allow(missing_docs)]
    pub format: Format,
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    #[allow(missing_docs)]
    pub depth: u32,
    #[allow(missing_docs)]
    pub row_pitch: u32,
}

/// Tile coordinate inside a tiled resource.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct TiledResourceCoordinate {
    #[allow(missing_docs)]
    pub x: u32,
    #[allow(missing_docs)]
    pub y: u32,
    #[allow(missing_docs)]
    pub z: u32,
    #[allow(missing_docs)]
    pub subresource: u32,
}

/// Size of a tile region.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct TileRegionSize {
    #[allow(missing_docs)]
    pub num_tiles: u32,
    #[allow(missing_docs)]
    pub use_box: bool,
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u16,
    #[allow(missing_docs)]
    pub depth: u16,
}

/// Region of a resource to discard.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct DiscardRegion<'a> {
    #[allow(missing_docs)]
    pub rects: &'a [Rect],
    #[allow(missing_docs)]
    pub first_subresource: u32,
    #[allow(missing_docs)]
    pub num_subresources: u32,
}

/// Kind of GPU query.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum QueryType {
    #[allow(missing_docs)]
    Occlusion,
    #[allow(missing_docs)]
    BinaryOcclusion,
    #[allow(missing_docs)]
    Timestamp,
    #[allow(missing_docs)]
    PipelineStatistics,
    /// Stream output statistics of the given stream.
    SoStatisticsStream(u8),
}

/// Condition under which predicated commands are skipped.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum PredicationOp {
    #[allow(missing_docs)]
    #[default]
    EqualZero,
    #[allow(missing_docs)]
    NotEqualZero,
}

/// Programmable sample position, in 1/16th pixel units.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct SamplePosition {
    #[allow(missing_docs)]
    pub x: i8,
    #[allow(missing_docs)]
    pub y: i8,
}

/// Byte range of a subresource.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct SubresourceRangeU64 {
    #[allow(missing_docs)]
    pub subresource: u32,
    #[allow(missing_docs)]
    pub begin: u64,
    #[allow(missing_docs)]
    pub end: u64,
}

/// Destination and value of an immediate buffer write.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct WriteBufferImmediateParameter {
    #[allow(missing_docs)]
    pub dest: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub value: u32,
}

/// Ordering of an immediate buffer write relative to other work.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum WriteBufferImmediateMode {
    #[allow(missing_docs)]
    #[default]
    Default,
    #[allow(missing_docs)]
    MarkerIn,
    #[allow(missing_docs)]
    MarkerOut,
}

/// How multisampled data is collapsed by a region resolve.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ResolveMode {
    #[allow(missing_docs)]
    #[default]
    Decompress,
    #[allow(missing_docs)]
    Min,
    #[allow(missing_docs)]
    Max,
    #[allow(missing_docs)]
    Average,
}

/// Value a render pass clears an attachment to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClearValue {
    #[allow(missing_docs)]
    Color([f32; 4]),
    #[allow(missing_docs)]
    DepthStencil {
        depth: f32,
        stencil: u8,
    },
}

/// What happens to an attachment when a render pass begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderPassBeginningAccess {
    #[allow(missing_docs)]
    Discard,
    #[allow(missing_docs)]
    Preserve,
    #[allow(missing_docs)]
    Clear(ClearValue),
    #[allow(missing_docs)]
    NoAccess,
}

/// What happens to an attachment when a render pass ends.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RenderPassEndingAccess {
    #[allow(missing_docs)]
    Discard,
    #[allow(missing_docs)]
    Preserve,
    #[allow(missing_docs)]
    Resolve,
    #[allow(missing_docs)]
    NoAccess,
}

/// Color attachment of a render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPassRenderTargetDesc {
    #[allow(missing_docs)]
    pub cpu_descriptor: CpuDescriptorHandle,
    #[allow(missing_docs)]
    pub beginning_access: RenderPassBeginningAccess,
    #[allow(missing_docs)]
    pub ending_access: RenderPassEndingAccess,
}

/// Depth stencil attachment of a render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPassDepthStencilDesc {
    #[allow(missing_docs)]
    pub cpu_descriptor: CpuDescriptorHandle,
    #[allow(missing_docs)]
    pub depth_beginning_access: RenderPassBeginningAccess,
    #[allow(missing_docs)]
    pub stencil_beginning_access: RenderPassBeginningAccess,
    #[allow(missing_docs)]
    pub depth_ending_access: RenderPassEndingAccess,
    #[allow(missing_docs)]
    pub stencil_ending_access: RenderPassEndingAccess,
}

/// Range of GPU memory.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct GpuVirtualAddressRange {
    #[allow(missing_docs)]
    pub start_address: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub size_in_bytes: u64,
}

/// Range of GPU memory split into equally sized records.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct GpuVirtualAddressRangeAndStride {
    #[allow(missing_docs)]
    pub start_address: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub size_in_bytes: u64,
    #[allow(missing_docs)]
    pub stride_in_bytes: u64,
}

/// Level of a ray tracing acceleration structure.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AccelerationStructureType {
    #[allow(missing_docs)]
    TopLevel,
    #[allow(missing_docs)]
    BottomLevel,
}

/// Inputs of an acceleration structure build.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct AccelerationStructureInputs {
    #[allow(missing_docs)]
    pub ty: AccelerationStructureType,
    /// Raw build flags, passed through unchanged.
    pub flags: u32,
    #[allow(missing_docs)]
    pub num_descs: u32,
    /// Address of the instance or geometry descriptions.
    pub descs: GpuVirtualAddress,
}

/// Description of an acceleration structure build.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct BuildAccelerationStructureDesc {
    #[allow(missing_docs)]
    pub dest_acceleration_structure_data: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub inputs: AccelerationStructureInputs,
    /// Zero unless the build updates an existing structure.
    pub source_acceleration_structure_data: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub scratch_acceleration_structure_data: GpuVirtualAddress,
}

/// Kind of information emitted after an acceleration structure build.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PostbuildInfoType {
    #[allow(missing_docs)]
    CompactedSize,
    #[allow(missing_docs)]
    ToolsVisualization,
    #[allow(missing_docs)]
    Serialization,
    #[allow(missing_docs)]
    CurrentSize,
}

/// Destination of acceleration structure postbuild information.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct PostbuildInfoDesc {
    #[allow(missing_docs)]
    pub dest_buffer: GpuVirtualAddress,
    #[allow(missing_docs)]
    pub info_type: PostbuildInfoType,
}

/// Mode of an acceleration structure copy.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AccelerationStructureCopyMode {
    #[allow(missing_docs)]
    Clone,
    #[allow(missing_docs)]
    Compact,
    #[allow(missing_docs)]
    VisualizationDecodeForTools,
    #[allow(missing_docs)]
    Serialize,
    #[allow(missing_docs)]
    Deserialize,
}

/// Shader tables and grid size of a ray dispatch.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct DispatchRaysDesc {
    #[allow(missing_docs)]
    pub ray_generation_shader_record: GpuVirtualAddressRange,
    #[allow(missing_docs)]
    pub miss_shader_table: GpuVirtualAddressRangeAndStride,
    #[allow(missing_docs)]
    pub hit_group_table: GpuVirtualAddressRangeAndStride,
    #[allow(missing_docs)]
    pub callable_shader_table: GpuVirtualAddressRangeAndStride,
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    #[allow(missing_docs)]
    pub depth: u32,
}

/// Coarse shading rate.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ShadingRate {
    #[allow(missing_docs)]
    #[default]
    Rate1x1,
    #[allow(missing_docs)]
    Rate1x2,
    #[allow(missing_docs)]
    Rate2x1,
    #[allow(missing_docs)]
    Rate2x2,
    #[allow(missing_docs)]
    Rate2x4,
    #[allow(missing_docs)]
    Rate4x2,
    #[allow(missing_docs)]
    Rate4x4,
}

/// How two shading rate sources are combined.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ShadingRateCombiner {
    #[allow(missing_docs)]
    #[default]
    Passthrough,
    #[allow(missing_docs)]
    Override,
    #[allow(missing_docs)]
    Min,
    #[allow(missing_docs)]
    Max,
    #[allow(missing_docs)]
    Sum,
}

/// Index value that restarts a strip.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum IndexBufferStripCutValue {
    #[allow(missing_docs)]
    #[default]
    Disabled,
    #[allow(missing_docs)]
    Value0xFFFF,
    #[allow(missing_docs)]
    Value0xFFFFFFFF,
}

/// Opaque identifier of a program inside a state object.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct ProgramIdentifier {
    #[allow(missing_docs)]
    pub opaque_data: [u64; 4],
}

/// Kind of program set by [`SetProgramDesc`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ProgramType {
    #[allow(missing_docs)]
    GenericPipeline,
    #[allow(missing_docs)]
    RaytracingPipeline,
    #[allow(missing_docs)]
    WorkGraph,
}

/// Program to make current.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SetProgramDesc {
    #[allow(missing_docs)]
    pub ty: ProgramType,
    #[allow(missing_docs)]
    pub program_identifier: ProgramIdentifier,
    /// Work graph backing memory, empty for other program types.
    pub backing_memory: GpuVirtualAddressRange,
    /// Work graph local root argument table, empty for other program types.
    pub node_local_root_arguments_table: GpuVirtualAddressRangeAndStride,
    /// Raw work graph flags, passed through unchanged.
    pub flags: u32,
}

/// Where the inputs of a work graph dispatch come from.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DispatchGraphMode {
    /// One node, records in CPU memory.
    NodeCpuInput {
        #[allow(missing_docs)]
        entrypoint_index: u32,
        #[allow(missing_docs)]
        num_records: u32,
        #[allow(missing_docs)]
        record_stride_in_bytes: u64,
    },
    /// One node, records in GPU memory.
    NodeGpuInput(GpuVirtualAddress),
    /// Several nodes, inputs described in GPU memory.
    MultiNodeGpuInput(GpuVirtualAddress),
}

/// Work graph dispatch.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct DispatchGraphDesc {
    #[allow(missing_docs)]
    pub mode: DispatchGraphMode,
}
