//! Pixel formats and their typeless/typed/sRGB relationships.

/// Underlying pixel layout of a resource or view.
///
/// Mirrors the subset of DXGI formats that resources handed to an effect
/// pass can realistically carry. Typeless formats describe a memory layout
/// without an interpretation and must be resolved to a typed member of the
/// same family before a view can be created on them.
#[repr(u32)]
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Format {
    #[default]
    Unknown,

    R32G32B32A32Typeless,
    R32G32B32A32Float,
    R32G32B32A32Uint,
    R32G32B32A32Sint,

    R16G16B16A16Typeless,
    R16G16B16A16Float,
    R16G16B16A16Unorm,
    R16G16B16A16Uint,
    R16G16B16A16Snorm,
    R16G16B16A16Sint,

    R32G8X24Typeless,
    D32FloatS8X24Uint,

    R10G10B10A2Typeless,
    R10G10B10A2Unorm,
    R10G10B10A2Uint,
    R11G11B10Float,

    R8G8B8A8Typeless,
    R8G8B8A8Unorm,
    R8G8B8A8UnormSrgb,
    R8G8B8A8Uint,
    R8G8B8A8Snorm,
    R8G8B8A8Sint,

    R16G16Typeless,
    R16G16Float,
    R16G16Unorm,

    R32Typeless,
    D32Float,
    R32Float,
    R32Uint,

    R24G8Typeless,
    D24UnormS8Uint,

    R16Typeless,
    R16Float,
    D16Unorm,
    R16Unorm,
    R16Uint,

    R8Typeless,
    R8Unorm,

    B8G8R8A8Typeless,
    B8G8R8A8Unorm,
    B8G8R8A8UnormSrgb,
    B8G8R8X8Typeless,
    B8G8R8X8Unorm,
    B8G8R8X8UnormSrgb,

    Bc1Typeless,
    Bc1Unorm,
    Bc1UnormSrgb,
    Bc3Typeless,
    Bc3Unorm,
    Bc3UnormSrgb,
    Bc7Typeless,
    Bc7Unorm,
    Bc7UnormSrgb,
}

impl Format {
    /// Returns `true` if the format only describes a memory layout.
    pub fn is_typeless(&self) -> bool {
        match *self {
            Self::R32G32B32A32Typeless
            | Self::R16G16B16A16Typeless
            | Self::R32G8X24Typeless
            | Self::R10G10B10A2Typeless
            | Self::R8G8B8A8Typeless
            | Self::R16G16Typeless
            | Self::R32Typeless
            | Self::R24G8Typeless
            | Self::R16Typeless
            | Self::R8Typeless
            | Self::B8G8R8A8Typeless
            | Self::B8G8R8X8Typeless
            | Self::Bc1Typeless
            | Self::Bc3Typeless
            | Self::Bc7Typeless => true,
            _ => false,
        }
    }

    /// Returns `true` for sRGB formats.
    pub fn is_srgb(&self) -> bool {
        match *self {
            Self::R8G8B8A8UnormSrgb
            | Self::B8G8R8A8UnormSrgb
            | Self::B8G8R8X8UnormSrgb
            | Self::Bc1UnormSrgb
            | Self::Bc3UnormSrgb
            | Self::Bc7UnormSrgb => true,
            _ => false,
        }
    }

    #[allow(missing_docs)]
    pub fn is_depth_stencil(&self) -> bool {
        match *self {
            Self::D32FloatS8X24Uint | Self::D32Float | Self::D24UnormS8Uint | Self::D16Unorm => true,
            _ => false,
        }
    }

    /// Returns `true` for block-compressed formats.
    pub fn is_compressed(&self) -> bool {
        match *self {
            Self::Bc1Typeless
            | Self::Bc1Unorm
            | Self::Bc1UnormSrgb
            | Self::Bc3Typeless
            | Self::Bc3Unorm
            | Self::Bc3UnormSrgb
            | Self::Bc7Typeless
            | Self::Bc7Unorm
            | Self::Bc7UnormSrgb => true,
            _ => false,
        }
    }

    /// Returns `true` if a render target view can be created with this format.
    pub fn is_color_renderable(&self) -> bool {
        *self != Self::Unknown
            && !self.is_typeless()
            && !self.is_depth_stencil()
            && !self.is_compressed()
    }

    /// Maps the format to the typeless member of its family.
    ///
    /// Formats that do not belong to a typeless family are returned unchanged.
    pub fn to_typeless(&self) -> Format {
        match *self {
            Self::R32G32B32A32Float | Self::R32G32B32A32Uint | Self::R32G32B32A32Sint => {
                Self::R32G32B32A32Typeless
            }
            Self::R16G16B16A16Float
            | Self::R16G16B16A16Unorm
            | Self::R16G16B16A16Uint
            | Self::R16G16B16A16Snorm
            | Self::R16G16B16A16Sint => Self::R16G16B16A16Typeless,
            Self::D32FloatS8X24Uint => Self::R32G8X24Typeless,
            Self::R10G10B10A2Unorm | Self::R10G10B10A2Uint => Self::R10G10B10A2Typeless,
            Self::R8G8B8A8Unorm
            | Self::R8G8B8A8UnormSrgb
            | Self::R8G8B8A8Uint
            | Self::R8G8B8A8Snorm
            | Self::R8G8B8A8Sint => Self::R8G8B8A8Typeless,
            Self::R16G16Float | Self::R16G16Unorm => Self::R16G16Typeless,
            Self::D32Float | Self::R32Float | Self::R32Uint => Self::R32Typeless,
            Self::D24UnormS8Uint => Self::R24G8Typeless,
            Self::R16Float | Self::D16Unorm | Self::R16Unorm | Self::R16Uint => Self::R16Typeless,
            Self::R8Unorm => Self::R8Typeless,
            Self::B8G8R8A8Unorm | Self::B8G8R8A8UnormSrgb => Self::B8G8R8A8Typeless,
            Self::B8G8R8X8Unorm | Self::B8G8R8X8UnormSrgb => Self::B8G8R8X8Typeless,
            Self::Bc1Unorm | Self::Bc1UnormSrgb => Self::Bc1Typeless,
            Self::Bc3Unorm | Self::Bc3UnormSrgb => Self::Bc3Typeless,
            Self::Bc7Unorm | Self::Bc7UnormSrgb => Self::Bc7Typeless,
            other => other,
        }
    }

    /// Resolves the format to the default typed member of its family.
    ///
    /// When `srgb` is set and the family has an sRGB member, that member is
    /// returned instead of the linear one. Families without an sRGB member
    /// resolve to the same format regardless of `srgb`. Returns `None` if the
    /// format cannot be resolved at all.
    pub fn to_default_typed(&self, srgb: bool) -> Option<Format> {
        let pick = |linear, srgb_variant| Some(if srgb { srgb_variant } else { linear });
        match *self {
            Self::Unknown => None,
            Self::R32G32B32A32Typeless => Some(Self::R32G32B32A32Float),
            Self::R16G16B16A16Typeless => Some(Self::R16G16B16A16Float),
            Self::R32G8X24Typeless => Some(Self::D32FloatS8X24Uint),
            Self::R10G10B10A2Typeless => Some(Self::R10G10B10A2Unorm),
            Self::R8G8B8A8Typeless | Self::R8G8B8A8Unorm | Self::R8G8B8A8UnormSrgb => {
                pick(Self::R8G8B8A8Unorm, Self::R8G8B8A8UnormSrgb)
            }
            Self::R16G16Typeless => Some(Self::R16G16Float),
            Self::R32Typeless => Some(Self::R32Float),
            Self::R24G8Typeless => Some(Self::D24UnormS8Uint),
            Self::R16Typeless => Some(Self::R16Float),
            Self::R8Typeless => Some(Self::R8Unorm),
            Self::B8G8R8A8Typeless | Self::B8G8R8A8Unorm | Self::B8G8R8A8UnormSrgb => {
                pick(Self::B8G8R8A8Unorm, Self::B8G8R8A8UnormSrgb)
            }
            Self::B8G8R8X8Typeless | Self::B8G8R8X8Unorm | Self::B8G8R8X8UnormSrgb => {
                pick(Self::B8G8R8X8Unorm, Self::B8G8R8X8UnormSrgb)
            }
            Self::Bc1Typeless | Self::Bc1Unorm | Self::Bc1UnormSrgb => {
                pick(Self::Bc1Unorm, Self::Bc1UnormSrgb)
            }
            Self::Bc3Typeless | Self::Bc3Unorm | Self::Bc3UnormSrgb => {
                pick(Self::Bc3Unorm, Self::Bc3UnormSrgb)
            }
            Self::Bc7Typeless | Self::Bc7Unorm | Self::Bc7UnormSrgb => {
                pick(Self::Bc7Unorm, Self::Bc7UnormSrgb)
            }
            other => Some(other),
        }
    }
}
