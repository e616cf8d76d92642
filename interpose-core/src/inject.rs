use std::{borrow::Cow, sync::Arc};

use hal::{CommandList as _, Device as _};
use ipt::{ResourceUses, ResourceViewDesc};

use crate::{command::CommandListProxy, error::InjectError};

/// Augmentation runtime that renders effects into a command list.
pub trait EffectRuntime<A: hal::Api>: Send + Sync {
    /// Device the runtime was created on.
    fn device_id(&self) -> ipt::DeviceId;

    /// Returns `true` if effects should run before the intercepted feature.
    fn preprocess_enabled(&self) -> bool;

    /// Records the effect passes into `list`, rendering to `view`.
    ///
    /// `view_srgb` is the sRGB variant of `view`, or `view` itself when the
    /// format has none. Anything bound by the effects is restored afterwards,
    /// except resource usage which must be left as it was given.
    fn render_effects(
        &self,
        list: &mut A::CommandList,
        view: &A::ResourceView,
        view_srgb: &A::ResourceView,
    );
}

/// Describes how effects are injected in front of an intercepted feature.
#[derive(Clone, Debug)]
pub struct InjectionDescriptor {
    /// Name of the feature parameter holding the color input.
    pub color_parameter: Cow<'static, str>,
    /// Usage of the color input around the injection.
    pub usage_outside: ResourceUses,
    /// Usage of the color input while effects render to it.
    pub usage_inside: ResourceUses,
}

impl Default for InjectionDescriptor {
    fn default() -> Self {
        Self {
            color_parameter: Cow::Borrowed("Color"),
            usage_outside: ResourceUses::SHADER_RESOURCE,
            usage_inside: ResourceUses::RENDER_TARGET,
        }
    }
}

/// Renders the effects of `runtime` into `resource`, leaving the state bound
/// to `list` as it was.
pub fn inject<A: hal::Api>(
    list: &mut CommandListProxy<A>,
    runtime: &dyn EffectRuntime<A>,
    resource: &A::Resource,
    desc: &InjectionDescriptor,
) -> Result<(), InjectError> {
    profiling::scope!("inject", "EffectRuntime");

    let device = Arc::clone(&list.device);
    let resource_format = device.resource_desc(resource).format;
    // Only typeless formats are resolved, typed ones are viewed as declared.
    let format = if resource_format.is_typeless() {
        resource_format.to_default_typed(false)
    } else {
        Some(resource_format)
    }
    .filter(ipt::Format::is_color_renderable)
    .ok_or(InjectError::UnusableFormat(resource_format))?;
    let format_srgb = format.to_default_typed(true).unwrap_or(format);

    let view = device
        .create_resource_view(
            resource,
            ResourceUses::RENDER_TARGET,
            &ResourceViewDesc::new(format),
        )
        .map_err(InjectError::ViewCreation)?;
    let view_srgb = if format_srgb != format {
        match device.create_resource_view(
            resource,
            ResourceUses::RENDER_TARGET,
            &ResourceViewDesc::new(format_srgb),
        ) {
            Ok(view) => Some(view),
            Err(err) => {
                log::warn!(
                    "Failed to create {:?} view ({}), rendering through {:?} instead",
                    format_srgb,
                    err,
                    format
                );
                None
            }
        }
    } else {
        None
    };

    log::trace!("Injecting effects into {:?} as {:?}", resource, format);
    let snapshot = list.capture_state();
    let raw = list.raw_mut();
    raw.resource_barrier(&[hal::ResourceBarrier::transition(
        resource,
        desc.usage_outside..desc.usage_inside,
    )]);
    runtime.render_effects(raw, &view, view_srgb.as_ref().unwrap_or(&view));
    snapshot.apply(&mut *raw);
    raw.resource_barrier(&[hal::ResourceBarrier::transition(
        resource,
        desc.usage_inside..desc.usage_outside,
    )]);

    if let Some(view_srgb) = view_srgb {
        device.destroy_resource_view(view_srgb);
    }
    device.destroy_resource_view(view);
    Ok(())
}
