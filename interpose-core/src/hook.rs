/*! Interception of the upscaler feature evaluation export.
 *
 * The layer never patches code itself. An [`Install`] implementation redirects
 * the export and hands back the original, and the redirected calls land in
 * [`EvaluateFeatureHook::evaluate`], which injects effects in front of the
 * feature before forwarding to that original.
 */

use std::sync::Arc;

use crate::{
    command::CommandListProxy,
    error::{HookError, InjectError},
    inject::{inject, EffectRuntime, InjectionDescriptor},
    registry::RuntimeRegistry,
};

/// Handle of a created upscaler feature.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FeatureHandle {
    pub id: u32,
}

/// Result code of a feature call.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FeatureResult(pub u32);

impl FeatureResult {
    pub const SUCCESS: Self = Self(0x1);
    pub const FAIL: Self = Self(0xBAD0_0000);

    pub fn is_success(self) -> bool {
        self.0 & 0xFFF0_0000 != 0xBAD0_0000
    }
}

/// Named parameters passed to a feature evaluation.
pub trait FeatureParameters<A: hal::Api> {
    fn resource(&self, name: &str) -> Option<&A::Resource>;
}

pub type ProgressCallback<'a> = &'a mut dyn FnMut(f32, &mut bool);

/// Signature of the feature evaluation export.
pub trait EvaluateFeature<A: hal::Api>: Send + Sync {
    fn evaluate(
        &self,
        list: Option<&mut CommandListProxy<A>>,
        feature: Option<&FeatureHandle>,
        parameters: Option<&dyn FeatureParameters<A>>,
        progress: Option<ProgressCallback>,
    ) -> FeatureResult;
}

/// Redirects an exported function, returning a callable original.
pub trait Install<T: ?Sized> {
    fn install(&self, export_name: &str) -> Result<Arc<T>, HookError>;
}

/// Replacement for the feature evaluation export.
pub struct EvaluateFeatureHook<A: hal::Api> {
    original: Arc<dyn EvaluateFeature<A>>,
    registry: Arc<RuntimeRegistry<dyn EffectRuntime<A>>>,
    desc: InjectionDescriptor,
}

impl<A: hal::Api> EvaluateFeatureHook<A> {
    pub const EXPORT_NAME: &'static str = "NVSDK_NGX_D3D12_EvaluateFeature";

    pub fn new(
        original: Arc<dyn EvaluateFeature<A>>,
        registry: Arc<RuntimeRegistry<dyn EffectRuntime<A>>>,
        desc: InjectionDescriptor,
    ) -> Self {
        Self {
            original,
            registry,
            desc,
        }
    }

    /// Redirects the export through `installer`.
    pub fn install<I>(
        installer: &I,
        registry: Arc<RuntimeRegistry<dyn EffectRuntime<A>>>,
        desc: InjectionDescriptor,
    ) -> Result<Self, HookError>
    where
        I: Install<dyn EvaluateFeature<A>> + ?Sized,
    {
        let original = installer.install(Self::EXPORT_NAME)?;
        log::info!("Redirected {}", Self::EXPORT_NAME);
        Ok(Self::new(original, registry, desc))
    }

    pub fn original(&self) -> &Arc<dyn EvaluateFeature<A>> {
        &self.original
    }

    fn try_inject(
        &self,
        list: &mut CommandListProxy<A>,
        parameters: &dyn FeatureParameters<A>,
    ) -> Result<(), InjectError> {
        use hal::Device as _;

        let device_id = list.device.id();
        let runtime = self
            .registry
            .lookup(device_id)
            .into_iter()
            .find(|runtime| runtime.device_id() == device_id)
            .ok_or(InjectError::NoRuntime(device_id))?;
        if !runtime.preprocess_enabled() {
            return Err(InjectError::Disabled);
        }
        let resource = parameters
            .resource(&self.desc.color_parameter)
            .ok_or_else(|| InjectError::MissingResource(self.desc.color_parameter.to_string()))?;
        inject(list, &*runtime, resource, &self.desc)
    }
}

impl<A: hal::Api> EvaluateFeature<A> for EvaluateFeatureHook<A> {
    fn evaluate(
        &self,
        list: Option<&mut CommandListProxy<A>>,
        feature: Option<&FeatureHandle>,
        parameters: Option<&dyn FeatureParameters<A>>,
        progress: Option<ProgressCallback>,
    ) -> FeatureResult {
        let (list, parameters) = match (list, parameters) {
            (Some(list), Some(parameters)) => (list, parameters),
            (list, parameters) => {
                return self.original.evaluate(list, feature, parameters, progress);
            }
        };

        if let Err(err) = self.try_inject(list, parameters) {
            log::debug!("Skipped effect injection: {}", err);
        }
        self.original
            .evaluate(Some(list), feature, Some(parameters), progress)
    }
}
